//! Validated controller commands
//!
//! Names follow the AISG procedure names the device understands.

/// Controller command names
pub mod names {
    pub const SET_TILT: &str = "SetTilt";
    pub const GET_TILT: &str = "GetTilt";
    pub const CALIBRATE: &str = "Calibrate";
    pub const GET_ALARM_STATUS: &str = "GetAlarmStatus";
    pub const CLEAR_ACTIVE_ALARMS: &str = "ClearActiveAlarms";
    pub const RESET_SOFTWARE: &str = "ResetSoftware";
    pub const GET_INFORMATION: &str = "GetInformation";

    /// All controller command names, in help order
    pub const ALL: [&str; 7] = [
        SET_TILT,
        GET_TILT,
        CALIBRATE,
        GET_ALARM_STATUS,
        CLEAR_ACTIVE_ALARMS,
        RESET_SOFTWARE,
        GET_INFORMATION,
    ];
}

/// A controller command that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerCommand {
    /// Move to an absolute tilt, in tenths of a degree
    SetTilt { tilt: i64 },
    GetTilt,
    Calibrate,
    GetAlarmStatus,
    ClearActiveAlarms,
    ResetSoftware,
    GetInformation,
}

impl ControllerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerCommand::SetTilt { .. } => names::SET_TILT,
            ControllerCommand::GetTilt => names::GET_TILT,
            ControllerCommand::Calibrate => names::CALIBRATE,
            ControllerCommand::GetAlarmStatus => names::GET_ALARM_STATUS,
            ControllerCommand::ClearActiveAlarms => names::CLEAR_ACTIVE_ALARMS,
            ControllerCommand::ResetSoftware => names::RESET_SOFTWARE,
            ControllerCommand::GetInformation => names::GET_INFORMATION,
        }
    }
}

impl std::fmt::Display for ControllerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerCommand::SetTilt { tilt } => write!(f, "{} {}", self.name(), tilt),
            other => write!(f, "{}", other.name()),
        }
    }
}
