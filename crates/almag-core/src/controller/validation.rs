use super::commands::{names, ControllerCommand};
use crate::database::{keys, Database};
use crate::errors::{AlmagError, Result};
use crate::tokens::{InputUnit, COMMAND_OR_ACTION_NAME};
use crate::validation::{reject, ValidationManager};

/// Validation manager for the controller command family
///
/// Maps procedure names to `ControllerCommand`; `SetTilt` takes one integer
/// argument that must lie in `[min_tilt, max_tilt]` and on a `tilt_step`
/// boundary counted from `min_tilt`, all read from the database.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerCommandValidationManager;

impl ControllerCommandValidationManager {
    pub fn new() -> Self {
        Self
    }

    fn validate(db: &Database, input: &InputUnit) -> Result<ControllerCommand> {
        let name = input
            .get(COMMAND_OR_ACTION_NAME)
            .ok_or(AlmagError::EmptyInput)?;
        let args = &input[1..];

        let no_args = |cmd: ControllerCommand| -> Result<ControllerCommand> {
            if args.is_empty() {
                Ok(cmd)
            } else {
                Err(AlmagError::WrongArity {
                    command: name.clone(),
                    expected: 0,
                    actual: args.len(),
                })
            }
        };

        match name.as_str() {
            names::SET_TILT => {
                if args.len() != 1 {
                    return Err(AlmagError::WrongArity {
                        command: name.clone(),
                        expected: 1,
                        actual: args.len(),
                    });
                }
                let tilt = args[0]
                    .parse::<i64>()
                    .map_err(|e| AlmagError::InvalidValue {
                        key: "tilt".to_string(),
                        value: args[0].clone(),
                        reason: e.to_string(),
                    })?;
                check_tilt(db, tilt)?;
                Ok(ControllerCommand::SetTilt { tilt })
            }
            names::GET_TILT => no_args(ControllerCommand::GetTilt),
            names::CALIBRATE => no_args(ControllerCommand::Calibrate),
            names::GET_ALARM_STATUS => no_args(ControllerCommand::GetAlarmStatus),
            names::CLEAR_ACTIVE_ALARMS => no_args(ControllerCommand::ClearActiveAlarms),
            names::RESET_SOFTWARE => no_args(ControllerCommand::ResetSoftware),
            names::GET_INFORMATION => no_args(ControllerCommand::GetInformation),
            other => Err(AlmagError::UnsupportedCommand {
                command: other.to_string(),
            }),
        }
    }
}

fn check_tilt(db: &Database, tilt: i64) -> Result<()> {
    let min = db.int(keys::MIN_TILT)?;
    let max = db.int(keys::MAX_TILT)?;
    let step = db.int(keys::TILT_STEP)?;
    let on_step = step > 0
        && tilt
            .checked_sub(min)
            .is_some_and(|offset| offset % step == 0);
    if tilt < min || tilt > max || !on_step {
        return Err(AlmagError::TiltOutOfRange {
            tilt,
            min,
            max,
            step,
        });
    }
    Ok(())
}

impl ValidationManager for ControllerCommandValidationManager {
    type Validated = ControllerCommand;

    fn perform(&self, db: &Database, input: &InputUnit) -> Option<ControllerCommand> {
        let name = input
            .get(COMMAND_OR_ACTION_NAME)
            .map(String::as_str)
            .unwrap_or_default();
        match Self::validate(db, input) {
            Ok(cmd) => Some(cmd),
            Err(err) => reject(name, err),
        }
    }
}
