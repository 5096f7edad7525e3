use std::time::Instant;

use super::commands::ControllerCommand;
use super::Controller;
use crate::errors::{AlmagError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Alarms raised by the simulated device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm {
    /// A movement was requested before calibration
    NotCalibrated,
}

impl std::fmt::Display for Alarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alarm::NotCalibrated => write!(f, "NotCalibrated"),
        }
    }
}

/// Observable state of the simulated Almag device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceState {
    pub calibrated: bool,
    /// Last commanded tilt in tenths of a degree; `None` until first set
    pub tilt: Option<i64>,
    pub alarms: Vec<Alarm>,
    pub resets: u32,
}

impl DeviceState {
    fn raise(&mut self, alarm: Alarm) {
        if !self.alarms.contains(&alarm) {
            self.alarms.push(alarm);
        }
    }
}

/// Stateful controller driving a simulated Almag device
///
/// Commands accumulate in a pending queue. `execute_command` runs them in
/// order and stops at the first failure, discarding the rest of the queue.
#[derive(Debug, Default)]
pub struct AlmagController {
    pending: Vec<ControllerCommand>,
    executed: Vec<ControllerCommand>,
    device: DeviceState,
}

impl AlmagController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device(&self) -> &DeviceState {
        &self.device
    }

    pub fn pending(&self) -> &[ControllerCommand] {
        &self.pending
    }

    /// Commands that ran successfully, oldest first
    pub fn executed(&self) -> &[ControllerCommand] {
        &self.executed
    }

    fn run(&mut self, cmd: &ControllerCommand) -> Result<()> {
        let device = &mut self.device;
        match cmd {
            ControllerCommand::SetTilt { tilt } => {
                if !device.calibrated {
                    device.raise(Alarm::NotCalibrated);
                    return Err(AlmagError::NotCalibrated {
                        command: cmd.name().to_string(),
                    });
                }
                device.tilt = Some(*tilt);
                tracing::info!(tilt = *tilt, "Tilt set to {}", tilt);
            }
            ControllerCommand::GetTilt => {
                if !device.calibrated {
                    return Err(AlmagError::NotCalibrated {
                        command: cmd.name().to_string(),
                    });
                }
                match device.tilt {
                    Some(tilt) => tracing::info!(tilt, "Current tilt {}", tilt),
                    None => tracing::info!("Tilt not set"),
                }
            }
            ControllerCommand::Calibrate => {
                device.calibrated = true;
                device.alarms.retain(|a| *a != Alarm::NotCalibrated);
                tracing::info!("Calibration complete");
            }
            ControllerCommand::GetAlarmStatus => {
                if device.alarms.is_empty() {
                    tracing::info!("No active alarms");
                }
                for alarm in &device.alarms {
                    tracing::info!(alarm = %alarm, "Active alarm {}", alarm);
                }
            }
            ControllerCommand::ClearActiveAlarms => {
                device.alarms.clear();
                tracing::info!("Alarms cleared");
            }
            ControllerCommand::ResetSoftware => {
                device.calibrated = false;
                device.tilt = None;
                device.resets += 1;
                tracing::info!(resets = device.resets, "Software reset");
            }
            ControllerCommand::GetInformation => {
                tracing::info!(
                    calibrated = device.calibrated,
                    resets = device.resets,
                    executed = self.executed.len() as u64,
                    "Device information"
                );
            }
        }
        Ok(())
    }
}

impl Controller for AlmagController {
    type Command = ControllerCommand;

    fn add_commands(&mut self, commands: Vec<ControllerCommand>) {
        self.pending.extend(commands);
    }

    fn execute_command(&mut self) -> bool {
        let start = Instant::now();
        log_op_start!("execute_command", pending = self.pending.len() as u64);

        if self.pending.is_empty() {
            log_op_error!(
                "execute_command",
                AlmagError::EmptyQueue,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return false;
        }

        let queue = std::mem::take(&mut self.pending);
        for cmd in queue {
            if let Err(err) = self.run(&cmd) {
                log_op_error!(
                    "execute_command",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                return false;
            }
            self.executed.push(cmd);
        }

        log_op_end!(
            "execute_command",
            duration_ms = start.elapsed().as_millis() as u64
        );
        true
    }
}
