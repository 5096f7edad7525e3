//! Controller command family
//!
//! The controller is the long-lived, stateful executor for device commands.
//! The dispatch loop enqueues each validated command and immediately asks the
//! controller to execute everything pending.

pub mod almag;
pub mod commands;
pub mod null;
pub mod validation;

pub use almag::{Alarm, AlmagController, DeviceState};
pub use commands::ControllerCommand;
pub use null::NullController;
pub use validation::ControllerCommandValidationManager;

/// Executor for queued controller commands
pub trait Controller {
    /// Command type accepted into the queue
    type Command;

    /// Append commands to the pending queue
    fn add_commands(&mut self, commands: Vec<Self::Command>);

    /// Run and clear all pending commands, reporting aggregate success
    fn execute_command(&mut self) -> bool;
}
