//! Almag Engine - Command interpretation pipeline
//!
//! Classifies each Input Unit into a command family, routes it through the
//! family's validation manager and executor, and folds the per-command
//! result into the session's continuation flag.
//!
//! - [`classifier`] - family constraint sets and fixed-priority lookup
//! - [`menu`] - interactive loop, batch runner and per-unit dispatch
//! - [`help`] - help and usage text

pub mod classifier;
pub mod help;
pub mod menu;

pub use classifier::{actions, CommandConstraints, CommandFamily};
pub use menu::Menu;
