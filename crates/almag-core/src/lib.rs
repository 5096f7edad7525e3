//! Almag Core - Domain kernel for the Almag command menu
//!
//! This crate provides the collaborators the dispatch loop drives:
//! - Token source and line lexer producing Input Units
//! - Parameter `Database` with transactional one-shot database commands
//! - Controller trait with the simulated Almag device and a null controller
//! - Validation managers for the database and controller command families
//! - Error facility, logging facility and YAML configuration

pub mod config;
pub mod controller;
pub mod database;
pub mod errors;
pub mod logging_facility;
pub mod tokens;
pub mod validation;

// Re-export commonly used types
pub use config::MenuConfig;
pub use controller::{AlmagController, Controller, ControllerCommand, NullController};
pub use database::{Database, DatabaseCommand, DbValue};
pub use errors::{AlmagError, ExError, ExErrorKind, Result};
pub use tokens::{InputUnit, LineLexer, ScriptedTokenSource, TokenSource};
pub use validation::ValidationManager;
