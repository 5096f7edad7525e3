//! Core types shared across Almag facilities
//!
//! This crate provides foundational types used by the error, logging and
//! dispatch layers:
//!
//! - **Correlation types**: SessionId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::SessionId;
