//! Structured logging for the almag crates
//!
//! Binaries call `init` once with a `Profile`. Library code logs through
//! `tracing` directly or through the `log_op_*` lifecycle macros; tests read
//! events back with `init_test_capture` and an `EventQuery`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, EventQuery, TestCapture};
