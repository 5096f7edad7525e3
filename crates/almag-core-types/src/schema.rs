//! Field keys and event names shared by emitters and log assertions
//!
//! `tracing` macros need field names as identifiers, so emitters spell them
//! out; readers of captured events go through these constants.

// Field keys read back by the test capture and log assertions
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Dispatch fields
pub const FIELD_MENU: &str = "menu";
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_SUCCEEDED: &str = "succeeded";
pub const FIELD_UNITS: &str = "units";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Dispatch decision events
pub const EVENT_EMPTY_INPUT: &str = "empty_input";
pub const EVENT_ACCEPTED: &str = "accepted";
pub const EVENT_REJECTED: &str = "rejected";
pub const EVENT_HELP: &str = "help";
pub const EVENT_EXIT: &str = "exit";
pub const EVENT_UNKNOWN: &str = "unknown";
