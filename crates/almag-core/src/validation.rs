//! Validation manager contract
//!
//! Each command family owns one validation manager. A manager inspects the
//! raw Input Unit against the current database and either returns the
//! normalized command or `None` for any ordinary rejection. Rejections are
//! never errors: the dispatch loop logs them and carries on.

use crate::database::Database;
use crate::tokens::InputUnit;

/// Family-specific validation of raw Input Units
pub trait ValidationManager {
    /// Normalized command produced on acceptance
    type Validated;

    /// Validate `input` against `db`
    ///
    /// Returns `Some` only when the tokens satisfy this family's rules.
    fn perform(&self, db: &Database, input: &InputUnit) -> Option<Self::Validated>;
}

/// Log a validation rejection with its reason
pub(crate) fn reject<T>(command: &str, reason: impl std::fmt::Display) -> Option<T> {
    tracing::warn!(
        component = module_path!(),
        op = "validate",
        command = command,
        reason = %reason,
        "Rejected command"
    );
    None
}
