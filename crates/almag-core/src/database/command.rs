use std::time::Instant;

use super::request::DatabaseRequest;
use super::store::Database;
use crate::errors::Result;
use crate::tokens::InputUnit;
use crate::{log_op_end, log_op_error, log_op_start};

/// One-shot database command
///
/// Bound to the session database and the raw Input Unit. `run_command`
/// re-parses the unit, applies it to a staged copy and commits the copy only
/// when the whole request and the store invariants succeed.
pub struct DatabaseCommand<'a> {
    db: &'a mut Database,
    input: InputUnit,
}

impl<'a> DatabaseCommand<'a> {
    pub fn new(db: &'a mut Database, input: &InputUnit) -> Self {
        Self {
            db,
            input: input.clone(),
        }
    }

    /// Apply the command; `true` on commit, `false` on any failure
    ///
    /// On failure the database is left exactly as it was.
    pub fn run_command(self) -> bool {
        let start = Instant::now();
        let command = self.input.first().cloned().unwrap_or_default();
        log_op_start!("run_database_command", command = command.as_str());

        match Self::execute(self.db, &self.input) {
            Ok(()) => {
                log_op_end!(
                    "run_database_command",
                    duration_ms = start.elapsed().as_millis() as u64,
                    command = command.as_str()
                );
                true
            }
            Err(err) => {
                log_op_error!(
                    "run_database_command",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    command = command.as_str()
                );
                false
            }
        }
    }

    fn execute(db: &mut Database, input: &InputUnit) -> Result<()> {
        let request = DatabaseRequest::parse(db, input)?;
        let mut staged = db.clone();

        match request {
            DatabaseRequest::Get { key } => {
                let entry = staged.get(&key)?;
                tracing::info!(key = key.as_str(), value = %entry.value, "{} = {}", key, entry.value);
            }
            DatabaseRequest::Set { key, value } => {
                staged.set(&key, value)?;
                staged.check_invariants()?;
            }
            DatabaseRequest::List => {
                for (key, entry) in staged.entries() {
                    tracing::info!(key = key, value = %entry.value, access = ?entry.access, "{} = {}", key, entry.value);
                }
            }
            DatabaseRequest::Reset => {
                staged = Database::with_defaults();
            }
        }

        *db = staged;
        Ok(())
    }
}
