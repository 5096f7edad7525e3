use super::names;
use super::store::{Database, DbValue};
use crate::errors::{AlmagError, Result};
use crate::tokens::{InputUnit, COMMAND_OR_ACTION_NAME};

/// Normalized database command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseRequest {
    /// `getdb <key>`
    Get { key: String },
    /// `setdb <key> <value>`
    Set { key: String, value: DbValue },
    /// `listdb`
    List,
    /// `resetdb`
    Reset,
}

impl DatabaseRequest {
    /// Parse and check a database Input Unit against the current store
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput`, `UnsupportedCommand`, `WrongArity`, or any
    /// lookup/parse error from the store for the referenced key.
    pub fn parse(db: &Database, input: &InputUnit) -> Result<Self> {
        let name = input
            .get(COMMAND_OR_ACTION_NAME)
            .ok_or(AlmagError::EmptyInput)?;
        let args = &input[1..];

        let expect = |expected: usize| -> Result<()> {
            if args.len() == expected {
                Ok(())
            } else {
                Err(AlmagError::WrongArity {
                    command: name.clone(),
                    expected,
                    actual: args.len(),
                })
            }
        };

        match name.as_str() {
            names::GET => {
                expect(1)?;
                db.get(&args[0])?;
                Ok(DatabaseRequest::Get {
                    key: args[0].clone(),
                })
            }
            names::SET => {
                expect(2)?;
                let value = db.parse_value(&args[0], &args[1])?;
                Ok(DatabaseRequest::Set {
                    key: args[0].clone(),
                    value,
                })
            }
            names::LIST => {
                expect(0)?;
                Ok(DatabaseRequest::List)
            }
            names::RESET => {
                expect(0)?;
                Ok(DatabaseRequest::Reset)
            }
            other => Err(AlmagError::UnsupportedCommand {
                command: other.to_string(),
            }),
        }
    }

    /// Command name this request came from
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseRequest::Get { .. } => names::GET,
            DatabaseRequest::Set { .. } => names::SET,
            DatabaseRequest::List => names::LIST,
            DatabaseRequest::Reset => names::RESET,
        }
    }
}
