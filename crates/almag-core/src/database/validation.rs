use super::request::DatabaseRequest;
use super::store::Database;
use crate::tokens::{InputUnit, COMMAND_OR_ACTION_NAME};
use crate::validation::{reject, ValidationManager};

/// Validation manager for the database command family
///
/// Accepts `getdb`, `setdb`, `listdb` and `resetdb` units whose arity, key
/// and value type match the current database.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseCommandValidationManager;

impl DatabaseCommandValidationManager {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationManager for DatabaseCommandValidationManager {
    type Validated = DatabaseRequest;

    fn perform(&self, db: &Database, input: &InputUnit) -> Option<DatabaseRequest> {
        let name = input
            .get(COMMAND_OR_ACTION_NAME)
            .map(String::as_str)
            .unwrap_or_default();
        match DatabaseRequest::parse(db, input) {
            Ok(request) => Some(request),
            Err(err) => reject(name, err),
        }
    }
}
