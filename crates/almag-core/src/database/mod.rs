//! Parameter database and the database command family
//!
//! - `store` - the `Database` itself
//! - `request` - parsing of database Input Units into `DatabaseRequest`
//! - `command` - one-shot transactional `DatabaseCommand`
//! - `validation` - `DatabaseCommandValidationManager`

pub mod command;
pub mod request;
pub mod store;
pub mod validation;

pub use command::DatabaseCommand;
pub use request::DatabaseRequest;
pub use store::{Access, Database, DbEntry, DbValue};
pub use validation::DatabaseCommandValidationManager;

/// Database command names
pub mod names {
    pub const GET: &str = "getdb";
    pub const SET: &str = "setdb";
    pub const LIST: &str = "listdb";
    pub const RESET: &str = "resetdb";

    /// All database command names, in help order
    pub const ALL: [&str; 4] = [GET, SET, LIST, RESET];
}

/// Well-known parameter keys
pub mod keys {
    pub const MIN_TILT: &str = "min_tilt";
    pub const MAX_TILT: &str = "max_tilt";
    pub const TILT_STEP: &str = "tilt_step";
    pub const VENDOR_CODE: &str = "vendor_code";
    pub const SERIAL_NUMBER: &str = "serial_number";
    pub const DEVICE_TYPE: &str = "device_type";
    pub const INSTALLATION_DATE: &str = "installation_date";
    pub const BASE_STATION_ID: &str = "base_station_id";
}
