use almag_core::{Database, InputUnit};

/// Build an Input Unit from string literals
#[allow(dead_code)]
pub fn unit(tokens: &[&str]) -> InputUnit {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Stock database with a custom tilt window
#[allow(dead_code)]
pub fn db_with_tilt_window(min: i64, max: i64, step: i64) -> Database {
    use almag_core::database::keys;
    use almag_core::DbValue;

    let mut db = Database::with_defaults();
    db.set(keys::MAX_TILT, DbValue::Int(max)).unwrap();
    db.set(keys::MIN_TILT, DbValue::Int(min)).unwrap();
    db.set(keys::TILT_STEP, DbValue::Int(step)).unwrap();
    db
}
