use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::keys;
use crate::errors::{AlmagError, Result};

/// Value held by a database entry
///
/// The variant is fixed when the entry is created; updates must parse into
/// the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DbValue {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for DbValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbValue::Int(v) => write!(f, "{}", v),
            DbValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Write access of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    ReadWrite,
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbEntry {
    pub value: DbValue,
    pub access: Access,
}

/// In-memory parameter store for one Almag device
///
/// Keys are kept ordered so listings are deterministic. Not thread-safe;
/// a session owns its database exclusively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    entries: BTreeMap<String, DbEntry>,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a database seeded with the stock Almag parameters
    pub fn with_defaults() -> Self {
        let mut db = Self::new();
        db.insert(keys::MIN_TILT, DbValue::Int(0), Access::ReadWrite);
        db.insert(keys::MAX_TILT, DbValue::Int(100), Access::ReadWrite);
        db.insert(keys::TILT_STEP, DbValue::Int(1), Access::ReadWrite);
        db.insert(
            keys::VENDOR_CODE,
            DbValue::Text("AL".to_string()),
            Access::ReadWrite,
        );
        db.insert(
            keys::SERIAL_NUMBER,
            DbValue::Text("ALMAG00000001".to_string()),
            Access::ReadOnly,
        );
        db.insert(
            keys::DEVICE_TYPE,
            DbValue::Text("RET".to_string()),
            Access::ReadOnly,
        );
        db.insert(
            keys::INSTALLATION_DATE,
            DbValue::Text(String::new()),
            Access::ReadWrite,
        );
        db.insert(
            keys::BASE_STATION_ID,
            DbValue::Text(String::new()),
            Access::ReadWrite,
        );
        db
    }

    /// Insert or replace an entry, bypassing access checks
    pub fn insert(&mut self, key: impl Into<String>, value: DbValue, access: Access) {
        self.entries.insert(key.into(), DbEntry { value, access });
    }

    /// Get an entry by key
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if the key does not exist.
    pub fn get(&self, key: &str) -> Result<&DbEntry> {
        self.entries.get(key).ok_or_else(|| AlmagError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Get an integer parameter
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if missing, `InvalidValue` if the entry is text.
    pub fn int(&self, key: &str) -> Result<i64> {
        match &self.get(key)?.value {
            DbValue::Int(v) => Ok(*v),
            DbValue::Text(v) => Err(AlmagError::InvalidValue {
                key: key.to_string(),
                value: v.clone(),
                reason: "not an integer".to_string(),
            }),
        }
    }

    /// Parse `raw` into the type of the existing writable entry `key`
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound`, `ReadOnlyKey`, or `InvalidValue` when the
    /// raw text does not parse into the entry's type.
    pub fn parse_value(&self, key: &str, raw: &str) -> Result<DbValue> {
        let entry = self.get(key)?;
        if entry.access == Access::ReadOnly {
            return Err(AlmagError::ReadOnlyKey {
                key: key.to_string(),
            });
        }
        match entry.value {
            DbValue::Int(_) => raw
                .parse::<i64>()
                .map(DbValue::Int)
                .map_err(|e| AlmagError::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
            DbValue::Text(_) => Ok(DbValue::Text(raw.to_string())),
        }
    }

    /// Overwrite a writable entry with an already-typed value
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound`, `ReadOnlyKey`, or `InvalidValue` on a type change.
    pub fn set(&mut self, key: &str, value: DbValue) -> Result<()> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| AlmagError::KeyNotFound {
                key: key.to_string(),
            })?;
        if entry.access == Access::ReadOnly {
            return Err(AlmagError::ReadOnlyKey {
                key: key.to_string(),
            });
        }
        if std::mem::discriminant(&entry.value) != std::mem::discriminant(&value) {
            return Err(AlmagError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: "type change not allowed".to_string(),
            });
        }
        entry.value = value;
        Ok(())
    }

    /// Check cross-entry consistency of the tilt parameters
    ///
    /// Only checked when the tilt keys are present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `min_tilt > max_tilt` or `tilt_step <= 0`.
    pub fn check_invariants(&self) -> Result<()> {
        if let (Ok(min), Ok(max)) = (self.int(keys::MIN_TILT), self.int(keys::MAX_TILT)) {
            if min > max {
                return Err(AlmagError::InvalidValue {
                    key: keys::MIN_TILT.to_string(),
                    value: min.to_string(),
                    reason: format!("exceeds {} ({})", keys::MAX_TILT, max),
                });
            }
        }
        if let Ok(step) = self.int(keys::TILT_STEP) {
            if step <= 0 {
                return Err(AlmagError::InvalidValue {
                    key: keys::TILT_STEP.to_string(),
                    value: step.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Iterate entries in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DbEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the entries cannot be rendered.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| AlmagError::Serialization {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        let db = Database::with_defaults();
        assert_eq!(db.len(), 8);
        assert!(db.check_invariants().is_ok());
        assert_eq!(db.int(keys::MAX_TILT), Ok(100));
    }

    #[test]
    fn test_parse_value_preserves_type() {
        let db = Database::with_defaults();
        assert_eq!(db.parse_value(keys::MIN_TILT, "-5"), Ok(DbValue::Int(-5)));
        assert!(matches!(
            db.parse_value(keys::MIN_TILT, "low"),
            Err(AlmagError::InvalidValue { .. })
        ));
        assert_eq!(
            db.parse_value(keys::VENDOR_CODE, "42"),
            Ok(DbValue::Text("42".to_string()))
        );
    }

    #[test]
    fn test_read_only_rejected() {
        let mut db = Database::with_defaults();
        let err = db
            .set(keys::SERIAL_NUMBER, DbValue::Text("X".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            AlmagError::ReadOnlyKey {
                key: keys::SERIAL_NUMBER.to_string()
            }
        );
    }

    #[test]
    fn test_set_refuses_type_change() {
        let mut db = Database::with_defaults();
        assert!(db
            .set(keys::MAX_TILT, DbValue::Text("high".to_string()))
            .is_err());
        assert_eq!(db.int(keys::MAX_TILT), Ok(100));
    }

    #[test]
    fn test_invariants_detect_inverted_range() {
        let mut db = Database::with_defaults();
        db.set(keys::MIN_TILT, DbValue::Int(200)).unwrap();
        assert!(db.check_invariants().is_err());
    }

    #[test]
    fn test_to_json_is_ordered() {
        let db = Database::with_defaults();
        let json = db.to_json().unwrap();
        let base = json.find(keys::BASE_STATION_ID).unwrap();
        let vendor = json.find(keys::VENDOR_CODE).unwrap();
        assert!(base < vendor);
    }
}
