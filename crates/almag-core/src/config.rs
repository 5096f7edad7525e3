//! Menu configuration
//!
//! Parses YAML and validates the command family sets and predefined commands.
//!
//! ```yaml
//! schema_version: 0
//! database_commands: [getdb, setdb, listdb, resetdb]
//! controller_commands: [SetTilt, GetTilt, Calibrate]
//! predefined_commands:
//!   - [Calibrate]
//!   - [SetTilt, "30"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controller::commands::names as controller_names;
use crate::database::names as database_names;
use crate::errors::{AlmagError, Result};
use crate::tokens::InputUnit;

/// Supported configuration schema version
pub const SCHEMA_VERSION: u32 = 0;

/// Which command names belong to which family, plus an optional script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default = "default_database_commands")]
    pub database_commands: Vec<String>,
    #[serde(default = "default_controller_commands")]
    pub controller_commands: Vec<String>,
    #[serde(default)]
    pub predefined_commands: Vec<InputUnit>,
}

fn default_database_commands() -> Vec<String> {
    database_names::ALL.iter().map(|s| s.to_string()).collect()
}

fn default_controller_commands() -> Vec<String> {
    controller_names::ALL.iter().map(|s| s.to_string()).collect()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            database_commands: default_database_commands(),
            controller_commands: default_controller_commands(),
            predefined_commands: Vec::new(),
        }
    }
}

/// Load a configuration file from a path
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or `InvalidConfig` if parsing or
/// validation fails.
pub fn load_config(path: &Path) -> Result<MenuConfig> {
    let content = fs::read_to_string(path).map_err(|e| AlmagError::io("load_config", e))?;
    parse_config_str(&content)
}

/// Parse a configuration from a YAML string
///
/// # Errors
///
/// Returns `InvalidConfig` for malformed YAML, an unsupported schema
/// version, or blank command names.
pub fn parse_config_str(content: &str) -> Result<MenuConfig> {
    let config: MenuConfig =
        serde_yaml::from_str(content).map_err(|e| AlmagError::InvalidConfig {
            reason: format!("YAML parse error: {}", e),
        })?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &MenuConfig) -> Result<()> {
    if config.schema_version != SCHEMA_VERSION {
        return Err(AlmagError::InvalidConfig {
            reason: format!(
                "Unsupported schema_version: {}. Expected {}",
                config.schema_version, SCHEMA_VERSION
            ),
        });
    }

    let families = [
        ("database_commands", &config.database_commands),
        ("controller_commands", &config.controller_commands),
    ];
    for (family, names) in families {
        if let Some(pos) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(AlmagError::InvalidConfig {
                reason: format!("Blank command name at {}[{}]", family, pos),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config_str("{}").unwrap();
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_explicit_sets_replace_defaults() {
        let config = parse_config_str(
            "database_commands: [getdb]\ncontroller_commands: []\npredefined_commands:\n  - [getdb, max_tilt]\n",
        )
        .unwrap();
        assert_eq!(config.database_commands, vec!["getdb"]);
        assert!(config.controller_commands.is_empty());
        assert_eq!(config.predefined_commands, vec![vec!["getdb", "max_tilt"]]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = parse_config_str("database_commands: [getdb, \" \"]").unwrap_err();
        assert!(matches!(err, AlmagError::InvalidConfig { .. }));
    }

    #[test]
    fn test_schema_version_checked() {
        let err = parse_config_str("schema_version: 3").unwrap_err();
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(parse_config_str("database_commands: [getdb").is_err());
    }
}
