//! Subscriber selection per run profile

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use super::test_capture::init_test_capture;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// `RUST_LOG` when set, otherwise every almag crate at `default_level`
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("almag={}", default_level)))
}

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. Output goes to stderr so help text
/// and database dumps on stdout stay machine-readable.
///
/// - `Development`: human-readable lines, `debug` and above
/// - `Production`: one JSON object per event, `info` and above
/// - `Test`: the in-memory capture from `init_test_capture`
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter("debug"))
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter("info"))
                .try_init(),
            Profile::Test => {
                init_test_capture();
                Ok(())
            }
        };
        if let Err(err) = installed {
            tracing::warn!(error = %err, "A global subscriber was already installed");
        }
    });
}
