//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

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

const DEV_FILTER: &str = "vata_core=debug,vata_engine=debug,vata_cli=debug";
const PROD_FILTER: &str = "vata_core=info,vata_engine=info,vata_cli=info";

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup. Output goes to stderr so that the wrapped tool's
/// stdout stays clean when it is forwarded. `RUST_LOG` overrides the
/// profile's default filter.
///
/// # Example
///
/// ```
/// use vata_logging::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_or(DEV_FILTER))
                .finish()
                .try_init()
                .ok();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_or(PROD_FILTER))
                .finish()
                .try_init()
                .ok();
        }
        Profile::Test => {
            // Test capture is initialized separately via init_test_capture()
            tracing_subscriber::registry().try_init().ok();
        }
    });
}

/// `RUST_LOG` when set and valid, `default` otherwise
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
