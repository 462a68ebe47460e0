//! Engine configuration
//!
//! Resolution order: explicit TOML file, then environment overrides
//! (`VATA_BIN`, `VATA_TIMEOUT_MS`), then built-in defaults.

use crate::executor::{Executor, StderrMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vata_core::Encoding;
use vata_errors::{Result, VataError};

/// Overrides the binary path
pub const ENV_BIN: &str = "VATA_BIN";
/// Overrides the default timeout, in milliseconds
pub const ENV_TIMEOUT_MS: &str = "VATA_TIMEOUT_MS";

const DEFAULT_BINARY: &str = "vata";

/// Settings for locating and running the `vata` binary
///
/// ```toml
/// binary = "/usr/local/bin/vata"
/// timeout_ms = 30000
/// encoding = "expl"
/// stderr = "capture"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VataConfig {
    pub binary: PathBuf,
    pub timeout_ms: Option<u64>,
    pub encoding: Encoding,
    pub stderr: StderrMode,
}

impl Default for VataConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            timeout_ms: None,
            encoding: Encoding::default(),
            stderr: StderrMode::default(),
        }
    }
}

impl VataConfig {
    /// # Errors
    ///
    /// `ERR_CONFIG` on invalid TOML, unknown keys, or unknown tokens.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| VataError::from(e).into())
    }

    /// # Errors
    ///
    /// `ERR_CONFIG` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| VataError::Config {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `path` (or defaults when `None`) and apply environment overrides
    ///
    /// # Errors
    ///
    /// `ERR_CONFIG` if the file or an override is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// # Errors
    ///
    /// `ERR_CONFIG` if `VATA_TIMEOUT_MS` is not an unsigned integer.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// `ERR_CONFIG` if the timeout override is not an unsigned integer.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(binary) = lookup(ENV_BIN).filter(|v| !v.is_empty()) {
            self.binary = PathBuf::from(binary);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS).filter(|v| !v.is_empty()) {
            let ms = raw.trim().parse::<u64>().map_err(|_| VataError::Config {
                reason: format!(
                    "{} must be a number of milliseconds, got '{}'",
                    ENV_TIMEOUT_MS, raw
                ),
            })?;
            self.timeout_ms = Some(ms);
        }
        Ok(self)
    }

    /// Configured timeout; `0` disables it like an absent value
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    pub fn executor(&self) -> Executor {
        Executor::new(self.binary.clone())
            .with_timeout(self.timeout())
            .with_stderr(self.stderr)
    }
}
