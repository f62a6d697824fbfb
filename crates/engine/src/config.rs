//! Test configuration via `memtest.toml`
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Command-line flags override whatever the file says.

use memtest_core::{Error, Result, MEGABYTE};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runner::PassLimit;

/// Config file name looked up by `memtest init-config`.
pub const CONFIG_FILE_NAME: &str = "memtest.toml";

fn default_megabytes() -> usize {
    64
}

fn default_passes() -> i64 {
    1
}

fn default_progress() -> bool {
    true
}

/// Memory test configuration loaded from `memtest.toml`.
///
/// # Example
///
/// ```toml
/// megabytes = 256
/// passes = 0      # run until interrupted
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemtestConfig {
    /// Megabytes to allocate and test.
    #[serde(default = "default_megabytes")]
    pub megabytes: usize,
    /// Number of passes; zero or negative runs forever.
    #[serde(default = "default_passes")]
    pub passes: i64,
    /// Seed for the random pattern. Drawn from OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Render the progress screen.
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for MemtestConfig {
    fn default() -> Self {
        Self {
            megabytes: default_megabytes(),
            passes: default_passes(),
            seed: None,
            progress: default_progress(),
        }
    }
}

impl MemtestConfig {
    /// Pass limit derived from `passes`.
    pub fn pass_limit(&self) -> PassLimit {
        PassLimit::from_count(self.passes)
    }

    /// Check that the buffer size is usable.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when `megabytes` is zero or does not fit in the
    /// address space.
    pub fn validate(&self) -> Result<()> {
        if self.megabytes == 0 {
            return Err(Error::InvalidConfig(
                "megabytes to test must be at least 1".to_string(),
            ));
        }
        if self.megabytes.checked_mul(MEGABYTE).is_none() {
            return Err(Error::InvalidConfig(format!(
                "{} megabytes does not fit in the address space",
                self.megabytes
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# memtest configuration
#
# Megabytes of memory to allocate and test (default: 64)
megabytes = 64

# Number of passes (default: 1). 0 or a negative number runs forever.
passes = 1

# Seed for the random fill (default: drawn from OS entropy and logged).
# seed = 42

# Render the full-screen progress bar (default: true)
progress = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: MemtestConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml())?;
        Ok(true)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
