//! Environment-driven configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Resolve log level and log directory from the process environment.
//! - Start logging only when a directory is configured.

use crate::logging::{default_log_level, init_logging, normalize_level};
use std::path::PathBuf;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "TODO_CORE_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "TODO_CORE_LOG_DIR";

/// Host-level settings for the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Canonical level name accepted by [`init_logging`].
    pub log_level: &'static str,
    /// `None` keeps logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = match read(LOG_LEVEL_ENV) {
            Some(value) => {
                normalize_level(&value).map_err(|err| format!("{LOG_LEVEL_ENV}: {err}"))?
            }
            None => default_log_level(),
        };
        let log_dir = read(LOG_DIR_ENV).map(|value| PathBuf::from(value.trim()));

        Ok(Self { log_level, log_dir })
    }

    /// Starts logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("{LOG_DIR_ENV} is not valid UTF-8: {}", dir.display()))?;
        init_logging(self.log_level, dir)?;
        Ok(true)
    }
}
