//! Named-settings collaborator for configuration loading.
//!
//! Responsibilities:
//! - Define the trait the loader uses to read environment settings.
//! - Provide a process-environment implementation with empty/whitespace
//!   filtering and optional `.env` loading.
//!
//! Does NOT handle:
//! - Interpreting setting values (see the loader module).
//!
//! Invariants:
//! - Empty or whitespace-only variables read as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - `.env` loading never overrides variables already set in the process.

use crate::constants::ENV_DOTENV_DISABLED;

/// Named settings consulted during `Config::load`.
///
/// The load path reads only the cache keys from the constants module, but
/// implementations may serve any key space.
pub trait Environment: Send + Sync {
    /// The value for `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// Process environment with empty-value filtering.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Load a `.env` file from the working directory into the process
    /// environment, unless `DOTENV_DISABLED` is set to `true` or `1`.
    /// Variables already set in the process always win. A missing `.env`
    /// file is ignored; an unreadable or malformed one is logged at warn
    /// level and skipped.
    pub fn load_dotenv(self) -> Self {
        if Self::dotenv_disabled() {
            return self;
        }
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(error) if Self::is_not_found(&error) => {}
            Err(error) => {
                tracing::warn!(error = %error, "skipping unreadable .env file");
            }
        }
        self
    }
}

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env_var_or_none(key)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}
