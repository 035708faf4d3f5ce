//! Top-level error type for configuration loading.
//!
//! Responsibilities:
//! - Unify collaborator errors behind one enum for `Config::load` callers.
//! - Report malformed environment settings.
//!
//! Invariants:
//! - Repository and cache-read faults are never downgraded to a "nothing
//!   loaded" result; they propagate through these variants.

use thiserror::Error;

use crate::cache::CacheError;
use crate::repository::RepositoryError;

/// Errors that can occur during `Config::load`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The source repository failed while loading.
    #[error("Configuration source failed: {0}")]
    Repository(#[from] RepositoryError),

    /// The cache failed while reading a stored mapping.
    #[error("Configuration cache failed: {0}")]
    Cache(#[from] CacheError),

    /// An environment setting held a value that could not be interpreted.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}
