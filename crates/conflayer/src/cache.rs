//! Cache repository contract for configuration loading.
//!
//! Responsibilities:
//! - Define the trait a configuration cache must implement.
//! - Define the error type cache implementations report.
//!
//! Does NOT handle:
//! - Source loading (see the repository module).
//! - Deciding when the cache is consulted (see the loader module).
//!
//! Invariants:
//! - `Ok(None)` covers both an absent record and an expired one; storage
//!   faults always surface as `Err`.
//! - Time-to-live is decided by the caller at save time; a `ttl` of `None`
//!   never expires.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::value::ConfigMap;

/// Errors reported by configuration caches.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to read cache at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse cache at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write cache at {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Catch-all for third-party cache implementations.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A store for previously loaded configuration mappings.
pub trait ConfigCache: Send + Sync {
    /// Load the cached mapping for `profile`.
    ///
    /// Returns `Ok(None)` when no usable record exists, whether it was
    /// never written or has expired.
    fn load(&self, profile: Option<&str>) -> Result<Option<ConfigMap>, CacheError>;

    /// Store `config` for `profile`, expiring after `ttl`.
    fn save(
        &self,
        config: &ConfigMap,
        profile: Option<&str>,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError>;
}
