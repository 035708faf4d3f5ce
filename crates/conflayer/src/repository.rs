//! Source repository contract for configuration loading.
//!
//! Responsibilities:
//! - Define the trait a configuration source must implement.
//! - Define the error type source implementations report.
//!
//! Does NOT handle:
//! - Cache storage (see the cache module).
//! - The load decision procedure (see the loader module).
//!
//! Invariants:
//! - `Ok(None)` means no configuration was available, which is a valid
//!   outcome; faults always surface as `Err`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::value::ConfigMap;

/// Errors reported by configuration sources.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Failed to read configuration source at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse configuration source at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: anyhow::Error,
    },

    #[error("This repository does not support saving")]
    Unsupported,

    /// Catch-all for third-party repository implementations.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A source of configuration mappings.
///
/// Implementations resolve a profile and an overrides selector to a full
/// mapping. Returning `Ok(None)` reports that nothing was available, which
/// callers treat as a valid empty outcome rather than a fault.
pub trait ConfigRepository: Send + Sync {
    /// Load the mapping for `profile`, layered with `overrides`.
    fn load(
        &self,
        profile: Option<&str>,
        overrides: Option<&str>,
    ) -> Result<Option<ConfigMap>, RepositoryError>;

    /// Persist a mapping back to the source.
    ///
    /// Read-only sources keep the default body, which reports
    /// [`RepositoryError::Unsupported`].
    fn save(&self, _config: &ConfigMap, _profile: Option<&str>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unsupported)
    }
}
