//! The load decision procedure.
//!
//! Responsibilities:
//! - Decide whether a load is served from cache or from the source
//!   repository.
//! - Interpret the cache settings supplied by the environment collaborator.
//! - Persist freshly loaded configuration back to the cache.
//!
//! Does NOT handle:
//! - Dotted-path access (see the path and store modules).
//! - Concrete storage (see the persistence module).
//!
//! Invariants:
//! - A load that returns `Ok(false)` or `Err` leaves the prior mapping
//!   untouched.
//! - A cache hit ends the cycle; the source is not consulted and nothing
//!   is written back.
//! - Repository and cache-read faults propagate; a cache-write failure
//!   only logs a warning.

use std::time::Duration;

use crate::constants::{ENV_CACHE_ENABLE, ENV_CACHE_TTL};
use crate::error::ConfigError;
use crate::store::Config;

impl Config {
    /// Load configuration through the attached collaborators.
    ///
    /// The cache is consulted first unless `force` is set or caching is
    /// disabled through the environment; a fresh, non-expired record
    /// replaces the mapping and ends the load. Otherwise the repository is
    /// asked for `profile` layered with `overrides`, and a successful
    /// result is written back to the cache with the configured
    /// time-to-live.
    ///
    /// Returns `Ok(true)` when the store now holds loaded configuration,
    /// `Ok(false)` when neither collaborator had anything to offer, and
    /// `Err` when one of them failed. The prior mapping survives anything
    /// but a successful load.
    pub fn load(
        &mut self,
        profile: Option<&str>,
        overrides: Option<&str>,
        force: bool,
    ) -> Result<bool, ConfigError> {
        let cache_enabled = self.cache_enabled()?;

        if !force && cache_enabled {
            if let Some(cache) = &self.cache {
                if let Some(cached) = cache.load(profile)? {
                    tracing::debug!(
                        profile = profile.unwrap_or("default"),
                        "configuration served from cache"
                    );
                    self.items = cached;
                    return Ok(true);
                }
                tracing::debug!(profile = profile.unwrap_or("default"), "cache miss");
            }
        }

        let Some(repository) = &self.repository else {
            tracing::debug!("no repository attached, nothing to load");
            return Ok(false);
        };

        let Some(loaded) = repository.load(profile, overrides)? else {
            tracing::debug!(
                profile = profile.unwrap_or("default"),
                "source repository had no configuration"
            );
            return Ok(false);
        };

        // Resolve the time-to-live before touching the mapping so a
        // malformed setting cannot leave a half-finished load behind.
        let persist = cache_enabled && self.cache.is_some();
        let ttl = if persist { self.cache_ttl()? } else { None };

        tracing::debug!(
            profile = profile.unwrap_or("default"),
            keys = loaded.len(),
            "configuration loaded from source"
        );
        self.items = loaded;

        if persist {
            if let Some(cache) = &self.cache {
                match cache.save(&self.items, profile, ttl) {
                    Ok(()) => tracing::debug!(
                        profile = profile.unwrap_or("default"),
                        ttl = ?ttl,
                        "configuration persisted to cache"
                    ),
                    Err(error) => {
                        tracing::warn!(error = %error, "failed to persist configuration to cache");
                    }
                }
            }
        }

        Ok(true)
    }

    /// Whether the cache may be consulted and written this cycle.
    ///
    /// Defaults to enabled when no environment is attached or the setting
    /// is absent.
    fn cache_enabled(&self) -> Result<bool, ConfigError> {
        let Some(environment) = &self.environment else {
            return Ok(true);
        };
        match environment.var(ENV_CACHE_ENABLE).as_deref() {
            None => Ok(true),
            Some("true") | Some("1") => Ok(true),
            Some("false") | Some("0") => Ok(false),
            Some(other) => Err(ConfigError::InvalidValue {
                var: ENV_CACHE_ENABLE.to_string(),
                message: format!("must be true or false (got {other})"),
            }),
        }
    }

    /// The time-to-live for freshly cached configuration.
    ///
    /// Absent means records never expire.
    fn cache_ttl(&self) -> Result<Option<Duration>, ConfigError> {
        let Some(environment) = &self.environment else {
            return Ok(None);
        };
        match environment.var(ENV_CACHE_TTL) {
            None => Ok(None),
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    var: ENV_CACHE_TTL.to_string(),
                    message: format!("must be a non-negative number of seconds (got {raw})"),
                })?;
                Ok(Some(Duration::from_secs(secs)))
            }
        }
    }
}
