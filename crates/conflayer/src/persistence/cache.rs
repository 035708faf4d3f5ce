//! File-based configuration cache.
//!
//! Responsibilities:
//! - Store one JSON cache record per profile under a cache directory.
//! - Derive record expiry from creation time and time-to-live at read
//!   time.
//! - Write records atomically.
//!
//! Does NOT handle:
//! - Deciding when the cache is consulted (see the loader module).
//! - Source file loading (see the files sibling module).
//!
//! Invariants:
//! - A missing record file is `Ok(None)`; a corrupt one is a parse error.
//! - Writes go to a temporary file first, then rename, so a record is
//!   never observed half-written.
//! - A record without a time-to-live never expires.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheError, ConfigCache};
use crate::constants::{CACHE_FILE_STEM, CACHE_FILE_SUFFIX};
use crate::value::ConfigMap;

/// On-disk shape of one cached configuration mapping.
#[derive(Debug, Serialize, Deserialize)]
struct CacheRecord {
    profile: Option<String>,
    /// Seconds since the Unix epoch at save time.
    created_at: u64,
    ttl_seconds: Option<u64>,
    config: ConfigMap,
}

impl CacheRecord {
    /// Whether this record is past its time-to-live at `now` (seconds
    /// since the Unix epoch). A zero time-to-live is expired immediately.
    fn is_expired(&self, now: u64) -> bool {
        match self.ttl_seconds {
            Some(ttl) => now >= self.created_at.saturating_add(ttl),
            None => false,
        }
    }
}

/// Cache storing one JSON record per profile.
///
/// The default profile lands in `config.cache.json`; a named profile in
/// `config.<profile>.cache.json`.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, profile: Option<&str>) -> PathBuf {
        let name = match profile {
            Some(profile) => format!("{CACHE_FILE_STEM}.{profile}.{CACHE_FILE_SUFFIX}"),
            None => format!("{CACHE_FILE_STEM}.{CACHE_FILE_SUFFIX}"),
        };
        self.dir.join(name)
    }
}

impl ConfigCache for FileCache {
    fn load(&self, profile: Option<&str>) -> Result<Option<ConfigMap>, CacheError> {
        let path = self.record_path(profile);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Read { path, source: e }),
        };

        let record: CacheRecord = serde_json::from_str(&content).map_err(|e| CacheError::Parse {
            path: path.clone(),
            source: e,
        })?;

        if record.is_expired(unix_now()) {
            tracing::debug!(path = %path.display(), "cache record expired");
            return Ok(None);
        }

        Ok(Some(record.config))
    }

    fn save(
        &self,
        config: &ConfigMap,
        profile: Option<&str>,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let path = self.record_path(profile);
        let record = CacheRecord {
            profile: profile.map(str::to_owned),
            created_at: unix_now(),
            ttl_seconds: ttl.map(|ttl| ttl.as_secs()),
            config: config.clone(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CacheError::Write {
                path: path.clone(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(&record)
            .map_err(|e| CacheError::Other(anyhow::Error::new(e)))?;

        // Write to a temporary file first, then rename, so readers never
        // observe a partial record.
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(|e| CacheError::Write {
            path: temp_path.clone(),
            source: e,
        })?;
        std::fs::rename(&temp_path, &path).map_err(|e| CacheError::Write {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), ttl = ?ttl, "cache record saved atomically");
        Ok(())
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
