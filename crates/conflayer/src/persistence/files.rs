//! File-based configuration source.
//!
//! Responsibilities:
//! - Read a directory of JSON and YAML files into one mapping, file stems
//!   becoming top-level keys.
//! - Layer profile and overrides subdirectories over the base files.
//!
//! Does NOT handle:
//! - Caching (see the cache sibling module).
//! - Dotted-path access (see the path module).
//!
//! Invariants:
//! - Files within a tier load in name order, so a stem shared by two
//!   files resolves deterministically (the later name wins).
//! - Tiers merge base first, then profile, then overrides.
//! - A missing directory or a tier without source files contributes
//!   nothing; only I/O and parse faults are errors.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::constants::SOURCE_EXTENSIONS;
use crate::repository::{ConfigRepository, RepositoryError};
use crate::value::{ConfigMap, merge_maps};

/// Configuration source over a directory tree.
///
/// The root directory holds base configuration files; subdirectories named
/// after a profile or an overrides selector layer on top of them during
/// [`load`](ConfigRepository::load). Saving is not supported.
#[derive(Debug, Clone)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ConfigRepository for FileRepository {
    fn load(
        &self,
        profile: Option<&str>,
        overrides: Option<&str>,
    ) -> Result<Option<ConfigMap>, RepositoryError> {
        let mut tiers = vec![self.root.clone()];
        if let Some(profile) = profile {
            tiers.push(self.root.join(profile));
        }
        if let Some(overrides) = overrides {
            tiers.push(self.root.join(overrides));
        }

        let mut merged = ConfigMap::new();
        let mut found_any = false;
        for tier in tiers {
            if let Some(layer) = read_tier(&tier)? {
                found_any = true;
                merge_maps(&mut merged, layer);
            }
        }

        if found_any { Ok(Some(merged)) } else { Ok(None) }
    }
}

/// Read one directory tier into a mapping, file stems as top-level keys.
///
/// Returns `Ok(None)` when the directory is missing or holds no source
/// files.
fn read_tier(dir: &Path) -> Result<Option<ConfigMap>, RepositoryError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| RepositoryError::Read {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RepositoryError::Read {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_source_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Ok(None);
    }

    let mut tier = ConfigMap::new();
    for path in &files {
        let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
            tracing::debug!(path = %path.display(), "skipping file with non-UTF-8 stem");
            continue;
        };
        tier.insert(stem.to_owned(), read_document(path)?);
    }

    tracing::debug!(path = %dir.display(), files = files.len(), "read configuration tier");
    Ok(Some(tier))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Parse one source file into a value, by extension.
///
/// YAML documents parse through the same value model as JSON, so both
/// formats land in one mapping shape.
fn read_document(path: &Path) -> Result<Value, RepositoryError> {
    let content = std::fs::read_to_string(path).map_err(|e| RepositoryError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str::<Value>(&content).map_err(anyhow::Error::from),
        _ => serde_yaml::from_str::<Value>(&content).map_err(anyhow::Error::from),
    };

    parsed.map_err(|e| RepositoryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
