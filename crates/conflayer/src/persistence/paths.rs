//! Path helpers for default storage locations.
//!
//! Responsibilities:
//! - Determine platform-appropriate directories for sources and cache.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Cache record layout.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default directory for configuration source files.
///
/// - Linux/macOS: `~/.config/conflayer/`
/// - Windows: `%AppData%\conflayer\`
pub fn default_config_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "conflayer")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Returns the default directory for cache records.
///
/// - Linux/macOS: `~/.cache/conflayer/`
/// - Windows: `%LocalAppData%\conflayer\cache`
pub fn default_cache_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "conflayer")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.cache_dir().to_path_buf())
}
