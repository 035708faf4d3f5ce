//! Centralized constants for the conflayer crate.
//!
//! This module contains environment key names and file naming defaults
//! used across modules to avoid magic string duplication.

// =============================================================================
// Environment Keys
// =============================================================================

/// Environment key gating cache use during `Config::load`.
///
/// Accepted values are `true`, `false`, `1`, and `0`; anything else is an
/// invalid-value error. Unset means enabled.
pub const ENV_CACHE_ENABLE: &str = "CONFIG_CACHE_ENABLE";

/// Environment key holding the cache time-to-live in whole seconds.
///
/// Unset means cached records never expire.
pub const ENV_CACHE_TTL: &str = "CONFIG_CACHE_TTL";

/// Environment key that disables `.env` loading when set to `true` or `1`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Cache File Naming
// =============================================================================

/// Stem shared by all cache files.
///
/// The default profile caches to `config.cache.json`; a named profile
/// caches to `config.<profile>.cache.json`.
pub const CACHE_FILE_STEM: &str = "config";

/// Extension suffix shared by all cache files.
pub const CACHE_FILE_SUFFIX: &str = "cache.json";

// =============================================================================
// Source File Extensions
// =============================================================================

/// Extensions the file repository recognizes as configuration sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];
