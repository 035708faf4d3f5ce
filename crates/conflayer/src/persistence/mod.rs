//! Shipped file-system collaborators.
//!
//! Responsibilities:
//! - Load configuration from a directory of JSON and YAML files.
//! - Cache merged configuration as per-profile JSON records with a
//!   time-to-live.
//! - Determine platform-appropriate default locations.
//!
//! Does NOT handle:
//! - The load decision procedure (see the loader module).
//! - In-memory access (see the store and path modules).
//!
//! Invariants:
//! - Cache writes are atomic (temp file + rename).
//! - A missing file or directory is "nothing available", never an error.
//! - Expiry is derived from the record's creation time at read time, not
//!   stored as a flag.

mod cache;
mod files;
mod paths;

pub use cache::FileCache;
pub use files::FileRepository;
pub use paths::{default_cache_dir, default_config_dir};
