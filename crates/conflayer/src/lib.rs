//! Layered configuration access.
//!
//! This crate merges configuration from pluggable sources into one nested
//! mapping with dotted-path access, and can cache the merged result with a
//! time-to-live to skip repeated source parsing.
//!
//! ```
//! use conflayer::Config;
//! use serde_json::json;
//!
//! let mut config = Config::new();
//! config.set("app.name", "demo");
//! config.push("app.tags", "alpha");
//!
//! assert_eq!(config.get("app.name"), Some(&json!("demo")));
//! assert_eq!(config["app.tags"], json!(["alpha"]));
//! ```
//!
//! Loading goes through collaborators attached at construction time: a
//! [`ConfigRepository`] supplies source mappings, a [`ConfigCache`] stores
//! merged results, and an [`Environment`] provides the cache settings.
//! All three are optional.

pub mod cache;
pub mod constants;
pub mod env;
mod error;
mod loader;
pub mod path;
pub mod persistence;
pub mod repository;
mod store;
pub mod value;

pub use cache::{CacheError, ConfigCache};
pub use env::{Environment, ProcessEnv};
pub use error::ConfigError;
pub use persistence::{FileCache, FileRepository};
pub use repository::{ConfigRepository, RepositoryError};
pub use serde_json::Value;
pub use store::{Config, KeyedAccess};
pub use value::{ConfigMap, deep_merge};
