//! The configuration store.
//!
//! Responsibilities:
//! - Own the merged configuration mapping.
//! - Expose the dotted-path read/write API backed by the path module.
//! - Hold the optional collaborators the load path consults.
//!
//! Does NOT handle:
//! - The load decision procedure (see the loader module).
//!
//! Invariants:
//! - The mapping is mutated only through the path operations.
//! - Read accessors never fail on missing paths; absence is `None`,
//!   `false`, or the caller's default.

use std::fmt;
use std::ops::Index;

use serde_json::Value;

use crate::cache::ConfigCache;
use crate::env::Environment;
use crate::path;
use crate::repository::ConfigRepository;
use crate::value::ConfigMap;

static NULL: Value = Value::Null;

/// Nested configuration store with dotted-path access.
///
/// A store starts empty and is populated either directly through [`set`]
/// and friends or by [`load`] through its collaborators. All collaborators
/// are optional; a store without them is a plain in-memory mapping.
///
/// [`set`]: Config::set
/// [`load`]: Config::load
#[derive(Default)]
pub struct Config {
    pub(crate) items: ConfigMap,
    pub(crate) repository: Option<Box<dyn ConfigRepository>>,
    pub(crate) cache: Option<Box<dyn ConfigCache>>,
    pub(crate) environment: Option<Box<dyn Environment>>,
}

impl Config {
    /// An empty store with no collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `items`, with no collaborators.
    pub fn from_map(items: ConfigMap) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Attach the source repository consulted by [`Config::load`].
    pub fn with_repository(mut self, repository: impl ConfigRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Attach the cache consulted by [`Config::load`].
    pub fn with_cache(mut self, cache: impl ConfigCache + 'static) -> Self {
        self.cache = Some(Box::new(cache));
        self
    }

    /// Attach the environment that supplies cache settings.
    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Some(Box::new(environment));
        self
    }

    /// The value at `path`, if every segment resolves.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path::get(&self.items, path)
    }

    /// The value at `path`, or `default` when the path does not resolve.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Resolve several paths at once, keyed by the requested path.
    ///
    /// Paths that do not resolve map to null.
    pub fn get_many<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> ConfigMap {
        let mut resolved = ConfigMap::new();
        for path in paths {
            let value = self.get(path).cloned().unwrap_or(Value::Null);
            resolved.insert(path.to_owned(), value);
        }
        resolved
    }

    /// Resolve several paths at once, each falling back to its own default.
    pub fn get_many_or(&self, defaults: ConfigMap) -> ConfigMap {
        let mut resolved = ConfigMap::new();
        for (path, default) in defaults {
            let value = self.get(&path).cloned().unwrap_or(default);
            resolved.insert(path, value);
        }
        resolved
    }

    /// Whether `path` resolves to any value, null included.
    pub fn has(&self, path: &str) -> bool {
        path::has(&self.items, path)
    }

    /// Write `value` at `path`, creating intermediate mappings as needed.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        path::set(&mut self.items, path, value.into());
    }

    /// Apply several path/value pairs in the mapping's iteration order.
    ///
    /// Pairs are applied independently; later pairs see the effects of
    /// earlier ones.
    pub fn set_many(&mut self, values: ConfigMap) {
        for (path, value) in values {
            path::set(&mut self.items, &path, value);
        }
    }

    /// Remove the value at `path` if it resolves; otherwise do nothing.
    pub fn forget(&mut self, path: &str) {
        path::forget(&mut self.items, path);
    }

    /// Append `value` to the sequence at `path`, starting one if needed.
    pub fn push(&mut self, path: &str, value: impl Into<Value>) {
        path::push(&mut self.items, path, value.into());
    }

    /// Insert `value` at the front of the sequence at `path`.
    pub fn prepend(&mut self, path: &str, value: impl Into<Value>) {
        path::prepend(&mut self.items, path, value.into());
    }

    /// The whole mapping, borrowed read-only.
    pub fn all(&self) -> &ConfigMap {
        &self.items
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("items", &self.items)
            .field("repository", &self.repository.is_some())
            .field("cache", &self.cache.is_some())
            .field("environment", &self.environment.is_some())
            .finish()
    }
}

/// Uniform keyed access over dotted paths.
///
/// Implemented by [`Config`] as a direct mapping onto its has/get/set/
/// forget operations, for callers that take configuration holders
/// generically.
pub trait KeyedAccess {
    fn exists(&self, path: &str) -> bool;
    fn read(&self, path: &str) -> Option<&Value>;
    fn write(&mut self, path: &str, value: Value);
    fn remove(&mut self, path: &str);
}

impl KeyedAccess for Config {
    fn exists(&self, path: &str) -> bool {
        self.has(path)
    }

    fn read(&self, path: &str) -> Option<&Value> {
        self.get(path)
    }

    fn write(&mut self, path: &str, value: Value) {
        self.set(path, value);
    }

    fn remove(&mut self, path: &str) {
        self.forget(path);
    }
}

impl Index<&str> for Config {
    type Output = Value;

    /// Bracket reads never panic; a path that does not resolve yields null.
    fn index(&self, path: &str) -> &Value {
        self.get(path).unwrap_or(&NULL)
    }
}
