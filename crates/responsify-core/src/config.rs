//! Configuration lookup seam
//!
//! The builder never reads files or environment variables itself; it asks an
//! injected [`ConfigProvider`] for string values by key. Applications bridge
//! this to whatever configuration system they run, and tests supply
//! [`MapConfig`].

use std::collections::HashMap;

/// Configuration key for the application-level locale
pub const APP_LOCALE: &str = "app.locale";

/// Configuration key for the package-level default language
pub const DEFAULT_LANGUAGE: &str = "responsify.language";

/// Capability interface for configuration lookups
pub trait ConfigProvider: Send + Sync {
    /// Returns the configured value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;
}

/// A provider with no configuration at all
///
/// This is what the bare [`crate::respond`] entry point uses; language
/// resolution then depends only on the builder's own language field and the
/// English fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoConfig;

impl ConfigProvider for NoConfig {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// An in-memory configuration map
#[derive(Debug, Default, Clone)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    /// Create an empty configuration map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, returning the map for chaining
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapConfig {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl ConfigProvider for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
