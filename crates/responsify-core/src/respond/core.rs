//! Core Respond structure and fluent mutators
//!
//! Copyright (c) 2025 Responsify Team
//! Licensed under the MIT OR Apache-2.0 license

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::catalog::CatalogTranslator;
use crate::config::{ConfigProvider, NoConfig};
use crate::{Language, Translator};

/// Builder for standardized response envelopes
///
/// A `Respond` is created for exactly one status code, mutated through
/// chained calls, and consumed by any of the serializers in the `build`
/// module. Nothing is resolved until a build happens, so mutations between
/// two builds are observable in the second.
pub struct Respond {
    pub(super) status: u16,
    pub(super) custom_message: Option<String>,
    pub(super) custom_details: Option<String>,
    pub(super) data: Value,
    pub(super) language: Option<Language>,
    pub(super) translator: Arc<dyn Translator>,
    pub(super) config: Arc<dyn ConfigProvider>,
}

impl Respond {
    /// Create a new builder for the given status code
    ///
    /// This is the only construction path. The code is stored verbatim; no
    /// range check is performed, so codes outside the conventional 100-599
    /// band are accepted and resolve to the fixed fallback texts unless
    /// overridden.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            custom_message: None,
            custom_details: None,
            data: Value::Null,
            language: None,
            translator: Arc::new(CatalogTranslator::new()),
            config: Arc::new(NoConfig),
        }
    }

    /// Set a custom message, bypassing translation entirely
    ///
    /// The override always wins, even when set to an empty string.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Set custom details, bypassing translation entirely
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.custom_details = Some(details.into());
        self
    }

    /// Set the response payload
    ///
    /// `Value::Null` is accepted here and normalized to an empty object at
    /// build time.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Set the translation language by two-letter code
    ///
    /// Unsupported codes (including case mismatches like `"EN"`) are
    /// silently ignored and the previously set language is kept. The call
    /// position in the chain does not matter; resolution is lazy.
    pub fn with_language(mut self, code: &str) -> Self {
        match Language::from_code(code) {
            Some(language) => self.language = Some(language),
            None => trace!(code, "unsupported language code ignored"),
        }
        self
    }

    /// Replace the translation catalog
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the configuration source consulted during language resolution
    pub fn with_config(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.config = config;
        self
    }

    /// Get the status code this builder was created with
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Get the explicitly set language, if any
    pub fn language(&self) -> Option<Language> {
        self.language
    }
}
