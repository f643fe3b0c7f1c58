//! Language, text, and data resolution
//!
//! Copyright (c) 2025 Responsify Team
//! Licensed under the MIT OR Apache-2.0 license

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::Respond;
use crate::config::{APP_LOCALE, DEFAULT_LANGUAGE};
use crate::{Language, TextField};

impl Respond {
    /// Resolve the language for this build
    ///
    /// Strict priority order, first match wins: the explicitly set language,
    /// then the `app.locale` configuration value, then the
    /// `responsify.language` configuration value, then English. An
    /// unsupported value found at a step falls through to the next step.
    pub(super) fn resolve_language(&self) -> Language {
        if let Some(language) = self.language {
            return language;
        }

        for key in [APP_LOCALE, DEFAULT_LANGUAGE] {
            if let Some(code) = self.config.get(key) {
                match Language::from_code(&code) {
                    Some(language) => {
                        trace!(key, code = %code, "language resolved from configuration");
                        return language;
                    }
                    None => {
                        trace!(key, code = %code, "configured language not supported, falling through")
                    }
                }
            }
        }

        Language::English
    }

    /// Resolve the text for one envelope field
    ///
    /// A present override (even an empty string) is returned verbatim and
    /// skips translation. Otherwise the catalog is queried in the resolved
    /// language, retried in English on a miss, and finally replaced by the
    /// field's fixed fallback literal.
    pub(super) fn resolve_text(&self, field: TextField) -> String {
        let custom = match field {
            TextField::Message => &self.custom_message,
            TextField::Details => &self.custom_details,
        };
        if let Some(text) = custom {
            return text.clone();
        }

        let language = self.resolve_language();
        if let Some(text) = self.translator.lookup(language, self.status, field) {
            return text;
        }

        if language != Language::English {
            debug!(
                status = self.status,
                language = language.code(),
                field = field.as_str(),
                "translation missing, retrying in English"
            );
            if let Some(text) = self.translator.lookup(Language::English, self.status, field) {
                return text;
            }
        }

        field.fallback_text().to_string()
    }

    /// Resolve the payload for this build
    ///
    /// Null and never-set data are indistinguishable in output: both become
    /// an empty object. Anything else, scalars included, passes through
    /// unchanged.
    pub(super) fn resolve_data(&self) -> Value {
        match &self.data {
            Value::Null => Value::Object(Map::new()),
            data => data.clone(),
        }
    }
}
