//! Responsify Core - standardized API response envelopes
//!
//! This crate builds consistent `{status, message, details, data}` response
//! envelopes from an HTTP status code, with message and details text
//! resolved from a multi-language translation catalog.
//!
//! # Main Components
//!
//! - **Respond**: the fluent builder and its serializer family
//! - **Language**: the closed set of supported response languages
//! - **Catalog**: the embedded six-language default translation catalog
//! - **Seams**: `Translator` and `ConfigProvider` traits for swapping the
//!   catalog and the configuration source
//!
//! # Example
//!
//! ```
//! use responsify_core::respond;
//! use serde_json::json;
//!
//! let envelope = respond(201)
//!     .with_message("User created")
//!     .with_data(json!({"id": 1}))
//!     .build();
//!
//! assert_eq!(envelope.status, 201);
//! assert_eq!(envelope.message, "User created");
//! assert_eq!(envelope.details, "The resource was successfully created.");
//! ```

pub mod catalog;
pub mod config;
pub mod envelope;
pub mod error;
pub mod language;
pub mod respond;
pub mod translator;

// Re-export main types for convenience
pub use catalog::CatalogTranslator;
pub use config::{ConfigProvider, MapConfig, NoConfig, APP_LOCALE, DEFAULT_LANGUAGE};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use language::Language;
pub use respond::Respond;
pub use translator::{TextField, Translator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a standardized response builder for a status code
///
/// Equivalent to [`Respond::status`]; this is the intended entry point for
/// application code:
///
/// ```
/// use responsify_core::respond;
///
/// let envelope = respond(404).build();
/// assert_eq!(envelope.message, "Not Found");
/// ```
pub fn respond(status: u16) -> Respond {
    Respond::status(status)
}
