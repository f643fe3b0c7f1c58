//! Response builder for standardized API envelopes
//!
//! Implements the fluent builder that accumulates a status code and optional
//! overrides, resolves message/details text through the language fallback
//! chain at build time, and serializes the envelope into its output
//! representations.
//!
//! Copyright (c) 2025 Responsify Team
//! Licensed under the MIT OR Apache-2.0 license

mod core;
mod resolve;
mod build;

pub use self::core::Respond;
