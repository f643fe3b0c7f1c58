//! Build operations and serializers for Respond
//!
//! Copyright (c) 2025 Responsify Team
//! Licensed under the MIT OR Apache-2.0 license

use std::fmt;
use std::io::Write;

use http::header::CONTENT_TYPE;
use http::Response;
use serde_json::{Map, Value};

use super::Respond;
use crate::{Envelope, Result, TextField};

impl Respond {
    /// Build the response envelope from current state
    ///
    /// Every serializer routes through this method, so all output
    /// representations are views of the same envelope. Building never fails
    /// and never caches; calling it twice after a mutation reflects the
    /// mutation in the second envelope.
    pub fn build(&self) -> Envelope {
        Envelope {
            status: self.status,
            message: self.resolve_text(TextField::Message),
            details: self.resolve_text(TextField::Details),
            data: self.resolve_data(),
        }
    }

    /// Serialize the envelope to a pretty-printed JSON string
    ///
    /// Non-ASCII text is emitted literally, not escaped, so Arabic catalog
    /// entries appear as readable text in the output.
    pub fn to_json_string(&self) -> String {
        // The envelope holds only a number, two strings, and an
        // already-valid Value.
        serde_json::to_string_pretty(&self.build())
            .expect("envelope serialization should never fail")
    }

    /// Serialize into a wire-format HTTP response
    ///
    /// The JSON string form becomes the body, the stored status code the
    /// transport status, with a single `Content-Type: application/json`
    /// header. Errors only for status codes the wire layer cannot represent
    /// (outside 100-999).
    pub fn to_http(&self) -> Result<Response<String>> {
        let response = Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, "application/json")
            .body(self.to_json_string())?;
        Ok(response)
    }

    /// Serialize the envelope to an ordered key-value map
    ///
    /// Keys iterate in wire order: `status`, `message`, `details`, `data`.
    pub fn to_map(&self) -> Map<String, Value> {
        self.build().to_map()
    }

    /// Write the JSON string form to standard output
    pub fn send(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.to_json_string().as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl fmt::Display for Respond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
