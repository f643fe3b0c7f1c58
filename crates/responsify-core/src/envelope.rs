//! The response envelope
//!
//! Every output representation the builder offers is a view of this one
//! structure, so the wire contract (four keys, in order: `status`,
//! `message`, `details`, `data`) is defined in exactly one place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A fully resolved response envelope
///
/// Produced by [`crate::Respond::build`]; never cached across builder
/// mutations. Field declaration order is the wire key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The status code, exactly as given at construction
    pub status: u16,
    /// Resolved message text (override, translation, or fixed literal)
    pub message: String,
    /// Resolved details text (override, translation, or fixed literal)
    pub details: String,
    /// The payload; `{}` when none was supplied
    #[serde(default = "Envelope::empty_data")]
    pub data: Value,
}

impl Envelope {
    fn empty_data() -> Value {
        Value::Object(Map::new())
    }

    /// Returns the envelope as an ordered key-value map
    ///
    /// Keys iterate in wire order: `status`, `message`, `details`, `data`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("status".to_string(), Value::from(self.status));
        map.insert("message".to_string(), Value::from(self.message.clone()));
        map.insert("details".to_string(), Value::from(self.details.clone()));
        map.insert("data".to_string(), self.data.clone());
        map
    }
}
