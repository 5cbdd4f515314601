//! JSON wire representation
//!
//! Request bodies use the service's camelCase keys and leave out unset
//! optional fields. Explicit values are always written, so
//! `privilegedMode: false` and an empty `environmentVariables` list reach
//! the service as given. Response bodies are parsed back through the same
//! validation used for raw mappings.

use buildenv_core::{Aggregate, ModelResult};
use serde::Serialize;
use serde_json::Value;

/// Aggregates that can be sent to and read back from the service
pub trait WireShape: Aggregate + Serialize {
    /// JSON body fragment for this value
    fn request_body(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Body fragment rendered as text
    fn request_json(&self, pretty: bool) -> ModelResult<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Parse a response body fragment
    fn from_response(body: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }
}

impl<T: Aggregate + Serialize> WireShape for T {}
