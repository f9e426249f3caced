//! Per-invocation execution context.
//!
//! The host serializes the context as a JSON object and stages it for the
//! guest before calling an entrypoint. The recognized fields form a fixed
//! schema:
//!
//! | field             | type   | default |
//! |-------------------|--------|---------|
//! | `nonce`           | string | `""`    |
//! | `service_name`    | string | `""`    |
//! | `service_method`  | string | `""`    |
//! | `service_payload` | string | `""`    |
//! | `cycles_limit`    | u64    | `0`     |
//! | `cycles_price`    | u64    | `0`     |
//! | `height`          | u64    | `0`     |
//! | `timestamp`       | u64    | `0`     |
//! | `cycles_used`     | u64    | `0`     |
//!
//! Unrecognized fields are ignored. A field that is absent or `null` takes
//! its default. A key that appears more than once keeps its last value.
//! Anything else that does not fit the schema (non-object input, wrong
//! value type, negative or oversized integers, trailing garbage) makes the
//! whole buffer malformed.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{BindingError, BindingResult};

/// Execution context of one invocation.
///
/// Immutable after decoding except for `cycles_used`, which the service
/// logic may advance as it consumes cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    #[serde(deserialize_with = "null_as_default")]
    nonce: String,
    #[serde(deserialize_with = "null_as_default")]
    service_name: String,
    #[serde(deserialize_with = "null_as_default")]
    service_method: String,
    #[serde(deserialize_with = "null_as_default")]
    service_payload: String,
    #[serde(deserialize_with = "null_as_default")]
    cycles_limit: u64,
    #[serde(deserialize_with = "null_as_default")]
    cycles_price: u64,
    #[serde(deserialize_with = "null_as_default")]
    height: u64,
    #[serde(deserialize_with = "null_as_default")]
    timestamp: u64,
    #[serde(deserialize_with = "null_as_default")]
    cycles_used: u64,
}

fn malformed(err: serde_json::Error) -> BindingError {
    BindingError::MalformedContext(err.to_string())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Context {
    /// Start building a context (host side and tests).
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Decode a context from the host-supplied JSON bytes.
    ///
    /// Each call is an independent decode pass; a failure yields no
    /// partial context.
    pub fn decode(bytes: &[u8]) -> BindingResult<Self> {
        // Collecting into a map first lets a repeated key overwrite the
        // earlier one, and rejects anything that is not an object.
        let object: Map<String, Value> = serde_json::from_slice(bytes).map_err(malformed)?;
        serde_json::from_value(Value::Object(object)).map_err(malformed)
    }

    /// Encode this context in its wire form (all nine fields).
    pub fn encode(&self) -> BindingResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| BindingError::Serialization(e.to_string()))
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_method(&self) -> &str {
        &self.service_method
    }

    /// Opaque request payload for the service method.
    pub fn service_payload(&self) -> &str {
        &self.service_payload
    }

    pub fn cycles_limit(&self) -> u64 {
        self.cycles_limit
    }

    pub fn cycles_price(&self) -> u64 {
        self.cycles_price
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn cycles_used(&self) -> u64 {
        self.cycles_used
    }

    /// Cycles left before `cycles_limit` is reached.
    pub fn cycles_remaining(&self) -> u64 {
        self.cycles_limit.saturating_sub(self.cycles_used)
    }

    /// Add `cycles` to the used-cycles accumulator, saturating at `u64::MAX`.
    pub fn add_cycles_used(&mut self, cycles: u64) {
        self.cycles_used = self.cycles_used.saturating_add(cycles);
    }
}

/// Builder for [`Context`].
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    inner: Context,
}

impl ContextBuilder {
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.inner.nonce = nonce.into();
        self
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.inner.service_name = name.into();
        self
    }

    pub fn service_method(mut self, method: impl Into<String>) -> Self {
        self.inner.service_method = method.into();
        self
    }

    pub fn service_payload(mut self, payload: impl Into<String>) -> Self {
        self.inner.service_payload = payload.into();
        self
    }

    pub fn cycles_limit(mut self, v: u64) -> Self {
        self.inner.cycles_limit = v;
        self
    }

    pub fn cycles_price(mut self, v: u64) -> Self {
        self.inner.cycles_price = v;
        self
    }

    pub fn height(mut self, v: u64) -> Self {
        self.inner.height = v;
        self
    }

    pub fn timestamp(mut self, v: u64) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn cycles_used(mut self, v: u64) -> Self {
        self.inner.cycles_used = v;
        self
    }

    pub fn build(self) -> Context {
        self.inner
    }
}
