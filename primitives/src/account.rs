//! Account identifiers.
//!
//! An account is either an external address or a service. On the wire it
//! is a JSON object with exactly one key:
//!
//! ```text
//! {"address": "<data>"}    or    {"service": "<data>"}
//! ```
//!
//! Objects carrying both keys, neither key, any other key, or a non-string
//! value are malformed.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult};

/// Two-variant account identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountId {
    Address(String),
    Service(String),
}

impl AccountId {
    pub fn address(data: impl Into<String>) -> Self {
        Self::Address(data.into())
    }

    pub fn service(data: impl Into<String>) -> Self {
        Self::Service(data.into())
    }

    pub fn is_address(&self) -> bool {
        matches!(self, Self::Address(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// The identifier payload, regardless of variant.
    pub fn data(&self) -> &str {
        match self {
            Self::Address(data) | Self::Service(data) => data,
        }
    }

    /// Decode an account identifier from its JSON form.
    pub fn decode(bytes: &[u8]) -> BindingResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| BindingError::MalformedAccountId(e.to_string()))
    }

    /// Encode this identifier as a single-key JSON object.
    pub fn encode(&self) -> BindingResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| BindingError::Serialization(e.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(data) => write!(f, "address:{}", data),
            Self::Service(data) => write!(f, "service:{}", data),
        }
    }
}
