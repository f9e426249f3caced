//! Result envelopes.
//!
//! Every invocation ends with exactly one of two shapes:
//!
//! ```text
//! {"success":{"data":"<string>"}}
//! {"error":{"message":"<string>","code":<integer>}}
//! ```
//!
//! Field order inside `error` is `message` then `code`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult, StatusCode};

/// Terminal result of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope {
    Success { data: String },
    Error { message: String, code: u32 },
}

impl Envelope {
    /// Success envelope carrying `data`.
    pub fn ok(data: impl Into<String>) -> Self {
        Self::Success { data: data.into() }
    }

    /// Error envelope with an explicit code and message.
    pub fn err(code: u32, message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            code,
        }
    }

    /// Error envelope for a well-known status, using its canonical message.
    pub fn status(code: StatusCode) -> Self {
        Self::err(code.as_u32(), code.message())
    }

    /// `{"error":{"message":"NotFound","code":404}}`.
    pub fn not_found() -> Self {
        Self::status(StatusCode::NotFound)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The success payload, if any.
    pub fn data(&self) -> Option<&str> {
        match self {
            Self::Success { data } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// The error code, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Success { .. } => None,
            Self::Error { code, .. } => Some(*code),
        }
    }

    /// Serialize to the canonical compact JSON bytes.
    pub fn encode(&self) -> BindingResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| BindingError::Serialization(e.to_string()))
    }

    /// The error code as a well-known status, if it is one.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.code().and_then(StatusCode::from_u32)
    }

    /// Decode an envelope returned by another service.
    pub fn decode(bytes: &[u8]) -> BindingResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| BindingError::MalformedEnvelope(e.to_string()))
    }
}

/// Serialize `{"success":{"data":data}}`.
pub fn ok(data: &str) -> BindingResult<Vec<u8>> {
    Envelope::ok(data).encode()
}

/// Serialize `{"error":{"message":message,"code":code}}`.
pub fn err(code: u32, message: &str) -> BindingResult<Vec<u8>> {
    Envelope::err(code, message).encode()
}
