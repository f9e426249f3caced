//! Error types for the hostbind binding layer.
//!
//! Two tiers exist. A `BindingError` that reaches an entrypoint is fatal:
//! the invocation aborts without producing an envelope. Outcomes the
//! service reports to its caller travel inside an error envelope instead,
//! tagged with a [`StatusCode`].

use alloc::string::String;
use core::fmt;

use crate::types::SlotKind;

/// Status codes carried by error envelopes.
///
/// These repr values are part of the result envelope wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum StatusCode {
    BadRequest = 400,
    NotFound = 404,
    Internal = 500,
}

impl StatusCode {
    /// Convert from the numeric code found in an error envelope.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            400 => Some(Self::BadRequest),
            404 => Some(Self::NotFound),
            500 => Some(Self::Internal),
            _ => None,
        }
    }

    /// Return the numeric representation of this code.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Canonical message placed next to this code in an error envelope.
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::NotFound => "NotFound",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u32(), self.message())
    }
}

/// Binding layer error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The host-supplied context buffer is not a valid context object.
    #[error("malformed context: {0}")]
    MalformedContext(String),

    /// An account identifier buffer is not a single-key account object.
    #[error("malformed account id: {0}")]
    MalformedAccountId(String),

    /// A result envelope returned by another service could not be decoded.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// A value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A map or value slot was used before `alloc_or_recover`.
    #[error("slot {name:?} is not allocated")]
    UnknownSlot { name: String },

    /// A slot name was recovered with a different kind than it was allocated with.
    #[error("slot {name:?} is a {existing} slot, requested {requested}")]
    SlotKindMismatch {
        name: String,
        existing: SlotKind,
        requested: SlotKind,
    },

    /// The guest pulled a staged buffer with the wrong destination size.
    #[error("staged buffer is {staged} bytes, destination is {requested} bytes")]
    BufferLength { staged: usize, requested: usize },

    /// A mutating operation was attempted during a read-only invocation.
    #[error("{operation} is not permitted during a read invocation")]
    ReadOnly { operation: &'static str },
}

/// Convenience result type for the binding layer.
pub type BindingResult<T> = core::result::Result<T, BindingError>;
