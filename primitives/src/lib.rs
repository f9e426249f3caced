//! `hostbind-primitives`: wire types for the hostbind guest binding layer.
//!
//! This crate defines everything that crosses the guest/host boundary as
//! data: the per-invocation [`Context`], the [`AccountId`] codec, the
//! result [`Envelope`], the length-prefixed buffer layout, and the shared
//! error type.
//!
//! Supports `#![no_std]` for WASM guest use (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod types;
pub mod error;
pub mod buffer;
pub mod context;
pub mod account;
pub mod envelope;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Entrypoint, Pointer, SlotKind, LENGTH_PREFIX_LEN};
pub use error::{BindingError, BindingResult, StatusCode};
pub use buffer::{to_bytes, to_text, LengthPrefixed};
pub use context::{Context, ContextBuilder};
pub use account::AccountId;
pub use envelope::Envelope;
