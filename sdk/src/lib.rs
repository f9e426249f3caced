//! `hostbind-sdk`: guest-side binding layer for services running inside a
//! smart-contract host.
//!
//! Everything here talks to the host through the [`HostBinding`]
//! capability trait, so the same service code runs against the real WASM
//! imports and against the in-memory [`MockHost`].
//!
//! ## Architecture
//!
//! - [`host::HostBinding`]: capability set the host exposes (console, staged
//!   buffer pull, slots, values, account values, cross-service calls, maps)
//! - [`host::MockHost`]: in-memory implementation for testing
//! - [`guard::ReadOnlyHost`]: rejects mutations during `read` invocations
//! - [`context`]: loading the staged execution context
//! - [`store::StoreMap`]: named keyspace with a write-through cache
//! - [`value::StoreValue`]: typed scalar slots
//! - [`calls`]: typed helpers over the general host operations
//! - [`service`]: entrypoint dispatch by `service_method`
//!
//! Caches live for one invocation. Nothing is kept in statics.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod host;
pub mod guard;
pub mod config;
pub mod context;
pub mod store;
pub mod value;
pub mod calls;
pub mod service;

// Re-export key types for convenience
pub use calls::log;
pub use config::BindingConfig;
pub use context::load_context;
pub use guard::ReadOnlyHost;
pub use host::{HostBinding, HostCall, MockHost};
pub use service::{invoke, Handler, Service};
pub use store::StoreMap;
pub use value::{SlotValue, StoreBool, StoreString, StoreUint64, StoreValue};

pub use hostbind_primitives::{
    AccountId, BindingError, BindingResult, Context, Entrypoint, Envelope, SlotKind, StatusCode,
};
