//! `hostbind-wasm-guest`: WASM cdylib running the storage service on the
//! hostbind binding layer.
//!
//! This crate compiles to a `.wasm` artifact that exports:
//!
//! - `write(context_len) -> ptr`: state-mutating invocation
//! - `read(context_len) -> ptr`: read-only invocation
//! - `binding_free(ptr)`: release a result buffer
//!
//! Host functions are imported under the `binding` WASM module.
//!
//! The imports, the bridge over them and the exports are compiled for
//! `wasm32` only. Pointer marshaling and the service logic build natively
//! and are tested against `MockHost`.

pub mod service;
pub mod logger;
pub mod memory;

#[cfg(target_arch = "wasm32")]
mod imports;
#[cfg(target_arch = "wasm32")]
pub mod host_bridge;
#[cfg(target_arch = "wasm32")]
mod exports;

pub use service::{StorageService, STORAGE_KEY, STORAGE_MAP};

// Re-export the exported functions so the linker sees them.
#[cfg(target_arch = "wasm32")]
pub use exports::{binding_free, read, write};
