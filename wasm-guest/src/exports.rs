//! Guest exported functions.
//!
//! These are the functions the host calls to drive the guest:
//! - `write`: state-mutating invocation
//! - `read`: read-only invocation
//! - `binding_free`: release a result buffer after the host copied it
//!
//! `write` and `read` take the length of the context the host staged and
//! return a pointer to the length-prefixed result envelope. An invocation
//! that fails with a `BindingError` traps instead of returning.

use hostbind_primitives::{Entrypoint, Pointer};
use hostbind_sdk::{invoke, BindingConfig};

use crate::host_bridge::WasmHost;
use crate::logger;
use crate::memory;
use crate::service::StorageService;

#[no_mangle]
pub extern "C" fn write(context_len: u32) -> Pointer {
    run(Entrypoint::Write, context_len)
}

#[no_mangle]
pub extern "C" fn read(context_len: u32) -> Pointer {
    run(Entrypoint::Read, context_len)
}

/// Free a result buffer returned by `write` or `read`.
///
/// # Safety
/// - `ptr` must be a pointer returned by `write` or `read`
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn binding_free(ptr: Pointer) {
    memory::release(ptr as usize as *mut u8);
}

fn run(entry: Entrypoint, context_len: u32) -> Pointer {
    let config = BindingConfig::default();
    logger::init(&config);

    let outcome = invoke(&mut StorageService, entry, context_len, &mut WasmHost, &config)
        .and_then(|envelope| envelope.encode());
    match outcome {
        Ok(bytes) => memory::export_bytes(&bytes) as Pointer,
        Err(err) => {
            log::error!(target: "hostbind::guest", "{} aborted: {}", entry, err);
            // Trap. The host sees no envelope for this invocation.
            panic!("{} aborted: {}", entry, err)
        }
    }
}
