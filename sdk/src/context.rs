//! Loading the execution context staged by the host.

use hostbind_primitives::{BindingResult, Context};

use crate::host::HostBinding;

/// Pull the `context_len` staged context bytes and decode them.
///
/// Called once at the start of every invocation. A malformed context is
/// returned as an error and must abort the invocation.
pub fn load_context<H: HostBinding + ?Sized>(host: &mut H, context_len: u32) -> BindingResult<Context> {
    let bytes = host.pull_staged(context_len)?;
    Context::decode(&bytes)
}
