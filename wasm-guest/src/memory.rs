//! Pointer marshaling between guest memory and the host.
//!
//! Arguments are copied into guest-owned length-prefixed buffers that live
//! for exactly one host call. Results handed back from an entrypoint are
//! leaked and stay valid until the host releases them with
//! `binding_free`.
//!
//! Addresses are raw pointers here; the conversion to the host's 32-bit
//! [`Pointer`] happens at the import and export boundary.

use hostbind_primitives::{LengthPrefixed, Pointer};

/// A guest-owned argument buffer for one host call.
pub struct HostArg(LengthPrefixed);

impl HostArg {
    /// Copy `bytes` into an argument buffer.
    pub fn bytes(bytes: &[u8]) -> Self {
        Self(LengthPrefixed::new(bytes))
    }

    /// Copy the UTF-8 encoding of `text` into an argument buffer.
    pub fn string(text: &str) -> Self {
        Self(LengthPrefixed::from_text(text))
    }

    /// Address of the first data byte. Valid while `self` is alive.
    pub fn as_ptr(&self) -> *const u8 {
        self.0.data_ptr()
    }

    /// [`HostArg::as_ptr`] as the host sees it.
    pub fn ptr(&self) -> Pointer {
        self.as_ptr() as Pointer
    }
}

/// Hand `bytes` to the host as a result buffer.
///
/// The buffer is leaked; the host must release it with `binding_free`
/// after copying it out.
pub fn export_bytes(bytes: &[u8]) -> *mut u8 {
    LengthPrefixed::new(bytes).into_raw()
}

/// Release a result buffer returned by [`export_bytes`]. Null is ignored.
///
/// # Safety
/// `ptr` must have come from [`export_bytes`] and must not have been
/// released before.
pub unsafe fn release(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }
    drop(LengthPrefixed::from_raw(ptr));
}
