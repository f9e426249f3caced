//! Buffer layout shared by guest and host.
//!
//! Every buffer the guest hands to the host uses the length-prefixed
//! layout:
//!
//! ```text
//! [len: u32 LE][data: len bytes]
//!              ^ pointer passed to the host
//! ```
//!
//! The pointer addresses the first data byte and the host finds the length
//! in the four bytes before it. A pointer is only meaningful while the
//! owning [`LengthPrefixed`] is alive, which for arguments means "for the
//! duration of one host call".

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::LENGTH_PREFIX_LEN;

/// An owned buffer in length-prefixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthPrefixed {
    raw: Box<[u8]>,
}

impl LengthPrefixed {
    /// Copy `data` into a new length-prefixed buffer.
    pub fn new(data: &[u8]) -> Self {
        let mut raw = Vec::with_capacity(LENGTH_PREFIX_LEN + data.len());
        raw.extend_from_slice(&(data.len() as u32).to_le_bytes());
        raw.extend_from_slice(data);
        Self {
            raw: raw.into_boxed_slice(),
        }
    }

    /// Encode `text` as UTF-8 into a new length-prefixed buffer.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes())
    }

    /// A zero-filled buffer of `len` data bytes, used as the destination
    /// of a staged-buffer pull.
    pub fn zeroed(len: usize) -> Self {
        let mut raw = alloc::vec![0u8; LENGTH_PREFIX_LEN + len];
        raw[..LENGTH_PREFIX_LEN].copy_from_slice(&(len as u32).to_le_bytes());
        Self {
            raw: raw.into_boxed_slice(),
        }
    }

    /// Number of data bytes (excluding the prefix).
    pub fn len(&self) -> usize {
        self.raw.len() - LENGTH_PREFIX_LEN
    }

    /// Returns true if the buffer carries no data bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The data bytes.
    pub fn data(&self) -> &[u8] {
        &self.raw[LENGTH_PREFIX_LEN..]
    }

    /// The data bytes, mutably. The prefix is not reachable through this.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.raw[LENGTH_PREFIX_LEN..]
    }

    /// Address of the first data byte.
    pub fn data_ptr(&self) -> *const u8 {
        self.data().as_ptr()
    }

    /// Mutable address of the first data byte.
    pub fn data_mut_ptr(&mut self) -> *mut u8 {
        self.data_mut().as_mut_ptr()
    }

    /// Leak the buffer and return its data pointer.
    ///
    /// Ownership passes to whoever holds the pointer; it must come back
    /// through [`LengthPrefixed::from_raw`] exactly once to be released.
    pub fn into_raw(self) -> *mut u8 {
        let base = Box::into_raw(self.raw) as *mut u8;
        // SAFETY: the allocation is at least LENGTH_PREFIX_LEN bytes long.
        unsafe { base.add(LENGTH_PREFIX_LEN) }
    }

    /// Reclaim a buffer leaked by [`LengthPrefixed::into_raw`].
    ///
    /// # Safety
    /// `data_ptr` must have been returned by `into_raw`, its prefix must be
    /// unmodified, and it must not have been reclaimed already.
    pub unsafe fn from_raw(data_ptr: *mut u8) -> Self {
        let base = data_ptr.sub(LENGTH_PREFIX_LEN);
        let mut prefix = [0u8; LENGTH_PREFIX_LEN];
        core::ptr::copy_nonoverlapping(base, prefix.as_mut_ptr(), LENGTH_PREFIX_LEN);
        let len = u32::from_le_bytes(prefix) as usize;
        let raw = core::ptr::slice_from_raw_parts_mut(base, LENGTH_PREFIX_LEN + len);
        Self {
            raw: Box::from_raw(raw),
        }
    }
}

/// Encode text as UTF-8 bytes.
pub fn to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes as text.
///
/// Invalid sequences are replaced with U+FFFD; encoding errors surface at
/// the JSON layer, not here.
pub fn to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).as_ref().to_owned()
}
