//! Core type aliases and constants for the hostbind binding layer.
//!
//! These types are shared by the SDK, the WASM guest, and any host-side
//! test double.

use core::fmt;

/// Offset into guest linear memory as seen by the host (wasm32 address).
pub type Pointer = u32;

/// Size of the little-endian length prefix in front of every buffer the
/// guest hands to the host.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Name of the `write` entrypoint (state-mutating invocation).
pub const WRITE_ENTRYPOINT: &str = "write";

/// Name of the `read` entrypoint (read-only invocation).
pub const READ_ENTRYPOINT: &str = "read";

/// Kind of a named state slot the host can allocate or recover.
///
/// Allocating the same name twice within one guest instance recovers the
/// existing slot. The kind is part of the slot's identity: recovering a
/// name with a different kind is an error on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKind {
    Map,
    Array,
    Uint64,
    String,
    Bool,
}

impl SlotKind {
    /// Suffix of the host import that allocates this kind
    /// (`alloc_or_recover_<suffix>`).
    pub fn import_suffix(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Array => "array",
            Self::Uint64 => "uint64",
            Self::String => "string",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.import_suffix())
    }
}

/// Which entrypoint the host invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entrypoint {
    /// `read(context_len)`: no state mutation allowed.
    Read,
    /// `write(context_len)`: state mutation allowed.
    Write,
}

impl Entrypoint {
    /// Returns true for the read-only entrypoint.
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::Read)
    }

    /// Exported symbol name of this entrypoint.
    pub fn export_name(self) -> &'static str {
        match self {
            Self::Read => READ_ENTRYPOINT,
            Self::Write => WRITE_ENTRYPOINT,
        }
    }
}

impl fmt::Display for Entrypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_kind_import_suffixes() {
        let kinds = [SlotKind::Map, SlotKind::Array, SlotKind::Uint64, SlotKind::String, SlotKind::Bool];
        let suffixes: alloc::vec::Vec<&str> = kinds.iter().map(|k| k.import_suffix()).collect();
        assert_eq!(suffixes, ["map", "array", "uint64", "string", "bool"]);
    }

    #[test]
    fn test_slot_kind_display() {
        assert_eq!(alloc::format!("{}", SlotKind::Uint64), "uint64");
    }

    #[test]
    fn test_entrypoint_read_only() {
        assert!(Entrypoint::Read.is_read_only());
        assert!(!Entrypoint::Write.is_read_only());
        assert_eq!(Entrypoint::Write.export_name(), "write");
        assert_eq!(alloc::format!("{}", Entrypoint::Read), "read");
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(LENGTH_PREFIX_LEN, core::mem::size_of::<u32>());
    }
}
