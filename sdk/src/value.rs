//! Typed scalar slots (`u64`, `String`, `bool`).
//!
//! A scalar slot is allocated with the host under its own kind and stores
//! its value through the named-value operations, JSON-encoded. It caches
//! the value with the same policy as [`StoreMap`](crate::StoreMap): reads
//! after the first are local, writes go straight through.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hostbind_primitives::{BindingError, BindingResult, SlotKind};

use crate::calls;
use crate::host::HostBinding;

/// A value type that can live in a scalar slot.
pub trait SlotValue: Sized + Clone + Default {
    /// Slot kind this type is allocated as.
    const KIND: SlotKind;

    fn encode(&self) -> BindingResult<Vec<u8>>;

    /// Decode stored bytes. Empty bytes (never written) decode to `Default`.
    fn decode(bytes: &[u8]) -> BindingResult<Self>;
}

macro_rules! json_slot_value {
    ($ty:ty, $kind:expr) => {
        impl SlotValue for $ty {
            const KIND: SlotKind = $kind;

            fn encode(&self) -> BindingResult<Vec<u8>> {
                serde_json::to_vec(self).map_err(|e| BindingError::Serialization(e.to_string()))
            }

            fn decode(bytes: &[u8]) -> BindingResult<Self> {
                if bytes.is_empty() {
                    return Ok(Self::default());
                }
                serde_json::from_slice(bytes).map_err(|e| BindingError::Serialization(e.to_string()))
            }
        }
    };
}

json_slot_value!(u64, SlotKind::Uint64);
json_slot_value!(String, SlotKind::String);
json_slot_value!(bool, SlotKind::Bool);

/// A named scalar slot holding a `T`.
#[derive(Debug)]
pub struct StoreValue<T: SlotValue> {
    name: String,
    cached: Option<T>,
}

pub type StoreUint64 = StoreValue<u64>;
pub type StoreString = StoreValue<String>;
pub type StoreBool = StoreValue<bool>;

impl<T: SlotValue> StoreValue<T> {
    /// Allocate the named slot on the host, or recover it if it exists.
    pub fn alloc_or_recover<H: HostBinding + ?Sized>(host: &mut H, name: &str) -> BindingResult<Self> {
        host.alloc_or_recover(name, T::KIND)?;
        Ok(Self {
            name: name.into(),
            cached: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get<H: HostBinding + ?Sized>(&mut self, host: &mut H) -> BindingResult<T> {
        if let Some(value) = &self.cached {
            return Ok(value.clone());
        }
        let value = T::decode(&calls::get_value(host, &self.name)?)?;
        self.cached = Some(value.clone());
        Ok(value)
    }

    pub fn set<H: HostBinding + ?Sized>(&mut self, host: &mut H, value: T) -> BindingResult<()> {
        calls::set_value(host, &self.name, &value.encode()?)?;
        self.cached = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, MockHost};

    #[test]
    fn test_uint64_slot() {
        let mut host = MockHost::new();
        let mut total = StoreUint64::alloc_or_recover(&mut host, "total").unwrap();
        assert_eq!(host.slot_kind("total"), Some(SlotKind::Uint64));

        assert_eq!(total.get(&mut host).unwrap(), 0);
        total.set(&mut host, 18_446_744_073_709_551_615).unwrap();
        assert_eq!(host.value("total"), Some(&b"18446744073709551615"[..]));
        assert_eq!(total.get(&mut host).unwrap(), u64::MAX);
    }

    #[test]
    fn test_string_and_bool_slots() {
        let mut host = MockHost::new();
        let mut owner = StoreString::alloc_or_recover(&mut host, "owner").unwrap();
        let mut paused = StoreBool::alloc_or_recover(&mut host, "paused").unwrap();

        owner.set(&mut host, "alice".into()).unwrap();
        paused.set(&mut host, true).unwrap();
        assert_eq!(host.value("owner"), Some(&br#""alice""#[..]));
        assert_eq!(host.value("paused"), Some(&b"true"[..]));

        let mut owner = StoreString::alloc_or_recover(&mut host, "owner").unwrap();
        assert_eq!(owner.get(&mut host).unwrap(), "alice");
    }

    #[test]
    fn test_value_cached_after_first_read() {
        let mut host = MockHost::new();
        host.set_value("total", b"5").unwrap();
        let mut total = StoreUint64::alloc_or_recover(&mut host, "total").unwrap();
        host.clear_calls();

        assert_eq!(total.get(&mut host).unwrap(), 5);
        assert_eq!(total.get(&mut host).unwrap(), 5);
        assert_eq!(
            host.calls(),
            [
                HostCall::GetValue { name: "total".into() },
                HostCall::ReadTempBuffer { len: 1 },
            ]
        );
    }

    #[test]
    fn test_corrupt_value_is_error() {
        let mut host = MockHost::new();
        host.set_value("paused", b"maybe").unwrap();
        let mut paused = StoreBool::alloc_or_recover(&mut host, "paused").unwrap();
        assert!(matches!(paused.get(&mut host), Err(BindingError::Serialization(_))));
    }

    #[test]
    fn test_kind_is_part_of_identity() {
        let mut host = MockHost::new();
        StoreBool::alloc_or_recover(&mut host, "flag").unwrap();
        assert!(StoreUint64::alloc_or_recover(&mut host, "flag").is_err());
    }
}
