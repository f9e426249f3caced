//! Store maps: named keyspaces with a local write-through cache.
//!
//! A `StoreMap` fronts the host's map operations:
//!
//! - `get` answers from the cache when it can. On a miss it runs the
//!   two-step transfer (`get_from_map` for the length, then a pull into a
//!   buffer the guest allocates), caches the bytes and returns them.
//! - `set` updates the cache and immediately forwards the write to the
//!   host. Nothing is batched or deferred.
//!
//! The cache lives as long as the `StoreMap` value, which is created inside
//! an invocation and dropped with it. Writes to the same keyspace made by
//! the host or by another `StoreMap` over the same name are not visible to
//! keys this instance has already cached.
//!
//! Keys the host has no value for read as empty bytes; absence and an
//! empty value are indistinguishable.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use hostbind_primitives::{BindingResult, SlotKind};

use crate::host::HostBinding;

/// A named map slot with a write-through cache.
#[derive(Debug)]
pub struct StoreMap {
    name: String,
    cache: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl StoreMap {
    /// Allocate the named map on the host, or recover it if it exists.
    pub fn alloc_or_recover<H: HostBinding + ?Sized>(host: &mut H, name: &str) -> BindingResult<Self> {
        host.alloc_or_recover(name, SlotKind::Map)?;
        log::debug!(target: "hostbind::store", "map {:?} ready", name);
        Ok(Self {
            name: name.into(),
            cache: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the value stored under `key`.
    pub fn get<H: HostBinding + ?Sized>(&mut self, host: &mut H, key: &[u8]) -> BindingResult<Vec<u8>> {
        if let Some(value) = self.cache.get(key) {
            log::trace!(target: "hostbind::store", "map {:?}: cache hit", self.name);
            return Ok(value.clone());
        }

        let len = host.get_from_map(&self.name, key)?;
        let value = host.pull_staged(len)?;
        log::trace!(target: "hostbind::store", "map {:?}: fetched {} bytes", self.name, len);

        self.cache.insert(key.to_vec(), value.clone());
        Ok(value)
    }

    /// Store `value` under `key`, in the cache and on the host.
    ///
    /// If the host rejects the write, the cache entry is restored to what
    /// it was before the call.
    pub fn set<H: HostBinding + ?Sized>(&mut self, host: &mut H, key: &[u8], value: &[u8]) -> BindingResult<()> {
        let previous = self.cache.insert(key.to_vec(), value.to_vec());

        if let Err(err) = host.set_to_map(&self.name, key, value) {
            match previous {
                Some(previous) => self.cache.insert(key.to_vec(), previous),
                None => self.cache.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    /// Returns true if `key` is answered from the cache.
    pub fn is_cached(&self, key: &[u8]) -> bool {
        self.cache.contains_key(key)
    }

    /// Number of cached keys.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
