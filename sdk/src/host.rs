//! Host binding interface: the capability set the host exposes to the guest.
//!
//! The `HostBinding` trait decouples the binding layer from the execution
//! environment:
//!
//! - In WASM: implemented by calling imported host functions
//! - In tests: implemented via `MockHost` (in-memory state, recorded calls)
//!
//! Every operation is a single blocking call. Operations that produce data
//! do not return it directly: the host stages the bytes and returns their
//! length, and the guest then allocates a destination of exactly that size
//! and pulls the bytes with [`HostBinding::read_temp_buffer`]. The two
//! steps always come as a pair; [`HostBinding::pull_staged`] performs the
//! second one.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use hostbind_primitives::{BindingError, BindingResult, Context, Envelope, SlotKind};

/// Abstraction over the host environment.
pub trait HostBinding {
    /// Write a message to the host console.
    fn console_log(&mut self, message: &str) -> BindingResult<()>;

    /// Copy the currently staged buffer into `dest` and clear it.
    ///
    /// `dest` is allocated by the guest and must be exactly as long as the
    /// length the staging operation returned.
    fn read_temp_buffer(&mut self, dest: &mut [u8]) -> BindingResult<()>;

    /// Allocate the named slot, or recover it if this guest instance has
    /// already allocated it.
    fn alloc_or_recover(&mut self, name: &str, kind: SlotKind) -> BindingResult<()>;

    /// Stage the named scalar value; returns its length.
    fn get_value(&mut self, name: &str) -> BindingResult<u32>;

    /// Store the named scalar value.
    fn set_value(&mut self, name: &str, value: &[u8]) -> BindingResult<()>;

    /// Stage the value of `key` scoped to the encoded account; returns its length.
    fn get_account_value(&mut self, account: &[u8], key: &[u8]) -> BindingResult<u32>;

    /// Store the value of `key` scoped to the encoded account.
    fn set_account_value(&mut self, account: &[u8], key: &[u8], value: &[u8]) -> BindingResult<()>;

    /// Invoke another service's `read` entrypoint. The callee's result
    /// envelope is staged; returns its length.
    fn read_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32>;

    /// Invoke another service's `write` entrypoint. The callee's result
    /// envelope is staged; returns its length.
    fn write_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32>;

    /// Stage the value of `key` in the named map; returns its length.
    ///
    /// A key the host has no value for stages an empty buffer.
    fn get_from_map(&mut self, name: &str, key: &[u8]) -> BindingResult<u32>;

    /// Store `value` under `key` in the named map.
    fn set_to_map(&mut self, name: &str, key: &[u8], value: &[u8]) -> BindingResult<()>;

    /// Pull `len` staged bytes into fresh guest memory.
    fn pull_staged(&mut self, len: u32) -> BindingResult<Vec<u8>> {
        let mut buf = alloc::vec![0u8; len as usize];
        self.read_temp_buffer(&mut buf)?;
        Ok(buf)
    }
}

// ── MockHost: in-memory host for testing ──

/// One recorded call against a [`MockHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ConsoleLog { message: String },
    ReadTempBuffer { len: usize },
    AllocOrRecover { name: String, kind: SlotKind },
    GetValue { name: String },
    SetValue { name: String, value: Vec<u8> },
    GetAccountValue { account: Vec<u8>, key: Vec<u8> },
    SetAccountValue { account: Vec<u8>, key: Vec<u8>, value: Vec<u8> },
    ReadService { service: String, method: String, payload: String },
    WriteService { service: String, method: String, payload: String },
    GetFromMap { name: String, key: Vec<u8> },
    SetToMap { name: String, key: Vec<u8>, value: Vec<u8> },
}

impl HostCall {
    /// Returns true for the two map operations.
    pub fn is_map_op(&self) -> bool {
        matches!(self, Self::GetFromMap { .. } | Self::SetToMap { .. })
    }

    /// Returns true for operations that mutate host state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::SetValue { .. }
                | Self::SetAccountValue { .. }
                | Self::WriteService { .. }
                | Self::SetToMap { .. }
        )
    }
}

/// In-memory host implementation for deterministic testing.
///
/// Host state outlives individual invocations, so the same `MockHost` can
/// drive a `write` followed by a `read` the way a real host would. Every
/// call is appended to a call log for assertions.
#[derive(Debug, Default)]
pub struct MockHost {
    /// Buffer staged for the next `read_temp_buffer`.
    staged: Vec<u8>,
    /// Allocated slots and their kinds.
    slots: BTreeMap<String, SlotKind>,
    /// Map slot contents.
    maps: BTreeMap<String, BTreeMap<Vec<u8>, Vec<u8>>>,
    /// Named scalar values.
    values: BTreeMap<String, Vec<u8>>,
    /// Account-scoped values keyed by (encoded account, key).
    account_values: BTreeMap<(Vec<u8>, Vec<u8>), Vec<u8>>,
    /// Canned responses of other services keyed by (service, method).
    services: BTreeMap<(String, String), Envelope>,
    /// Recorded calls.
    calls: Vec<HostCall>,
    /// Console output.
    logs: Vec<String>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage raw bytes as if the host prepared them; returns their length.
    pub fn stage(&mut self, bytes: Vec<u8>) -> u32 {
        let len = bytes.len() as u32;
        self.staged = bytes;
        len
    }

    /// Stage an encoded context ahead of an entrypoint call; returns the
    /// context length to pass to the entrypoint.
    pub fn stage_context(&mut self, context: &Context) -> BindingResult<u32> {
        Ok(self.stage(context.encode()?))
    }

    /// Currently staged bytes.
    pub fn staged(&self) -> &[u8] {
        &self.staged
    }

    /// Write a map entry directly, bypassing the guest (an external mutation).
    pub fn insert_map_entry(&mut self, name: &str, key: &[u8], value: &[u8]) {
        self.slots.entry(name.into()).or_insert(SlotKind::Map);
        self.maps
            .entry(name.into())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
    }

    /// Read a map entry for assertions.
    pub fn map_entry(&self, name: &str, key: &[u8]) -> Option<&[u8]> {
        self.maps.get(name)?.get(key).map(Vec::as_slice)
    }

    /// Read a named scalar value for assertions.
    pub fn value(&self, name: &str) -> Option<&[u8]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Read an account-scoped value for assertions.
    pub fn account_value(&self, account: &[u8], key: &[u8]) -> Option<&[u8]> {
        self.account_values
            .get(&(account.to_vec(), key.to_vec()))
            .map(Vec::as_slice)
    }

    /// Kind of an allocated slot.
    pub fn slot_kind(&self, name: &str) -> Option<SlotKind> {
        self.slots.get(name).copied()
    }

    /// Register the envelope another service answers `method` with.
    pub fn register_service(&mut self, service: &str, method: &str, response: Envelope) {
        self.services.insert((service.into(), method.into()), response);
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Forget recorded calls (state is kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded map operations.
    pub fn map_op_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_map_op()).count()
    }

    /// Console output, oldest first.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    fn require_map(&self, name: &str) -> BindingResult<()> {
        match self.slots.get(name) {
            Some(SlotKind::Map) => Ok(()),
            Some(other) => Err(BindingError::SlotKindMismatch {
                name: name.into(),
                existing: *other,
                requested: SlotKind::Map,
            }),
            None => Err(BindingError::UnknownSlot { name: name.into() }),
        }
    }

    fn stage_service_response(&mut self, service: &str, method: &str) -> BindingResult<u32> {
        let response = self
            .services
            .get(&(String::from(service), String::from(method)))
            .cloned()
            .unwrap_or_else(Envelope::not_found);
        Ok(self.stage(response.encode()?))
    }
}

impl HostBinding for MockHost {
    fn console_log(&mut self, message: &str) -> BindingResult<()> {
        self.calls.push(HostCall::ConsoleLog { message: message.into() });
        self.logs.push(message.into());
        Ok(())
    }

    fn read_temp_buffer(&mut self, dest: &mut [u8]) -> BindingResult<()> {
        self.calls.push(HostCall::ReadTempBuffer { len: dest.len() });
        if dest.len() != self.staged.len() {
            return Err(BindingError::BufferLength {
                staged: self.staged.len(),
                requested: dest.len(),
            });
        }
        dest.copy_from_slice(&self.staged);
        self.staged.clear();
        Ok(())
    }

    fn alloc_or_recover(&mut self, name: &str, kind: SlotKind) -> BindingResult<()> {
        self.calls.push(HostCall::AllocOrRecover { name: name.into(), kind });
        match self.slots.get(name) {
            Some(existing) if *existing != kind => Err(BindingError::SlotKindMismatch {
                name: name.into(),
                existing: *existing,
                requested: kind,
            }),
            Some(_) => Ok(()),
            None => {
                self.slots.insert(name.into(), kind);
                if kind == SlotKind::Map {
                    self.maps.entry(name.into()).or_default();
                }
                Ok(())
            }
        }
    }

    fn get_value(&mut self, name: &str) -> BindingResult<u32> {
        self.calls.push(HostCall::GetValue { name: name.into() });
        let value = self.values.get(name).cloned().unwrap_or_default();
        Ok(self.stage(value))
    }

    fn set_value(&mut self, name: &str, value: &[u8]) -> BindingResult<()> {
        self.calls.push(HostCall::SetValue {
            name: name.into(),
            value: value.to_vec(),
        });
        self.values.insert(name.into(), value.to_vec());
        Ok(())
    }

    fn get_account_value(&mut self, account: &[u8], key: &[u8]) -> BindingResult<u32> {
        self.calls.push(HostCall::GetAccountValue {
            account: account.to_vec(),
            key: key.to_vec(),
        });
        let value = self
            .account_values
            .get(&(account.to_vec(), key.to_vec()))
            .cloned()
            .unwrap_or_default();
        Ok(self.stage(value))
    }

    fn set_account_value(&mut self, account: &[u8], key: &[u8], value: &[u8]) -> BindingResult<()> {
        self.calls.push(HostCall::SetAccountValue {
            account: account.to_vec(),
            key: key.to_vec(),
            value: value.to_vec(),
        });
        self.account_values
            .insert((account.to_vec(), key.to_vec()), value.to_vec());
        Ok(())
    }

    fn read_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32> {
        self.calls.push(HostCall::ReadService {
            service: service.into(),
            method: method.into(),
            payload: payload.into(),
        });
        self.stage_service_response(service, method)
    }

    fn write_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32> {
        self.calls.push(HostCall::WriteService {
            service: service.into(),
            method: method.into(),
            payload: payload.into(),
        });
        self.stage_service_response(service, method)
    }

    fn get_from_map(&mut self, name: &str, key: &[u8]) -> BindingResult<u32> {
        self.calls.push(HostCall::GetFromMap {
            name: name.into(),
            key: key.to_vec(),
        });
        self.require_map(name)?;
        let value = self.map_entry(name, key).map(<[u8]>::to_vec).unwrap_or_default();
        Ok(self.stage(value))
    }

    fn set_to_map(&mut self, name: &str, key: &[u8], value: &[u8]) -> BindingResult<()> {
        self.calls.push(HostCall::SetToMap {
            name: name.into(),
            key: key.to_vec(),
            value: value.to_vec(),
        });
        self.require_map(name)?;
        self.maps
            .entry(name.into())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
