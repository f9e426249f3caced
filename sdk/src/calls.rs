//! Typed helpers over the general host operations.
//!
//! Each helper that reads data runs the full two-step transfer: the host
//! operation stages the bytes and reports their length, then the bytes are
//! pulled into a buffer the guest allocates.

use alloc::vec::Vec;
use hostbind_primitives::{AccountId, BindingResult, Envelope, SlotKind};

use crate::host::HostBinding;
use crate::store::StoreMap;

/// Forward `text` verbatim to the host console.
pub fn log<H: HostBinding + ?Sized>(host: &mut H, text: &str) -> BindingResult<()> {
    host.console_log(text)
}

/// Allocate or recover a named slot of any kind.
pub fn alloc_or_recover<H: HostBinding + ?Sized>(host: &mut H, name: &str, kind: SlotKind) -> BindingResult<()> {
    host.alloc_or_recover(name, kind)
}

/// Allocate or recover the named map and return a fresh cached view of it.
pub fn alloc_or_recover_map<H: HostBinding + ?Sized>(host: &mut H, name: &str) -> BindingResult<StoreMap> {
    StoreMap::alloc_or_recover(host, name)
}

/// Read a named scalar value. Unset values read as empty bytes.
pub fn get_value<H: HostBinding + ?Sized>(host: &mut H, name: &str) -> BindingResult<Vec<u8>> {
    let len = host.get_value(name)?;
    host.pull_staged(len)
}

/// Write a named scalar value.
pub fn set_value<H: HostBinding + ?Sized>(host: &mut H, name: &str, value: &[u8]) -> BindingResult<()> {
    host.set_value(name, value)
}

/// Read `key` scoped to `account`. Unset values read as empty bytes.
pub fn get_account_value<H: HostBinding + ?Sized>(
    host: &mut H,
    account: &AccountId,
    key: &[u8],
) -> BindingResult<Vec<u8>> {
    let len = host.get_account_value(&account.encode()?, key)?;
    host.pull_staged(len)
}

/// Write `key` scoped to `account`.
pub fn set_account_value<H: HostBinding + ?Sized>(
    host: &mut H,
    account: &AccountId,
    key: &[u8],
    value: &[u8],
) -> BindingResult<()> {
    host.set_account_value(&account.encode()?, key, value)
}

/// Call `method` on another service's `read` entrypoint and decode its
/// result envelope.
pub fn read_service<H: HostBinding + ?Sized>(
    host: &mut H,
    service: &str,
    method: &str,
    payload: &str,
) -> BindingResult<Envelope> {
    let len = host.read_service(service, method, payload)?;
    Envelope::decode(&host.pull_staged(len)?)
}

/// Call `method` on another service's `write` entrypoint and decode its
/// result envelope.
pub fn write_service<H: HostBinding + ?Sized>(
    host: &mut H,
    service: &str,
    method: &str,
    payload: &str,
) -> BindingResult<Envelope> {
    let len = host.write_service(service, method, payload)?;
    Envelope::decode(&host.pull_staged(len)?)
}
