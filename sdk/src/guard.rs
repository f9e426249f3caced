//! Read-only view over a host binding.
//!
//! A `read` invocation must not mutate state. `ReadOnlyHost` forwards every
//! query to the wrapped host and rejects every mutating operation with
//! [`BindingError::ReadOnly`] before it reaches the host. Slot allocation
//! and cross-service reads are queries and pass through.

use hostbind_primitives::{BindingError, BindingResult, SlotKind};

use crate::host::HostBinding;

/// Host wrapper that refuses state mutation.
pub struct ReadOnlyHost<'a, H: HostBinding + ?Sized> {
    inner: &'a mut H,
}

impl<'a, H: HostBinding + ?Sized> ReadOnlyHost<'a, H> {
    pub fn new(inner: &'a mut H) -> Self {
        Self { inner }
    }
}

fn rejected<T>(operation: &'static str) -> BindingResult<T> {
    log::warn!(target: "hostbind::guard", "rejected {} during read invocation", operation);
    Err(BindingError::ReadOnly { operation })
}

impl<H: HostBinding + ?Sized> HostBinding for ReadOnlyHost<'_, H> {
    fn console_log(&mut self, message: &str) -> BindingResult<()> {
        self.inner.console_log(message)
    }

    fn read_temp_buffer(&mut self, dest: &mut [u8]) -> BindingResult<()> {
        self.inner.read_temp_buffer(dest)
    }

    fn alloc_or_recover(&mut self, name: &str, kind: SlotKind) -> BindingResult<()> {
        self.inner.alloc_or_recover(name, kind)
    }

    fn get_value(&mut self, name: &str) -> BindingResult<u32> {
        self.inner.get_value(name)
    }

    fn set_value(&mut self, _name: &str, _value: &[u8]) -> BindingResult<()> {
        rejected("set_value")
    }

    fn get_account_value(&mut self, account: &[u8], key: &[u8]) -> BindingResult<u32> {
        self.inner.get_account_value(account, key)
    }

    fn set_account_value(&mut self, _account: &[u8], _key: &[u8], _value: &[u8]) -> BindingResult<()> {
        rejected("set_account_value")
    }

    fn read_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32> {
        self.inner.read_service(service, method, payload)
    }

    fn write_service(&mut self, _service: &str, _method: &str, _payload: &str) -> BindingResult<u32> {
        rejected("write_service")
    }

    fn get_from_map(&mut self, name: &str, key: &[u8]) -> BindingResult<u32> {
        self.inner.get_from_map(name, key)
    }

    fn set_to_map(&mut self, _name: &str, _key: &[u8], _value: &[u8]) -> BindingResult<()> {
        rejected("set_to_map")
    }
}
