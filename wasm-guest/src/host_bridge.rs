//! WASM host bridge: implements `HostBinding` by calling imported functions.
//!
//! Each method copies its arguments into length-prefixed buffers, calls the
//! import while those buffers are alive and returns the host's answer. The
//! imports have no error channel. A host that rejects an operation traps
//! the instance, so every method here returns `Ok`.

use hostbind_primitives::{BindingResult, LengthPrefixed, Pointer, SlotKind};
use hostbind_sdk::HostBinding;

use crate::imports;
use crate::memory::HostArg;

/// Bridges `HostBinding` to the imported host functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct WasmHost;

impl HostBinding for WasmHost {
    fn console_log(&mut self, message: &str) -> BindingResult<()> {
        let message = HostArg::string(message);
        unsafe { imports::console_log(message.ptr()) };
        Ok(())
    }

    fn read_temp_buffer(&mut self, dest: &mut [u8]) -> BindingResult<()> {
        // The destination carries the same length prefix as every other
        // buffer, so the host can check it against what it staged.
        let mut buf = LengthPrefixed::zeroed(dest.len());
        unsafe { imports::read_temp_buffer(buf.data_mut_ptr() as Pointer) };
        dest.copy_from_slice(buf.data());
        Ok(())
    }

    fn alloc_or_recover(&mut self, name: &str, kind: SlotKind) -> BindingResult<()> {
        let name = HostArg::string(name);
        unsafe {
            match kind {
                SlotKind::Map => imports::alloc_or_recover_map(name.ptr()),
                SlotKind::Array => imports::alloc_or_recover_array(name.ptr()),
                SlotKind::Uint64 => imports::alloc_or_recover_uint64(name.ptr()),
                SlotKind::String => imports::alloc_or_recover_string(name.ptr()),
                SlotKind::Bool => imports::alloc_or_recover_bool(name.ptr()),
            }
        }
        Ok(())
    }

    fn get_value(&mut self, name: &str) -> BindingResult<u32> {
        let name = HostArg::string(name);
        Ok(unsafe { imports::get_value(name.ptr()) })
    }

    fn set_value(&mut self, name: &str, value: &[u8]) -> BindingResult<()> {
        let name = HostArg::string(name);
        let value = HostArg::bytes(value);
        unsafe { imports::set_value(name.ptr(), value.ptr()) };
        Ok(())
    }

    fn get_account_value(&mut self, account: &[u8], key: &[u8]) -> BindingResult<u32> {
        let account = HostArg::bytes(account);
        let key = HostArg::bytes(key);
        Ok(unsafe { imports::get_account_value(account.ptr(), key.ptr()) })
    }

    fn set_account_value(&mut self, account: &[u8], key: &[u8], value: &[u8]) -> BindingResult<()> {
        let account = HostArg::bytes(account);
        let key = HostArg::bytes(key);
        let value = HostArg::bytes(value);
        unsafe { imports::set_account_value(account.ptr(), key.ptr(), value.ptr()) };
        Ok(())
    }

    fn read_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32> {
        let service = HostArg::string(service);
        let method = HostArg::string(method);
        let payload = HostArg::string(payload);
        Ok(unsafe { imports::read(service.ptr(), method.ptr(), payload.ptr()) })
    }

    fn write_service(&mut self, service: &str, method: &str, payload: &str) -> BindingResult<u32> {
        let service = HostArg::string(service);
        let method = HostArg::string(method);
        let payload = HostArg::string(payload);
        Ok(unsafe { imports::write(service.ptr(), method.ptr(), payload.ptr()) })
    }

    fn get_from_map(&mut self, name: &str, key: &[u8]) -> BindingResult<u32> {
        let name = HostArg::string(name);
        let key = HostArg::bytes(key);
        Ok(unsafe { imports::get_from_map(name.ptr(), key.ptr()) })
    }

    fn set_to_map(&mut self, name: &str, key: &[u8], value: &[u8]) -> BindingResult<()> {
        let name = HostArg::string(name);
        let key = HostArg::bytes(key);
        let value = HostArg::bytes(value);
        unsafe { imports::set_to_map(name.ptr(), key.ptr(), value.ptr()) };
        Ok(())
    }
}
