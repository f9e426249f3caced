//! Host function imports.
//!
//! All host functions are imported under the `binding` WASM module, named
//! `BindingSDK.<op>` for general operations and `BindingStore.<op>` for map
//! operations.
//!
//! Every pointer argument addresses the data of a length-prefixed buffer
//! (see [`hostbind_primitives::buffer`]). Operations that produce data
//! stage it in the host and return its length; the guest then calls
//! `read_temp_buffer` with a destination of exactly that length.

use hostbind_primitives::Pointer;

#[link(wasm_import_module = "binding")]
extern "C" {
    // ── Console ──

    #[link_name = "BindingSDK.console_log"]
    pub fn console_log(message_ptr: Pointer);

    // ── Staged buffer ──

    /// Copy the staged buffer to `dest_ptr` and clear it.
    #[link_name = "BindingSDK.read_temp_buffer"]
    pub fn read_temp_buffer(dest_ptr: Pointer);

    // ── Slots ──

    #[link_name = "BindingSDK.alloc_or_recover_map"]
    pub fn alloc_or_recover_map(name_ptr: Pointer);

    #[link_name = "BindingSDK.alloc_or_recover_array"]
    pub fn alloc_or_recover_array(name_ptr: Pointer);

    #[link_name = "BindingSDK.alloc_or_recover_uint64"]
    pub fn alloc_or_recover_uint64(name_ptr: Pointer);

    #[link_name = "BindingSDK.alloc_or_recover_string"]
    pub fn alloc_or_recover_string(name_ptr: Pointer);

    #[link_name = "BindingSDK.alloc_or_recover_bool"]
    pub fn alloc_or_recover_bool(name_ptr: Pointer);

    // ── Values ──

    /// Stage the named value; returns its length.
    #[link_name = "BindingSDK.get_value"]
    pub fn get_value(name_ptr: Pointer) -> u32;

    #[link_name = "BindingSDK.set_value"]
    pub fn set_value(name_ptr: Pointer, value_ptr: Pointer);

    /// Stage an account-scoped value; returns its length.
    #[link_name = "BindingSDK.get_account_value"]
    pub fn get_account_value(account_ptr: Pointer, key_ptr: Pointer) -> u32;

    #[link_name = "BindingSDK.set_account_value"]
    pub fn set_account_value(account_ptr: Pointer, key_ptr: Pointer, value_ptr: Pointer);

    // ── Cross-service calls ──

    /// Invoke `read` on another service; stages its envelope and returns
    /// the length.
    #[link_name = "BindingSDK.read"]
    pub fn read(service_ptr: Pointer, method_ptr: Pointer, payload_ptr: Pointer) -> u32;

    /// Invoke `write` on another service; stages its envelope and returns
    /// the length.
    #[link_name = "BindingSDK.write"]
    pub fn write(service_ptr: Pointer, method_ptr: Pointer, payload_ptr: Pointer) -> u32;

    // ── Maps ──

    /// Stage the value of `key` in the named map; returns its length
    /// (zero for a missing key).
    #[link_name = "BindingStore.get_from_map"]
    pub fn get_from_map(name_ptr: Pointer, key_ptr: Pointer) -> u32;

    #[link_name = "BindingStore.set_to_map"]
    pub fn set_to_map(name_ptr: Pointer, key_ptr: Pointer, value_ptr: Pointer);
}
