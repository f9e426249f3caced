//! Storage service: keeps one value under a fixed key.
//!
//! - `write` / `set_storage`: store the payload, answer `"key"`
//! - `read` / `get_storage`: answer the stored value (`""` if never set)
//! - anything else: `404 NotFound`

use hostbind_primitives::{to_bytes, to_text};
use hostbind_sdk::{BindingResult, Context, Entrypoint, Envelope, Handler, HostBinding, Service, StoreMap};

/// Map the service keeps its value in.
pub const STORAGE_MAP: &str = "storage-map";

/// Key the value is stored under.
pub const STORAGE_KEY: &str = "key";

#[derive(Debug, Default)]
pub struct StorageService;

impl StorageService {
    fn set_storage(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        let mut map = StoreMap::alloc_or_recover(host, STORAGE_MAP)?;
        map.set(host, &to_bytes(STORAGE_KEY), &to_bytes(ctx.service_payload()))?;
        Ok(Envelope::ok(STORAGE_KEY))
    }

    fn get_storage(&mut self, _ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        let mut map = StoreMap::alloc_or_recover(host, STORAGE_MAP)?;
        let value = map.get(host, &to_bytes(STORAGE_KEY))?;
        Ok(Envelope::ok(to_text(&value)))
    }
}

impl Service for StorageService {
    fn route(entry: Entrypoint, method: &str) -> Option<Handler<Self>> {
        match (entry, method) {
            (Entrypoint::Write, "set_storage") => Some(StorageService::set_storage as Handler<Self>),
            (Entrypoint::Read, "get_storage") => Some(StorageService::get_storage as Handler<Self>),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostbind_sdk::{invoke, BindingConfig, HostCall, MockHost};

    fn call(host: &mut MockHost, entry: Entrypoint, method: &str, payload: &str) -> Vec<u8> {
        let ctx = Context::builder()
            .service_name("storage")
            .service_method(method)
            .service_payload(payload)
            .build();
        let len = host.stage_context(&ctx).unwrap();
        invoke(&mut StorageService, entry, len, host, &BindingConfig::default())
            .unwrap()
            .encode()
            .unwrap()
    }

    #[test]
    fn test_set_then_get_storage() {
        let mut host = MockHost::new();

        let out = call(&mut host, Entrypoint::Write, "set_storage", "hello world");
        assert_eq!(out, br#"{"success":{"data":"key"}}"#.to_vec());
        assert_eq!(host.map_entry(STORAGE_MAP, b"key"), Some(&b"hello world"[..]));

        let out = call(&mut host, Entrypoint::Read, "get_storage", "");
        assert_eq!(out, br#"{"success":{"data":"hello world"}}"#.to_vec());
    }

    #[test]
    fn test_get_storage_before_set() {
        let mut host = MockHost::new();
        let out = call(&mut host, Entrypoint::Read, "get_storage", "");
        assert_eq!(out, br#"{"success":{"data":""}}"#.to_vec());
    }

    #[test]
    fn test_get_storage_reads_host_once() {
        let mut host = MockHost::new();
        call(&mut host, Entrypoint::Write, "set_storage", "v");
        host.clear_calls();

        call(&mut host, Entrypoint::Read, "get_storage", "");
        let ops: Vec<_> = host.calls().iter().filter(|c| c.is_map_op()).collect();
        assert_eq!(
            ops,
            [&HostCall::GetFromMap {
                name: STORAGE_MAP.into(),
                key: b"key".to_vec(),
            }]
        );
    }

    #[test]
    fn test_unknown_methods_not_found() {
        let mut host = MockHost::new();
        let not_found = br#"{"error":{"message":"NotFound","code":404}}"#.to_vec();

        assert_eq!(call(&mut host, Entrypoint::Write, "get_storage", ""), not_found);
        assert_eq!(call(&mut host, Entrypoint::Read, "set_storage", "x"), not_found);
        assert_eq!(call(&mut host, Entrypoint::Write, "clear", ""), not_found);
        assert_eq!(host.map_op_count(), 0);
    }

    #[test]
    fn test_payload_is_opaque() {
        let mut host = MockHost::new();
        let payload = r#"{"nested":"json","quote":"\""}"#;
        call(&mut host, Entrypoint::Write, "set_storage", payload);

        let out = call(&mut host, Entrypoint::Read, "get_storage", "");
        let env: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(env["success"]["data"], payload);
    }
}
