//! Entrypoint dispatch.
//!
//! Both entrypoints follow the same lifecycle:
//!
//! 1. Pull the staged context and decode it (fatal on failure)
//! 2. Route `service_method` to a handler for this entrypoint
//! 3. Unknown method: `404 NotFound` envelope, no store access
//! 4. Run the handler against the host, behind a [`ReadOnlyHost`] for `read`
//!
//! An `Err` returned from [`invoke`] means the invocation must abort without
//! an envelope. Outcomes the caller should see are `Ok(Envelope)`.

use hostbind_primitives::{BindingResult, Context, Entrypoint, Envelope};

use crate::config::BindingConfig;
use crate::context::load_context;
use crate::guard::ReadOnlyHost;
use crate::host::HostBinding;

/// A method handler.
pub type Handler<S> = fn(&mut S, &mut Context, &mut dyn HostBinding) -> BindingResult<Envelope>;

/// A service built on the binding layer.
pub trait Service {
    /// Handler for `method` on `entry`, or `None` if the service does not
    /// expose it there.
    fn route(entry: Entrypoint, method: &str) -> Option<Handler<Self>>
    where
        Self: Sized;
}

/// Run one invocation of `entry`.
///
/// `context_len` is the length the host passed to the entrypoint; the
/// context bytes themselves are waiting in the host's staging buffer.
pub fn invoke<S: Service>(
    service: &mut S,
    entry: Entrypoint,
    context_len: u32,
    host: &mut dyn HostBinding,
    config: &BindingConfig,
) -> BindingResult<Envelope> {
    let mut context = load_context(host, context_len)?;

    if config.log_invocations {
        log::debug!(
            target: "hostbind::service",
            "{} {}::{}",
            entry,
            context.service_name(),
            context.service_method()
        );
    }

    let Some(handler) = S::route(entry, context.service_method()) else {
        log::warn!(
            target: "hostbind::service",
            "no {} method {:?} on service {:?}",
            entry,
            context.service_method(),
            context.service_name()
        );
        return Ok(Envelope::not_found());
    };

    let envelope = if entry.is_read_only() && config.enforce_read_only {
        let mut guarded = ReadOnlyHost::new(host);
        handler(service, &mut context, &mut guarded)?
    } else {
        handler(service, &mut context, host)?
    };

    if config.log_invocations {
        match (envelope.code(), envelope.status_code()) {
            (_, Some(status)) => log::debug!(target: "hostbind::service", "{} answered {}", entry, status),
            (Some(code), None) => log::debug!(target: "hostbind::service", "{} answered code {}", entry, code),
            (None, None) => {}
        }
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use crate::store::StoreMap;
    use hostbind_primitives::{BindingError, StatusCode};

    #[derive(Default)]
    struct Notes {
        handled: u32,
    }

    impl Notes {
        fn put(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
            self.handled += 1;
            let mut notes = StoreMap::alloc_or_recover(host, "notes")?;
            notes.set(host, ctx.nonce().as_bytes(), ctx.service_payload().as_bytes())?;
            Ok(Envelope::ok(ctx.nonce()))
        }

        fn fetch(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
            self.handled += 1;
            let mut notes = StoreMap::alloc_or_recover(host, "notes")?;
            let value = notes.get(host, ctx.service_payload().as_bytes())?;
            if value.is_empty() {
                return Ok(Envelope::status(StatusCode::BadRequest));
            }
            Ok(Envelope::ok(hostbind_primitives::to_text(&value)))
        }

        fn sneaky(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
            self.put(ctx, host)
        }
    }

    impl Service for Notes {
        fn route(entry: Entrypoint, method: &str) -> Option<Handler<Self>> {
            match (entry, method) {
                (Entrypoint::Write, "put") => Some(Notes::put as Handler<Self>),
                (Entrypoint::Read, "fetch") => Some(Notes::fetch as Handler<Self>),
                (Entrypoint::Read, "sneaky") => Some(Notes::sneaky as Handler<Self>),
                _ => None,
            }
        }
    }

    fn call(host: &mut MockHost, entry: Entrypoint, method: &str, nonce: &str, payload: &str) -> BindingResult<Envelope> {
        let ctx = Context::builder()
            .nonce(nonce)
            .service_name("notes")
            .service_method(method)
            .service_payload(payload)
            .build();
        let len = host.stage_context(&ctx)?;
        invoke(&mut Notes::default(), entry, len, host, &BindingConfig::default())
    }

    #[test]
    fn test_write_then_read() {
        let mut host = MockHost::new();
        let env = call(&mut host, Entrypoint::Write, "put", "n1", "hello").unwrap();
        assert_eq!(env, Envelope::ok("n1"));

        let env = call(&mut host, Entrypoint::Read, "fetch", "", "n1").unwrap();
        assert_eq!(env, Envelope::ok("hello"));

        let env = call(&mut host, Entrypoint::Read, "fetch", "", "n2").unwrap();
        assert_eq!(env.code(), Some(400));
    }

    #[test]
    fn test_unknown_method_is_not_found_without_store_access() {
        let mut host = MockHost::new();
        let env = call(&mut host, Entrypoint::Write, "delete", "", "").unwrap();
        assert_eq!(env.encode().unwrap(), br#"{"error":{"message":"NotFound","code":404}}"#.to_vec());
        assert_eq!(host.map_op_count(), 0);
        assert!(host.slot_kind("notes").is_none());
    }

    #[test]
    fn test_method_routed_per_entrypoint() {
        let mut host = MockHost::new();
        // `put` exists only on write.
        let env = call(&mut host, Entrypoint::Read, "put", "n1", "x").unwrap();
        assert_eq!(env, Envelope::not_found());
        assert_eq!(host.map_op_count(), 0);
    }

    #[test]
    fn test_read_cannot_mutate() {
        let mut host = MockHost::new();
        let err = call(&mut host, Entrypoint::Read, "sneaky", "n1", "x").unwrap_err();
        assert_eq!(err, BindingError::ReadOnly { operation: "set_to_map" });
        assert_eq!(host.map_entry("notes", b"n1"), None);
    }

    #[test]
    fn test_read_guard_can_be_disabled() {
        let mut host = MockHost::new();
        let ctx = Context::builder().nonce("n1").service_method("sneaky").service_payload("x").build();
        let len = host.stage_context(&ctx).unwrap();
        let config = BindingConfig {
            enforce_read_only: false,
            ..BindingConfig::default()
        };

        invoke(&mut Notes::default(), Entrypoint::Read, len, &mut host, &config).unwrap();
        assert_eq!(host.map_entry("notes", b"n1"), Some(&b"x"[..]));
    }

    #[test]
    fn test_malformed_context_aborts() {
        let mut host = MockHost::new();
        let len = host.stage(b"not json".to_vec());
        let mut notes = Notes::default();

        let err = invoke(&mut notes, Entrypoint::Write, len, &mut host, &BindingConfig::default()).unwrap_err();
        assert!(matches!(err, BindingError::MalformedContext(_)));
        assert_eq!(notes.handled, 0);
        assert_eq!(host.map_op_count(), 0);
    }
}
