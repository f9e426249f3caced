//! Shared test helpers for integration tests.
//!
//! Provides context staging, a small ledger service exercising store maps,
//! scalar slots, account values and cross-service calls, and invocation
//! shortcuts used across the integration test files.

#![allow(dead_code)]

use hostbind_sdk::{
    calls, invoke, AccountId, BindingConfig, BindingResult, Context, Entrypoint, Envelope, Handler,
    HostBinding, MockHost, Service, StatusCode, StoreMap, StoreUint64,
};

/// Map holding balances keyed by holder name.
pub const BALANCES: &str = "balances";

/// Scalar slot holding the total minted supply.
pub const SUPPLY: &str = "supply";

// ── Context staging ──

/// A context for `method` with `payload`, every other field defaulted.
pub fn context(method: &str, payload: &str) -> Context {
    Context::builder()
        .nonce("0x01")
        .service_name("ledger")
        .service_method(method)
        .service_payload(payload)
        .cycles_limit(1_000_000)
        .cycles_price(1)
        .height(42)
        .timestamp(1_700_000_000)
        .build()
}

/// Stage `context` in the host and return the length the host would pass
/// to the entrypoint.
pub fn stage(host: &mut MockHost, context: &Context) -> u32 {
    host.stage_context(context).unwrap()
}

// ── Ledger service ──

/// Payload of `mint`: `"<holder>:<amount>"`.
fn parse_mint(payload: &str) -> Option<(&str, u64)> {
    let (holder, amount) = payload.split_once(':')?;
    Some((holder, amount.parse().ok()?))
}

fn parse_balance(bytes: &[u8]) -> u64 {
    core::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Minimal token ledger.
#[derive(Default)]
pub struct Ledger;

impl Ledger {
    fn mint(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        let Some((holder, amount)) = parse_mint(ctx.service_payload()) else {
            return Ok(Envelope::status(StatusCode::BadRequest));
        };

        let mut balances = StoreMap::alloc_or_recover(host, BALANCES)?;
        let mut supply = StoreUint64::alloc_or_recover(host, SUPPLY)?;

        let balance = parse_balance(&balances.get(host, holder.as_bytes())?) + amount;
        balances.set(host, holder.as_bytes(), balance.to_string().as_bytes())?;
        let total = supply.get(host)? + amount;
        supply.set(host, total)?;

        calls::set_account_value(host, &AccountId::address(holder), b"minted_at", ctx.height().to_string().as_bytes())?;
        calls::log(host, &format!("minted {} to {}", amount, holder))?;
        Ok(Envelope::ok(balance.to_string()))
    }

    fn balance(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        let mut balances = StoreMap::alloc_or_recover(host, BALANCES)?;
        let balance = parse_balance(&balances.get(host, ctx.service_payload().as_bytes())?);
        Ok(Envelope::ok(balance.to_string()))
    }

    fn supply(&mut self, _ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        let mut supply = StoreUint64::alloc_or_recover(host, SUPPLY)?;
        Ok(Envelope::ok(supply.get(host)?.to_string()))
    }

    fn price(&mut self, ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        calls::read_service(host, "oracle", "price", ctx.service_payload())
    }

    fn burn_all(&mut self, _ctx: &mut Context, host: &mut dyn HostBinding) -> BindingResult<Envelope> {
        let mut supply = StoreUint64::alloc_or_recover(host, SUPPLY)?;
        supply.set(host, 0)?;
        Ok(Envelope::ok("0"))
    }
}

impl Service for Ledger {
    fn route(entry: Entrypoint, method: &str) -> Option<Handler<Self>> {
        match (entry, method) {
            (Entrypoint::Write, "mint") => Some(Ledger::mint as Handler<Self>),
            (Entrypoint::Read, "balance") => Some(Ledger::balance as Handler<Self>),
            (Entrypoint::Read, "supply") => Some(Ledger::supply as Handler<Self>),
            (Entrypoint::Read, "price") => Some(Ledger::price as Handler<Self>),
            // Deliberately misplaced on `read` to exercise the guard.
            (Entrypoint::Read, "burn_all") => Some(Ledger::burn_all as Handler<Self>),
            _ => None,
        }
    }
}

// ── Invocation shortcuts ──

pub fn run(host: &mut MockHost, entry: Entrypoint, method: &str, payload: &str) -> BindingResult<Envelope> {
    let len = stage(host, &context(method, payload));
    invoke(&mut Ledger, entry, len, host, &BindingConfig::default())
}

pub fn write(host: &mut MockHost, method: &str, payload: &str) -> Envelope {
    run(host, Entrypoint::Write, method, payload).unwrap()
}

pub fn read(host: &mut MockHost, method: &str, payload: &str) -> Envelope {
    run(host, Entrypoint::Read, method, payload).unwrap()
}
