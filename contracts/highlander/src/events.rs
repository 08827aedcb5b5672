#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, BytesN, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the gate is deployed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub interval: u64,
    pub timestamp: u64,
}

/// Fired on every `exec`, admitted or not.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutedEvent {
    pub succeeded: bool,
    pub key: BytesN<32>,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, interval: u64) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            interval,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_executed(env: &Env, succeeded: bool, key: BytesN<32>) {
    env.events().publish(
        (symbol_short!("EXECUTED"), key.clone()),
        ExecutedEvent {
            succeeded,
            key,
            timestamp: env.ledger().timestamp(),
        },
    );
}
