#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, BytesN, Env};

use crate::WindowConfig;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the gate is deployed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub config: WindowConfig,
    pub timestamp: u64,
}

/// Fired on every `exec`, admitted or not.
///
/// `distance` is signed: inside a window it is the offset from the window's
/// boundary, outside it counts ledgers until the next window opens
/// (positive) or since the previous one closed (negative).
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutedEvent {
    pub succeeded: bool,
    pub distance: i64,
    pub key: BytesN<32>,
    pub sequence: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, config: WindowConfig) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            config,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_executed(env: &Env, succeeded: bool, key: BytesN<32>, distance: i64) {
    env.events().publish(
        (symbol_short!("EXECUTED"), key.clone()),
        ExecutedEvent {
            succeeded,
            distance,
            key,
            sequence: env.ledger().sequence(),
        },
    );
}
