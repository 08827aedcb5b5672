#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, BytesN, Env};

/// Fired on every `exec`. RapidFire never denies, so `succeeded` is always
/// `true`; it is kept so consumers can decode every gate's events alike.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutedEvent {
    pub succeeded: bool,
    pub key: BytesN<32>,
    pub timestamp: u64,
}

pub fn publish_executed(env: &Env, key: BytesN<32>) {
    env.events().publish(
        (symbol_short!("EXECUTED"), key.clone()),
        ExecutedEvent {
            succeeded: true,
            key,
            timestamp: env.ledger().timestamp(),
        },
    );
}
