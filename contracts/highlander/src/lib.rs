#![no_std]

//! Highlander: a cooldown gate.
//!
//! Admits at most one run per fixed wall-clock interval. The cooldown is a
//! single global timer; keys are recorded in the result event but never
//! influence the decision.

pub mod events;

use gate_common::{automation, cooldown, Gate, GateError, GateKey};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, symbol_short, Bytes, BytesN, Env, Symbol,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INTERVAL: Symbol = symbol_short!("INTERVAL");
const LAST_SUCCESS: Symbol = symbol_short!("LAST_OK");
const EXECUTIONS: Symbol = symbol_short!("EXEC_CNT");

const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn interval(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&INTERVAL)
        .unwrap_or_else(|| panic_with_error!(env, GateError::NotInitialized))
}

fn last_success(env: &Env) -> Option<u64> {
    env.storage().instance().get(&LAST_SUCCESS)
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct Highlander;

#[contractimpl]
impl Highlander {
    /// Deploy with a cooldown of `interval` seconds. Zero is rejected and
    /// aborts deployment.
    pub fn __constructor(env: Env, interval: u64) -> Result<(), GateError> {
        let interval = cooldown::validate_interval(interval)?;

        env.storage().instance().set(&INTERVAL, &interval);
        extend_ttl_instance(&env);

        events::publish_initialized(&env, interval);
        Ok(())
    }

    // ── Gate ────────────────────────────────────────────────────────────────

    pub fn should_exec(env: Env) -> bool {
        let now = env.ledger().timestamp();
        cooldown::cooldown_elapsed(now, last_success(&env), interval(&env))
    }

    /// Run if the cooldown has elapsed. Always emits one `EXECUTED` event.
    pub fn exec(env: Env, key: BytesN<32>) -> bool {
        <Self as Gate>::execute(&env, &key)
    }

    // ── Automation ──────────────────────────────────────────────────────────

    pub fn check_upkeep(env: Env, check_data: Bytes) -> (bool, Bytes) {
        (automation::check_upkeep::<Self>(&env), check_data)
    }

    pub fn perform_upkeep(env: Env, perform_data: Bytes) {
        automation::perform_upkeep::<Self>(&env, &perform_data);
    }

    pub fn checker(env: Env) -> (bool, Bytes) {
        automation::checker::<Self>(&env)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_interval(env: Env) -> u64 {
        interval(&env)
    }

    /// Timestamp of the last admitted run, `None` before the first one.
    pub fn get_last_success(env: Env) -> Option<u64> {
        last_success(&env)
    }

    /// Earliest timestamp at which `exec` admits again.
    pub fn get_next_exec_at(env: Env) -> u64 {
        cooldown::next_open_at(last_success(&env), interval(&env))
    }

    pub fn get_executions(env: Env) -> u64 {
        env.storage().instance().get(&EXECUTIONS).unwrap_or(0)
    }
}

impl Gate for Highlander {
    fn check(env: &Env, _key: &GateKey) -> bool {
        Self::should_exec(env.clone())
    }

    fn execute(env: &Env, key: &GateKey) -> bool {
        let now = env.ledger().timestamp();
        let last = last_success(env);

        if !cooldown::cooldown_elapsed(now, last, interval(env)) {
            log!(env, "cooldown active", now, last);
            events::publish_executed(env, false, key.clone());
            return false;
        }

        let executions: u64 = env.storage().instance().get(&EXECUTIONS).unwrap_or(0);
        env.storage().instance().set(&LAST_SUCCESS, &now);
        env.storage()
            .instance()
            .set(&EXECUTIONS, &executions.saturating_add(1));
        extend_ttl_instance(env);

        events::publish_executed(env, true, key.clone());
        true
    }
}
