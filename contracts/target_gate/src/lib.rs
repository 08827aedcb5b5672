#![no_std]

//! Target: a block-window gate.
//!
//! Ledger sequences are divided into periods counted from deployment. A
//! window of `window` ledgers opens before each period boundary and stays
//! open for `window` ledgers after it. Each key may run at most once per
//! window; distinct keys never block each other.

pub mod events;

use gate_common::{automation, Gate, GateError, GateKey, WindowGeometry, WindowPosition};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, panic_with_error, symbol_short, Bytes, BytesN,
    Env, Symbol,
};

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const EXECUTIONS: Symbol = symbol_short!("EXEC_CNT");

// Per-key persistent storage uses tuple keys: (prefix, key)
const LAST_WINDOW: Symbol = symbol_short!("LAST_WIN");

const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

// ── Public-facing types ──────────────────────────────────────────────────────

/// Window geometry fixed at deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WindowConfig {
    /// Ledger sequence the period grid is measured from.
    pub period_start: u32,
    pub period: u32,
    pub window: u32,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn config(env: &Env) -> WindowConfig {
    env.storage()
        .instance()
        .get(&CONFIG)
        .unwrap_or_else(|| panic_with_error!(env, GateError::NotInitialized))
}

fn position(env: &Env) -> WindowPosition {
    let cfg = config(env);
    let geometry = WindowGeometry::new(cfg.period, cfg.window)
        .unwrap_or_else(|e| panic_with_error!(env, e));
    let elapsed = env.ledger().sequence().saturating_sub(cfg.period_start);
    geometry.locate(elapsed)
}

fn last_window(env: &Env, key: &GateKey) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&(LAST_WINDOW, key.clone()))
}

fn record_window(env: &Env, key: &GateKey, index: u32) {
    let storage_key = (LAST_WINDOW, key.clone());
    env.storage().persistent().set(&storage_key, &index);
    env.storage()
        .persistent()
        .extend_ttl(&storage_key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// A key is admitted inside a window it has not already run in.
fn admits(env: &Env, key: &GateKey, position: &WindowPosition) -> bool {
    match position.index() {
        Some(index) => last_window(env, key) != Some(index),
        None => false,
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct Target;

#[contractimpl]
impl Target {
    /// Deploy with a `period` and `window` in ledgers, measured from the
    /// current ledger. `period` must be positive and `window` in
    /// `1..=period`; anything else aborts deployment.
    pub fn __constructor(env: Env, period: u32, window: u32) -> Result<(), GateError> {
        let geometry = WindowGeometry::new(period, window)?;

        let cfg = WindowConfig {
            period_start: env.ledger().sequence(),
            period: geometry.period(),
            window: geometry.window(),
        };
        env.storage().instance().set(&CONFIG, &cfg);
        extend_ttl_instance(&env);

        events::publish_initialized(&env, cfg);
        Ok(())
    }

    // ── Gate ────────────────────────────────────────────────────────────────

    pub fn should_exec(env: Env, key: BytesN<32>) -> bool {
        admits(&env, &key, &position(&env))
    }

    /// Run `key` if the current ledger is inside a window that `key` has not
    /// used yet. Always emits one `EXECUTED` event carrying the signed
    /// distance to the nearest window edge.
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

    pub fn get_config(env: Env) -> WindowConfig {
        config(&env)
    }

    /// Index of the window the current ledger falls in, if any.
    pub fn current_window(env: Env) -> Option<u32> {
        position(&env).index()
    }

    /// Signed distance to the nearest window edge, as reported by `exec`.
    pub fn current_distance(env: Env) -> i64 {
        position(&env).distance()
    }

    /// Last window index in which `key` ran, `None` if it never has.
    pub fn get_last_window(env: Env, key: BytesN<32>) -> Option<u32> {
        last_window(&env, &key)
    }

    pub fn get_executions(env: Env) -> u64 {
        env.storage().instance().get(&EXECUTIONS).unwrap_or(0)
    }
}

impl Gate for Target {
    fn check(env: &Env, key: &GateKey) -> bool {
        admits(env, key, &position(env))
    }

    fn execute(env: &Env, key: &GateKey) -> bool {
        let position = position(env);
        let admitted = admits(env, key, &position);

        match position.index() {
            Some(index) if admitted => {
                record_window(env, key, index);
                let executions: u64 = env.storage().instance().get(&EXECUTIONS).unwrap_or(0);
                env.storage()
                    .instance()
                    .set(&EXECUTIONS, &executions.saturating_add(1));
                extend_ttl_instance(env);
            }
            Some(index) => log!(env, "key already ran in window", index),
            None => log!(env, "outside window", position.distance()),
        }

        events::publish_executed(env, admitted, key.clone(), position.distance());
        admitted
    }
}
