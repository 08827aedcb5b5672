#![no_std]

//! RapidFire: a gate that always admits.
//!
//! Keeps no state. Every `exec` succeeds and emits its own event, however
//! many times it is called within one ledger.

pub mod events;

use gate_common::{automation, Gate, GateKey};
use soroban_sdk::{contract, contractimpl, Bytes, BytesN, Env};

#[contract]
pub struct RapidFire;

#[contractimpl]
impl RapidFire {
    pub fn should_exec(_env: Env) -> bool {
        true
    }

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
}

impl Gate for RapidFire {
    fn check(_env: &Env, _key: &GateKey) -> bool {
        true
    }

    fn execute(env: &Env, key: &GateKey) -> bool {
        events::publish_executed(env, key.clone());
        true
    }
}
