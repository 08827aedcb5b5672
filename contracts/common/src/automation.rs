//! Automation network adapters.
//!
//! Both adapters are thin translations over [`Gate`]; gates never learn
//! which network is calling.
//!
//! - **Poll style** (Chainlink-like): a read-only `check_upkeep` and a
//!   mutating `perform_upkeep` that ignores its opaque input and runs the
//!   gate under the reserved [`CHAINLINK`](crate::CHAINLINK) key.
//! - **Encode style** (Gelato-like): a read-only `checker` returning the
//!   admission flag for the reserved [`GELATO`](crate::GELATO) key and the
//!   pre-encoded `exec(bytes32)` call the runner should submit.

use soroban_sdk::{Bytes, Env};

use crate::{abi, chainlink_key, gelato_key, Gate};

/// Whether a poll-style keeper should call [`perform_upkeep`].
pub fn check_upkeep<G: Gate>(env: &Env) -> bool {
    G::check(env, &chainlink_key(env))
}

/// Run the gate under the poll-style reserved key.
///
/// `_perform_data` is accepted from the keeper and discarded. A denial is
/// reported through the gate's result event, never as a failed call.
pub fn perform_upkeep<G: Gate>(env: &Env, _perform_data: &Bytes) -> bool {
    G::execute(env, &chainlink_key(env))
}

/// Admission flag and encoded call for an encode-style runner.
pub fn checker<G: Gate>(env: &Env) -> (bool, Bytes) {
    let key = gelato_key(env);
    (G::check(env, &key), abi::encode_exec_call(env, &key))
}
