#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for window membership through the contract surface.
//!
//! Invariants tested:
//! - `should_exec` is true iff the ledger lies within `window` of a boundary
//!   `(i + 1) * period` measured from deployment
//! - A success for one key never changes `should_exec` for another key
//! - `checker` reports `can_exec` exactly when `should_exec(GELATO)` does

use gate_common::{abi, gate_key, gelato_key};
use proptest::prelude::*;
use soroban_sdk::testutils::Ledger as _;
use soroban_sdk::Env;
use target_gate::{Target, TargetClient};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup(start: u32, period: u32, window: u32) -> (Env, TargetClient<'static>) {
    let env = Env::default();
    env.ledger().set_sequence_number(start);

    let contract_id = env.register(Target, (period, window));
    let client = TargetClient::new(&env, &contract_id);

    (env, client)
}

/// Brute-force membership over every boundary up to the next one.
fn in_window(elapsed: u32, period: u32, window: u32) -> bool {
    let h = i64::from(elapsed);
    let p = i64::from(period);
    let w = i64::from(window);
    (1..=(h / p + 1)).any(|k| h >= k * p - w && h < k * p + w)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_should_exec_matches_window_membership(
        start in 0u32..=1_000u32,
        period in 1u32..=200u32,
        window_seed in 0u32..=200u32,
        elapsed in 0u32..=2_000u32,
    ) {
        let window = window_seed % period + 1;
        let (env, client) = setup(start, period, window);

        env.ledger().set_sequence_number(start + elapsed);

        let key = gate_key(&env, "TEST");
        prop_assert_eq!(client.should_exec(&key), in_window(elapsed, period, window));
        prop_assert_eq!(client.current_window().is_some(), in_window(elapsed, period, window));
    }

    #[test]
    fn prop_keys_are_independent(
        period in 2u32..=200u32,
        window_seed in 0u32..=100u32,
        boundary in 1u32..=10u32,
        offset_seed in 0u32..=200u32,
    ) {
        let window = window_seed % (period / 2) + 1;
        let (env, client) = setup(0, period, window);

        // Any ledger inside window `boundary - 1`.
        let offset = offset_seed % (2 * window);
        env.ledger().set_sequence_number(boundary * period - window + offset);

        let first = gate_key(&env, "FIRST");
        let second = gate_key(&env, "SECOND");

        prop_assert!(client.should_exec(&second));
        prop_assert!(client.exec(&first));
        prop_assert!(!client.should_exec(&first));
        prop_assert!(client.should_exec(&second));
        prop_assert!(client.exec(&second));
    }

    #[test]
    fn prop_checker_agrees_with_should_exec(
        period in 1u32..=200u32,
        window_seed in 0u32..=200u32,
        elapsed in 0u32..=1_000u32,
        used_gelato in any::<bool>(),
    ) {
        let window = window_seed % period + 1;
        let (env, client) = setup(0, period, window);
        env.ledger().set_sequence_number(elapsed);

        if used_gelato {
            client.exec(&gelato_key(&env));
        }

        let (can_exec, payload) = client.checker();
        prop_assert_eq!(can_exec, client.should_exec(&gelato_key(&env)));
        prop_assert_eq!(abi::decode_exec_call(&env, &payload), Some(gelato_key(&env)));
    }
}
