#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the Target gate.
//!
//! The contract is driven by random interleavings of ledger advances and
//! `exec` calls over a small key set, and compared against a model that
//! tracks the last window each key ran in.
//!
//! Invariants tested:
//! - `exec` succeeds iff the ledger is in a window the key has not used
//! - A key that succeeded stays blocked until the next window opens
//! - `get_executions` equals the number of successful `exec` calls

use std::collections::HashMap;

use gate_common::gate_key;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::Ledger as _;
use soroban_sdk::Env;
use target_gate::{Target, TargetClient};

const PERIOD: u32 = 20;
const WINDOW: u32 = 3;
const KEYS: [&str; 3] = ["ALPHA", "BETA", "CHAINLINK"];

#[derive(Arbitrary, Clone, Debug)]
enum Step {
    Advance(#[proptest(strategy = "0u32..12")] u32),
    Exec(#[proptest(strategy = "0usize..3")] usize),
    Check(#[proptest(strategy = "0usize..3")] usize),
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// Window index containing `height`, if any. Windows do not overlap here.
fn model_window(height: u32) -> Option<u32> {
    let boundary = (height + WINDOW) / PERIOD;
    if boundary == 0 {
        return None;
    }
    let centre = boundary * PERIOD;
    (height + WINDOW >= centre && height < centre + WINDOW).then(|| boundary - 1)
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_exec_matches_model(steps in proptest::collection::vec(any::<Step>(), 1..60)) {
        let env = Env::default();
        env.ledger().set_sequence_number(0);
        let contract_id = env.register(Target, (PERIOD, WINDOW));
        let client = TargetClient::new(&env, &contract_id);

        let mut height = 0u32;
        let mut last_run: HashMap<usize, u32> = HashMap::new();
        let mut successes = 0u64;

        for step in steps {
            match step {
                Step::Advance(by) => {
                    height += by;
                    env.ledger().set_sequence_number(height);
                }
                Step::Exec(k) => {
                    let key = gate_key(&env, KEYS[k]);
                    let window = model_window(height);
                    let expected = window.is_some() && last_run.get(&k).copied() != window;

                    prop_assert_eq!(client.exec(&key), expected, "height {}", height);
                    if let (true, Some(w)) = (expected, window) {
                        last_run.insert(k, w);
                        successes += 1;
                    }
                    prop_assert_eq!(client.get_last_window(&key), last_run.get(&k).copied());
                }
                Step::Check(k) => {
                    let key = gate_key(&env, KEYS[k]);
                    let window = model_window(height);
                    let expected = window.is_some() && last_run.get(&k).copied() != window;
                    prop_assert_eq!(client.should_exec(&key), expected, "height {}", height);
                }
            }
        }

        prop_assert_eq!(client.get_executions(), successes);
    }
}
