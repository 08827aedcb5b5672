#![no_main]

use arbitrary::Arbitrary;
use gate_common::gate_key;
use highlander::{Highlander, HighlanderClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Ledger as _, Bytes, Env};

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    interval: u64,
    actions: Vec<FuzzAction>,
}

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Advance { seconds: u32 },
    Exec { key: u8 },
    PerformUpkeep { data: Vec<u8> },
    Checker,
}

fuzz_target!(|input: FuzzInput| {
    if input.interval == 0 {
        return;
    }

    let env = Env::default();
    env.ledger().set_timestamp(0);
    let contract_id = env.register(Highlander, (input.interval,));
    let client = HighlanderClient::new(&env, &contract_id);

    let keys = [gate_key(&env, "ALPHA"), gate_key(&env, "BETA")];
    let mut now = 0u64;
    let mut last: Option<u64> = None;

    for action in input.actions {
        match action {
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
            FuzzAction::Exec { key } => {
                let expected = last.map_or(true, |t| now - t >= input.interval);
                let admitted = client.exec(&keys[usize::from(key) % keys.len()]);
                assert_eq!(admitted, expected);
                if admitted {
                    last = Some(now);
                }
            }
            FuzzAction::PerformUpkeep { data } => {
                let expected = last.map_or(true, |t| now - t >= input.interval);
                client.perform_upkeep(&Bytes::from_slice(&env, &data));
                if expected {
                    last = Some(now);
                }
            }
            FuzzAction::Checker => {
                let (can_exec, _) = client.checker();
                assert_eq!(can_exec, client.should_exec());
            }
        }
        assert_eq!(client.get_last_success(), last);
    }
});
