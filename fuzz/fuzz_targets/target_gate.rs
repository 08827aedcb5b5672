#![no_main]

use arbitrary::Arbitrary;
use gate_common::{gate_key, WindowGeometry};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Ledger as _, Env};
use target_gate::{Target, TargetClient};

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    period: u16,
    window: u16,
    actions: Vec<FuzzAction>,
}

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Advance { ledgers: u16 },
    Exec { key: u8 },
}

fuzz_target!(|input: FuzzInput| {
    let period = u32::from(input.period);
    let window = u32::from(input.window);
    // Invalid geometry aborts deployment; nothing to drive.
    let Ok(geometry) = WindowGeometry::new(period, window) else {
        return;
    };

    let env = Env::default();
    env.ledger().set_sequence_number(0);
    let contract_id = env.register(Target, (period, window));
    let client = TargetClient::new(&env, &contract_id);

    let keys = [gate_key(&env, "ALPHA"), gate_key(&env, "BETA"), gate_key(&env, "GAMMA")];
    let mut height = 0u32;
    let mut last_run: [Option<u32>; 3] = [None; 3];

    for action in input.actions {
        match action {
            FuzzAction::Advance { ledgers } => {
                height = height.saturating_add(u32::from(ledgers));
                env.ledger().set_sequence_number(height);
            }
            FuzzAction::Exec { key } => {
                let slot = usize::from(key) % keys.len();
                let index = geometry.locate(height).index();
                let expected = index.is_some() && last_run[slot] != index;

                assert_eq!(client.exec(&keys[slot]), expected);
                if expected {
                    last_run[slot] = index;
                }
                assert_eq!(client.get_last_window(&keys[slot]), last_run[slot]);
            }
        }
    }
});
