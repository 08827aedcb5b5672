//! Fixed-width execution keys.
//!
//! A key is 32 raw bytes. Human-readable labels are packed left-aligned and
//! zero-padded, the same layout an EVM `bytes32` string literal uses, so a
//! key built here matches the one an off-chain caller encodes.

use soroban_sdk::{panic_with_error, BytesN, Env};

use crate::GateError;

/// Caller-supplied identifier for one execution stream.
pub type GateKey = BytesN<32>;

/// Width of a [`GateKey`] in bytes.
pub const KEY_LEN: usize = 32;

/// Label reserved for the poll-style automation adapter.
pub const CHAINLINK: &str = "CHAINLINK";

/// Label reserved for the encode-style automation adapter.
pub const GELATO: &str = "GELATO";

/// Pack `label` into a zero-padded [`GateKey`].
///
/// Panics with [`GateError::KeyTooLong`] if the label exceeds 32 bytes.
pub fn gate_key(env: &Env, label: &str) -> GateKey {
    let raw = label.as_bytes();
    if raw.len() > KEY_LEN {
        panic_with_error!(env, GateError::KeyTooLong);
    }
    let mut buf = [0u8; KEY_LEN];
    buf[..raw.len()].copy_from_slice(raw);
    BytesN::from_array(env, &buf)
}

/// Key used by [`crate::automation::perform_upkeep`] and
/// [`crate::automation::check_upkeep`].
pub fn chainlink_key(env: &Env) -> GateKey {
    gate_key(env, CHAINLINK)
}

/// Key used by [`crate::automation::checker`].
pub fn gelato_key(env: &Env) -> GateKey {
    gate_key(env, GELATO)
}
