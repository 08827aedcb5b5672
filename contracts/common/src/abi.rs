//! EVM ABI encoding of the gate's `exec(bytes32)` entry point.
//!
//! Encode-style runners receive a ready-made call description and replay it
//! verbatim. The key is a static `bytes32` argument, so the payload is the
//! 4-byte selector followed by the 32 key bytes with no offset or length word.

use soroban_sdk::{Bytes, BytesN, Env};

use crate::GateKey;

/// Canonical signature hashed into the selector.
pub const EXEC_SIGNATURE: &str = "exec(bytes32)";

/// Width of the function selector prefix.
pub const SELECTOR_LEN: u32 = 4;

/// Selector plus one 32-byte word.
pub const EXEC_CALL_LEN: u32 = 36;

/// First four bytes of `keccak256("exec(bytes32)")`.
pub fn exec_selector(env: &Env) -> BytesN<4> {
    let signature = Bytes::from_slice(env, EXEC_SIGNATURE.as_bytes());
    let digest: BytesN<32> = env.crypto().keccak256(&signature).into();
    let digest = digest.to_array();
    BytesN::from_array(env, &[digest[0], digest[1], digest[2], digest[3]])
}

/// Encode a call to `exec(key)`.
pub fn encode_exec_call(env: &Env, key: &GateKey) -> Bytes {
    let mut payload = Bytes::from_array(env, &exec_selector(env).to_array());
    payload.extend_from_array(&key.to_array());
    payload
}

/// Recover the key from an encoded `exec` call.
///
/// Returns `None` unless `payload` is exactly one `exec(bytes32)` call.
pub fn decode_exec_call(env: &Env, payload: &Bytes) -> Option<GateKey> {
    if payload.len() != EXEC_CALL_LEN {
        return None;
    }
    let selector = Bytes::from_array(env, &exec_selector(env).to_array());
    if payload.slice(..SELECTOR_LEN) != selector {
        return None;
    }
    let mut raw = [0u8; 32];
    payload.slice(SELECTOR_LEN..).copy_into_slice(&mut raw);
    Some(BytesN::from_array(env, &raw))
}
