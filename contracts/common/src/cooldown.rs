//! Fixed-interval cooldown arithmetic.
//!
//! Pure functions over ledger timestamps so the contract and off-chain
//! tooling agree on when a cooldown gate reopens.

use crate::GateError;

/// Reject a zero interval; any positive interval is usable.
pub fn validate_interval(interval: u64) -> Result<u64, GateError> {
    if interval == 0 {
        return Err(GateError::InvalidInterval);
    }
    Ok(interval)
}

/// Returns `true` once `interval` seconds have passed since `last_success`.
///
/// `None` means the gate has never admitted a run and is always open.
#[must_use]
pub fn cooldown_elapsed(now: u64, last_success: Option<u64>, interval: u64) -> bool {
    match last_success {
        None => true,
        Some(last) => now.saturating_sub(last) >= interval,
    }
}

/// Earliest timestamp at which the gate admits again.
#[must_use]
pub fn next_open_at(last_success: Option<u64>, interval: u64) -> u64 {
    last_success.map_or(0, |last| last.saturating_add(interval))
}
