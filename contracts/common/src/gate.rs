use soroban_sdk::Env;

use crate::GateKey;

/// A gating policy bound to the current contract's storage.
///
/// Implementors decide whether `key` may run at the current ledger, and on
/// [`Gate::execute`] perform their bookkeeping and emit exactly one result
/// event. Neither method may fail the call for an ordinary denial.
pub trait Gate {
    /// Read-only admission check.
    fn check(env: &Env, key: &GateKey) -> bool;

    /// Admission check plus state update. Returns whether the run was admitted.
    fn execute(env: &Env, key: &GateKey) -> bool;
}
