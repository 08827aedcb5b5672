//! Shared building blocks for the execution gate contracts.
//!
//! This crate provides:
//! - [`GateError`] — construction-time error codes shared by every gate.
//! - [`GateKey`] helpers and the reserved automation keys.
//! - The [`Gate`] trait implemented by each gating policy.
//! - Pure cooldown and block-window arithmetic.
//! - EVM-style ABI encoding of the `exec(bytes32)` call.
//! - The poll-style and encode-style automation adapters.

#![cfg_attr(not(feature = "std"), no_std)]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod abi;
pub mod automation;
pub mod cooldown;
pub mod gate;
pub mod key;
pub mod window;

pub use gate::*;
pub use key::*;
pub use window::{WindowGeometry, WindowPosition};

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes shared by every gate contract.
///
/// Denials are never errors: a gate that refuses to run reports `false` and
/// emits an event. These codes only surface when a gate is constructed with
/// an unusable configuration, when its configuration is missing, or when a
/// key label cannot be packed.
///
/// # Code ranges
/// | Range   | Purpose                    |
/// |---------|----------------------------|
/// | 1 – 9   | Lifecycle / initialisation |
/// | 30 – 39 | Validation / input         |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum GateError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// Gate configuration is missing from storage.
    NotInitialized = 1,

    // ── Validation (30–39) ───────────────────────────────────
    /// A cooldown interval of zero was supplied.
    InvalidInterval = 30,

    /// A window period of zero was supplied.
    InvalidPeriod = 31,

    /// The window length is zero or longer than the period.
    InvalidWindow = 32,

    /// A key label does not fit in 32 bytes.
    KeyTooLong = 33,
}
