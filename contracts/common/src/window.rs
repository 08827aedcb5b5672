//! Block-height window geometry.
//!
//! Heights are measured from the ledger at which the gate was created. Every
//! `period` ledgers there is a boundary; window `i` is centred on boundary
//! `(i + 1) * period` and covers
//! `[(i + 1) * period - window, (i + 1) * period + window)`.
//!
//! When windows overlap (`window > period / 2`) a height belongs to the window
//! of the nearest boundary, the upcoming one on a tie.
//!
//! Distances are signed and reported in ledgers:
//! - inside a window: `height - boundary` (zero on the boundary itself);
//! - before the next window opens: ledgers left until it opens (`>= 1`);
//! - after a window closed: minus the ledgers since its last height (`<= -1`).

use crate::GateError;

/// Immutable period/window pair validated at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowGeometry {
    period: u32,
    window: u32,
}

/// Where a height falls relative to the window grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowPosition {
    Inside { index: u32, distance: i64 },
    Outside { distance: i64 },
}

impl WindowPosition {
    pub fn index(&self) -> Option<u32> {
        match self {
            WindowPosition::Inside { index, .. } => Some(*index),
            WindowPosition::Outside { .. } => None,
        }
    }

    pub fn distance(&self) -> i64 {
        match self {
            WindowPosition::Inside { distance, .. } | WindowPosition::Outside { distance } => {
                *distance
            }
        }
    }
}

impl WindowGeometry {
    pub fn new(period: u32, window: u32) -> Result<Self, GateError> {
        if period == 0 {
            return Err(GateError::InvalidPeriod);
        }
        if window == 0 || window > period {
            return Err(GateError::InvalidWindow);
        }
        Ok(Self { period, window })
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    /// Locate `elapsed` ledgers after the period start on the window grid.
    pub fn locate(&self, elapsed: u32) -> WindowPosition {
        let period = u64::from(self.period);
        let window = u64::from(self.window);
        let height = u64::from(elapsed);

        let completed = height / period;
        let since_prev = height % period;
        let until_next = period - since_prev;

        // Boundary 0 is the period start, which has no window.
        let prefer_next = completed == 0 || until_next <= since_prev;

        if prefer_next && until_next <= window {
            return WindowPosition::Inside {
                index: completed as u32,
                distance: -(until_next as i64),
            };
        }
        if !prefer_next && since_prev < window {
            return WindowPosition::Inside {
                index: (completed - 1) as u32,
                distance: since_prev as i64,
            };
        }

        let to_open = until_next - window;
        if completed == 0 {
            return WindowPosition::Outside {
                distance: to_open as i64,
            };
        }
        let past_close = since_prev + 1 - window;
        if to_open <= past_close {
            WindowPosition::Outside {
                distance: to_open as i64,
            }
        } else {
            WindowPosition::Outside {
                distance: -(past_close as i64),
            }
        }
    }
}
