//! Authoritative growth state representation.
//!
//! This module owns the point ledger and the per-character growth progress.
//! Runtime layers clone or query this state but mutate it exclusively
//! through the transitions in [`crate::op`].
mod error;
mod ledger;
mod progress;
mod types;

pub use error::InitializationError;
pub use ledger::PointLedger;
pub use progress::{ProgressTable, SlotBonuses};
pub use types::{ActorId, ClassId, StateId, SwitchId};

/// Canonical snapshot of the growth system's mutable state.
///
/// The ledger and the progress table are sized to the host roster together;
/// explicit point initialization zeroes balances but leaves purchased growth
/// intact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthState {
    /// Per-roster point balances.
    pub ledger: PointLedger,
    /// Per-character purchased stat growth.
    pub progress: ProgressTable,
}

impl GrowthState {
    /// Creates an empty state; sized lazily on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every roster balance (the explicit initialization command).
    pub fn initialize_points(&mut self, roster_len: usize) -> Result<(), InitializationError> {
        self.ledger.initialize(roster_len)?;
        self.progress.ensure_roster(roster_len)
    }

    /// Sizes state to the roster if it has never been initialized.
    pub fn ensure_roster(&mut self, roster_len: usize) -> Result<(), InitializationError> {
        if !self.ledger.is_initialized() {
            self.ledger.initialize(roster_len)?;
        }
        self.progress.ensure_roster(roster_len)
    }

    /// Re-normalizes every balance (round-then-clamp; idempotent).
    pub fn normalize_balances(&mut self) {
        self.ledger.normalize_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::SlotId;

    #[test]
    fn initialize_points_preserves_growth_progress() {
        let mut state = GrowthState::new();
        state.initialize_points(4).unwrap();
        state.progress.add(ActorId(1), SlotId(0), 10);
        state.ledger.credit(ActorId(1), 500);

        state.initialize_points(4).unwrap();
        assert_eq!(state.ledger.get(ActorId(1)), 0);
        assert_eq!(state.progress.bonus(ActorId(1), SlotId(0)), 10);
    }

    #[test]
    fn ensure_roster_initializes_only_once() {
        let mut state = GrowthState::new();
        state.ensure_roster(4).unwrap();
        state.ledger.credit(ActorId(2), 70);

        state.ensure_roster(4).unwrap();
        assert_eq!(state.ledger.get(ActorId(2)), 70);
    }
}
