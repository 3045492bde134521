//! Configuration oracle interface.

use crate::slots::SlotTable;
use crate::state::StateId;

/// Oracle providing the load-time growth configuration.
pub trait ConfigOracle: Send + Sync {
    /// The per-slot increment/cost/cap tables.
    fn slots(&self) -> &SlotTable;

    /// Status effect whose potency scales distributed points.
    fn effectiveness_state(&self) -> StateId;

    /// Whether the growth-reset feature is enabled.
    fn reset_enabled(&self) -> bool;
}
