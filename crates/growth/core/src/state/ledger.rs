//! Dense per-roster point balances.

use arrayvec::ArrayVec;

use super::error::InitializationError;
use super::types::ActorId;
use crate::config::GrowthConfig;

/// Point balances for every roster id, each held in
/// `[0, GrowthConfig::MAX_POINT_BALANCE]`.
///
/// Storage is dense and indexed by [`ActorId`]: entry 0 exists but is never
/// addressed (the host reserves id 0). The ledger starts empty and is sized
/// to the roster on first initialization; until then every lookup reads 0.
///
/// Every write goes through the same normalization: round to the nearest
/// integer, then clamp into range. Normalizing twice yields the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointLedger {
    balances: ArrayVec<u32, { GrowthConfig::MAX_ACTORS }>,
}

impl PointLedger {
    /// Creates an empty, uninitialized ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the ledger has been sized to a roster.
    pub fn is_initialized(&self) -> bool {
        !self.balances.is_empty()
    }

    /// Number of roster entries the ledger was sized to.
    pub fn roster_len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if the id addresses an entry of this ledger.
    pub fn contains(&self, actor: ActorId) -> bool {
        actor.in_roster(self.balances.len())
    }

    /// Sizes the ledger to the roster, zeroing every entry.
    pub fn initialize(&mut self, roster_len: usize) -> Result<(), InitializationError> {
        if roster_len > GrowthConfig::MAX_ACTORS {
            return Err(InitializationError::RosterTooLarge {
                len: roster_len,
                max: GrowthConfig::MAX_ACTORS,
            });
        }
        self.balances.clear();
        for _ in 0..roster_len {
            self.balances.push(0);
        }
        Ok(())
    }

    /// Current balance for an actor (0 when outside the ledger).
    pub fn get(&self, actor: ActorId) -> u32 {
        self.balances.get(actor.index()).copied().unwrap_or(0)
    }

    /// Stores a raw (possibly fractional, possibly out-of-range) value,
    /// normalized round-then-clamp.
    ///
    /// Writes to ids outside the ledger are ignored.
    pub fn store(&mut self, actor: ActorId, value: f64) {
        if !actor.in_roster(self.balances.len()) {
            return;
        }
        if let Some(slot) = self.balances.get_mut(actor.index()) {
            *slot = Self::normalize(value);
        }
    }

    /// Adds a signed integral amount to an actor's balance.
    pub fn credit(&mut self, actor: ActorId, amount: i64) {
        let next = f64::from(self.get(actor)) + amount as f64;
        self.store(actor, next);
    }

    /// Subtracts an amount from an actor's balance (floored at 0).
    pub fn debit(&mut self, actor: ActorId, amount: u32) {
        self.credit(actor, -i64::from(amount));
    }

    /// Re-normalizes every stored balance.
    ///
    /// Stored values are already integral and in range, so this is
    /// idempotent; it exists so callers can re-assert the invariant after a
    /// batch of raw writes.
    pub fn normalize_all(&mut self) {
        for balance in &mut self.balances {
            *balance = Self::normalize(f64::from(*balance));
        }
    }

    /// Iterates over every `(id, balance)` pair, including the reserved
    /// index 0.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, u32)> + '_ {
        self.balances
            .iter()
            .enumerate()
            .map(|(i, balance)| (ActorId(i as u32), *balance))
    }

    /// Round to nearest, then clamp into the storable range.
    fn normalize(value: f64) -> u32 {
        let rounded = value.round();
        rounded.clamp(0.0, f64::from(GrowthConfig::MAX_POINT_BALANCE)) as u32
    }
}
