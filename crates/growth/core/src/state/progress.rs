//! Per-character purchased stat growth.

use arrayvec::ArrayVec;

use super::error::InitializationError;
use super::types::ActorId;
use crate::config::GrowthConfig;
use crate::slots::SlotId;

/// Purchased bonuses for one character, one counter per stat slot.
///
/// Separate from the character's base stats and from equipment bonuses;
/// only growth purchases write here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotBonuses([u32; GrowthConfig::MAX_STAT_SLOTS]);

impl SlotBonuses {
    /// Bonus purchased for a slot.
    pub fn get(&self, slot: SlotId) -> u32 {
        self.0.get(slot.index()).copied().unwrap_or(0)
    }

    fn add(&mut self, slot: SlotId, grant: u32) {
        if let Some(bonus) = self.0.get_mut(slot.index()) {
            *bonus = bonus.saturating_add(grant);
        }
    }

    fn clear(&mut self) {
        self.0 = [0; GrowthConfig::MAX_STAT_SLOTS];
    }
}

/// Cumulative purchased growth per character and slot.
///
/// Rows are created lazily (all zero) as the roster is sized; ids outside
/// the table read as zero and ignore writes, mirroring [`super::PointLedger`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressTable {
    rows: ArrayVec<SlotBonuses, { GrowthConfig::MAX_ACTORS }>,
}

impl ProgressTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the table (with zeroed rows) until it covers the roster.
    ///
    /// Existing rows are preserved; growth progress survives point
    /// re-initialization.
    pub fn ensure_roster(&mut self, roster_len: usize) -> Result<(), InitializationError> {
        if roster_len > GrowthConfig::MAX_ACTORS {
            return Err(InitializationError::RosterTooLarge {
                len: roster_len,
                max: GrowthConfig::MAX_ACTORS,
            });
        }
        while self.rows.len() < roster_len {
            self.rows.push(SlotBonuses::default());
        }
        Ok(())
    }

    /// Bonus purchased by an actor for a slot (0 outside the table).
    pub fn bonus(&self, actor: ActorId, slot: SlotId) -> u32 {
        self.rows
            .get(actor.index())
            .map(|row| row.get(slot))
            .unwrap_or(0)
    }

    /// Adds a purchased grant to one `(actor, slot)` counter.
    pub fn add(&mut self, actor: ActorId, slot: SlotId, grant: u32) {
        if !actor.in_roster(self.rows.len()) {
            return;
        }
        if let Some(row) = self.rows.get_mut(actor.index()) {
            row.add(slot, grant);
        }
    }

    /// Zeroes every slot counter for one actor.
    pub fn clear_actor(&mut self, actor: ActorId) {
        if let Some(row) = self.rows.get_mut(actor.index()) {
            row.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_default_to_zero() {
        let mut table = ProgressTable::new();
        table.ensure_roster(4).unwrap();
        assert_eq!(table.bonus(ActorId(3), SlotId(0)), 0);
    }

    #[test]
    fn ensure_roster_preserves_existing_rows() {
        let mut table = ProgressTable::new();
        table.ensure_roster(3).unwrap();
        table.add(ActorId(2), SlotId(1), 10);

        table.ensure_roster(5).unwrap();
        assert_eq!(table.bonus(ActorId(2), SlotId(1)), 10);
        assert_eq!(table.bonus(ActorId(4), SlotId(1)), 0);
    }

    #[test]
    fn clear_actor_only_touches_one_row() {
        let mut table = ProgressTable::new();
        table.ensure_roster(4).unwrap();
        table.add(ActorId(1), SlotId(0), 10);
        table.add(ActorId(2), SlotId(0), 20);

        table.clear_actor(ActorId(1));
        assert_eq!(table.bonus(ActorId(1), SlotId(0)), 0);
        assert_eq!(table.bonus(ActorId(2), SlotId(0)), 20);
    }

    #[test]
    fn writes_outside_roster_are_ignored() {
        let mut table = ProgressTable::new();
        table.ensure_roster(3).unwrap();
        table.add(ActorId(0), SlotId(0), 5);
        table.add(ActorId(7), SlotId(0), 5);
        assert_eq!(table.bonus(ActorId(0), SlotId(0)), 0);
        assert_eq!(table.bonus(ActorId(7), SlotId(0)), 0);
    }
}
