//! Upgradeable stat slots and their purchase tables.
//!
//! Each slot is one base-attribute channel with three fixed values applied
//! uniformly to all characters: the amount added per purchase, the point
//! cost per purchase, and the maximum cumulative bonus obtainable
//! (exclusive of any bonus granted by equipment).

use core::fmt;

use arrayvec::ArrayVec;

use crate::config::GrowthConfig;

/// Ordered index of one upgradeable stat slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub u8);

impl SlotId {
    /// Dense-storage index for this slot.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Purchase parameters for a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotConfig {
    /// Amount added to the stat per purchase (truncated at the cap).
    pub increment: u32,
    /// Points consumed per purchase.
    pub cost: u32,
    /// Maximum cumulative purchased bonus for this slot.
    pub cap: u32,
}

impl SlotConfig {
    pub const fn new(increment: u32, cost: u32, cap: u32) -> Self {
        Self {
            increment,
            cost,
            cap,
        }
    }
}

/// Ordered table of slot configurations (at most
/// [`GrowthConfig::MAX_STAT_SLOTS`] entries).
///
/// The table's length defines how many slots the growth system exposes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotTable {
    slots: ArrayVec<SlotConfig, { GrowthConfig::MAX_STAT_SLOTS }>,
}

impl SlotTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Appends a slot configuration.
    ///
    /// Returns false (leaving the table unchanged) once the table is full.
    pub fn push(&mut self, slot: SlotConfig) -> bool {
        if self.slots.is_full() {
            return false;
        }
        self.slots.push(slot);
        true
    }

    /// Number of configured slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slots are configured.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the configuration for a slot, if it exists.
    pub fn get(&self, slot: SlotId) -> Option<&SlotConfig> {
        self.slots.get(slot.index())
    }

    /// Returns true if the slot is within the configured range.
    pub fn contains(&self, slot: SlotId) -> bool {
        slot.index() < self.slots.len()
    }

    /// Iterates over all configured slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &SlotConfig)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, cfg)| (SlotId(i as u8), cfg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_slots_beyond_capacity() {
        let mut table = SlotTable::new();
        for _ in 0..GrowthConfig::MAX_STAT_SLOTS {
            assert!(table.push(SlotConfig::new(1, 10, 10)));
        }
        assert!(!table.push(SlotConfig::new(1, 10, 10)));
        assert_eq!(table.len(), GrowthConfig::MAX_STAT_SLOTS);
    }

    #[test]
    fn get_is_bounded_by_table_length() {
        let mut table = SlotTable::new();
        table.push(SlotConfig::new(10, 50, 100));

        assert!(table.contains(SlotId(0)));
        assert_eq!(table.get(SlotId(0)).unwrap().cost, 50);
        assert!(!table.contains(SlotId(1)));
        assert!(table.get(SlotId(1)).is_none());
    }
}
