//! Snapshot-backed oracle implementations.
//!
//! Snapshots bundle plain data captured from the host (or built by hand in
//! tests) and implement the oracle traits over it. This is the explicit
//! application-state context — roster snapshot, party snapshot, status
//! lookup — that replaces ambient global singletons.

use super::config::ConfigOracle;
use super::party::PartyOracle;
use super::roster::RosterOracle;
use crate::config::GrowthConfig;
use crate::slots::SlotTable;
use crate::state::{ActorId, ClassId, StateId};

/// Plain-data record for one roster character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterRecord {
    pub id: ActorId,
    pub class: ClassId,
    pub alive: bool,
    /// Status effects currently affecting the character.
    pub states: Vec<StateId>,
    /// Per-status potency overrides; absent entries read as 1.0.
    pub state_rates: Vec<(StateId, f64)>,
}

impl RosterRecord {
    pub fn new(id: ActorId, class: ClassId) -> Self {
        Self {
            id,
            class,
            alive: true,
            states: Vec::new(),
            state_rates: Vec::new(),
        }
    }

    /// Marks the character as affected by a status effect.
    pub fn with_state(mut self, state: StateId) -> Self {
        self.states.push(state);
        self
    }

    /// Sets a potency override for a status effect.
    pub fn with_state_rate(mut self, state: StateId, rate: f64) -> Self {
        self.state_rates.push((state, rate));
        self
    }

    /// Marks the character as dead.
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }
}

/// Roster data captured as plain values.
///
/// Characters without a record are treated as unknown: not alive, no class,
/// neutral effectiveness.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterSnapshot {
    roster_len: usize,
    records: Vec<RosterRecord>,
}

impl RosterSnapshot {
    /// Creates a snapshot for a roster of the given length (including the
    /// reserved index 0).
    pub fn new(roster_len: usize) -> Self {
        Self {
            roster_len,
            records: Vec::new(),
        }
    }

    /// Adds a character record (builder pattern).
    pub fn with_record(mut self, record: RosterRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Adds a character record.
    pub fn push_record(&mut self, record: RosterRecord) {
        self.records.push(record);
    }

    fn record(&self, actor: ActorId) -> Option<&RosterRecord> {
        self.records.iter().find(|r| r.id == actor)
    }
}

impl RosterOracle for RosterSnapshot {
    fn roster_len(&self) -> usize {
        self.roster_len
    }

    fn is_alive(&self, actor: ActorId) -> bool {
        self.record(actor).is_some_and(|r| r.alive)
    }

    fn class_of(&self, actor: ActorId) -> Option<ClassId> {
        self.record(actor).map(|r| r.class)
    }

    fn state_rate(&self, actor: ActorId, state: StateId) -> f64 {
        self.record(actor)
            .and_then(|r| {
                r.state_rates
                    .iter()
                    .find(|(s, _)| *s == state)
                    .map(|(_, rate)| *rate)
            })
            .unwrap_or(1.0)
    }

    fn is_state_affected(&self, actor: ActorId, state: StateId) -> bool {
        self.record(actor)
            .is_some_and(|r| r.states.contains(&state))
    }
}

/// Party composition captured as plain values.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartySnapshot {
    members: Vec<ActorId>,
    battle_members: Vec<ActorId>,
}

impl PartySnapshot {
    /// Creates a snapshot where the whole party is also the battle party.
    pub fn new(members: Vec<ActorId>) -> Self {
        let battle_members = members.clone();
        Self {
            members,
            battle_members,
        }
    }

    /// Overrides the battle subset (builder pattern).
    pub fn with_battle_members(mut self, battle_members: Vec<ActorId>) -> Self {
        self.battle_members = battle_members;
        self
    }
}

impl PartyOracle for PartySnapshot {
    fn members(&self) -> Vec<ActorId> {
        self.members.clone()
    }

    fn battle_members(&self) -> Vec<ActorId> {
        self.battle_members.clone()
    }
}

/// Config oracle backed by an owned [`GrowthConfig`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigSnapshot {
    config: GrowthConfig,
}

impl ConfigSnapshot {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// The wrapped configuration.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }
}

impl ConfigOracle for ConfigSnapshot {
    fn slots(&self) -> &SlotTable {
        &self.config.slots
    }

    fn effectiveness_state(&self) -> StateId {
        self.config.effectiveness_state
    }

    fn reset_enabled(&self) -> bool {
        self.config.reset_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_characters_read_neutral_defaults() {
        let roster = RosterSnapshot::new(10);
        assert!(!roster.is_alive(ActorId(3)));
        assert_eq!(roster.class_of(ActorId(3)), None);
        assert_eq!(roster.state_rate(ActorId(3), StateId(5)), 1.0);
        assert!(!roster.is_state_affected(ActorId(3), StateId(5)));
    }

    #[test]
    fn state_rate_reads_overrides() {
        let roster = RosterSnapshot::new(10)
            .with_record(RosterRecord::new(ActorId(1), ClassId(2)).with_state_rate(StateId(5), 2.0));
        assert_eq!(roster.state_rate(ActorId(1), StateId(5)), 2.0);
        assert_eq!(roster.state_rate(ActorId(1), StateId(6)), 1.0);
    }
}
