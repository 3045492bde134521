//! Roster/party fixture loader.

use std::path::Path;

use growth_core::{
    ActorId, ClassId, GrowthConfig, PartySnapshot, RosterRecord, RosterSnapshot, StateId,
};

use crate::formats::RosterFile;
use crate::loaders::{LoadResult, read_file};

/// Loader for roster and party snapshots from TOML files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load roster/party data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<(RosterSnapshot, PartySnapshot)> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse roster/party data from TOML content.
    pub fn parse(content: &str) -> LoadResult<(RosterSnapshot, PartySnapshot)> {
        let file: RosterFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;

        if file.roster_len > GrowthConfig::MAX_ACTORS {
            anyhow::bail!(
                "Roster of {} entries exceeds the maximum of {}",
                file.roster_len,
                GrowthConfig::MAX_ACTORS
            );
        }

        let mut roster = RosterSnapshot::new(file.roster_len);
        for actor in &file.actors {
            let id = ActorId(actor.id);
            if !id.in_roster(file.roster_len) {
                anyhow::bail!(
                    "Actor id {} is outside the roster of {} entries",
                    actor.id,
                    file.roster_len
                );
            }
            let mut record = RosterRecord::new(id, ClassId(actor.class));
            record.alive = actor.alive;
            for state in &actor.states {
                record = record.with_state(StateId(*state));
            }
            for rate in &actor.state_rates {
                record = record.with_state_rate(StateId(rate.state), rate.rate);
            }
            roster.push_record(record);
        }

        let members: Vec<ActorId> = file.party.iter().copied().map(ActorId).collect();
        let mut party = PartySnapshot::new(members);
        if let Some(battle) = file.battle {
            party = party.with_battle_members(battle.into_iter().map(ActorId).collect());
        }

        Ok((roster, party))
    }
}
