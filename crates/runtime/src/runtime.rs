//! Orchestrator owning growth state, configuration, and oracle snapshots.

use growth_core::{
    ActorId, ConfigSnapshot, DistributeAction, Env, GrowthConfig, GrowthEnv, GrowthState,
    PartyOracle, PartySnapshot, PurchaseAction, ResetGrowthAction, RosterOracle, RosterSnapshot,
    SlotId, TargetGroup, can_purchase, execute, has_headroom, pending_grant,
};

use crate::command::{DistributeRequest, GrowthCommand};
use crate::error::Result;
use crate::events::GrowthEvent;
use crate::menu::{ActorRow, MenuEntry, MenuModel, SlotRow, StatPanel};

/// Synchronous growth runtime.
///
/// Owns the authoritative [`GrowthState`] plus the configuration and
/// roster/party snapshots, and funnels every mutation through the core
/// transitions. One confirmed host input maps to one method call; there is
/// no queue and nothing runs concurrently.
#[derive(Debug)]
pub struct GrowthRuntime {
    config: ConfigSnapshot,
    roster: RosterSnapshot,
    party: PartySnapshot,
    state: GrowthState,
}

impl GrowthRuntime {
    pub fn new(config: GrowthConfig, roster: RosterSnapshot, party: PartySnapshot) -> Self {
        Self {
            config: ConfigSnapshot::new(config),
            roster,
            party,
            state: GrowthState::new(),
        }
    }

    /// Read-only view of the growth state (for persistence by the host).
    pub fn state(&self) -> &GrowthState {
        &self.state
    }

    /// Restores previously persisted growth state.
    pub fn restore_state(&mut self, state: GrowthState) {
        self.state = state;
    }

    pub fn config(&self) -> &GrowthConfig {
        self.config.config()
    }

    /// Replaces the roster/party snapshots (e.g., after party changes).
    pub fn refresh_snapshots(&mut self, roster: RosterSnapshot, party: PartySnapshot) {
        self.roster = roster;
        self.party = party;
    }

    fn env<'a>(
        roster: &'a RosterSnapshot,
        party: &'a PartySnapshot,
        config: &'a ConfigSnapshot,
    ) -> GrowthEnv<'a> {
        Env::with_all(roster, party, config).into_growth_env()
    }

    /// Dispatches a parsed host command.
    pub fn dispatch(&mut self, command: GrowthCommand) -> Result<Vec<GrowthEvent>> {
        match command {
            GrowthCommand::InitializePoints => self.initialize_points().map(|event| vec![event]),
            GrowthCommand::Distribute(request) => self.distribute(request),
            GrowthCommand::OpenMenu => {
                self.ensure_initialized()?;
                self.state.normalize_balances();
                Ok(vec![GrowthEvent::MenuOpened])
            }
        }
    }

    /// Zeroes every roster balance; purchased growth is untouched.
    pub fn initialize_points(&mut self) -> Result<GrowthEvent> {
        let roster_len = self.roster.roster_len();
        self.state.initialize_points(roster_len)?;
        tracing::debug!(roster_len, "growth point ledger initialized");
        Ok(GrowthEvent::PointsInitialized { roster_len })
    }

    /// Distributes a point pool across a target group.
    ///
    /// An unrecognized target token is an operator mistake in event
    /// scripting: it is logged and dropped without touching state, and
    /// nothing reaches the player.
    pub fn distribute(&mut self, request: DistributeRequest) -> Result<Vec<GrowthEvent>> {
        self.ensure_initialized()?;
        let target = match TargetGroup::from_token(&request.token, request.aux) {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!(token = %request.token, error = %err, "dropping distribute command");
                return Ok(Vec::new());
            }
        };

        let action = DistributeAction::new(request.amount, target, request.split_evenly);
        let env = Self::env(&self.roster, &self.party, &self.config);
        let receipt = execute(&action, &mut self.state, &env)?;
        Ok(vec![GrowthEvent::PointsDistributed {
            recipients: receipt.recipients,
            share: receipt.share,
        }])
    }

    /// Purchases one stat increment for one character.
    ///
    /// Callers are expected to gate on [`StatPanel`] row enablement; a
    /// rejected purchase here indicates a bypassed predicate.
    pub fn purchase(&mut self, actor: ActorId, slot: SlotId) -> Result<GrowthEvent> {
        self.ensure_initialized()?;
        let action = PurchaseAction::new(actor, slot);
        let env = Self::env(&self.roster, &self.party, &self.config);
        let receipt = execute(&action, &mut self.state, &env)?;
        Ok(GrowthEvent::PurchaseApplied {
            actor,
            slot,
            grant: receipt.grant,
            cost: receipt.cost,
            confirm_sound: self.config().confirm_sound.clone(),
        })
    }

    /// Resets one character's growth for a refund.
    pub fn reset_growth(&mut self, actor: ActorId) -> Result<GrowthEvent> {
        self.ensure_initialized()?;
        let action = ResetGrowthAction::new(actor);
        let env = Self::env(&self.roster, &self.party, &self.config);
        let receipt = execute(&action, &mut self.state, &env)?;
        tracing::debug!(%actor, refund = receipt.refund, "growth reset");
        Ok(GrowthEvent::GrowthReset {
            actor,
            refund: receipt.refund,
        })
    }

    /// The auxiliary menu entry, or `None` while the gating switch is off.
    pub fn menu_entry(&self, switch_on: bool) -> Option<MenuEntry> {
        if !switch_on {
            return None;
        }
        Some(MenuEntry {
            label: self.config().menu.label.clone(),
            enabled: !self.party.members().is_empty(),
        })
    }

    /// Builds the character-list model for the growth menu.
    pub fn menu_model(&self) -> MenuModel {
        let config = self.config();
        let actors = self
            .party
            .members()
            .into_iter()
            .map(|actor| ActorRow {
                actor,
                balance: self.state.ledger.get(actor),
                selectable: self.roster.is_alive(actor),
            })
            .collect();
        MenuModel {
            actors,
            points_label: config.points_label.clone(),
            confirm_sound: config.confirm_sound.clone(),
        }
    }

    /// Builds the stat panel for one selected character.
    pub fn stat_panel(&self, actor: ActorId) -> StatPanel {
        let config = self.config();
        let rows = config
            .slots
            .iter()
            .map(|(slot, cfg)| {
                let bonus = self.state.progress.bonus(actor, slot);
                SlotRow {
                    slot,
                    bonus,
                    cap: cfg.cap,
                    pending_grant: pending_grant(&self.state, actor, slot, &config.slots),
                    cost: cfg.cost,
                    at_cap: !has_headroom(&self.state, actor, slot, &config.slots),
                    enabled: can_purchase(&self.state, actor, slot, &config.slots),
                    gauge_ratio: gauge_ratio(bonus, cfg.cap),
                }
            })
            .collect();
        StatPanel {
            actor,
            balance: self.state.ledger.get(actor),
            rows,
            reset_label: config.reset_label.clone(),
            at_cap_label: config.at_cap_label.clone(),
        }
    }

    fn ensure_initialized(&mut self) -> Result<()> {
        self.state.ensure_roster(self.roster.roster_len())?;
        Ok(())
    }
}

/// Gauge fill for a bonus/cap pair; a zero cap reads as full.
fn gauge_ratio(bonus: u32, cap: u32) -> f32 {
    if cap == 0 {
        return 1.0;
    }
    (bonus as f32 / cap as f32).clamp(0.0, 1.0)
}
