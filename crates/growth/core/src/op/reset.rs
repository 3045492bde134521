//! Growth reset with refund.

use super::GrowthTransition;
use crate::env::{GrowthEnv, OracleError};
use crate::error::{ErrorSeverity, GrowthError};
use crate::state::{ActorId, GrowthState};

/// Zeroes all of one character's purchased growth and refunds its point
/// value.
///
/// For each slot with a positive bonus the refund accrues
/// `round(bonus / increment * cost)`; slots configured with a zero
/// increment are skipped so the accounting never divides by zero. The
/// refund is credited with the standard round-then-clamp, so the balance
/// never decreases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetGrowthAction {
    pub actor: ActorId,
}

impl ResetGrowthAction {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

/// Outcome summary for a completed reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetReceipt {
    /// Total points credited back.
    pub refund: u64,
}

/// Errors that can occur during a growth reset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetError {
    /// A required oracle was missing.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// No reset label is configured, so the feature is disabled.
    #[error("growth reset is not enabled")]
    FeatureDisabled,

    /// The ledger was never sized to the roster.
    #[error("point ledger has not been initialized")]
    LedgerUninitialized,

    /// The actor id does not address a roster entry.
    #[error("actor {actor} is outside the roster")]
    UnknownActor { actor: ActorId },

    /// Purchased growth survived the reset.
    #[error("actor {actor} still has purchased growth after reset")]
    ProgressRemains { actor: ActorId },
}

impl GrowthError for ResetError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::FeatureDisabled => ErrorSeverity::Validation,
            Self::LedgerUninitialized => ErrorSeverity::Internal,
            Self::UnknownActor { .. } => ErrorSeverity::Validation,
            Self::ProgressRemains { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::FeatureDisabled => "RESET_FEATURE_DISABLED",
            Self::LedgerUninitialized => "RESET_LEDGER_UNINITIALIZED",
            Self::UnknownActor { .. } => "RESET_UNKNOWN_ACTOR",
            Self::ProgressRemains { .. } => "RESET_PROGRESS_REMAINS",
        }
    }
}

impl GrowthTransition for ResetGrowthAction {
    type Error = ResetError;
    type Result = ResetReceipt;

    fn pre_validate(&self, state: &GrowthState, env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        if !env.config()?.reset_enabled() {
            return Err(ResetError::FeatureDisabled);
        }
        if !state.ledger.is_initialized() {
            return Err(ResetError::LedgerUninitialized);
        }
        if !state.ledger.contains(self.actor) {
            return Err(ResetError::UnknownActor { actor: self.actor });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GrowthState,
        env: &GrowthEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let slots = env.config()?.slots();

        let mut refund: u64 = 0;
        for (slot, cfg) in slots.iter() {
            let bonus = state.progress.bonus(self.actor, slot);
            if bonus == 0 || cfg.increment == 0 {
                continue;
            }
            let value = f64::from(bonus) / f64::from(cfg.increment) * f64::from(cfg.cost);
            refund += value.round() as u64;
        }

        state.progress.clear_actor(self.actor);
        state.ledger.credit(self.actor, refund as i64);

        Ok(ResetReceipt { refund })
    }

    fn post_validate(&self, state: &GrowthState, env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        let slots = env.config()?.slots();
        for (slot, _) in slots.iter() {
            if state.progress.bonus(self.actor, slot) != 0 {
                return Err(ResetError::ProgressRemains { actor: self.actor });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::execute;
    use crate::config::GrowthConfig;
    use crate::env::{ConfigSnapshot, Env, PartySnapshot, RosterRecord, RosterSnapshot};
    use crate::slots::{SlotConfig, SlotId, SlotTable};
    use crate::state::ClassId;

    fn two_slot_config() -> GrowthConfig {
        let mut slots = SlotTable::new();
        slots.push(SlotConfig::new(10, 50, 100));
        slots.push(SlotConfig::new(10, 50, 100));
        GrowthConfig {
            slots,
            ..GrowthConfig::default()
        }
    }

    fn setup(config: GrowthConfig) -> (RosterSnapshot, PartySnapshot, ConfigSnapshot, GrowthState) {
        let roster =
            RosterSnapshot::new(3).with_record(RosterRecord::new(ActorId(1), ClassId(1)));
        let party = PartySnapshot::new(vec![ActorId(1)]);
        let mut state = GrowthState::new();
        state.ensure_roster(3).unwrap();
        (roster, party, ConfigSnapshot::new(config), state)
    }

    #[test]
    fn refunds_the_point_value_of_purchased_growth() {
        let (roster, party, config, mut state) = setup(two_slot_config());
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        state.progress.add(ActorId(1), SlotId(0), 90);
        state.progress.add(ActorId(1), SlotId(1), 5);

        let receipt = execute(&ResetGrowthAction::new(ActorId(1)), &mut state, &env).unwrap();

        // round(90/10*50) + round(5/10*50) = 450 + 25
        assert_eq!(receipt.refund, 475);
        assert_eq!(state.ledger.get(ActorId(1)), 475);
        assert_eq!(state.progress.bonus(ActorId(1), SlotId(0)), 0);
        assert_eq!(state.progress.bonus(ActorId(1), SlotId(1)), 0);
    }

    #[test]
    fn reset_never_decreases_the_balance() {
        let (roster, party, config, mut state) = setup(two_slot_config());
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        state.ledger.credit(ActorId(1), 120);

        let receipt = execute(&ResetGrowthAction::new(ActorId(1)), &mut state, &env).unwrap();
        assert_eq!(receipt.refund, 0);
        assert_eq!(state.ledger.get(ActorId(1)), 120);
    }

    #[test]
    fn zero_increment_slots_are_skipped() {
        let mut slots = SlotTable::new();
        slots.push(SlotConfig::new(0, 50, 100));
        slots.push(SlotConfig::new(10, 50, 100));
        let config = GrowthConfig {
            slots,
            ..GrowthConfig::default()
        };
        let (roster, party, config, mut state) = setup(config);
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        state.progress.add(ActorId(1), SlotId(0), 40);
        state.progress.add(ActorId(1), SlotId(1), 20);

        let receipt = execute(&ResetGrowthAction::new(ActorId(1)), &mut state, &env).unwrap();

        // Only the second slot contributes: round(20/10*50) = 100.
        assert_eq!(receipt.refund, 100);
        assert_eq!(state.progress.bonus(ActorId(1), SlotId(0)), 0);
    }

    #[test]
    fn disabled_without_a_reset_label() {
        let config = GrowthConfig {
            reset_label: None,
            ..two_slot_config()
        };
        let (roster, party, config, mut state) = setup(config);
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        state.progress.add(ActorId(1), SlotId(0), 50);

        let err = execute(&ResetGrowthAction::new(ActorId(1)), &mut state, &env).unwrap_err();
        assert_eq!(err, ResetError::FeatureDisabled);
        assert_eq!(state.progress.bonus(ActorId(1), SlotId(0)), 50);
    }

    #[test]
    fn only_the_reset_actor_is_touched() {
        let (roster, party, config, mut state) = setup(two_slot_config());
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        state.progress.add(ActorId(1), SlotId(0), 10);
        state.progress.add(ActorId(2), SlotId(0), 30);

        execute(&ResetGrowthAction::new(ActorId(1)), &mut state, &env).unwrap();
        assert_eq!(state.progress.bonus(ActorId(2), SlotId(0)), 30);
    }

    #[test]
    fn fractional_slot_values_round_per_slot() {
        let mut slots = SlotTable::new();
        slots.push(SlotConfig::new(4, 25, 100));
        let config = GrowthConfig {
            slots,
            ..GrowthConfig::default()
        };
        let (roster, party, config, mut state) = setup(config);
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        state.progress.add(ActorId(1), SlotId(0), 10);

        // 10/4*25 = 62.5, rounded to 63.
        let receipt = execute(&ResetGrowthAction::new(ActorId(1)), &mut state, &env).unwrap();
        assert_eq!(receipt.refund, 63);
    }
}
