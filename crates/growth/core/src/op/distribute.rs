//! Pool distribution across a target group.

use super::GrowthTransition;
use super::target::TargetGroup;
use crate::env::{GrowthEnv, OracleError};
use crate::error::{ErrorSeverity, GrowthError};
use crate::state::{ActorId, GrowthState};

/// Distributes a signed point pool across the members of a target group.
///
/// When `split_evenly` is set and the policy allows dividing
/// ([`TargetGroup::divides_pool`]), each member receives
/// `floor(amount / group_len)`; otherwise each member receives the full
/// amount. Each member's share is then scaled by their effectiveness rate
/// and the resulting balance is normalized round-then-clamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributeAction {
    pub amount: i64,
    pub target: TargetGroup,
    pub split_evenly: bool,
}

impl DistributeAction {
    pub fn new(amount: i64, target: TargetGroup, split_evenly: bool) -> Self {
        Self {
            amount,
            target,
            split_evenly,
        }
    }
}

/// Outcome summary for a completed distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributeReceipt {
    /// The resolved recipients, in selection order.
    pub recipients: Vec<ActorId>,
    /// Per-recipient base amount before the effectiveness rate (0 when the
    /// selection was empty).
    pub share: i64,
}

/// Errors that can occur during distribution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributeError {
    /// A required oracle was missing.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The ledger was never sized to the roster.
    #[error("point ledger has not been initialized")]
    LedgerUninitialized,
}

impl GrowthError for DistributeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::LedgerUninitialized => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::LedgerUninitialized => "DISTRIBUTE_LEDGER_UNINITIALIZED",
        }
    }
}

impl GrowthTransition for DistributeAction {
    type Error = DistributeError;
    type Result = DistributeReceipt;

    fn pre_validate(&self, state: &GrowthState, _env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        if !state.ledger.is_initialized() {
            return Err(DistributeError::LedgerUninitialized);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GrowthState,
        env: &GrowthEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let recipients = self.target.resolve(env)?;
        if recipients.is_empty() {
            return Ok(DistributeReceipt {
                recipients,
                share: 0,
            });
        }

        // Floor division, so negative pools divide downward as well.
        let share = if self.split_evenly && self.target.divides_pool() {
            self.amount.div_euclid(recipients.len() as i64)
        } else {
            self.amount
        };

        let roster = env.roster()?;
        let state_id = env.config()?.effectiveness_state();
        for &actor in &recipients {
            let rate = roster.state_rate(actor, state_id);
            let next = f64::from(state.ledger.get(actor)) + share as f64 * rate;
            state.ledger.store(actor, next);
        }
        state.ledger.normalize_all();

        Ok(DistributeReceipt { recipients, share })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::execute;
    use crate::config::GrowthConfig;
    use crate::env::{ConfigSnapshot, Env, PartySnapshot, RosterRecord, RosterSnapshot};
    use crate::state::ClassId;

    fn ids(raw: &[u32]) -> Vec<ActorId> {
        raw.iter().copied().map(ActorId).collect()
    }

    fn four_member_setup() -> (RosterSnapshot, PartySnapshot, ConfigSnapshot, GrowthState) {
        let roster = RosterSnapshot::new(6)
            .with_record(RosterRecord::new(ActorId(1), ClassId(3)))
            .with_record(RosterRecord::new(ActorId(2), ClassId(1)))
            .with_record(RosterRecord::new(ActorId(3), ClassId(3)))
            .with_record(RosterRecord::new(ActorId(4), ClassId(2)));
        let party = PartySnapshot::new(ids(&[1, 2, 3, 4]));
        let config = ConfigSnapshot::new(GrowthConfig::default());
        let mut state = GrowthState::new();
        state.ensure_roster(6).unwrap();
        (roster, party, config, state)
    }

    #[test]
    fn split_party_distribution_floors_the_share() {
        let (roster, party, config, mut state) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(100, TargetGroup::Party, true);
        let receipt = execute(&action, &mut state, &env).unwrap();

        assert_eq!(receipt.share, 25);
        for id in 1..=4 {
            assert_eq!(state.ledger.get(ActorId(id)), 25);
        }
        let total: u32 = state.ledger.iter().map(|(_, balance)| balance).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn unsplit_distribution_hands_out_the_full_amount() {
        let (roster, party, config, mut state) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(100, TargetGroup::Party, false);
        execute(&action, &mut state, &env).unwrap();

        for id in 1..=4 {
            assert_eq!(state.ledger.get(ActorId(id)), 100);
        }
    }

    #[test]
    fn class_match_ignores_the_split_flag() {
        let (roster, party, config, mut state) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(50, TargetGroup::ClassMatch(ClassId(3)), true);
        let receipt = execute(&action, &mut state, &env).unwrap();

        assert_eq!(receipt.recipients, ids(&[1, 3]));
        assert_eq!(receipt.share, 50);
        assert_eq!(state.ledger.get(ActorId(1)), 50);
        assert_eq!(state.ledger.get(ActorId(2)), 0);
        assert_eq!(state.ledger.get(ActorId(3)), 50);
    }

    #[test]
    fn effectiveness_rate_scales_the_share() {
        let roster = RosterSnapshot::new(4)
            .with_record(
                RosterRecord::new(ActorId(1), ClassId(1))
                    .with_state_rate(GrowthConfig::DEFAULT_EFFECTIVENESS_STATE, 2.0),
            )
            .with_record(
                RosterRecord::new(ActorId(2), ClassId(1))
                    .with_state_rate(GrowthConfig::DEFAULT_EFFECTIVENESS_STATE, 0.0),
            )
            .with_record(RosterRecord::new(ActorId(3), ClassId(1)));
        let party = PartySnapshot::new(ids(&[1, 2, 3]));
        let config = ConfigSnapshot::new(GrowthConfig::default());
        let mut state = GrowthState::new();
        state.ensure_roster(4).unwrap();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(10, TargetGroup::Party, false);
        execute(&action, &mut state, &env).unwrap();

        assert_eq!(state.ledger.get(ActorId(1)), 20);
        assert_eq!(state.ledger.get(ActorId(2)), 0);
        assert_eq!(state.ledger.get(ActorId(3)), 10);
    }

    #[test]
    fn negative_pools_divide_downward_and_clamp_at_zero() {
        let (roster, party, config, mut state) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        for id in 1..=4 {
            state.ledger.credit(ActorId(id), 50);
        }

        // floor(-90 / 4) = -23, not -22
        let action = DistributeAction::new(-90, TargetGroup::Party, true);
        let receipt = execute(&action, &mut state, &env).unwrap();
        assert_eq!(receipt.share, -23);
        for id in 1..=4 {
            assert_eq!(state.ledger.get(ActorId(id)), 27);
        }

        let drain = DistributeAction::new(-1000, TargetGroup::Party, false);
        execute(&drain, &mut state, &env).unwrap();
        for id in 1..=4 {
            assert_eq!(state.ledger.get(ActorId(id)), 0);
        }
    }

    #[test]
    fn balances_clamp_at_the_ceiling() {
        let (roster, party, config, mut state) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(
            i64::from(GrowthConfig::MAX_POINT_BALANCE) + 500,
            TargetGroup::Single(ActorId(1)),
            false,
        );
        execute(&action, &mut state, &env).unwrap();
        assert_eq!(
            state.ledger.get(ActorId(1)),
            GrowthConfig::MAX_POINT_BALANCE
        );
    }

    #[test]
    fn empty_selection_is_a_successful_no_op() {
        let (roster, _, config, mut state) = four_member_setup();
        let party = PartySnapshot::new(Vec::new());
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(100, TargetGroup::Party, true);
        let receipt = execute(&action, &mut state, &env).unwrap();

        assert!(receipt.recipients.is_empty());
        assert_eq!(receipt.share, 0);
        assert!(state.ledger.iter().all(|(_, balance)| balance == 0));
    }

    #[test]
    fn rejects_an_uninitialized_ledger() {
        let (roster, party, config, _) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();
        let mut state = GrowthState::new();

        let action = DistributeAction::new(100, TargetGroup::Party, true);
        let err = execute(&action, &mut state, &env).unwrap_err();
        assert_eq!(err, DistributeError::LedgerUninitialized);
    }

    #[test]
    fn all_policy_reaches_non_party_roster_ids() {
        let (roster, party, config, mut state) = four_member_setup();
        let env = Env::with_all(&roster, &party, &config).into_growth_env();

        let action = DistributeAction::new(10, TargetGroup::All, false);
        let receipt = execute(&action, &mut state, &env).unwrap();

        assert_eq!(receipt.recipients, ids(&[1, 2, 3, 4, 5]));
        assert_eq!(state.ledger.get(ActorId(5)), 10);
    }
}
