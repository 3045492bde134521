//! Target selection policies for point distribution.
//!
//! The distribute command names its recipients through a single-letter wire
//! token plus an auxiliary numeric argument. Tokens resolve into the closed
//! [`TargetGroup`] enum and from there into concrete roster ids via static
//! dispatch.

use crate::env::{GrowthEnv, OracleError};
use crate::error::{ErrorSeverity, GrowthError};
use crate::state::{ActorId, ClassId, StateId};

/// Single-letter wire tokens accepted by the distribute command.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum TargetToken {
    /// Every roster id.
    #[strum(serialize = "A")]
    AllActors,

    /// The active battle party.
    #[strum(serialize = "B")]
    BattleMembers,

    /// Party members whose class id matches the auxiliary value.
    #[strum(serialize = "C")]
    ClassMatch,

    /// The last party slot.
    #[strum(serialize = "L")]
    LastMember,

    /// The full current party.
    #[strum(serialize = "P")]
    PartyMembers,

    /// Party members affected by the status named by the auxiliary value.
    #[strum(serialize = "S")]
    StatusMatch,

    /// The one actor whose id matches the auxiliary value.
    #[strum(serialize = "V")]
    SingleActor,
}

/// Closed set of selection policies.
///
/// Auxiliary data (class id, status id, explicit actor id) is bound at
/// parse time, so resolution needs no further argument plumbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetGroup {
    /// Every roster id `1..roster_len`.
    All,
    /// The active battle party.
    Battle,
    /// The full current party.
    Party,
    /// Full-party members with a matching class id.
    ClassMatch(ClassId),
    /// Full-party members affected by a status effect.
    StatusMatch(StateId),
    /// The last party slot (an empty party selects nobody).
    LastMember,
    /// Exactly one explicit id (ids outside the roster select nobody).
    Single(ActorId),
}

impl TargetGroup {
    /// Parses a wire token, binding the auxiliary argument value where the
    /// policy needs one.
    pub fn from_token(token: &str, aux: i64) -> Result<Self, TargetGroupError> {
        let token: TargetToken = token.parse().map_err(|_| TargetGroupError::UnknownToken {
            token: token.to_string(),
        })?;
        let aux = aux.max(0) as u32;
        Ok(match token {
            TargetToken::AllActors => Self::All,
            TargetToken::BattleMembers => Self::Battle,
            TargetToken::PartyMembers => Self::Party,
            TargetToken::ClassMatch => Self::ClassMatch(ClassId(aux)),
            TargetToken::StatusMatch => Self::StatusMatch(StateId(aux)),
            TargetToken::LastMember => Self::LastMember,
            TargetToken::SingleActor => Self::Single(ActorId(aux)),
        })
    }

    /// Whether split-evenly may divide the pool for this policy.
    ///
    /// Class and status matches hand every qualifying member the full,
    /// undivided amount; the single-target policies have nothing to divide.
    pub fn divides_pool(&self) -> bool {
        matches!(self, Self::All | Self::Battle | Self::Party)
    }

    /// Resolves the policy into concrete roster ids, in selection order.
    pub fn resolve(&self, env: &GrowthEnv<'_>) -> Result<Vec<ActorId>, OracleError> {
        match self {
            Self::All => {
                let len = env.roster()?.roster_len() as u32;
                Ok((1..len).map(ActorId).collect())
            }
            Self::Battle => Ok(env.party()?.battle_members()),
            Self::Party => Ok(env.party()?.members()),
            Self::ClassMatch(class) => {
                let roster = env.roster()?;
                Ok(env
                    .party()?
                    .members()
                    .into_iter()
                    .filter(|actor| roster.class_of(*actor) == Some(*class))
                    .collect())
            }
            Self::StatusMatch(state) => {
                let roster = env.roster()?;
                Ok(env
                    .party()?
                    .members()
                    .into_iter()
                    .filter(|actor| roster.is_state_affected(*actor, *state))
                    .collect())
            }
            Self::LastMember => Ok(env.party()?.members().last().copied().into_iter().collect()),
            Self::Single(actor) => {
                let len = env.roster()?.roster_len();
                if actor.in_roster(len) {
                    Ok(vec![*actor])
                } else {
                    Ok(Vec::new())
                }
            }
        }
    }
}

/// Errors raised while parsing a target token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetGroupError {
    /// The token is not one of the seven selection policies.
    #[error("unrecognized target token `{token}`")]
    UnknownToken { token: String },
}

impl GrowthError for TargetGroupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownToken { .. } => "TARGET_UNKNOWN_TOKEN",
        }
    }
}
