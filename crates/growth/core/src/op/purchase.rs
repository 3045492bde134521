//! Stat increment purchase for one character and slot.
//!
//! Purchases are gated by availability predicates, not by player-facing
//! errors: the presentation surface disables rows whose preconditions fail,
//! so a rejected purchase is a programming or wiring signal, never a
//! gameplay message.

use super::GrowthTransition;
use crate::env::{GrowthEnv, OracleError};
use crate::error::{ErrorSeverity, GrowthError};
use crate::slots::{SlotId, SlotTable};
use crate::state::{ActorId, GrowthState};

/// Purchases one increment of one stat slot for one character.
///
/// On success the slot's bonus grows by `min(increment, cap - bonus)` and
/// the character's balance drops by the slot's cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseAction {
    pub actor: ActorId,
    pub slot: SlotId,
}

impl PurchaseAction {
    pub fn new(actor: ActorId, slot: SlotId) -> Self {
        Self { actor, slot }
    }
}

/// Outcome summary for a completed purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseReceipt {
    /// Amount actually granted (truncated at the cap).
    pub grant: u32,
    /// Points consumed.
    pub cost: u32,
    /// Cumulative bonus after the purchase.
    pub bonus: u32,
    /// Balance remaining after the purchase.
    pub balance: u32,
}

/// Errors that can occur during a purchase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PurchaseError {
    /// A required oracle was missing.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The ledger was never sized to the roster.
    #[error("point ledger has not been initialized")]
    LedgerUninitialized,

    /// The actor id does not address a roster entry.
    #[error("actor {actor} is outside the roster")]
    UnknownActor { actor: ActorId },

    /// The slot index is beyond the configured table.
    #[error("slot {slot} is not configured")]
    UnknownSlot { slot: SlotId },

    /// The slot's cumulative bonus already reached its cap.
    #[error("slot {slot} is already at its cap")]
    AtCap { slot: SlotId },

    /// The actor cannot afford the slot's cost.
    #[error("insufficient points: cost {cost}, balance {balance}")]
    InsufficientPoints { cost: u32, balance: u32 },

    /// The cap invariant broke after mutation.
    #[error("slot {slot} exceeds its cap after purchase")]
    CapExceeded { slot: SlotId },
}

impl GrowthError for PurchaseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::LedgerUninitialized => ErrorSeverity::Internal,
            Self::UnknownActor { .. } | Self::UnknownSlot { .. } => ErrorSeverity::Validation,
            Self::AtCap { .. } | Self::InsufficientPoints { .. } => ErrorSeverity::Recoverable,
            Self::CapExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::LedgerUninitialized => "PURCHASE_LEDGER_UNINITIALIZED",
            Self::UnknownActor { .. } => "PURCHASE_UNKNOWN_ACTOR",
            Self::UnknownSlot { .. } => "PURCHASE_UNKNOWN_SLOT",
            Self::AtCap { .. } => "PURCHASE_AT_CAP",
            Self::InsufficientPoints { .. } => "PURCHASE_INSUFFICIENT_POINTS",
            Self::CapExceeded { .. } => "PURCHASE_CAP_EXCEEDED",
        }
    }
}

impl GrowthTransition for PurchaseAction {
    type Error = PurchaseError;
    type Result = PurchaseReceipt;

    fn pre_validate(&self, state: &GrowthState, env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        let slots = env.config()?.slots();
        let Some(slot_cfg) = slots.get(self.slot) else {
            return Err(PurchaseError::UnknownSlot { slot: self.slot });
        };
        if !state.ledger.is_initialized() {
            return Err(PurchaseError::LedgerUninitialized);
        }
        if !state.ledger.contains(self.actor) {
            return Err(PurchaseError::UnknownActor { actor: self.actor });
        }
        if state.progress.bonus(self.actor, self.slot) >= slot_cfg.cap {
            return Err(PurchaseError::AtCap { slot: self.slot });
        }
        let balance = state.ledger.get(self.actor);
        if slot_cfg.cost > balance {
            return Err(PurchaseError::InsufficientPoints {
                cost: slot_cfg.cost,
                balance,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GrowthState,
        env: &GrowthEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let slots = env.config()?.slots();
        let slot_cfg = slots
            .get(self.slot)
            .ok_or(PurchaseError::UnknownSlot { slot: self.slot })?;

        let bonus = state.progress.bonus(self.actor, self.slot);
        let grant = slot_cfg.increment.min(slot_cfg.cap - bonus);
        state.progress.add(self.actor, self.slot, grant);
        state.ledger.debit(self.actor, slot_cfg.cost);

        Ok(PurchaseReceipt {
            grant,
            cost: slot_cfg.cost,
            bonus: bonus + grant,
            balance: state.ledger.get(self.actor),
        })
    }

    fn post_validate(&self, state: &GrowthState, env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        let slots = env.config()?.slots();
        if let Some(slot_cfg) = slots.get(self.slot) {
            if state.progress.bonus(self.actor, self.slot) > slot_cfg.cap {
                return Err(PurchaseError::CapExceeded { slot: self.slot });
            }
        }
        Ok(())
    }
}

/// True iff the slot can still grow for this actor (bonus below cap).
///
/// This is the predicate gating both display and purchase; unknown slots
/// have no headroom.
pub fn has_headroom(state: &GrowthState, actor: ActorId, slot: SlotId, slots: &SlotTable) -> bool {
    slots
        .get(slot)
        .is_some_and(|cfg| state.progress.bonus(actor, slot) < cfg.cap)
}

/// The amount a purchase would grant right now (0 at cap or for unknown
/// slots).
pub fn pending_grant(state: &GrowthState, actor: ActorId, slot: SlotId, slots: &SlotTable) -> u32 {
    let Some(cfg) = slots.get(slot) else { return 0 };
    let bonus = state.progress.bonus(actor, slot);
    if bonus >= cfg.cap {
        return 0;
    }
    cfg.increment.min(cfg.cap - bonus)
}

/// True iff the actor can purchase the slot right now: headroom remains and
/// the cost is covered by the balance.
pub fn can_purchase(state: &GrowthState, actor: ActorId, slot: SlotId, slots: &SlotTable) -> bool {
    has_headroom(state, actor, slot, slots)
        && slots
            .get(slot)
            .is_some_and(|cfg| cfg.cost <= state.ledger.get(actor))
}
