//! Growth operations - validated state transitions.
//!
//! Every mutation of [`GrowthState`] is expressed as a transition type with
//! explicit validation phases:
//! - `target`: selection policies for point distribution
//! - `distribute`: pool distribution across a target group
//! - `purchase`: one stat increment for one character, plus the
//!   availability predicates that gate display and purchase
//! - `reset`: refund-and-zero of one character's growth
pub mod distribute;
pub mod purchase;
pub mod reset;
pub mod target;

pub use distribute::{DistributeAction, DistributeError, DistributeReceipt};
pub use purchase::{
    PurchaseAction, PurchaseError, PurchaseReceipt, can_purchase, has_headroom, pending_grant,
};
pub use reset::{ResetError, ResetGrowthAction, ResetReceipt};
pub use target::{TargetGroup, TargetGroupError, TargetToken};

use crate::env::GrowthEnv;
use crate::state::GrowthState;

/// Defines how a concrete operation mutates growth state.
///
/// Operations run to completion within one logical step; the caller holds
/// the only mutable reference, so each transition is atomic from the
/// host's perspective.
pub trait GrowthTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GrowthState, _env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the operation by mutating the growth state directly.
    fn apply(&self, state: &mut GrowthState, env: &GrowthEnv<'_>)
    -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GrowthState, _env: &GrowthEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Runs a transition through its full validate/apply/validate pipeline.
pub fn execute<T: GrowthTransition>(
    op: &T,
    state: &mut GrowthState,
    env: &GrowthEnv<'_>,
) -> Result<T::Result, T::Error> {
    op.pre_validate(state, env)?;
    let result = op.apply(state, env)?;
    op.post_validate(state, env)?;
    Ok(result)
}
