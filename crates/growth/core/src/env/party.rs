//! Party oracle interface.

use crate::state::ActorId;

/// Oracle providing the current party composition.
pub trait PartyOracle: Send + Sync {
    /// The full current party in marching order.
    fn members(&self) -> Vec<ActorId>;

    /// The subset of the party active in battle, in order.
    fn battle_members(&self) -> Vec<ActorId>;
}
