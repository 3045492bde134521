//! Roster oracle interface.

use crate::state::{ActorId, ClassId, StateId};

/// Oracle providing read-only roster-wide character data.
///
/// The roster is the full set of characters known to the host, independent
/// of current party membership. Host adapters implement this over live game
/// data; tests and offline tools use [`super::RosterSnapshot`].
pub trait RosterOracle: Send + Sync {
    /// Number of roster entries including the reserved index 0.
    ///
    /// Valid character ids run `1..roster_len()`.
    fn roster_len(&self) -> usize;

    /// Whether the character is currently alive.
    ///
    /// Dead characters stay in the roster and keep their balances, but the
    /// menu refuses to select them.
    fn is_alive(&self, actor: ActorId) -> bool;

    /// The character's class id, if the roster knows the character.
    fn class_of(&self, actor: ActorId) -> Option<ClassId>;

    /// Potency multiplier of a status effect on a character.
    ///
    /// Returns the neutral multiplier 1.0 when the character does not carry
    /// a potency entry for the effect.
    fn state_rate(&self, actor: ActorId, state: StateId) -> f64;

    /// Whether the character is currently affected by the status effect.
    fn is_state_affected(&self, actor: ActorId, state: StateId) -> bool;
}
