//! Semantic events for the host presentation layer.
//!
//! Events are returned from command dispatch and the purchase/reset entry
//! points. The host reacts to them (refresh windows, play the confirm cue);
//! the runtime never renders or plays anything itself.

use growth_core::{ActorId, SlotId, SoundCue};

/// High-level notifications produced by the growth runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum GrowthEvent {
    /// The ledger was (re)initialized for the roster.
    PointsInitialized { roster_len: usize },

    /// A pool was distributed.
    PointsDistributed {
        recipients: Vec<ActorId>,
        /// Per-recipient base amount before the effectiveness rate.
        share: i64,
    },

    /// A stat increment was purchased.
    PurchaseApplied {
        actor: ActorId,
        slot: SlotId,
        grant: u32,
        cost: u32,
        /// Cue for the host's confirm-sound override, when configured.
        confirm_sound: Option<SoundCue>,
    },

    /// All of one character's growth was reset for a refund.
    GrowthReset { actor: ActorId, refund: u64 },

    /// The growth menu was opened; query the menu model for contents.
    MenuOpened,
}
