//! Data model behind the host's growth menu.
//!
//! The runtime computes everything the selection surface needs to decide
//! what to show and what to enable; drawing, layout, and input stay with
//! the host.

use growth_core::{ActorId, SlotId, SoundCue};

/// The auxiliary menu entry offered to the host's main menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    /// Selectable only while the party is non-empty.
    pub enabled: bool,
}

/// Top-level model for the growth menu's character list.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuModel {
    pub actors: Vec<ActorRow>,
    /// Label drawn next to every balance.
    pub points_label: String,
    /// Confirm-sound override while the stat panel is active.
    pub confirm_sound: Option<SoundCue>,
}

/// One row of the character list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorRow {
    pub actor: ActorId,
    pub balance: u32,
    /// Dead characters are listed but cannot be selected.
    pub selectable: bool,
}

/// Per-character stat panel shown after selection.
#[derive(Clone, Debug, PartialEq)]
pub struct StatPanel {
    pub actor: ActorId,
    pub balance: u32,
    pub rows: Vec<SlotRow>,
    /// Trailing reset row, present only when the feature is configured.
    pub reset_label: Option<String>,
    /// Label drawn in place of a cost for capped rows.
    pub at_cap_label: String,
}

/// One upgradeable stat row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotRow {
    pub slot: SlotId,
    /// Cumulative purchased bonus.
    pub bonus: u32,
    pub cap: u32,
    /// Amount the next purchase would grant (0 at cap).
    pub pending_grant: u32,
    pub cost: u32,
    pub at_cap: bool,
    /// Whether the row can be confirmed right now.
    pub enabled: bool,
    /// Fill ratio for the host's progress gauge, clamped to `[0, 1]`.
    pub gauge_ratio: f32,
}
