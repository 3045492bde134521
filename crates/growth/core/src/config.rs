//! Growth system configuration constants and tunable parameters.
//!
//! Tunable values are resolved once at load time (typically by
//! `growth-content`'s `ConfigLoader`) and fixed for the process lifetime.

use crate::slots::{SlotConfig, SlotTable};
use crate::state::{StateId, SwitchId};

/// Growth system configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthConfig {
    /// Per-slot increment/cost/cap tables.
    pub slots: SlotTable,

    /// Status effect whose per-character potency scales distributed points.
    ///
    /// Characters without the effect receive the neutral multiplier 1.
    pub effectiveness_state: StateId,

    /// Label drawn next to point balances.
    pub points_label: String,

    /// Label drawn in place of a cost once a slot is at its cap.
    pub at_cap_label: String,

    /// Label for the growth-reset row.
    ///
    /// `None` disables the reset feature entirely.
    pub reset_label: Option<String>,

    /// Auxiliary menu entry.
    pub menu: MenuCommandConfig,

    /// Confirm-sound override while the stat panel is active.
    pub confirm_sound: Option<SoundCue>,
}

impl GrowthConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of roster entries (reserved index 0 + up to 255 characters).
    pub const MAX_ACTORS: usize = 256;
    /// Maximum number of upgradeable stat slots.
    pub const MAX_STAT_SLOTS: usize = 8;

    // ===== value-range constants =====
    /// Upper bound for any stored point balance.
    pub const MAX_POINT_BALANCE: u32 = 9_999_999;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EFFECTIVENESS_STATE: StateId = StateId(5);
    pub const DEFAULT_MENU_SWITCH: SwitchId = SwitchId(10);
    pub const DEFAULT_INCREMENTS: [u32; 8] = [10, 10, 1, 1, 1, 1, 1, 1];
    pub const DEFAULT_COSTS: [u32; 8] = [50, 50, 10, 10, 10, 10, 10, 10];
    pub const DEFAULT_CAPS: [u32; 8] = [100, 100, 10, 10, 10, 10, 10, 10];

    pub fn new() -> Self {
        let mut slots = SlotTable::new();
        for i in 0..Self::MAX_STAT_SLOTS {
            slots.push(SlotConfig::new(
                Self::DEFAULT_INCREMENTS[i],
                Self::DEFAULT_COSTS[i],
                Self::DEFAULT_CAPS[i],
            ));
        }
        Self {
            slots,
            effectiveness_state: Self::DEFAULT_EFFECTIVENESS_STATE,
            points_label: "P".to_string(),
            at_cap_label: "Maxed".to_string(),
            reset_label: Some("Reset growth".to_string()),
            menu: MenuCommandConfig::default(),
            confirm_sound: Some(SoundCue::default()),
        }
    }

    /// Whether the growth-reset feature is enabled.
    pub fn reset_enabled(&self) -> bool {
        self.reset_label.is_some()
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Auxiliary menu entry configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuCommandConfig {
    /// Command label shown in the host menu.
    pub label: String,
    /// Host flag that must be on for the entry to appear.
    pub switch: SwitchId,
}

impl Default for MenuCommandConfig {
    fn default() -> Self {
        Self {
            label: "Growth".to_string(),
            switch: GrowthConfig::DEFAULT_MENU_SWITCH,
        }
    }
}

/// Acknowledgement sound descriptor (name, volume, pitch, pan).
///
/// Playback is owned by the host; this is only the cue handed over when a
/// purchase is confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundCue {
    pub name: String,
    pub volume: u32,
    pub pitch: u32,
    pub pan: i32,
}

impl Default for SoundCue {
    fn default() -> Self {
        Self {
            name: "Decision2".to_string(),
            volume: 90,
            pitch: 100,
            pan: 0,
        }
    }
}
