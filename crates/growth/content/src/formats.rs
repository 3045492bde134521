//! On-disk file formats.
//!
//! These structs mirror the TOML layout one-to-one and are converted into
//! growth-core types by the loaders, which normalize raw values on the way
//! in (absolute magnitudes, bounded slot count).

use serde::Deserialize;

/// Top-level growth configuration file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub points: PointsSection,
    #[serde(default)]
    pub slots: SlotsSection,
    #[serde(default)]
    pub menu: MenuSection,
}

/// `[points]` section: labels and the effectiveness status id.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointsSection {
    #[serde(default = "default_points_label")]
    pub display_label: String,
    #[serde(default = "default_at_cap_label")]
    pub at_cap_label: String,
    /// Omitted or empty disables the reset feature.
    #[serde(default)]
    pub reset_label: Option<String>,
    #[serde(default = "default_effectiveness_state")]
    pub effectiveness_state: u32,
}

impl Default for PointsSection {
    fn default() -> Self {
        Self {
            display_label: default_points_label(),
            at_cap_label: default_at_cap_label(),
            reset_label: None,
            effectiveness_state: default_effectiveness_state(),
        }
    }
}

/// `[slots]` section: parallel per-slot arrays.
///
/// Values are read as signed integers so that negative magnitudes can be
/// normalized with `abs` instead of failing deserialization.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotsSection {
    #[serde(default = "default_increments")]
    pub increments: Vec<i64>,
    #[serde(default = "default_costs")]
    pub costs: Vec<i64>,
    #[serde(default = "default_caps")]
    pub caps: Vec<i64>,
}

impl Default for SlotsSection {
    fn default() -> Self {
        Self {
            increments: default_increments(),
            costs: default_costs(),
            caps: default_caps(),
        }
    }
}

/// `[menu]` section: the auxiliary menu entry and its confirm sound.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuSection {
    #[serde(default = "default_menu_label")]
    pub label: String,
    #[serde(default = "default_menu_switch")]
    pub switch: u32,
    /// An empty name disables the confirm-sound override.
    #[serde(default = "default_confirm_sound")]
    pub confirm_sound: Option<SoundSection>,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            label: default_menu_label(),
            switch: default_menu_switch(),
            confirm_sound: default_confirm_sound(),
        }
    }
}

/// Sound descriptor (name, volume, pitch, pan).
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundSection {
    pub name: String,
    #[serde(default = "default_sound_volume")]
    pub volume: u32,
    #[serde(default = "default_sound_pitch")]
    pub pitch: u32,
    #[serde(default)]
    pub pan: i32,
}

/// Top-level roster/party fixture file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterFile {
    /// Number of roster entries including the reserved index 0.
    pub roster_len: usize,
    #[serde(default)]
    pub actors: Vec<ActorSection>,
    /// Party member ids in marching order.
    #[serde(default)]
    pub party: Vec<u32>,
    /// Battle subset; defaults to the full party when omitted.
    #[serde(default)]
    pub battle: Option<Vec<u32>>,
}

/// `[[actors]]` entry: one roster character.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorSection {
    pub id: u32,
    #[serde(default)]
    pub class: u32,
    #[serde(default = "default_true")]
    pub alive: bool,
    /// Status effects currently affecting the character.
    #[serde(default)]
    pub states: Vec<u32>,
    /// Per-status potency overrides.
    #[serde(default)]
    pub state_rates: Vec<StateRateSection>,
}

/// `[[actors.state_rates]]` entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateRateSection {
    pub state: u32,
    pub rate: f64,
}

fn default_points_label() -> String {
    "P".to_string()
}

fn default_at_cap_label() -> String {
    "Maxed".to_string()
}

fn default_effectiveness_state() -> u32 {
    5
}

fn default_increments() -> Vec<i64> {
    vec![10, 10, 1, 1, 1, 1, 1, 1]
}

fn default_costs() -> Vec<i64> {
    vec![50, 50, 10, 10, 10, 10, 10, 10]
}

fn default_caps() -> Vec<i64> {
    vec![100, 100, 10, 10, 10, 10, 10, 10]
}

fn default_menu_label() -> String {
    "Growth".to_string()
}

fn default_menu_switch() -> u32 {
    10
}

fn default_confirm_sound() -> Option<SoundSection> {
    Some(SoundSection {
        name: "Decision2".to_string(),
        volume: default_sound_volume(),
        pitch: default_sound_pitch(),
        pan: 0,
    })
}

fn default_sound_volume() -> u32 {
    90
}

fn default_sound_pitch() -> u32 {
    100
}

fn default_true() -> bool {
    true
}
