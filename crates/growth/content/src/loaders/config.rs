//! Growth configuration loader.

use std::path::Path;

use growth_core::{
    GrowthConfig, MenuCommandConfig, SlotConfig, SlotTable, SoundCue, StateId, SwitchId,
};

use crate::formats::{ConfigFile, SlotsSection};
use crate::loaders::{LoadResult, read_file};

/// Loader for growth configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing the growth configuration
    ///
    /// # Returns
    ///
    /// Returns a validated, normalized GrowthConfig.
    pub fn load(path: &Path) -> LoadResult<GrowthConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> LoadResult<GrowthConfig> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let slots = build_slot_table(&file.slots)?;

        // An empty label means "not configured", same as omitting it.
        let reset_label = file.points.reset_label.filter(|label| !label.is_empty());
        let confirm_sound = file
            .menu
            .confirm_sound
            .filter(|sound| !sound.name.is_empty())
            .map(|sound| SoundCue {
                name: sound.name,
                volume: sound.volume,
                pitch: sound.pitch,
                pan: sound.pan,
            });

        Ok(GrowthConfig {
            slots,
            effectiveness_state: StateId(file.points.effectiveness_state),
            points_label: file.points.display_label,
            at_cap_label: file.points.at_cap_label,
            reset_label,
            menu: MenuCommandConfig {
                label: file.menu.label,
                switch: SwitchId(file.menu.switch),
            },
            confirm_sound,
        })
    }
}

/// Builds the slot table from the parallel arrays, taking magnitudes as
/// absolute values.
fn build_slot_table(section: &SlotsSection) -> LoadResult<SlotTable> {
    let len = section.increments.len();
    if section.costs.len() != len || section.caps.len() != len {
        anyhow::bail!(
            "Slot arrays must have equal lengths: {} increments, {} costs, {} caps",
            len,
            section.costs.len(),
            section.caps.len()
        );
    }
    if len > GrowthConfig::MAX_STAT_SLOTS {
        anyhow::bail!(
            "Too many slots: {} configured, at most {} supported",
            len,
            GrowthConfig::MAX_STAT_SLOTS
        );
    }

    let mut table = SlotTable::new();
    for i in 0..len {
        table.push(SlotConfig::new(
            normalize(section.increments[i]),
            normalize(section.costs[i]),
            normalize(section.caps[i]),
        ));
    }
    Ok(table)
}

fn normalize(value: i64) -> u32 {
    value.unsigned_abs().min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_core::SlotId;

    #[test]
    fn parses_a_full_config() {
        let config = ConfigLoader::parse(
            r#"
            [points]
            display_label = "GP"
            at_cap_label = "MAX"
            reset_label = "Respec"
            effectiveness_state = 7

            [slots]
            increments = [10, 5]
            costs = [50, 25]
            caps = [100, 50]

            [menu]
            label = "Training"
            switch = 12

            [menu.confirm_sound]
            name = "Decision2"
            volume = 80
            pitch = 110
            pan = -20
            "#,
        )
        .unwrap();

        assert_eq!(config.points_label, "GP");
        assert_eq!(config.at_cap_label, "MAX");
        assert_eq!(config.reset_label.as_deref(), Some("Respec"));
        assert_eq!(config.effectiveness_state, StateId(7));
        assert_eq!(config.slots.len(), 2);
        assert_eq!(config.slots.get(SlotId(1)).unwrap().cost, 25);
        assert_eq!(config.menu.label, "Training");
        assert_eq!(config.menu.switch, SwitchId(12));
        let sound = config.confirm_sound.unwrap();
        assert_eq!(sound.name, "Decision2");
        assert_eq!(sound.pan, -20);
    }

    #[test]
    fn empty_input_yields_the_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.slots.len(), GrowthConfig::MAX_STAT_SLOTS);
        assert_eq!(config.slots.get(SlotId(0)).unwrap().increment, 10);
        assert_eq!(config.reset_label, None);
        assert_eq!(config.confirm_sound.unwrap().name, "Decision2");
        assert_eq!(
            config.effectiveness_state,
            GrowthConfig::DEFAULT_EFFECTIVENESS_STATE
        );
    }

    #[test]
    fn empty_sound_name_disables_the_override() {
        let config = ConfigLoader::parse(
            r#"
            [menu.confirm_sound]
            name = ""
            "#,
        )
        .unwrap();
        assert_eq!(config.confirm_sound, None);
    }

    #[test]
    fn negative_magnitudes_are_taken_absolute() {
        let config = ConfigLoader::parse(
            r#"
            [slots]
            increments = [-10]
            costs = [-50]
            caps = [-100]
            "#,
        )
        .unwrap();
        let slot = config.slots.get(SlotId(0)).unwrap();
        assert_eq!((slot.increment, slot.cost, slot.cap), (10, 50, 100));
    }

    #[test]
    fn empty_reset_label_disables_the_feature() {
        let config = ConfigLoader::parse(
            r#"
            [points]
            reset_label = ""
            "#,
        )
        .unwrap();
        assert_eq!(config.reset_label, None);
        assert!(!config.reset_enabled());
    }

    #[test]
    fn rejects_mismatched_slot_arrays() {
        let err = ConfigLoader::parse(
            r#"
            [slots]
            increments = [10, 10]
            costs = [50]
            caps = [100, 100]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("equal lengths"));
    }

    #[test]
    fn rejects_more_than_eight_slots() {
        let err = ConfigLoader::parse(
            r#"
            [slots]
            increments = [1, 1, 1, 1, 1, 1, 1, 1, 1]
            costs = [1, 1, 1, 1, 1, 1, 1, 1, 1]
            caps = [1, 1, 1, 1, 1, 1, 1, 1, 1]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Too many slots"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("growth.toml");
        std::fs::write(
            &path,
            r#"
            [points]
            display_label = "AP"
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.points_label, "AP");

        let missing = ConfigLoader::load(&dir.path().join("absent.toml"));
        assert!(missing.is_err());
    }
}
