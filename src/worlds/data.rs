//! World and test-stage data definitions.

#![allow(dead_code)]

/// Stage number a test stage falls back to when its key has no entry.
pub const FALLBACK_EFFECTIVE_STAGE: i32 = 10;

/// First and last stage of the synthetic dev world that hosts test stages.
pub const DEV_WORLD_MIN_STAGE: i32 = -2;
pub const DEV_WORLD_MAX_STAGE: i32 = 0;

/// Boss slot of the dev world (stage 0 doubles as the dev final boss).
pub const DEV_BOSS_STAGE: i32 = 0;

/// Last stage covered by an explicitly defined world.
pub const MAX_DEFINED_STAGE: i32 = 15;

/// Width of the synthesized worlds generated past the defined table.
pub const STAGES_PER_SYNTHETIC_WORLD: i32 = 3;

/// Gameplay feature toggles for one stage.
///
/// These are the per-world defaults the host scene reads at stage load.
/// The hard-coded hazard predicates in `resolver.rs` are a separate,
/// range-based layer and do not consult this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageFeatures {
    pub gas_zone: bool,
    pub fog: bool,
    pub deadzones: bool,
    pub saws: bool,
    pub laser_turrets: bool,
    pub floating_mines: bool,
    pub teleporting_food: bool,
    /// Set on every feature set served for a stage number at or below zero.
    pub is_test_stage: bool,
}

/// A themed group of consecutive stages with a boss at the end.
#[derive(Debug, Clone)]
pub struct WorldDef {
    pub id: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub min_stage: i32,
    pub max_stage: i32,
    pub boss_stage: i32,
    pub boss_type: Option<&'static str>,
    pub features: StageFeatures,
}

/// An in-development stage that substitutes for a real stage during testing.
#[derive(Debug, Clone)]
pub struct TestStageDef {
    pub display_name: &'static str,
    pub real_world_name: &'static str,
    /// Real stage whose progression slot this test stage reuses.
    pub mapped_stage: i32,
    pub features: StageFeatures,
    pub is_boss_stage: bool,
}

/// Returns all explicitly defined worlds (stages 1-15).
pub fn defined_worlds() -> Vec<WorldDef> {
    vec![
        WorldDef {
            id: "garden_walls",
            name: "Garden Walls",
            localized_name: "정원의 벽",
            min_stage: 1,
            max_stage: 3,
            boss_stage: 3,
            boss_type: Some("brick_golem"),
            features: StageFeatures::default(),
        },
        WorldDef {
            id: "neon_arcade",
            name: "Neon Arcade",
            localized_name: "네온 아케이드",
            min_stage: 4,
            max_stage: 6,
            boss_stage: 6,
            boss_type: Some("bullet_hell"),
            features: StageFeatures {
                deadzones: true,
                ..StageFeatures::default()
            },
        },
        WorldDef {
            id: "misty_harbor",
            name: "Misty Harbor",
            localized_name: "안개 항구",
            min_stage: 7,
            max_stage: 9,
            boss_stage: 9,
            boss_type: Some("fog_leviathan"),
            features: StageFeatures {
                fog: true,
                deadzones: true,
                ..StageFeatures::default()
            },
        },
        WorldDef {
            id: "sawmill_depths",
            name: "Sawmill Depths",
            localized_name: "톱니 공장",
            min_stage: 10,
            max_stage: 12,
            boss_stage: 12,
            boss_type: Some("saw_tyrant"),
            features: StageFeatures {
                saws: true,
                deadzones: true,
                ..StageFeatures::default()
            },
        },
        WorldDef {
            id: "gas_works",
            name: "Gas Works",
            localized_name: "가스 공장",
            min_stage: 13,
            max_stage: 15,
            boss_stage: 15,
            boss_type: Some("toxic_hydra"),
            features: StageFeatures {
                gas_zone: true,
                deadzones: true,
                teleporting_food: true,
                ..StageFeatures::default()
            },
        },
    ]
}

/// Looks up the test-stage entry for a stage number at or below zero.
///
/// Stages below -2 have no entry and callers fall back to dev-world
/// defaults rather than failing.
pub fn test_stage(stage: i32) -> Option<TestStageDef> {
    match stage {
        -2 => Some(TestStageDef {
            display_name: "Test: Gas Works",
            real_world_name: "Gas Works",
            mapped_stage: 13,
            features: StageFeatures {
                gas_zone: true,
                deadzones: true,
                teleporting_food: true,
                is_test_stage: true,
                ..StageFeatures::default()
            },
            is_boss_stage: false,
        }),
        -1 => Some(TestStageDef {
            display_name: "Test: Turret Lab",
            real_world_name: "Gas Works",
            mapped_stage: 14,
            features: StageFeatures {
                laser_turrets: true,
                floating_mines: true,
                deadzones: true,
                is_test_stage: true,
                ..StageFeatures::default()
            },
            is_boss_stage: false,
        }),
        0 => Some(TestStageDef {
            display_name: "Test: Final Boss",
            real_world_name: "Gas Works",
            mapped_stage: 15,
            features: StageFeatures {
                gas_zone: true,
                is_test_stage: true,
                ..StageFeatures::default()
            },
            is_boss_stage: true,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_count() {
        assert_eq!(defined_worlds().len(), 5);
    }

    #[test]
    fn test_world_names() {
        let worlds = defined_worlds();
        assert_eq!(worlds[0].name, "Garden Walls");
        assert_eq!(worlds[1].name, "Neon Arcade");
        assert_eq!(worlds[2].name, "Misty Harbor");
        assert_eq!(worlds[3].name, "Sawmill Depths");
        assert_eq!(worlds[4].name, "Gas Works");
    }

    #[test]
    fn test_world_ranges_partition_defined_stages() {
        let worlds = defined_worlds();

        // Contiguous, non-overlapping, starting at stage 1
        assert_eq!(worlds[0].min_stage, 1);
        for pair in worlds.windows(2) {
            assert_eq!(pair[1].min_stage, pair[0].max_stage + 1);
        }
        assert_eq!(worlds.last().unwrap().max_stage, MAX_DEFINED_STAGE);
    }

    #[test]
    fn test_boss_stage_within_range() {
        for world in defined_worlds() {
            assert!(
                world.min_stage <= world.boss_stage && world.boss_stage <= world.max_stage,
                "World {} boss stage outside its range",
                world.name
            );
            // Boss guards the last stage of every defined world
            assert_eq!(world.boss_stage, world.max_stage);
        }
    }

    #[test]
    fn test_every_defined_world_has_a_boss() {
        for world in defined_worlds() {
            assert!(
                world.boss_type.is_some(),
                "World {} is missing a boss type",
                world.name
            );
        }
    }

    #[test]
    fn test_stage_six_boss_is_bullet_hell() {
        let worlds = defined_worlds();
        assert_eq!(worlds[1].boss_stage, 6);
        assert_eq!(worlds[1].boss_type, Some("bullet_hell"));
    }

    #[test]
    fn test_test_stage_entries() {
        assert_eq!(test_stage(-2).unwrap().mapped_stage, 13);
        assert_eq!(test_stage(-1).unwrap().mapped_stage, 14);
        assert_eq!(test_stage(0).unwrap().mapped_stage, 15);
        assert!(test_stage(-3).is_none());
        assert!(test_stage(1).is_none());
    }

    #[test]
    fn test_mapped_stages_fall_in_exactly_one_world() {
        let worlds = defined_worlds();
        for key in [-2, -1, 0] {
            let mapped = test_stage(key).unwrap().mapped_stage;
            let containing = worlds
                .iter()
                .filter(|w| w.min_stage <= mapped && mapped <= w.max_stage)
                .count();
            assert_eq!(containing, 1, "test stage {} maps outside the world table", key);
        }
    }

    #[test]
    fn test_only_dev_boss_stage_is_flagged() {
        assert!(test_stage(0).unwrap().is_boss_stage);
        assert!(!test_stage(-1).unwrap().is_boss_stage);
        assert!(!test_stage(-2).unwrap().is_boss_stage);
    }

    #[test]
    fn test_test_stage_features_are_tagged() {
        for key in [-2, -1, 0] {
            assert!(test_stage(key).unwrap().features.is_test_stage);
        }
    }
}
