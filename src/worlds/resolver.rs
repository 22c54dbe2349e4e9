//! Stage queries: world identity, boss assignment, and feature activation.
//!
//! Every function here is total over `i32`. Malformed stage numbers resolve
//! to documented defaults instead of failing, so progression can never be
//! wedged by a bad stage value.

use super::data::{
    defined_worlds, test_stage, StageFeatures, WorldDef, DEV_BOSS_STAGE, DEV_WORLD_MAX_STAGE,
    DEV_WORLD_MIN_STAGE, FALLBACK_EFFECTIVE_STAGE, MAX_DEFINED_STAGE, STAGES_PER_SYNTHETIC_WORLD,
};

/// World identity for one queried stage.
///
/// Derived fresh per query. For stages past the defined table the world is
/// synthesized from the stage number alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWorld {
    pub id: String,
    pub name: String,
    pub localized_name: String,
    pub min_stage: i32,
    pub max_stage: i32,
    pub boss_stage: i32,
    pub boss_type: Option<&'static str>,
    pub features: StageFeatures,
    /// True for the dev world and for worlds synthesized past the table.
    pub is_synthetic: bool,
}

/// Boss assignment for a boss stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossInfo {
    /// None for synthesized bosses past the defined table.
    pub boss_type: Option<&'static str>,
    pub world_name: String,
    pub is_dev_boss: bool,
}

/// Maps a test stage onto the real stage whose progression slot it reuses.
///
/// Positive stages pass through unchanged. Non-positive stages look up the
/// test table by exact key; undefined keys fall back to stage
/// [`FALLBACK_EFFECTIVE_STAGE`]. Range-based hazard predicates run on the
/// effective stage so a test stage inherits its target's hazards.
pub fn effective_stage(stage: i32) -> i32 {
    if stage > 0 {
        return stage;
    }
    match test_stage(stage) {
        Some(entry) => entry.mapped_stage,
        None => FALLBACK_EFFECTIVE_STAGE,
    }
}

/// Resolves the world containing `stage`.
///
/// Non-positive stages land in the dev world (range `[-2, 0]`, boss at 0),
/// carrying the matching test entry's features or a gas-zone default.
/// Stages past the defined table get a synthesized three-stage world with
/// its boss on the last stage.
pub fn resolve_world(stage: i32) -> ResolvedWorld {
    if stage <= 0 {
        return dev_world(stage);
    }

    for world in defined_worlds() {
        if world.min_stage <= stage && stage <= world.max_stage {
            return from_def(&world);
        }
    }

    synthetic_world(stage)
}

/// Boss assignment for `stage`, or `None` when it is not a boss stage.
///
/// Stage 0 is the dev final boss. Past the defined table the
/// boss-every-three-stages rule continues indefinitely with an untyped boss.
pub fn boss_info(stage: i32) -> Option<BossInfo> {
    if stage == DEV_BOSS_STAGE {
        let world = dev_world(stage);
        return Some(BossInfo {
            boss_type: Some("dev_boss"),
            world_name: world.name,
            is_dev_boss: true,
        });
    }

    for world in defined_worlds() {
        if world.boss_stage == stage {
            return Some(BossInfo {
                boss_type: world.boss_type,
                world_name: world.name.to_string(),
                is_dev_boss: false,
            });
        }
    }

    if stage > MAX_DEFINED_STAGE && stage % STAGES_PER_SYNTHETIC_WORLD == 0 {
        return Some(BossInfo {
            boss_type: None,
            world_name: synthetic_world(stage).name,
            is_dev_boss: false,
        });
    }

    None
}

/// Feature toggles for `stage`.
///
/// Test stages serve their entry's feature set (gas-zone default for
/// undefined keys), tagged as test stages. Real stages serve their world's
/// feature set, or an all-off set past the defined table.
pub fn stage_features(stage: i32) -> StageFeatures {
    if stage <= 0 {
        return match test_stage(stage) {
            Some(entry) => entry.features,
            None => default_test_features(),
        };
    }

    defined_worlds()
        .into_iter()
        .find(|w| w.min_stage <= stage && stage <= w.max_stage)
        .map(|w| w.features)
        .unwrap_or_default()
}

/// Sawblades spin when the effective stage sits in the Sawmill Depths range.
pub fn has_saws(stage: i32) -> bool {
    let effective = effective_stage(stage);
    (10..=12).contains(&effective)
}

/// Magnetic gas fields run on every test stage and through the Gas Works.
pub fn has_gas_zone(stage: i32) -> bool {
    (DEV_WORLD_MIN_STAGE..=DEV_WORLD_MAX_STAGE).contains(&stage) || (13..=15).contains(&stage)
}

/// Fog overlay covers the Misty Harbor stages only.
pub fn has_fog(stage: i32) -> bool {
    (7..=9).contains(&stage)
}

/// Deadzones spawn from stage 4 onward.
pub fn has_deadzones(stage: i32) -> bool {
    stage >= 4
}

/// Laser turrets are only wired up on the turret test stage.
pub fn has_laser_turrets(stage: i32) -> bool {
    stage == -1
}

/// Floating mines are only wired up on the turret test stage.
pub fn has_floating_mines(stage: i32) -> bool {
    stage == -1
}

/// The last defined stage and the dev boss stage host the final boss.
pub fn is_final_boss_stage(stage: i32) -> bool {
    stage == MAX_DEFINED_STAGE || stage == DEV_BOSS_STAGE
}

/// Retired with the polarity rework; always false. Kept as a named no-op so
/// existing callers stay valid.
pub fn has_polarity_system(_stage: i32) -> bool {
    false
}

/// Retired with the polarity rework; always false. Kept as a named no-op so
/// existing callers stay valid.
pub fn has_magnetic_turrets(_stage: i32) -> bool {
    false
}

fn from_def(world: &WorldDef) -> ResolvedWorld {
    ResolvedWorld {
        id: world.id.to_string(),
        name: world.name.to_string(),
        localized_name: world.localized_name.to_string(),
        min_stage: world.min_stage,
        max_stage: world.max_stage,
        boss_stage: world.boss_stage,
        boss_type: world.boss_type,
        features: world.features,
        is_synthetic: false,
    }
}

fn dev_world(stage: i32) -> ResolvedWorld {
    let entry = test_stage(stage);
    let name = entry
        .as_ref()
        .map(|e| e.display_name.to_string())
        .unwrap_or_else(|| "Dev World".to_string());
    let features = entry
        .map(|e| e.features)
        .unwrap_or_else(default_test_features);

    ResolvedWorld {
        id: "dev".to_string(),
        localized_name: name.clone(),
        name,
        min_stage: DEV_WORLD_MIN_STAGE,
        max_stage: DEV_WORLD_MAX_STAGE,
        boss_stage: DEV_BOSS_STAGE,
        boss_type: None,
        features,
        is_synthetic: true,
    }
}

fn synthetic_world(stage: i32) -> ResolvedWorld {
    // Zero-based world index; the first synthesized world past stage 15 is
    // index 5, covering stages 16-18.
    let index = (stage - 1) / STAGES_PER_SYNTHETIC_WORLD;
    let min_stage = index * STAGES_PER_SYNTHETIC_WORLD + 1;
    let max_stage = min_stage + STAGES_PER_SYNTHETIC_WORLD - 1;

    ResolvedWorld {
        id: format!("world_{}", index),
        name: format!("World {}", index),
        localized_name: format!("월드 {}", index),
        min_stage,
        max_stage,
        boss_stage: max_stage,
        boss_type: None,
        features: StageFeatures::default(),
        is_synthetic: true,
    }
}

fn default_test_features() -> StageFeatures {
    StageFeatures {
        gas_zone: true,
        is_test_stage: true,
        ..StageFeatures::default()
    }
}
