//! One stage of play: feature activation, gameplay events, and boss flow.
//!
//! The host engine reports what physically happened (a brick broke, food was
//! eaten, the snake was hit) and receives [`StageEvent`]s describing what it
//! should present. Game rules live here; pixels live in the engine.

use rand::Rng;

use crate::constants::{
    BOSS_BASE_HP, BOSS_CLEAR_COIN_BONUS, BOSS_HIT_SCORE, BOSS_HP_PER_STAGE, BRICK_SCORE,
    COINS_PER_BRICK, COINS_PER_FOOD, FOOD_SCORE,
};
use crate::game::combo::ComboTracker;
use crate::game::powerups::{ActivePowerUps, PowerUpKind};
use crate::game::run::RunState;
use crate::items::{PassiveAbility, StatKind};
use crate::worlds::{
    boss_info, effective_stage, has_deadzones, has_floating_mines, has_fog, has_gas_zone,
    has_laser_turrets, has_saws, resolve_world, stage_features, ResolvedWorld, StageFeatures,
};

/// Chance that eating food drops a power-up.
const POWERUP_DROP_CHANCE: f64 = 0.2;

/// A single event produced by stage logic.
///
/// The host scene maps these to visual effects, sounds, and UI updates.
/// Stage logic never touches presentation types directly.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    ScoreAwarded { points: u32, combo: u32 },
    CoinsEarned { amount: u64 },
    ComboBroken { final_count: u32 },
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpActivated { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    ShieldAbsorbed,
    LifeLost { remaining: u32 },
    BossSpawned { boss_type: Option<&'static str>, hp: u32 },
    BossDefeated { boss_type: Option<&'static str> },
    StageCleared { stage: i32 },
    RunFailed,
}

/// Hazards the scene enables for one stage, snapshotted from the stage
/// predicates at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageHazards {
    pub saws: bool,
    pub gas_zone: bool,
    pub fog: bool,
    pub deadzones: bool,
    pub laser_turrets: bool,
    pub floating_mines: bool,
}

impl StageHazards {
    pub fn for_stage(stage: i32) -> Self {
        Self {
            saws: has_saws(stage),
            gas_zone: has_gas_zone(stage),
            fog: has_fog(stage),
            deadzones: has_deadzones(stage),
            laser_turrets: has_laser_turrets(stage),
            floating_mines: has_floating_mines(stage),
        }
    }
}

/// The boss currently blocking stage clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossState {
    pub boss_type: Option<&'static str>,
    pub hp: u32,
    pub max_hp: u32,
}

/// Live state for one stage.
#[derive(Debug, Clone)]
pub struct StageSession {
    stage: i32,
    world: ResolvedWorld,
    features: StageFeatures,
    hazards: StageHazards,
    bricks_remaining: u32,
    boss: Option<BossState>,
    cleared: bool,
    failed: bool,
    combo: ComboTracker,
    powerups: ActivePowerUps,
}

impl StageSession {
    /// Loads a stage. `brick_count` comes from the engine-side layout.
    pub fn new(stage: i32, brick_count: u32) -> Self {
        Self {
            stage,
            world: resolve_world(stage),
            features: stage_features(stage),
            hazards: StageHazards::for_stage(stage),
            bricks_remaining: brick_count,
            boss: None,
            cleared: false,
            failed: false,
            combo: ComboTracker::new(),
            powerups: ActivePowerUps::new(),
        }
    }

    pub fn stage(&self) -> i32 {
        self.stage
    }

    pub fn world(&self) -> &ResolvedWorld {
        &self.world
    }

    pub fn features(&self) -> &StageFeatures {
        &self.features
    }

    pub fn hazards(&self) -> &StageHazards {
        &self.hazards
    }

    pub fn bricks_remaining(&self) -> u32 {
        self.bricks_remaining
    }

    pub fn boss(&self) -> Option<&BossState> {
        self.boss.as_ref()
    }

    pub fn combo(&self) -> &ComboTracker {
        &self.combo
    }

    pub fn powerups(&self) -> &ActivePowerUps {
        &self.powerups
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// True when clearing this stage requires defeating a boss.
    pub fn is_boss_stage(&self) -> bool {
        boss_info(self.stage).is_some()
    }

    /// A brick broke. Scores it, advances the combo, and spawns the boss or
    /// clears the stage once the wall is down.
    pub fn on_brick_destroyed(&mut self, run: &mut RunState) -> Vec<StageEvent> {
        if self.is_settled() {
            return vec![];
        }

        let mut events = Vec::new();
        let combo = self.combo.register_hit();
        let points =
            self.boosted(scaled_points(BRICK_SCORE, run.stat_bonus(StatKind::BrickScore)))
                * self.combo.multiplier();
        run.add_score(points);
        run.add_coins(COINS_PER_BRICK);
        events.push(StageEvent::ScoreAwarded { points, combo });
        events.push(StageEvent::CoinsEarned {
            amount: COINS_PER_BRICK,
        });

        self.bricks_remaining = self.bricks_remaining.saturating_sub(1);
        if self.bricks_remaining == 0 {
            if self.is_boss_stage() {
                events.push(self.spawn_boss());
            } else {
                events.push(self.clear_stage());
            }
        }
        events
    }

    /// Food was eaten. Scores it and may drop a power-up for the engine to
    /// place.
    pub fn on_food_eaten(&mut self, run: &mut RunState, rng: &mut impl Rng) -> Vec<StageEvent> {
        if self.is_settled() {
            return vec![];
        }

        let mut events = Vec::new();
        let points = self.boosted(scaled_points(FOOD_SCORE, run.stat_bonus(StatKind::FoodScore)));
        run.add_score(points);
        run.add_coins(COINS_PER_FOOD);
        events.push(StageEvent::ScoreAwarded {
            points,
            combo: self.combo.count(),
        });
        events.push(StageEvent::CoinsEarned {
            amount: COINS_PER_FOOD,
        });

        if rng.gen_bool(POWERUP_DROP_CHANCE) {
            let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
            events.push(StageEvent::PowerUpSpawned { kind });
        }
        events
    }

    /// The snake picked up a dropped power-up.
    pub fn on_powerup_collected(&mut self, kind: PowerUpKind) -> Vec<StageEvent> {
        if self.is_settled() {
            return vec![];
        }
        self.powerups.activate(kind);
        vec![StageEvent::PowerUpActivated { kind }]
    }

    /// The snake ran into a hazard, a wall, or itself.
    ///
    /// An active shield absorbs the hit. Otherwise a life is lost and the
    /// combo breaks (unless a combo keeper is owned).
    pub fn on_snake_hit(&mut self, run: &mut RunState) -> Vec<StageEvent> {
        if self.is_settled() {
            return vec![];
        }

        if self.powerups.deactivate(PowerUpKind::Shield) {
            return vec![StageEvent::ShieldAbsorbed];
        }

        let mut events = Vec::new();
        if self.combo.count() > 0 && !run.has_ability(PassiveAbility::ComboKeeper) {
            let final_count = self.combo.break_combo();
            events.push(StageEvent::ComboBroken { final_count });
        }

        let remaining = run.lose_life();
        events.push(StageEvent::LifeLost { remaining });
        if remaining == 0 {
            self.failed = true;
            events.push(StageEvent::RunFailed);
        }
        events
    }

    /// The boss took a hit. No-op until the boss has spawned.
    pub fn on_boss_hit(&mut self, damage: u32, run: &mut RunState) -> Vec<StageEvent> {
        if self.is_settled() {
            return vec![];
        }
        let Some(boss) = self.boss.as_mut() else {
            return vec![];
        };

        let mut events = Vec::new();
        boss.hp = boss.hp.saturating_sub(damage);
        run.add_score(BOSS_HIT_SCORE);
        events.push(StageEvent::ScoreAwarded {
            points: BOSS_HIT_SCORE,
            combo: self.combo.count(),
        });

        if boss.hp == 0 {
            let boss_type = boss.boss_type;
            self.boss = None;
            run.add_coins(BOSS_CLEAR_COIN_BONUS);
            events.push(StageEvent::BossDefeated { boss_type });
            events.push(StageEvent::CoinsEarned {
                amount: BOSS_CLEAR_COIN_BONUS,
            });
            events.push(self.clear_stage());
        }
        events
    }

    /// Advances combo and power-up timers. `dt_ms` is milliseconds since the
    /// last call.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<StageEvent> {
        if self.is_settled() {
            return vec![];
        }

        let mut events = Vec::new();
        let reached = self.combo.count();
        if self.combo.tick(dt_ms) {
            events.push(StageEvent::ComboBroken {
                final_count: reached,
            });
        }
        for kind in self.powerups.tick(dt_ms) {
            events.push(StageEvent::PowerUpExpired { kind });
        }
        events
    }

    fn is_settled(&self) -> bool {
        self.cleared || self.failed
    }

    fn spawn_boss(&mut self) -> StageEvent {
        let boss_type = boss_info(self.stage).and_then(|info| info.boss_type);
        // HP scales with the effective stage so test stages fight the same
        // boss as their mapped stage
        let hp = BOSS_BASE_HP + BOSS_HP_PER_STAGE * effective_stage(self.stage) as u32;
        self.boss = Some(BossState {
            boss_type,
            hp,
            max_hp: hp,
        });
        StageEvent::BossSpawned { boss_type, hp }
    }

    fn clear_stage(&mut self) -> StageEvent {
        self.cleared = true;
        StageEvent::StageCleared { stage: self.stage }
    }

    fn boosted(&self, points: u32) -> u32 {
        if self.powerups.is_active(PowerUpKind::ScoreBoost) {
            points * 2
        } else {
            points
        }
    }
}

fn scaled_points(base: u32, bonus: f64) -> u32 {
    (base as f64 * (1.0 + bonus)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn destroy_all_bricks(session: &mut StageSession, run: &mut RunState) -> Vec<StageEvent> {
        let mut events = Vec::new();
        while session.bricks_remaining() > 0 {
            events.extend(session.on_brick_destroyed(run));
        }
        events
    }

    #[test]
    fn test_non_boss_stage_clears_when_wall_is_down() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 3);
        assert!(!session.is_boss_stage());

        let events = destroy_all_bricks(&mut session, &mut run);
        assert!(events.contains(&StageEvent::StageCleared { stage: 1 }));
        assert!(session.is_cleared());
        assert!(session.boss().is_none());
    }

    #[test]
    fn test_boss_stage_spawns_boss_instead_of_clearing() {
        let mut run = RunState::new_at_stage(3);
        let mut session = StageSession::new(3, 2);
        assert!(session.is_boss_stage());

        let events = destroy_all_bricks(&mut session, &mut run);
        assert!(!session.is_cleared());
        assert!(events
            .iter()
            .any(|e| matches!(e, StageEvent::BossSpawned { .. })));
        assert_eq!(session.boss().unwrap().boss_type, Some("brick_golem"));
    }

    #[test]
    fn test_boss_spawns_only_once() {
        let mut run = RunState::new_at_stage(3);
        let mut session = StageSession::new(3, 2);
        destroy_all_bricks(&mut session, &mut run);

        // Further brick events (stray debris) must not respawn the boss
        let events = session.on_brick_destroyed(&mut run);
        assert!(!events
            .iter()
            .any(|e| matches!(e, StageEvent::BossSpawned { .. })));
    }

    #[test]
    fn test_boss_defeat_clears_stage() {
        let mut run = RunState::new_at_stage(3);
        let mut session = StageSession::new(3, 1);
        destroy_all_bricks(&mut session, &mut run);

        let hp = session.boss().unwrap().hp;
        let events = session.on_boss_hit(hp, &mut run);
        assert!(events.contains(&StageEvent::BossDefeated {
            boss_type: Some("brick_golem")
        }));
        assert!(events.contains(&StageEvent::StageCleared { stage: 3 }));
        assert!(session.is_cleared());
        assert!(run.coins >= BOSS_CLEAR_COIN_BONUS);
    }

    #[test]
    fn test_boss_hits_before_spawn_are_ignored() {
        let mut run = RunState::new_at_stage(3);
        let mut session = StageSession::new(3, 5);
        assert!(session.on_boss_hit(100, &mut run).is_empty());
    }

    #[test]
    fn test_combo_multiplies_brick_score() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 100);

        // Sixth hit lands at multiplier 2
        for _ in 0..5 {
            session.on_brick_destroyed(&mut run);
        }
        let events = session.on_brick_destroyed(&mut run);
        let Some(StageEvent::ScoreAwarded { points, combo }) = events.first() else {
            panic!("expected a score event");
        };
        assert_eq!(*combo, 6);
        assert_eq!(*points, BRICK_SCORE * 2);
    }

    #[test]
    fn test_snake_hit_breaks_combo_and_costs_life() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 100);
        session.on_brick_destroyed(&mut run);

        let events = session.on_snake_hit(&mut run);
        assert!(events.contains(&StageEvent::ComboBroken { final_count: 1 }));
        assert!(events.contains(&StageEvent::LifeLost {
            remaining: run.lives
        }));
        assert_eq!(session.combo().count(), 0);
    }

    #[test]
    fn test_shield_absorbs_hit() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 100);
        session.on_powerup_collected(PowerUpKind::Shield);

        let lives_before = run.lives;
        let events = session.on_snake_hit(&mut run);
        assert_eq!(events, vec![StageEvent::ShieldAbsorbed]);
        assert_eq!(run.lives, lives_before);

        // Shield is spent
        assert!(!session.powerups().is_active(PowerUpKind::Shield));
    }

    #[test]
    fn test_last_life_fails_run() {
        let mut run = RunState::new();
        run.lives = 1;
        let mut session = StageSession::new(1, 100);

        let events = session.on_snake_hit(&mut run);
        assert!(events.contains(&StageEvent::RunFailed));
        assert!(session.is_failed());
        assert!(run.is_over());

        // A settled session ignores further events
        assert!(session.on_snake_hit(&mut run).is_empty());
        assert!(session.on_brick_destroyed(&mut run).is_empty());
    }

    #[test]
    fn test_combo_window_break_via_tick() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 100);
        session.on_brick_destroyed(&mut run);
        session.on_brick_destroyed(&mut run);

        let events = session.tick(crate::constants::COMBO_WINDOW_MS);
        assert!(events.contains(&StageEvent::ComboBroken { final_count: 2 }));
    }

    #[test]
    fn test_powerup_expiry_via_tick() {
        let mut session = StageSession::new(1, 100);
        session.on_powerup_collected(PowerUpKind::Ghost);

        let events = session.tick(PowerUpKind::Ghost.duration_ms());
        assert!(events.contains(&StageEvent::PowerUpExpired {
            kind: PowerUpKind::Ghost
        }));
    }

    #[test]
    fn test_food_scoring_and_drop_roll() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 100);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let mut spawned = 0;
        for _ in 0..200 {
            let events = session.on_food_eaten(&mut run, &mut rng);
            assert!(matches!(
                events[0],
                StageEvent::ScoreAwarded { points, .. } if points == FOOD_SCORE
            ));
            spawned += events
                .iter()
                .filter(|e| matches!(e, StageEvent::PowerUpSpawned { .. }))
                .count();
        }
        // Roughly one in five food pickups drops something
        assert!(spawned > 10 && spawned < 90, "spawned {}", spawned);
    }

    #[test]
    fn test_score_boost_doubles_points() {
        let mut run = RunState::new();
        let mut session = StageSession::new(1, 100);
        session.on_powerup_collected(PowerUpKind::ScoreBoost);

        let events = session.on_brick_destroyed(&mut run);
        let Some(StageEvent::ScoreAwarded { points, .. }) = events.first() else {
            panic!("expected a score event");
        };
        assert_eq!(*points, BRICK_SCORE * 2);
    }

    #[test]
    fn test_dev_boss_stage_flow() {
        let mut run = RunState::new_at_stage(0);
        let mut session = StageSession::new(0, 1);
        assert!(session.is_boss_stage());
        assert!(session.features().is_test_stage);

        destroy_all_bricks(&mut session, &mut run);
        let boss = session.boss().unwrap();
        assert_eq!(boss.boss_type, Some("dev_boss"));
        // Dev boss fights at the mapped stage's strength
        assert_eq!(boss.max_hp, BOSS_BASE_HP + BOSS_HP_PER_STAGE * 15);
    }

    #[test]
    fn test_hazard_snapshot_matches_predicates() {
        let session = StageSession::new(11, 10);
        assert!(session.hazards().saws);
        assert!(session.hazards().deadzones);
        assert!(!session.hazards().fog);
        assert!(!session.hazards().gas_zone);

        let session = StageSession::new(-1, 10);
        assert!(session.hazards().laser_turrets);
        assert!(session.hazards().floating_mines);
    }
}
