//! Main simulation runner driving real stage logic with synthetic events.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::economy::generate_offers;
use crate::game::run::RunState;
use crate::game::stage::{StageEvent, StageSession};
use crate::items::catalog;

/// Coin level below which a simulated player goes to the bank.
const BROKE_THRESHOLD: u64 = 50;

/// Coin level above which a simulated player repays debt.
const FLUSH_THRESHOLD: u64 = 500;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Stage {}, Score {}, Coins {}, Debt {}, Bosses {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_stage,
                run_stats.final_score,
                run_stats.final_coins,
                run_stats.final_debt,
                run_stats.bosses_defeated,
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.target_stage)
}

/// Plays one run to the target stage or to game over.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut run = RunState::new();
    let mut stats = RunStats::default();

    while !run.is_over() && run.stage <= config.target_stage {
        let stage = run.stage;
        let bricks = config.base_brick_count + 2 * stage.max(1) as u32;
        let mut session = StageSession::new(stage, bricks);
        let hit_chance = hit_chance_for(config, &session);

        // Wall phase: chew through bricks, eat food, dodge (or not)
        while session.bricks_remaining() > 0 && !session.is_failed() {
            note_events(&session.on_brick_destroyed(&mut run), &mut stats);

            if rng.gen_bool(0.3) {
                let events = session.on_food_eaten(&mut run, rng);
                note_events(&events, &mut stats);
                for event in events {
                    // Collect about half of the dropped power-ups
                    if let StageEvent::PowerUpSpawned { kind } = event {
                        if rng.gen_bool(0.5) {
                            note_events(&session.on_powerup_collected(kind), &mut stats);
                        }
                    }
                }
            }

            if rng.gen_bool(hit_chance) {
                note_events(&session.on_snake_hit(&mut run), &mut stats);
            }

            session.tick(150);
        }

        // Boss phase
        while session.boss().is_some() && !session.is_failed() {
            note_events(&session.on_boss_hit(5, &mut run), &mut stats);
            if rng.gen_bool((hit_chance * 2.0).min(1.0)) {
                note_events(&session.on_snake_hit(&mut run), &mut stats);
            }
            session.tick(150);
        }

        if !session.is_cleared() {
            break;
        }

        between_stages(config, &mut run, &mut stats, rng);
        run.advance_stage();
    }

    stats.reached_target = run.stage > config.target_stage;
    stats.final_stage = run.stage;
    stats.stages_cleared = run.stages_cleared;
    stats.final_score = run.score;
    stats.final_coins = run.coins;
    stats.final_debt = run.loans.total_debt();
    stats
}

/// Shop and bank decisions between stages.
fn between_stages(
    config: &SimConfig,
    run: &mut RunState,
    stats: &mut RunStats,
    rng: &mut ChaCha8Rng,
) {
    if config.buy_items {
        let affordable = catalog()
            .into_iter()
            .find(|item| !run.has_item(item.id) && item.price <= run.coins);
        if let Some(item) = affordable {
            run.purchase(item.id);
            stats.items_bought += 1;
        }
    }

    if config.take_loans && run.coins < BROKE_THRESHOLD {
        // Desperate runs fall through to worse tiers
        let tier = if run.loans.is_debt_free() { "tier2" } else { "tier3" };
        let offers = generate_offers(tier, rng);
        if let Some(offer) = offers.first() {
            run.take_loan(offer, offer.max_loan as u64);
            stats.loans_taken += 1;
        }
    }

    if run.coins > FLUSH_THRESHOLD && !run.loans.is_debt_free() {
        run.repay_loan(0, run.coins / 2);
    }
}

fn hit_chance_for(config: &SimConfig, session: &StageSession) -> f64 {
    let hazards = session.hazards();
    let hazard_count = [
        hazards.saws,
        hazards.gas_zone,
        hazards.fog,
        hazards.deadzones,
        hazards.laser_turrets,
        hazards.floating_mines,
    ]
    .iter()
    .filter(|active| **active)
    .count();

    (config.base_hit_chance * (1.0 + hazard_count as f64)).min(1.0)
}

fn note_events(events: &[StageEvent], stats: &mut RunStats) {
    for event in events {
        match event {
            StageEvent::BossDefeated { .. } => stats.bosses_defeated += 1,
            StageEvent::LifeLost { .. } => stats.lives_lost += 1,
            StageEvent::PowerUpActivated { .. } => stats.powerups_collected += 1,
            _ => {}
        }
    }
}
