//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Stage the run is trying to reach
    pub target_stage: i32,

    /// Bricks in the wall at stage 1; later stages add more
    pub base_brick_count: u32,

    /// Chance per brick that the snake takes a hit, before hazard scaling
    pub base_hit_chance: f64,

    /// Whether runs borrow from the bank when the wallet runs dry
    pub take_loans: bool,

    /// Whether runs spend coins in the shop between stages
    pub buy_items: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            target_stage: 15,
            base_brick_count: 20,
            base_hit_chance: 0.01,
            take_loans: true,
            buy_items: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-world balance
    pub fn early_worlds_test() -> Self {
        Self {
            num_runs: 200,
            target_stage: 6,
            ..Default::default()
        }
    }

    /// Quick config for a frugal no-loan strategy
    pub fn no_loan_test(num_runs: u32) -> Self {
        Self {
            num_runs,
            take_loans: false,
            buy_items: false,
            ..Default::default()
        }
    }
}
