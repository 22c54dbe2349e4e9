//! Headless balance simulator.
//!
//! Plays thousands of runs against the real stage logic by feeding
//! synthetic engine events through [`crate::game::StageSession`], to answer
//! balance questions:
//! - How far does a run get before lives run out?
//! - How much debt does a loan-heavy strategy end with?
//! - How often is each boss defeated?
//!
//! The simulator drives the same code paths as live play; only the physics
//! is approximated by event probabilities.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
