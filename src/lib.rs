//! Snakeout - Snake/Breakout Arcade Game Logic Core
//!
//! This crate holds the engine-agnostic game logic: world and stage
//! progression, the loan/shop economy, the item catalog, per-stage gameplay
//! state, and persistence. The rendering host queries these modules at
//! stage-load time and feeds gameplay events back in; it never reaches
//! into their internals.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod economy;
pub mod game;
pub mod items;
pub mod save_manager;
pub mod simulator;
pub mod worlds;
