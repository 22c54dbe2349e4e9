//! Per-stage gameplay state and cross-stage run progression.
//!
//! The host engine owns movement, physics, and rendering; it reports
//! gameplay events (brick destroyed, food eaten, snake hit) into
//! [`stage::StageSession`] and maps the returned [`stage::StageEvent`]s to
//! visuals and sound.

pub mod combo;
pub mod powerups;
pub mod run;
pub mod stage;

pub use combo::ComboTracker;
pub use powerups::{ActivePowerUps, PowerUpKind};
pub use run::{PurchaseResult, RunState};
pub use stage::{BossState, StageEvent, StageHazards, StageSession};
