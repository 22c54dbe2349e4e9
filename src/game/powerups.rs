//! Timed power-up effects.

/// Power-ups that can drop during a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    SlowMotion,
    Ghost,
    ScoreBoost,
    Shield,
    Magnet,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::SlowMotion,
        PowerUpKind::Ghost,
        PowerUpKind::ScoreBoost,
        PowerUpKind::Shield,
        PowerUpKind::Magnet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SlowMotion => "Slow Motion",
            Self::Ghost => "Ghost",
            Self::ScoreBoost => "Score Boost",
            Self::Shield => "Shield",
            Self::Magnet => "Magnet",
        }
    }

    /// How long the effect lasts from pickup.
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::SlowMotion => 6_000,
            Self::Ghost => 8_000,
            Self::ScoreBoost => 10_000,
            Self::Shield => 12_000,
            Self::Magnet => 15_000,
        }
    }
}

/// The set of currently running power-up timers.
#[derive(Debug, Clone, Default)]
pub struct ActivePowerUps {
    active: Vec<(PowerUpKind, u64)>,
}

impl ActivePowerUps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `kind`, or restarts its timer at full duration if already
    /// running.
    pub fn activate(&mut self, kind: PowerUpKind) {
        let duration = kind.duration_ms();
        if let Some(entry) = self.active.iter_mut().find(|(k, _)| *k == kind) {
            entry.1 = duration;
        } else {
            self.active.push((kind, duration));
        }
    }

    /// Stops `kind` immediately. Returns true if it was running.
    pub fn deactivate(&mut self, kind: PowerUpKind) -> bool {
        let before = self.active.len();
        self.active.retain(|(k, _)| *k != kind);
        self.active.len() < before
    }

    /// Advances all timers. Returns the kinds that expired this tick.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        self.active.retain_mut(|(kind, remaining)| {
            if dt_ms >= *remaining {
                expired.push(*kind);
                false
            } else {
                *remaining -= dt_ms;
                true
            }
        });
        expired
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active.iter().any(|(k, _)| *k == kind)
    }

    pub fn remaining_ms(&self, kind: PowerUpKind) -> Option<u64> {
        self.active
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, remaining)| *remaining)
    }
}
