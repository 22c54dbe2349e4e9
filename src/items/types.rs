#![allow(dead_code)]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Gameplay moments a trigger effect can fire on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    FoodEaten,
    BrickDestroyed,
    DamageTaken,
    StageCleared,
}

/// Stats a stat effect can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    FoodScore,
    BrickScore,
    MoveSpeed,
    PickupRadius,
    StartingLives,
}

/// Always-on abilities granted by passive items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassiveAbility {
    CoinMagnet,
    GhostTail,
    DebtShield,
    ComboKeeper,
}

/// What an item does, as a discriminated union.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    /// Fires `magnitude` worth of effect each time `event` happens.
    Trigger { event: TriggerEvent, magnitude: f64 },
    /// Permanently raises `stat` by `amount`.
    Stat { stat: StatKind, amount: f64 },
    /// Grants an always-on ability.
    Passive { ability: PassiveAbility },
}

/// Cosmetic overrides applied by the host renderer while the item is owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualOverrides {
    /// 0xRRGGBB tint for the snake head.
    pub head_tint: Option<u32>,
    /// Particle emitter key for the trail.
    pub trail_particle: Option<&'static str>,
}

/// One purchasable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u64,
    pub rarity: Rarity,
    pub effect: ItemEffect,
    pub visual: VisualOverrides,
}

/// A catalog entry as listed in the shop, with transient purchase state.
#[derive(Debug, Clone)]
pub struct ShopEntry {
    pub item: ItemDef,
    pub purchased: bool,
}
