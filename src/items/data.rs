//! The item catalog.
//!
//! Static data only; purchase state lives on the run. The catalog order is
//! the shop's display order.

#![allow(dead_code)]

use super::types::{
    ItemDef, ItemEffect, PassiveAbility, Rarity, ShopEntry, StatKind, TriggerEvent,
    VisualOverrides,
};

/// Returns the full catalog in shop display order.
pub fn catalog() -> Vec<ItemDef> {
    vec![
        ItemDef {
            id: "golden_apple",
            name: "Golden Apple",
            description: "Food is worth 50% more points.",
            price: 80,
            rarity: Rarity::Common,
            effect: ItemEffect::Stat {
                stat: StatKind::FoodScore,
                amount: 0.5,
            },
            visual: VisualOverrides::default(),
        },
        ItemDef {
            id: "wrecking_fang",
            name: "Wrecking Fang",
            description: "Bricks are worth 50% more points.",
            price: 80,
            rarity: Rarity::Common,
            effect: ItemEffect::Stat {
                stat: StatKind::BrickScore,
                amount: 0.5,
            },
            visual: VisualOverrides::default(),
        },
        ItemDef {
            id: "coin_magnet",
            name: "Coin Magnet",
            description: "Nearby coins drift toward the snake.",
            price: 120,
            rarity: Rarity::Common,
            effect: ItemEffect::Passive {
                ability: PassiveAbility::CoinMagnet,
            },
            visual: VisualOverrides::default(),
        },
        ItemDef {
            id: "adrenal_gland",
            name: "Adrenal Gland",
            description: "Eating food briefly speeds the snake up.",
            price: 150,
            rarity: Rarity::Rare,
            effect: ItemEffect::Trigger {
                event: TriggerEvent::FoodEaten,
                magnitude: 0.2,
            },
            visual: VisualOverrides {
                head_tint: Some(0xFF6644),
                ..VisualOverrides::default()
            },
        },
        ItemDef {
            id: "shatter_core",
            name: "Shatter Core",
            description: "Destroying a brick damages its neighbors.",
            price: 200,
            rarity: Rarity::Rare,
            effect: ItemEffect::Trigger {
                event: TriggerEvent::BrickDestroyed,
                magnitude: 1.0,
            },
            visual: VisualOverrides {
                trail_particle: Some("ember"),
                ..VisualOverrides::default()
            },
        },
        ItemDef {
            id: "wide_jaw",
            name: "Wide Jaw",
            description: "Pickups are collected from further away.",
            price: 180,
            rarity: Rarity::Rare,
            effect: ItemEffect::Stat {
                stat: StatKind::PickupRadius,
                amount: 1.0,
            },
            visual: VisualOverrides::default(),
        },
        ItemDef {
            id: "ghost_tail",
            name: "Ghost Tail",
            description: "The snake no longer collides with its own tail.",
            price: 350,
            rarity: Rarity::Epic,
            effect: ItemEffect::Passive {
                ability: PassiveAbility::GhostTail,
            },
            visual: VisualOverrides {
                trail_particle: Some("phantom"),
                ..VisualOverrides::default()
            },
        },
        ItemDef {
            id: "combo_keeper",
            name: "Combo Keeper",
            description: "Taking damage no longer breaks the combo.",
            price: 300,
            rarity: Rarity::Epic,
            effect: ItemEffect::Passive {
                ability: PassiveAbility::ComboKeeper,
            },
            visual: VisualOverrides::default(),
        },
        ItemDef {
            id: "iron_scale",
            name: "Iron Scale",
            description: "Start every run with an extra life.",
            price: 400,
            rarity: Rarity::Epic,
            effect: ItemEffect::Stat {
                stat: StatKind::StartingLives,
                amount: 1.0,
            },
            visual: VisualOverrides {
                head_tint: Some(0x8899AA),
                ..VisualOverrides::default()
            },
        },
        ItemDef {
            id: "debt_shield",
            name: "Debt Shield",
            description: "No loan interest accrues on boss stages.",
            price: 600,
            rarity: Rarity::Legendary,
            effect: ItemEffect::Passive {
                ability: PassiveAbility::DebtShield,
            },
            visual: VisualOverrides {
                head_tint: Some(0xFFD700),
                trail_particle: Some("gilded"),
            },
        },
    ]
}

/// Looks up an item by id.
pub fn get_item(item_id: &str) -> Option<ItemDef> {
    catalog().into_iter().find(|item| item.id == item_id)
}

/// Returns the shop listing in display order, nothing purchased yet.
pub fn shop_items() -> Vec<ShopEntry> {
    catalog()
        .into_iter()
        .map(|item| ShopEntry {
            item,
            purchased: false,
        })
        .collect()
}
