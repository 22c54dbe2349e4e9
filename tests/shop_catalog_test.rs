//! Shop and item catalog integration tests

use snakeout::game::{PurchaseResult, RunState};
use snakeout::items::{catalog, get_item, shop_items, ItemEffect, PassiveAbility, Rarity};

#[test]
fn test_shop_listing_order_and_initial_state() {
    let items = catalog();
    let listing = shop_items();

    assert_eq!(listing.len(), items.len());
    for (entry, item) in listing.iter().zip(&items) {
        assert_eq!(entry.item.id, item.id);
        assert!(!entry.purchased);
    }
}

#[test]
fn test_lookup_returns_not_found_sentinel() {
    assert!(get_item("golden_apple").is_some());
    assert!(get_item("golden_banana").is_none());
}

#[test]
fn test_every_item_is_purchasable_with_enough_coins() {
    for item in catalog() {
        let mut run = RunState::new();
        run.add_coins(item.price);
        assert_eq!(
            run.purchase(item.id),
            PurchaseResult::Purchased,
            "could not buy {}",
            item.id
        );
        assert_eq!(run.coins, 0);
        assert!(run.has_item(item.id));
    }
}

#[test]
fn test_purchase_rejections() {
    let mut run = RunState::new();
    assert_eq!(run.purchase("ghost_tail"), PurchaseResult::InsufficientCoins);
    assert_eq!(run.purchase("spoon"), PurchaseResult::UnknownItem);

    run.add_coins(10_000);
    assert_eq!(run.purchase("ghost_tail"), PurchaseResult::Purchased);
    assert_eq!(run.purchase("ghost_tail"), PurchaseResult::AlreadyOwned);
}

#[test]
fn test_passive_items_grant_their_abilities() {
    let mut run = RunState::new();
    run.add_coins(10_000);

    for item in catalog() {
        if let ItemEffect::Passive { ability } = item.effect {
            assert!(!run.has_ability(ability));
            run.purchase(item.id);
            assert!(run.has_ability(ability), "missing ability from {}", item.id);
        }
    }

    assert!(run.has_ability(PassiveAbility::CoinMagnet));
    assert!(run.has_ability(PassiveAbility::DebtShield));
}

#[test]
fn test_catalog_covers_every_rarity() {
    let items = catalog();
    for rarity in [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary] {
        assert!(
            items.iter().any(|item| item.rarity == rarity),
            "no {} items in the catalog",
            rarity.name()
        );
    }
}

#[test]
fn test_visual_overrides_are_well_formed() {
    for item in catalog() {
        if let Some(tint) = item.visual.head_tint {
            assert!(tint <= 0xFFFFFF, "{} tint out of RGB range", item.id);
        }
        if let Some(trail) = item.visual.trail_particle {
            assert!(!trail.is_empty());
        }
    }
}
