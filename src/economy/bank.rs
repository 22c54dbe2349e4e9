//! Bank tier data and loan offer generation.

#![allow(dead_code)]

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A lending tier: a set of banks sharing interest and loan-limit ranges.
///
/// Higher tiers lend smaller amounts at worse rates. Both ranges are
/// inclusive on both ends.
#[derive(Debug, Clone)]
pub struct TierDef {
    pub id: &'static str,
    pub interest_range: (u32, u32),
    pub loan_range: (u32, u32),
    pub banks: &'static [&'static str],
}

/// One randomized loan offer presented in the bank UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankOffer {
    pub bank_name: String,
    /// Percent interest charged on the outstanding balance per stage.
    pub interest_rate: u32,
    pub max_loan: u32,
}

/// Returns the lending tier table.
pub fn lending_tiers() -> Vec<TierDef> {
    vec![
        TierDef {
            id: "tier1",
            interest_range: (3, 6),
            loan_range: (1000, 3000),
            banks: &["First Serpent Savings", "Brickyard Trust", "Arcade Mutual"],
        },
        TierDef {
            id: "tier2",
            interest_range: (8, 14),
            loan_range: (400, 900),
            banks: &["Harbor Credit Union", "Sawmill Lending Co."],
        },
        TierDef {
            id: "tier3",
            interest_range: (18, 24),
            loan_range: (100, 300),
            banks: &["Gasworks Payday", "Hydra Loansharks", "Last Coil Finance"],
        },
    ]
}

/// Looks up a tier by id.
pub fn get_tier(tier_id: &str) -> Option<TierDef> {
    lending_tiers().into_iter().find(|t| t.id == tier_id)
}

/// Generates one offer per bank in the tier, rates and limits drawn
/// uniformly from the tier's ranges.
///
/// Unknown tier ids yield an empty list. Offers re-roll on every call.
pub fn generate_offers(tier_id: &str, rng: &mut impl Rng) -> Vec<BankOffer> {
    let tier = match get_tier(tier_id) {
        Some(tier) => tier,
        None => return vec![],
    };

    tier.banks
        .iter()
        .map(|bank| BankOffer {
            bank_name: bank.to_string(),
            interest_rate: rng.gen_range(tier.interest_range.0..=tier.interest_range.1),
            max_loan: rng.gen_range(tier.loan_range.0..=tier.loan_range.1),
        })
        .collect()
}
