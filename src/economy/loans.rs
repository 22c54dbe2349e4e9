//! The player's outstanding loans and per-stage interest settlement.

use serde::{Deserialize, Serialize};

use super::bank::BankOffer;

/// One outstanding loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub bank_name: String,
    pub principal: u64,
    /// Percent charged on the balance at every stage settlement.
    pub interest_rate: u32,
    pub balance: u64,
}

/// All loans the player currently owes on.
///
/// Pure arithmetic over the contained balances; interest accrues only when
/// the run advances a stage, never from wall-clock time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBook {
    pub loans: Vec<Loan>,
}

impl LoanBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows `amount` against an offer, clamped to the offer's limit.
    /// Returns the amount actually credited to the wallet.
    pub fn take_offer(&mut self, offer: &BankOffer, amount: u64) -> u64 {
        let credited = amount.min(offer.max_loan as u64);
        if credited == 0 {
            return 0;
        }
        self.loans.push(Loan {
            bank_name: offer.bank_name.clone(),
            principal: credited,
            interest_rate: offer.interest_rate,
            balance: credited,
        });
        credited
    }

    /// Accrues one stage's interest on every balance. Returns the total
    /// interest added. Rounds up so a nonzero balance always accrues.
    pub fn settle_stage(&mut self) -> u64 {
        let mut total = 0;
        for loan in &mut self.loans {
            let interest = (loan.balance * loan.interest_rate as u64).div_ceil(100);
            loan.balance += interest;
            total += interest;
        }
        total
    }

    /// Pays `amount` toward the loan at `index`. Returns the amount applied
    /// (never more than the balance); cleared loans are removed.
    pub fn repay(&mut self, index: usize, amount: u64) -> u64 {
        let Some(loan) = self.loans.get_mut(index) else {
            return 0;
        };
        let applied = amount.min(loan.balance);
        loan.balance -= applied;
        if loan.balance == 0 {
            self.loans.remove(index);
        }
        applied
    }

    pub fn total_debt(&self) -> u64 {
        self.loans.iter().map(|l| l.balance).sum()
    }

    pub fn is_debt_free(&self) -> bool {
        self.loans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(rate: u32, max_loan: u32) -> BankOffer {
        BankOffer {
            bank_name: "Test Bank".to_string(),
            interest_rate: rate,
            max_loan,
        }
    }

    #[test]
    fn test_take_offer_clamps_to_limit() {
        let mut book = LoanBook::new();
        let credited = book.take_offer(&offer(10, 300), 1000);
        assert_eq!(credited, 300);
        assert_eq!(book.total_debt(), 300);
    }

    #[test]
    fn test_take_offer_zero_amount_records_nothing() {
        let mut book = LoanBook::new();
        assert_eq!(book.take_offer(&offer(10, 300), 0), 0);
        assert!(book.is_debt_free());
    }

    #[test]
    fn test_interest_compounds_per_stage() {
        let mut book = LoanBook::new();
        book.take_offer(&offer(10, 1000), 100);

        assert_eq!(book.settle_stage(), 10);
        assert_eq!(book.total_debt(), 110);

        // Second settlement charges interest on the new balance
        assert_eq!(book.settle_stage(), 11);
        assert_eq!(book.total_debt(), 121);
    }

    #[test]
    fn test_interest_rounds_up() {
        let mut book = LoanBook::new();
        book.take_offer(&offer(3, 1000), 10);

        // 3% of 10 is 0.3, charged as 1
        assert_eq!(book.settle_stage(), 1);
        assert_eq!(book.total_debt(), 11);
    }

    #[test]
    fn test_repay_caps_at_balance_and_clears() {
        let mut book = LoanBook::new();
        book.take_offer(&offer(5, 1000), 200);

        assert_eq!(book.repay(0, 150), 150);
        assert_eq!(book.total_debt(), 50);

        // Overpayment applies only the remaining balance and removes the loan
        assert_eq!(book.repay(0, 500), 50);
        assert!(book.is_debt_free());
    }

    #[test]
    fn test_repay_out_of_range_is_noop() {
        let mut book = LoanBook::new();
        assert_eq!(book.repay(0, 100), 0);
        book.take_offer(&offer(5, 1000), 200);
        assert_eq!(book.repay(3, 100), 0);
        assert_eq!(book.total_debt(), 200);
    }

    #[test]
    fn test_multiple_loans_settle_together() {
        let mut book = LoanBook::new();
        book.take_offer(&offer(10, 1000), 100);
        book.take_offer(&offer(20, 1000), 50);

        assert_eq!(book.settle_stage(), 10 + 10);
        assert_eq!(book.total_debt(), 110 + 60);
    }
}
