use crate::domain::payout::{Bet, PayoutTable};
use crate::domain::symbol::Symbol;
use rust_decimal::Decimal;

/// Evaluates a finalized symbol line against a payout table.
///
/// Tiers run in ascending match-cardinality order (1-match, 2-match,
/// 3-match) and within a tier rules run in the order given; the first rule
/// that pays anything wins. This is deliberately not "best match wins": a
/// table whose tiers overlap will pay the lesser, earlier match, matching
/// the machine this engine was modeled on.
pub struct PrizeEngine {
    table: PayoutTable,
}

impl PrizeEngine {
    pub fn new(table: PayoutTable) -> Self {
        Self { table }
    }

    /// Returns the payout for `symbols`, or 0 when no rule matches.
    pub fn evaluate(&self, bet: Bet, symbols: &[Symbol]) -> Decimal {
        let bet = bet.value();
        for tier in self.table.tiers() {
            for rule in tier {
                let prize = rule.payout(bet, symbols);
                if prize > Decimal::ZERO {
                    return prize;
                }
            }
        }
        Decimal::ZERO
    }
}
