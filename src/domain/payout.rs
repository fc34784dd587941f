use super::symbol::Symbol;
use crate::error::SlotError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A wager for one spin session.
///
/// Wraps `rust_decimal::Decimal` and guarantees the amount is positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Bet(Decimal);

impl Bet {
    pub fn new(value: Decimal) -> Result<Self, SlotError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(SlotError::ValidationError(
                "bet must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Bet {
    type Error = SlotError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Bet> for Decimal {
    fn from(bet: Bet) -> Self {
        bet.0
    }
}

/// One payout rule: a pure mapping from (bet, final symbols) to a prize.
///
/// Rules re-derive their match from the raw symbols on every evaluation;
/// the tier a rule is placed in carries no semantics of its own beyond
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrizeRule {
    /// Pays `bet * multiplier` if `symbol` appears in any position.
    AnyOf { symbol: Symbol, multiplier: Decimal },
    /// Pays `bet * multiplier` if `symbol` appears exactly `count` times.
    ExactCount {
        symbol: Symbol,
        count: usize,
        multiplier: Decimal,
    },
    /// Pays `bet * multiplier` if every position shows `symbol`.
    AllOf { symbol: Symbol, multiplier: Decimal },
}

impl PrizeRule {
    /// Evaluates this rule; returns 0 when it does not match.
    pub fn payout(&self, bet: Decimal, symbols: &[Symbol]) -> Decimal {
        match *self {
            PrizeRule::AnyOf { symbol, multiplier } => {
                if symbols.contains(&symbol) {
                    bet * multiplier
                } else {
                    Decimal::ZERO
                }
            }
            PrizeRule::ExactCount {
                symbol,
                count,
                multiplier,
            } => {
                if symbols.iter().filter(|s| **s == symbol).count() == count {
                    bet * multiplier
                } else {
                    Decimal::ZERO
                }
            }
            PrizeRule::AllOf { symbol, multiplier } => {
                if !symbols.is_empty() && symbols.iter().all(|s| *s == symbol) {
                    bet * multiplier
                } else {
                    Decimal::ZERO
                }
            }
        }
    }
}

/// The full ordered rule set, grouped into tiers by assumed match
/// cardinality. Immutable once built; tiers are scanned in ascending order
/// and within a tier rules run in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutTable {
    pub matched_one: Vec<PrizeRule>,
    pub matched_two: Vec<PrizeRule>,
    pub matched_three: Vec<PrizeRule>,
}

impl PayoutTable {
    /// Tiers in evaluation order: 1-match, then 2-match, then 3-match.
    pub fn tiers(&self) -> [&[PrizeRule]; 3] {
        [&self.matched_one, &self.matched_two, &self.matched_three]
    }
}

impl Default for PayoutTable {
    /// The classic table: any 🍒 pays 2.5x, exactly two 🍉 pay 3x, and a
    /// full line of 🔔 / 💎 / 🐱 pays 5x / 10x / 100x.
    fn default() -> Self {
        Self {
            matched_one: vec![PrizeRule::AnyOf {
                symbol: Symbol('🍒'),
                multiplier: dec!(2.5),
            }],
            matched_two: vec![PrizeRule::ExactCount {
                symbol: Symbol('🍉'),
                count: 2,
                multiplier: dec!(3),
            }],
            matched_three: vec![
                PrizeRule::AllOf {
                    symbol: Symbol('🔔'),
                    multiplier: dec!(5),
                },
                PrizeRule::AllOf {
                    symbol: Symbol('💎'),
                    multiplier: dec!(10),
                },
                PrizeRule::AllOf {
                    symbol: Symbol('🐱'),
                    multiplier: dec!(100),
                },
            ],
        }
    }
}
