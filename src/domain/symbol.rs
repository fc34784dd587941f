use crate::error::SlotError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single reel symbol.
///
/// Symbols are opaque tokens compared by equality; concretely one glyph
/// (an emoji in the default alphabet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub char);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for Symbol {
    fn from(glyph: char) -> Self {
        Self(glyph)
    }
}

/// The ordered set of symbols a reel cycles through.
///
/// Must be non-empty; duplicates are allowed and only affect how often a
/// symbol comes up as a starting draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>")]
pub struct Alphabet(Vec<Symbol>);

impl Alphabet {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, SlotError> {
        if symbols.is_empty() {
            return Err(SlotError::ValidationError(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        Ok(Self(symbols))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The symbol at `index`. Callers hold indices produced by this
    /// alphabet, so out-of-range access is a logic error.
    pub fn get(&self, index: usize) -> Symbol {
        self.0[index]
    }

    /// Cyclic successor of `index`, wrapping from the last symbol to 0.
    pub fn advance(&self, index: usize) -> usize {
        if index == self.0.len() - 1 { 0 } else { index + 1 }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = SlotError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl Default for Alphabet {
    /// The classic 9-symbol machine: 🍒 🍋 🍊 🍇 🍉 🐱 🍀 💎 🔔.
    fn default() -> Self {
        Self(
            ['🍒', '🍋', '🍊', '🍇', '🍉', '🐱', '🍀', '💎', '🔔']
                .into_iter()
                .map(Symbol)
                .collect(),
        )
    }
}
