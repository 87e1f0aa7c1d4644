use serde::{Deserialize, Serialize};

use super::card::CardStackEntry;

pub const INVALID_MESSAGE: &str = "Deck does not meet format rules.";
pub const VALID_MESSAGE: &str = "Deck is valid.";

// ---------------------------------------------------------------------------
// DeckInput — What the caller knows about the deck
// ---------------------------------------------------------------------------

/// Input to deck validation.
///
/// Callers that only hold a card count (folder listings) pass [`DeckInput::Count`];
/// per-card rules are then skipped.
#[derive(Debug, Clone, Copy)]
pub enum DeckInput<'a> {
    Cards(&'a [CardStackEntry]),
    Count(u32),
}

impl<'a> DeckInput<'a> {
    /// Total number of cards, summing quantities for a full list.
    pub fn total(&self) -> u32 {
        match self {
            DeckInput::Cards(cards) => cards
                .iter()
                .fold(0u32, |acc, c| acc.saturating_add(c.quantity)),
            DeckInput::Count(n) => *n,
        }
    }

    pub fn cards(&self) -> Option<&'a [CardStackEntry]> {
        match self {
            DeckInput::Cards(cards) => Some(cards),
            DeckInput::Count(_) => None,
        }
    }
}

impl<'a> From<&'a [CardStackEntry]> for DeckInput<'a> {
    fn from(cards: &'a [CardStackEntry]) -> Self {
        DeckInput::Cards(cards)
    }
}

impl<'a> From<&'a Vec<CardStackEntry>> for DeckInput<'a> {
    fn from(cards: &'a Vec<CardStackEntry>) -> Self {
        DeckInput::Cards(cards.as_slice())
    }
}

impl From<u32> for DeckInput<'_> {
    fn from(count: u32) -> Self {
        DeckInput::Count(count)
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Outcome of validating a deck against a format.
///
/// `message` is a fixed summary; the individual violations live in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub message: String,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        let is_valid = errors.is_empty();
        let message = if is_valid { VALID_MESSAGE } else { INVALID_MESSAGE };
        Self {
            is_valid,
            errors,
            message: message.to_string(),
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }
}
