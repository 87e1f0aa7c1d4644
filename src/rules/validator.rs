//! Deck legality checks against a format's rules.

use crate::models::{CardStackEntry, DeckInput, ValidationResult};

use super::formats::{DeckFormatRule, FormatCatalog};

// ---------------------------------------------------------------------------
// DeckValidator
// ---------------------------------------------------------------------------

/// Checks decks against the rules of a [`FormatCatalog`].
///
/// Validation never fails: every rule breach becomes one message in
/// [`ValidationResult::errors`], and unknown formats validate as `freeform`.
#[derive(Debug, Clone, Copy)]
pub struct DeckValidator<'a> {
    catalog: &'a FormatCatalog,
}

impl Default for DeckValidator<'static> {
    fn default() -> Self {
        Self::new(FormatCatalog::builtin())
    }
}

impl<'a> DeckValidator<'a> {
    /// Create a new `DeckValidator` bound to the given catalog.
    pub fn new(catalog: &'a FormatCatalog) -> Self {
        Self { catalog }
    }

    /// Validate a deck given either its full card list or only its size.
    ///
    /// With [`DeckInput::Count`] only the size rules run; copy limits and
    /// set restrictions need the card list.
    pub fn validate<'c>(&self, format_id: &str, input: impl Into<DeckInput<'c>>) -> ValidationResult {
        let input = input.into();
        let rules = self.catalog.resolve(format_id);
        let total = input.total();

        let mut errors = size_violations(rules, total);
        if let Some(cards) = input.cards() {
            errors.extend(copy_violations(rules, cards));
            errors.extend(set_violations(rules, cards));
        }

        log::debug!(
            "validated deck for format '{}': {} cards, {} violation(s)",
            rules.id,
            total,
            errors.len()
        );

        ValidationResult::from_errors(errors)
    }

    /// Validate a full card list.
    pub fn validate_cards(&self, format_id: &str, cards: &[CardStackEntry]) -> ValidationResult {
        self.validate(format_id, DeckInput::Cards(cards))
    }

    /// Validate using only a precomputed card count.
    pub fn validate_count(&self, format_id: &str, count: u32) -> ValidationResult {
        self.validate(format_id, DeckInput::Count(count))
    }
}

// ---------------------------------------------------------------------------
// Rule checks
// ---------------------------------------------------------------------------

fn size_violations(rules: &DeckFormatRule, total: u32) -> Vec<String> {
    // An exact-size format reports a single message instead of min and max.
    if let Some(exact) = rules.exact_size() {
        if total != exact {
            return vec![format!(
                "Deck must contain exactly {exact} cards (currently {total})."
            )];
        }
        return Vec::new();
    }

    let mut errors = Vec::new();
    if let Some(min) = rules.min_cards {
        if total < min {
            errors.push(format!("Too few cards: {total}/{min}."));
        }
    }
    if let Some(max) = rules.max_cards {
        if total > max {
            errors.push(format!("Too many cards: {total}/{max}."));
        }
    }
    errors
}

fn copy_violations(rules: &DeckFormatRule, cards: &[CardStackEntry]) -> Vec<String> {
    let Some(limit) = rules.max_copies_per_card else {
        return Vec::new();
    };

    cards
        .iter()
        .filter(|card| !card.is_basic_land() && card.quantity > limit)
        .map(|card| {
            let noun = if limit == 1 { "copy" } else { "copies" };
            format!(
                "\"{}\" is limited to {} {} ({} in deck).",
                card.display_name(),
                limit,
                noun,
                card.quantity
            )
        })
        .collect()
}

fn set_violations(rules: &DeckFormatRule, cards: &[CardStackEntry]) -> Vec<String> {
    if rules.allowed_set_names.is_none() {
        return Vec::new();
    }

    cards
        .iter()
        .filter(|card| !rules.allows_set(card.set_name.as_deref()))
        .map(|card| {
            let set = card.set_name.as_deref().unwrap_or("an unknown set");
            format!(
                "\"{}\" comes from {} which is not allowed in {}.",
                card.display_name(),
                set,
                rules.label
            )
        })
        .collect()
}
