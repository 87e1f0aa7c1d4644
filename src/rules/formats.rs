//! Deck-construction rules per format.
//!
//! The catalog is a fixed table built once and shared by reference. Unknown
//! format identifiers resolve to the unrestricted `freeform` rules.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::config::LEGACY_ALLOWED_SETS;

pub const FREEFORM: &str = "freeform";

static BUILTIN: LazyLock<FormatCatalog> = LazyLock::new(FormatCatalog::standard);

// ---------------------------------------------------------------------------
// DeckFormatRule
// ---------------------------------------------------------------------------

/// Size and copy-count constraints for one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckFormatRule {
    pub id: String,
    pub label: String,
    pub description: String,
    pub min_cards: Option<u32>,
    pub max_cards: Option<u32>,
    /// `None` means any number of copies.
    pub max_copies_per_card: Option<u32>,
    /// When set, every card must come from one of these editions.
    pub allowed_set_names: Option<Vec<String>>,
}

impl DeckFormatRule {
    fn new(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            min_cards: None,
            max_cards: None,
            max_copies_per_card: None,
            allowed_set_names: None,
        }
    }

    fn min(mut self, n: u32) -> Self {
        self.min_cards = Some(n);
        self
    }

    fn max(mut self, n: u32) -> Self {
        self.max_cards = Some(n);
        self
    }

    fn copies(mut self, n: u32) -> Self {
        self.max_copies_per_card = Some(n);
        self
    }

    fn sets(mut self, sets: &[&str]) -> Self {
        self.allowed_set_names = Some(sets.iter().map(|s| s.to_string()).collect());
        self
    }

    /// The required deck size when the format fixes it exactly.
    pub fn exact_size(&self) -> Option<u32> {
        match (self.min_cards, self.max_cards) {
            (Some(min), Some(max)) if min == max => Some(min),
            _ => None,
        }
    }

    /// Whether the given set name satisfies the provenance restriction.
    pub fn allows_set(&self, set_name: Option<&str>) -> bool {
        match &self.allowed_set_names {
            None => true,
            Some(allowed) => set_name
                .map(|s| allowed.iter().any(|a| a == s))
                .unwrap_or(false),
        }
    }
}

// ---------------------------------------------------------------------------
// FormatCatalog
// ---------------------------------------------------------------------------

/// Immutable table of known formats.
#[derive(Debug, Clone)]
pub struct FormatCatalog {
    formats: HashMap<String, DeckFormatRule>,
    fallback: DeckFormatRule,
}

impl Default for FormatCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormatCatalog {
    /// Build the standard catalog of supported formats.
    pub fn standard() -> Self {
        let fallback = DeckFormatRule::new(FREEFORM, "Freeform", "No restrictions.").min(0);

        let rules = [
            DeckFormatRule::new(
                "commander",
                "Commander (EDH)",
                "Exactly 100 cards: 1 legendary commander and 99 unique cards.",
            )
            .min(100)
            .max(100)
            .copies(1),
            DeckFormatRule::new(
                "standard",
                "Standard",
                "At least 60 cards. At most 4 copies of each card.",
            )
            .min(60)
            .copies(4),
            DeckFormatRule::new(
                "modern",
                "Modern",
                "At least 60 cards. At most 4 copies of each card.",
            )
            .min(60)
            .copies(4),
            DeckFormatRule::new(
                "vintage",
                "Vintage",
                "At least 60 cards. Unique cards only (restricted).",
            )
            .min(60)
            .copies(1),
            DeckFormatRule::new(
                "legacy",
                "Legacy",
                "At least 60 cards. Alpha, Beta and Unlimited editions only.",
            )
            .min(60)
            .copies(4)
            .sets(&LEGACY_ALLOWED_SETS),
            fallback.clone(),
        ];

        let formats = rules
            .into_iter()
            .map(|rule| (rule.id.clone(), rule))
            .collect();

        Self { formats, fallback }
    }

    /// Shared instance of [`FormatCatalog::standard`].
    pub fn builtin() -> &'static FormatCatalog {
        &BUILTIN
    }

    /// Look up a format by identifier, ignoring case and surrounding spaces.
    pub fn get(&self, format_id: &str) -> Option<&DeckFormatRule> {
        let key = format_id.trim().to_lowercase();
        self.formats.get(&key)
    }

    /// Rules for `format_id`, falling back to `freeform` when unknown.
    pub fn resolve(&self, format_id: &str) -> &DeckFormatRule {
        match self.get(format_id) {
            Some(rule) => rule,
            None => {
                log::debug!("unknown format '{format_id}', using freeform rules");
                &self.fallback
            }
        }
    }

    /// Known format identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All rules, sorted by identifier.
    pub fn rules(&self) -> Vec<&DeckFormatRule> {
        let mut rules: Vec<&DeckFormatRule> = self.formats.values().collect();
        rules.sort_by(|a, b| a.id.cmp(&b.id));
        rules
    }
}
