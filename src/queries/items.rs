//! Folder and deck queries against the collection backend's `/items` routes.
//!
//! Listings return [`ItemSummary`] values holding raw card ids; the detail
//! route returns a [`Deck`] whose cards are enriched with name, type and cost.

use serde::Deserialize;
use serde_json::json;

use crate::config;
use crate::connection::Connection;
use crate::error::{DeckError, Result};
use crate::models::{Deck, DeckStatsSummary, ItemSummary, ValidationResult};
use crate::rules::{DeckValidator, FormatCatalog};
use crate::stats::DeckStatsAggregator;

#[derive(Deserialize)]
struct ItemList {
    #[serde(default)]
    items: Vec<ItemSummary>,
}

// ---------------------------------------------------------------------------
// ItemsClient
// ---------------------------------------------------------------------------

/// Query interface for the user's folders and decks.
pub struct ItemsClient<'a> {
    conn: &'a Connection,
    catalog: &'a FormatCatalog,
}

impl<'a> ItemsClient<'a> {
    /// Create a new `ItemsClient` bound to the given connection and catalog.
    pub fn new(conn: &'a Connection, catalog: &'a FormatCatalog) -> Self {
        Self { conn, catalog }
    }

    /// Fetch a single folder or deck with its enriched card list.
    pub fn get(&self, item_id: &str) -> Result<Deck> {
        let path = item_path(item_id, None)?;
        self.conn.get_json(&path, &[])
    }

    /// List the items inside a folder, or at the root when `parent_id` is `None`.
    pub fn list(&self, parent_id: Option<&str>) -> Result<Vec<ItemSummary>> {
        let endpoints = config::endpoints();
        let query: Vec<(&str, &str)> = parent_id.map(|p| vec![("parent_id", p)]).unwrap_or_default();
        let list: ItemList = self.conn.get_json(endpoints["items"], &query)?;
        Ok(list.items)
    }

    /// List every deck regardless of folder.
    pub fn decks(&self) -> Result<Vec<ItemSummary>> {
        let endpoints = config::endpoints();
        let list: ItemList = self.conn.get_json(endpoints["all_decks"], &[])?;
        Ok(list.items)
    }

    /// Add one copy of a card to a deck.
    pub fn add_card(&self, item_id: &str, card_id: &str) -> Result<()> {
        self.card_action(item_id, card_id, "add_card")
    }

    /// Remove one copy of a card from a deck.
    pub fn remove_card(&self, item_id: &str, card_id: &str) -> Result<()> {
        self.card_action(item_id, card_id, "remove_card")
    }

    /// Fetch a deck and validate it against its own format.
    pub fn validate(&self, item_id: &str) -> Result<ValidationResult> {
        let deck = self.get(item_id)?;
        Ok(DeckValidator::new(self.catalog).validate_cards(deck.format_id(), &deck.cards))
    }

    /// Fetch a deck and compute its statistics.
    pub fn stats(&self, item_id: &str, include_colorless: bool) -> Result<DeckStatsSummary> {
        let deck = self.get(item_id)?;
        Ok(DeckStatsAggregator::new(&deck.cards).summary(include_colorless))
    }

    /// Count-based validation of every deck in the listing, keyed by item id.
    ///
    /// Listings only carry card ids, so copy limits and set restrictions are
    /// not checked here.
    pub fn validate_all(&self) -> Result<Vec<(String, ValidationResult)>> {
        let validator = DeckValidator::new(self.catalog);
        let results = self
            .decks()?
            .into_iter()
            .filter(ItemSummary::is_deck)
            .map(|item| {
                let result = validator.validate_count(item.format_id(), item.card_count());
                (item.id, result)
            })
            .collect();
        Ok(results)
    }

    fn card_action(&self, item_id: &str, card_id: &str, action: &str) -> Result<()> {
        if card_id.trim().is_empty() {
            return Err(DeckError::InvalidArgument("card id must not be empty".into()));
        }
        let endpoints = config::endpoints();
        let path = item_path(item_id, Some(endpoints[action]))?;
        self.conn.post_json(&path, &json!({ "card_id": card_id }))?;
        log::info!("{action} {card_id} on item {item_id}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build `items/{id}` or `items/{id}/{action}`, rejecting ids that would
/// change the path.
pub fn item_path(item_id: &str, action: Option<&str>) -> Result<String> {
    let id = item_id.trim();
    if id.is_empty() {
        return Err(DeckError::InvalidArgument("item id must not be empty".into()));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(DeckError::InvalidArgument(format!("invalid item id '{item_id}'")));
    }

    let items = config::endpoints()["items"];
    Ok(match action {
        Some(action) => format!("{items}/{id}/{action}"),
        None => format!("{items}/{id}"),
    })
}
