use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::card::CardStackEntry;

// ---------------------------------------------------------------------------
// ItemKind — Folder or deck
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Folder,
    Deck,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Deck — Full deck as returned by the item detail endpoint
// ---------------------------------------------------------------------------

/// A deck with its card list resolved into [`CardStackEntry`] rows.
///
/// The backend's detail endpoint enriches deck cards with name, type and cost.
/// Items it did not enrich still carry the raw list of card ids (one per
/// copy); those are grouped into stack entries so quantities stay correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nom", alias = "name", default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "card_stacks")]
    pub cards: Vec<CardStackEntry>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Deck {
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind: ItemKind::Deck,
            format: Some(format.into()),
            cards: Vec::new(),
            parent_id: None,
            image: None,
        }
    }

    pub fn with_cards(mut self, cards: Vec<CardStackEntry>) -> Self {
        self.cards = cards;
        self
    }

    /// Format identifier, or an empty string when the item has none.
    pub fn format_id(&self) -> &str {
        self.format.as_deref().unwrap_or("")
    }

    /// Total number of cards, summing stack quantities.
    pub fn card_count(&self) -> u32 {
        self.cards
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.quantity))
    }
}

// ---------------------------------------------------------------------------
// ItemSummary — A folder or deck as it appears in listings
// ---------------------------------------------------------------------------

/// A folder or deck from a listing endpoint.
///
/// Listings carry the raw card id list (one entry per copy) rather than
/// enriched card rows, so only count-based validation is possible from here.
/// Repeated ids are folded into [`CardRef`] counts as they are decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSummary {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    #[serde(rename = "nom", alias = "name", default)]
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "card_refs")]
    pub cards: Vec<CardRef>,
}

impl ItemSummary {
    pub fn is_deck(&self) -> bool {
        self.kind == ItemKind::Deck
    }

    pub fn format_id(&self) -> &str {
        self.format.as_deref().unwrap_or("")
    }

    pub fn card_count(&self) -> u32 {
        self.cards
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.quantity))
    }
}

/// A card id and how many copies of it a listed item holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    pub card_id: String,
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accept either enriched card objects or bare card id strings.
fn card_stacks<'de, D>(deserializer: D) -> Result<Vec<CardStackEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut stacks: Vec<CardStackEntry> = Vec::new();

    for value in raw {
        match value {
            Value::String(card_id) => {
                match stacks.iter_mut().find(|s| s.card_id == card_id) {
                    Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
                    None => stacks.push(CardStackEntry {
                        card_id,
                        name: None,
                        type_line: None,
                        mana_cost: None,
                        mana_value: 0.0,
                        colors: Vec::new(),
                        quantity: 1,
                        set_name: None,
                    }),
                }
            }
            Value::Object(_) => {
                let entry: CardStackEntry =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                stacks.push(entry);
            }
            _ => {}
        }
    }

    Ok(stacks)
}

/// Listing payloads hold card ids; enriched objects are reduced to their ids.
fn card_refs<'de, D>(deserializer: D) -> Result<Vec<CardRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut refs: Vec<CardRef> = Vec::new();
    for value in raw {
        let (card_id, copies) = match value {
            Value::String(id) => (id, 1),
            Value::Object(map) => {
                let id = map
                    .get("card_id")
                    .or_else(|| map.get("cardId"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();
                let copies = map
                    .get("quantity")
                    .map(super::card::quantity_from_value)
                    .unwrap_or(1);
                (id, copies)
            }
            _ => continue,
        };
        match refs.iter_mut().find(|r| r.card_id == card_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(copies),
            None => refs.push(CardRef {
                card_id,
                quantity: copies,
            }),
        }
    }
    Ok(refs)
}
