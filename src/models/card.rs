use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::{BASIC_LAND_NAMES, MAX_MANA_VALUE};

// ---------------------------------------------------------------------------
// CardStackEntry — One row of a deck's card list
// ---------------------------------------------------------------------------

/// One card of a deck together with the number of copies it holds.
///
/// Field names follow the collection backend (`card_id`, `type_line`,
/// `mana_cost`, `cmc`); the camelCase spellings are accepted as aliases.
/// Numeric fields are decoded defensively: malformed quantities and mana
/// values become `0` instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStackEntry {
    #[serde(alias = "cardId", default)]
    pub card_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "typeLine", default)]
    pub type_line: Option<String>,
    #[serde(alias = "manaCost", default)]
    pub mana_cost: Option<String>,
    #[serde(
        rename = "cmc",
        alias = "manaValue",
        alias = "mana_value",
        default,
        deserialize_with = "lenient_mana_value"
    )]
    pub mana_value: f64,
    #[serde(default, deserialize_with = "nullable_list")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    #[serde(alias = "setName", default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
}

impl CardStackEntry {
    /// Create a single-copy entry with no type, cost or color information.
    pub fn new(card_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            name: Some(name.into()),
            type_line: None,
            mana_cost: None,
            mana_value: 0.0,
            colors: Vec::new(),
            quantity: 1,
            set_name: None,
        }
    }

    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = Some(type_line.into());
        self
    }

    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = Some(mana_cost.into());
        self
    }

    pub fn with_mana_value(mut self, mana_value: f64) -> Self {
        self.mana_value = sanitize_mana_value(mana_value);
        self
    }

    pub fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_set_name(mut self, set_name: impl Into<String>) -> Self {
        self.set_name = Some(set_name.into());
        self
    }

    /// Name used in violation messages.
    ///
    /// Ghost cards (no name) fall back to their id, then to `"Unknown card"`.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.card_id.is_empty() => &self.card_id,
            _ => "Unknown card",
        }
    }

    /// Whether the type line mentions `Land` anywhere.
    ///
    /// This is a plain substring test on the full line, so dual-typed
    /// permanents such as `"Artifact Land"` count as lands too.
    pub fn is_land(&self) -> bool {
        self.type_line
            .as_deref()
            .map(|t| t.contains("Land"))
            .unwrap_or(false)
    }

    /// Whether the card is a basic land, exempt from copy limits.
    pub fn is_basic_land(&self) -> bool {
        let by_name = self
            .name
            .as_deref()
            .map(|n| BASIC_LAND_NAMES.contains(&n))
            .unwrap_or(false);
        let by_type = self
            .type_line
            .as_deref()
            .map(|t| t.contains("Basic Land"))
            .unwrap_or(false);
        by_name || by_type
    }
}

// ---------------------------------------------------------------------------
// Lenient decoding helpers
// ---------------------------------------------------------------------------

fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(quantity_from_value).unwrap_or(0))
}

fn lenient_mana_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let value = match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(sanitize_mana_value(value))
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a copy count the way a browser's `parseInt` would: integers pass
/// through, floats and numeric strings are truncated, anything else is `0`.
pub fn quantity_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.min(u32::MAX as u64) as u32
            } else if let Some(f) = n.as_f64() {
                truncate_to_u32(f)
            } else {
                0
            }
        }
        Value::String(s) => leading_integer(s),
        _ => 0,
    }
}

fn truncate_to_u32(f: f64) -> u32 {
    if f.is_finite() && f > 0.0 {
        f.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Parse the leading decimal digits of `s`, ignoring leading whitespace.
///
/// `"4"` → 4, `"3.7"` → 3, `"2x"` → 2, `"-1"` → 0, `"abc"` → 0.
fn leading_integer(s: &str) -> u32 {
    let trimmed = s.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.starts_with('-') {
        return 0;
    }
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().map(|n| n.min(u32::MAX as u64) as u32).unwrap_or(u32::MAX)
}

/// Non-finite and negative values become 0; the rest are capped at
/// [`MAX_MANA_VALUE`] so weighted sums stay finite.
pub(crate) fn sanitize_mana_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(MAX_MANA_VALUE)
    } else {
        0.0
    }
}
