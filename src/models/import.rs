use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ImportLine — One parsed decklist row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportLine {
    pub quantity: u32,
    pub name: String,
    /// Set code, lowercased (`"woe"`).
    #[serde(rename = "set")]
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
}
