use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const SESSION_COOKIE: &str = "session_token";

pub const BASE_URL_ENV: &str = "MTGDECK_BASE_URL";
pub const SESSION_TOKEN_ENV: &str = "MTGDECK_SESSION_TOKEN";

pub fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

pub fn endpoints() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Folder / deck items
        ("items", "items"),
        ("all_decks", "items/all_lists_and_decks"),
        // Per-item actions, appended to "items/{id}/"
        ("add_card", "add_card"),
        ("remove_card", "remove_card"),
    ])
}

/// Base names of the basic lands.
///
/// Together with any card whose type line contains `"Basic Land"`, these are
/// exempt from per-card copy limits.
pub const BASIC_LAND_NAMES: [&str; 11] = [
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
    "Wastes",
];

/// Editions accepted by the Legacy format's provenance rule.
pub const LEGACY_ALLOWED_SETS: [&str; 3] = [
    "Limited Edition Alpha",
    "Limited Edition Beta",
    "Unlimited Edition",
];

/// Upper bound applied to decoded mana values (Gleemax costs 1,000,000).
pub const MAX_MANA_VALUE: f64 = 1_000_000.0;
