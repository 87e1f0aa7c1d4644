//! Mana-cost symbol parsing.

use std::sync::LazyLock;

use regex::Regex;

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("valid mana symbol pattern"));

/// Extract the inner text of every brace-delimited symbol.
///
/// `"{2}{W/U}{W}"` yields `["2", "W/U", "W"]`. Text outside braces is ignored.
pub fn symbols(mana_cost: &str) -> Vec<&str> {
    SYMBOL
        .captures_iter(mana_cost)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Whether a symbol stands for colorless mana: a generic number or `C`.
pub fn is_colorless_symbol(symbol: &str) -> bool {
    symbol == "C" || (!symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit()))
}
