//! Decklist import parsing.
//!
//! Understands the common text export shapes:
//!
//! - `2 Crystal Grotto (WOE) 254` (quantity, name, set code, collector number)
//! - `4 Lightning Bolt` or `4x Lightning Bolt`
//! - `Sol Ring` (a single copy)

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ImportLine;

static FULL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(.+?)\s+\(([a-zA-Z0-9]+)\)\s+(\d+[a-zA-Z]*)$")
        .expect("valid full import pattern")
});

static SIMPLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)x?\s+(.*)$").expect("valid simple import pattern"));

/// Section headers in Arena-style exports.
const SECTION_HEADERS: [&str; 5] = ["deck", "sideboard", "commander", "companion", "maybeboard"];

/// Parse one decklist line. Blank lines yield `None`.
pub fn parse_import_line(line: &str) -> Option<ImportLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = FULL_LINE.captures(line) {
        return Some(ImportLine {
            quantity: parse_quantity(&caps[1]),
            name: caps[2].trim().to_string(),
            set_code: Some(caps[3].to_lowercase()),
            collector_number: Some(caps[4].to_string()),
        });
    }

    if let Some(caps) = SIMPLE_LINE.captures(line) {
        return Some(ImportLine {
            quantity: parse_quantity(&caps[1]),
            name: caps[2].trim().to_string(),
            set_code: None,
            collector_number: None,
        });
    }

    Some(ImportLine {
        quantity: 1,
        name: line.to_string(),
        set_code: None,
        collector_number: None,
    })
}

/// Parse a whole decklist, skipping blank lines, comments (`//`, `#`) and
/// section headers such as `Deck` or `Sideboard`.
pub fn parse_decklist(text: &str) -> Vec<ImportLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//") && !line.starts_with('#'))
        .filter(|line| !is_section_header(line))
        .filter_map(parse_import_line)
        .collect()
}

fn is_section_header(line: &str) -> bool {
    let lower = line.trim_end_matches(':').to_lowercase();
    SECTION_HEADERS.contains(&lower.as_str())
}

fn parse_quantity(digits: &str) -> u32 {
    digits.parse::<u64>().map(|n| n.min(u32::MAX as u64) as u32).unwrap_or(u32::MAX)
}
