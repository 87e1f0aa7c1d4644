//! Shared test fixtures for the deck SDK integration tests.
//!
//! Provides card builders and small sample decks covering the shapes the
//! validator and aggregator care about: basic lands, multi-typed spells,
//! hybrid costs and ghost cards.

#![allow(dead_code)]

use mtgdeck_sdk::CardStackEntry;

/// A nonland spell with the given type line and mana value.
pub fn spell(id: &str, name: &str, type_line: &str, mana_value: f64) -> CardStackEntry {
    CardStackEntry::new(id, name)
        .with_type_line(type_line)
        .with_mana_value(mana_value)
}

/// `count` distinct single-copy creatures named `Card 1`, `Card 2`, ...
pub fn singletons(count: usize) -> Vec<CardStackEntry> {
    (1..=count)
        .map(|i| spell(&format!("card-{i:03}"), &format!("Card {i}"), "Creature — Elf", 2.0))
        .collect()
}

pub fn basic(name: &str, quantity: u32) -> CardStackEntry {
    CardStackEntry::new(format!("basic-{}", name.to_lowercase()), name)
        .with_type_line(format!("Basic Land — {name}"))
        .with_quantity(quantity)
}

/// A 60-card Standard-legal list: 15 playsets of spells plus 24 Mountains.
pub fn standard_sixty() -> Vec<CardStackEntry> {
    let mut cards: Vec<CardStackEntry> = (1..=9)
        .map(|i| {
            spell(&format!("std-{i}"), &format!("Spell {i}"), "Instant", 1.0).with_quantity(4)
        })
        .collect();
    cards.push(basic("Mountain", 24));
    cards
}

/// Backend item-detail payload for an enriched deck.
pub fn deck_payload() -> serde_json::Value {
    serde_json::json!({
        "id": "65f1c0ffee0000000000beef",
        "user_id": "user-1",
        "type": "deck",
        "nom": "Mono Red",
        "format": "standard",
        "parent_id": null,
        "image": null,
        "cards": [
            {
                "card_id": "bolt",
                "quantity": 4,
                "name": "Lightning Bolt",
                "image_normal": "https://img.example/bolt.jpg",
                "mana_cost": "{R}",
                "type_line": "Instant",
                "colors": ["R"],
                "cmc": 1.0
            },
            {
                "card_id": "mountain",
                "quantity": 20,
                "name": "Mountain",
                "image_normal": null,
                "mana_cost": "",
                "type_line": "Basic Land — Mountain",
                "colors": [],
                "cmc": 0
            }
        ]
    })
}
