//! Deck statistics tests: mana curve, descriptive stats, type and color
//! distributions.

mod common;

use mtgdeck_sdk::models::{ColorCategory, CurveMode, DescriptiveStats, TypeCategory};
use mtgdeck_sdk::{CardStackEntry, DeckStatsAggregator};

fn card(mana_value: f64, quantity: u32) -> CardStackEntry {
    CardStackEntry::new(format!("mv{mana_value}-{quantity}"), "Card")
        .with_mana_value(mana_value)
        .with_quantity(quantity)
}

// ---------------------------------------------------------------------------
// Mana curve
// ---------------------------------------------------------------------------

#[test]
fn curve_excludes_lands() {
    let cards = vec![
        common::spell("bear", "Bear", "Creature", 2.0).with_quantity(3),
        common::spell("land", "Land", "Land", 2.0).with_quantity(1),
    ];

    let curve = DeckStatsAggregator::new(&cards).mana_curve(CurveMode::Type);

    assert_eq!(curve[2].total, 3);
    assert_eq!(curve[2].type_count(TypeCategory::Creature), 3);
}

#[test]
fn curve_has_eight_labelled_buckets() {
    let curve = DeckStatsAggregator::new(&[]).mana_curve(CurveMode::Type);
    let labels: Vec<&str> = curve.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5", "6", "7+"]);
    assert!(curve.iter().all(|b| b.total == 0));
}

#[test]
fn curve_floors_and_clamps_mana_values() {
    let cards = vec![card(0.5, 1), card(2.9, 2), card(7.0, 3), card(15.0, 4), card(6.99, 5)];

    let curve = DeckStatsAggregator::new(&cards).mana_curve(CurveMode::Type);

    assert_eq!(curve[0].total, 1);
    assert_eq!(curve[2].total, 2);
    assert_eq!(curve[6].total, 5);
    assert_eq!(curve[7].total, 7);
}

#[test]
fn curve_totals_sum_to_nonland_quantity() {
    let cards = vec![
        common::spell("a", "A", "Creature", 1.0).with_quantity(4),
        common::spell("b", "B", "Instant", 3.0).with_quantity(2),
        common::spell("c", "C", "Kindred Sorcery", 9.0).with_quantity(1),
        common::spell("d", "D", "Legendary Artifact", 0.0).with_quantity(1),
        common::basic("Forest", 17),
        common::spell("e", "E", "Artifact Land", 0.0).with_quantity(2),
    ];

    for mode in [CurveMode::Type, CurveMode::Color] {
        let curve = DeckStatsAggregator::new(&cards).mana_curve(mode);
        let total: u32 = curve.iter().map(|b| b.total).sum();
        assert_eq!(total, 8);
    }
}

#[test]
fn type_mode_counts_first_keyword_only() {
    let cards = vec![
        common::spell("golem", "Golem", "Artifact Creature — Golem", 3.0).with_quantity(2),
        common::spell("aura", "Aura", "Enchantment Creature — God", 3.0).with_quantity(1),
        common::spell("pw", "Walker", "Legendary Planeswalker — Jace", 3.0).with_quantity(1),
    ];

    let curve = DeckStatsAggregator::new(&cards).mana_curve(CurveMode::Type);
    let bucket = &curve[3];

    assert_eq!(bucket.type_count(TypeCategory::Creature), 3);
    assert_eq!(bucket.type_count(TypeCategory::Artifact), 0);
    assert_eq!(bucket.type_count(TypeCategory::Enchantment), 0);
    assert_eq!(bucket.type_count(TypeCategory::Planeswalker), 1);
    assert_eq!(bucket.total, 4);
}

#[test]
fn unmatched_types_still_count_toward_total() {
    let cards = vec![
        common::spell("tribal", "Odd", "Tribal Kindred", 2.0).with_quantity(2),
        card(2.0, 1),
    ];

    let curve = DeckStatsAggregator::new(&cards).mana_curve(CurveMode::Type);
    let bucket = &curve[2];
    let typed: u32 = TypeCategory::ALL.iter().map(|t| bucket.type_count(*t)).sum();

    assert_eq!(bucket.total, 3);
    assert_eq!(typed, 0);
}

#[test]
fn color_mode_buckets_by_color_count() {
    let cards = vec![
        common::spell("w", "W", "Creature", 1.0).with_colors(&["W"]).with_quantity(2),
        common::spell("ub", "UB", "Instant", 1.0).with_colors(&["U", "B"]).with_quantity(3),
        common::spell("c", "C", "Artifact", 1.0).with_quantity(4),
        common::spell("g", "G", "Sorcery", 1.0).with_colors(&["G"]).with_quantity(1),
    ];

    let curve = DeckStatsAggregator::new(&cards).mana_curve(CurveMode::Color);
    let bucket = &curve[1];

    assert_eq!(bucket.color_count(ColorCategory::White), 2);
    assert_eq!(bucket.color_count(ColorCategory::Multicolor), 3);
    assert_eq!(bucket.color_count(ColorCategory::Colorless), 4);
    assert_eq!(bucket.color_count(ColorCategory::Green), 1);
    assert_eq!(bucket.color_count(ColorCategory::Blue), 0);
    assert_eq!(bucket.total, 10);
    // Type subtotals stay empty in color mode.
    assert_eq!(bucket.type_count(TypeCategory::Creature), 0);
}

#[test]
fn cards_without_type_line_are_spells() {
    let cards = vec![card(4.0, 2)];
    let curve = DeckStatsAggregator::new(&cards).mana_curve(CurveMode::Type);
    assert_eq!(curve[4].total, 2);
}

// ---------------------------------------------------------------------------
// Descriptive stats
// ---------------------------------------------------------------------------

#[test]
fn empty_deck_has_zero_stats() {
    let stats = DeckStatsAggregator::new(&[]).descriptive_stats();
    assert_eq!(stats, DescriptiveStats { mean: 0.0, median: 0.0 });
}

#[test]
fn extreme_mana_values_stay_finite() {
    let decoded: CardStackEntry = serde_json::from_value(serde_json::json!({
        "card_id": "huge",
        "type_line": "Sorcery",
        "cmc": 1e308,
        "quantity": 2
    }))
    .unwrap();
    assert_eq!(decoded.mana_value, 1_000_000.0);

    let stats = DeckStatsAggregator::new(std::slice::from_ref(&decoded)).descriptive_stats();
    assert_eq!(stats, DescriptiveStats { mean: 1_000_000.0, median: 1_000_000.0 });

    let mut assigned = card(1.0, u32::MAX);
    assigned.mana_value = f64::MAX;
    let stats = DeckStatsAggregator::new(&[assigned, card(2.0, u32::MAX)]).descriptive_stats();
    assert!(stats.mean.is_finite());
    assert!(stats.median.is_finite());
    assert_eq!(stats.median, 500_001.0);
}

#[test]
fn lands_only_deck_has_zero_stats() {
    let cards = vec![common::basic("Island", 40)];
    let stats = DeckStatsAggregator::new(&cards).descriptive_stats();
    assert_eq!(stats, DescriptiveStats::default());
}

#[test]
fn even_count_median_averages_middle_values() {
    let cards = vec![card(1.0, 2), card(3.0, 2)];
    let stats = DeckStatsAggregator::new(&cards).descriptive_stats();
    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.median, 2.0);
}

#[test]
fn odd_count_median_takes_middle_copy() {
    // Expanded: [1, 1, 1, 5, 6]
    let cards = vec![card(6.0, 1), card(1.0, 3), card(5.0, 1)];
    let stats = DeckStatsAggregator::new(&cards).descriptive_stats();
    assert_eq!(stats.median, 1.0);
    assert_eq!(stats.mean, 2.8);
}

#[test]
fn mean_is_rounded_to_two_decimals() {
    // (1 + 2 + 2) / 3 = 1.666...
    let cards = vec![card(1.0, 1), card(2.0, 2)];
    let stats = DeckStatsAggregator::new(&cards).descriptive_stats();
    assert_eq!(stats.mean, 1.67);
    assert_eq!(stats.median, 2.0);
}

#[test]
fn descriptive_stats_ignore_lands_and_zero_quantities() {
    let cards = vec![
        card(2.0, 1),
        card(4.0, 1),
        card(10.0, 0),
        common::basic("Plains", 20),
    ];
    let stats = DeckStatsAggregator::new(&cards).descriptive_stats();
    assert_eq!(stats.mean, 3.0);
    assert_eq!(stats.median, 3.0);
}

// ---------------------------------------------------------------------------
// Type distribution
// ---------------------------------------------------------------------------

#[test]
fn type_distribution_uses_last_word_before_dash() {
    let cards = vec![
        common::spell("a", "A", "Legendary Creature — Human Wizard", 2.0).with_quantity(2),
        common::spell("b", "B", "Creature — Elf", 1.0).with_quantity(3),
        common::basic("Forest", 10),
        common::spell("c", "C", "Instant", 1.0).with_quantity(4),
        common::spell("d", "D", "Artifact Creature — Golem", 4.0),
    ];

    let dist = DeckStatsAggregator::new(&cards).type_distribution();

    assert_eq!(
        dist,
        vec![
            ("Creature".to_string(), 6),
            ("Land".to_string(), 10),
            ("Instant".to_string(), 4),
        ]
    );
}

#[test]
fn type_distribution_skips_missing_type_lines() {
    let cards = vec![card(1.0, 3), common::spell("x", "X", "Sorcery", 1.0)];
    let dist = DeckStatsAggregator::new(&cards).type_distribution();
    assert_eq!(dist, vec![("Sorcery".to_string(), 1)]);
}

// ---------------------------------------------------------------------------
// Color distribution
// ---------------------------------------------------------------------------

#[test]
fn color_pips_weighted_by_quantity() {
    let cards = vec![
        CardStackEntry::new("a", "A").with_mana_cost("{2}{W}{W}").with_quantity(2),
        CardStackEntry::new("b", "B").with_mana_cost("{R}").with_quantity(3),
    ];

    let dist = DeckStatsAggregator::new(&cards).color_distribution(false);

    assert_eq!(
        dist,
        vec![(ColorCategory::White, 4), (ColorCategory::Red, 3)]
    );
}

#[test]
fn hybrid_symbols_count_for_both_colors() {
    let cards = vec![CardStackEntry::new("h", "Hybrid").with_mana_cost("{W/U}{W/U}")];

    let dist = DeckStatsAggregator::new(&cards).color_distribution(false);

    assert_eq!(dist, vec![(ColorCategory::White, 2), (ColorCategory::Blue, 2)]);
}

#[test]
fn colorless_symbols_only_when_requested() {
    let cards = vec![
        CardStackEntry::new("a", "A").with_mana_cost("{3}{C}{G}").with_quantity(2),
        CardStackEntry::new("b", "B").with_mana_cost("{X}{10}"),
    ];

    let without = DeckStatsAggregator::new(&cards).color_distribution(false);
    assert_eq!(without, vec![(ColorCategory::Green, 2)]);

    let with = DeckStatsAggregator::new(&cards).color_distribution(true);
    assert_eq!(
        with,
        vec![(ColorCategory::Green, 2), (ColorCategory::Colorless, 5)]
    );
}

#[test]
fn empty_and_missing_costs_yield_nothing() {
    let cards = vec![
        CardStackEntry::new("a", "A").with_mana_cost(""),
        CardStackEntry::new("b", "B"),
    ];
    assert!(DeckStatsAggregator::new(&cards).color_distribution(true).is_empty());
    assert!(DeckStatsAggregator::new(&[]).color_distribution(true).is_empty());
    assert!(DeckStatsAggregator::new(&[]).color_distribution(false).is_empty());
    assert!(DeckStatsAggregator::new(&[]).type_distribution().is_empty());
}

// ---------------------------------------------------------------------------
// Summary and determinism
// ---------------------------------------------------------------------------

#[test]
fn summary_bundles_every_statistic() {
    let cards = vec![
        common::spell("bolt", "Lightning Bolt", "Instant", 1.0)
            .with_mana_cost("{R}")
            .with_colors(&["R"])
            .with_quantity(4),
        common::basic("Mountain", 20),
    ];

    let summary = DeckStatsAggregator::new(&cards).summary(false);

    assert_eq!(summary.card_count, 24);
    assert_eq!(summary.land_count, 20);
    assert_eq!(summary.curve_by_type.len(), 8);
    assert_eq!(summary.curve_by_type[1].type_count(TypeCategory::Instant), 4);
    assert_eq!(summary.curve_by_color[1].color_count(ColorCategory::Red), 4);
    assert_eq!(summary.descriptive.mean, 1.0);
    assert_eq!(summary.color_distribution, vec![(ColorCategory::Red, 4)]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["cardCount"], 24);
    assert_eq!(json["curveByType"][7]["label"], "7+");
}

#[test]
fn aggregators_are_idempotent() {
    let cards = vec![
        common::spell("a", "A", "Creature", 2.0).with_mana_cost("{1}{G}").with_colors(&["G"]),
        common::spell("b", "B", "Instant", 5.0).with_mana_cost("{3}{U/B}").with_quantity(2),
        common::basic("Swamp", 7),
    ];
    let stats = DeckStatsAggregator::new(&cards);

    assert_eq!(stats.mana_curve(CurveMode::Type), stats.mana_curve(CurveMode::Type));
    assert_eq!(stats.mana_curve(CurveMode::Color), stats.mana_curve(CurveMode::Color));
    assert_eq!(stats.descriptive_stats(), stats.descriptive_stats());
    assert_eq!(stats.type_distribution(), stats.type_distribution());
    assert_eq!(stats.color_distribution(true), stats.color_distribution(true));
    assert_eq!(stats.summary(true), stats.summary(true));
}
