use crate::mana;
use crate::models::card::sanitize_mana_value;
use crate::models::{
    CardStackEntry, ColorCategory, CurveMode, DeckStatsSummary, DescriptiveStats,
    ManaCurveBucket, TypeCategory, CURVE_BUCKETS,
};

/// Separator between types and subtypes on a type line.
const TYPE_SEPARATOR: char = '—';

// ---------------------------------------------------------------------------
// DeckStatsAggregator
// ---------------------------------------------------------------------------

/// Statistics over a deck's card list.
///
/// A lightweight view borrowing the cards; holds no state of its own, so
/// repeated calls on the same list return identical results.
#[derive(Debug, Clone, Copy)]
pub struct DeckStatsAggregator<'a> {
    cards: &'a [CardStackEntry],
}

impl<'a> DeckStatsAggregator<'a> {
    /// Create a new `DeckStatsAggregator` over the given cards.
    pub fn new(cards: &'a [CardStackEntry]) -> Self {
        Self { cards }
    }

    fn spells(&self) -> impl Iterator<Item = &'a CardStackEntry> {
        self.cards.iter().filter(|c| !c.is_land())
    }

    /// Bucket non-land cards by mana value (0 through 6, then `7+`).
    ///
    /// In [`CurveMode::Type`] each card adds to the first matching type in
    /// [`TypeCategory::ALL`] order; in [`CurveMode::Color`] to its single
    /// color, `Multicolor` or `Colorless`.
    pub fn mana_curve(&self, mode: CurveMode) -> [ManaCurveBucket; CURVE_BUCKETS] {
        let mut buckets: [ManaCurveBucket; CURVE_BUCKETS] =
            std::array::from_fn(ManaCurveBucket::new);

        for card in self.spells() {
            let bucket = &mut buckets[bucket_index(card.mana_value)];
            bucket.total = bucket.total.saturating_add(card.quantity);

            match mode {
                CurveMode::Type => {
                    let category = card
                        .type_line
                        .as_deref()
                        .and_then(TypeCategory::first_match);
                    if let Some(category) = category {
                        bucket.add_type(category, card.quantity);
                    }
                }
                CurveMode::Color => bucket.add_color(curve_color(card), card.quantity),
            }
        }

        buckets
    }

    /// Quantity-weighted mean and median mana value of non-land cards.
    ///
    /// The mean is rounded to two decimals. The median is taken over every
    /// copy, averaging the two middle values for an even count.
    pub fn descriptive_stats(&self) -> DescriptiveStats {
        let mut values: Vec<(f64, u64)> = self
            .spells()
            .filter(|c| c.quantity > 0)
            .map(|c| (sanitize_mana_value(c.mana_value), c.quantity as u64))
            .collect();

        let count: u64 = values.iter().map(|(_, q)| q).sum();
        if count == 0 {
            return DescriptiveStats::default();
        }

        let weighted_sum: f64 = values.iter().map(|(mv, q)| mv * *q as f64).sum();
        let mean = round2(weighted_sum / count as f64);

        values.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mid = count / 2;
        let median = if count % 2 == 1 {
            nth_value(&values, mid)
        } else {
            (nth_value(&values, mid - 1) + nth_value(&values, mid)) / 2.0
        };

        DescriptiveStats { mean, median }
    }

    /// Card count per main type, lands included, in first-seen order.
    ///
    /// The main type is the last word before the `—` separator, so
    /// `"Legendary Creature — Human Wizard"` counts as `"Creature"`.
    pub fn type_distribution(&self) -> Vec<(String, u32)> {
        let mut counts: Vec<(String, u32)> = Vec::new();

        for card in self.cards {
            let Some(main_type) = card.type_line.as_deref().and_then(main_type) else {
                continue;
            };
            match counts.iter_mut().find(|(name, _)| name == main_type) {
                Some((_, n)) => *n = n.saturating_add(card.quantity),
                None => counts.push((main_type.to_string(), card.quantity)),
            }
        }

        counts
    }

    /// Color pip counts from mana costs, weighted by quantity.
    ///
    /// Each color is tested independently against every symbol, so a hybrid
    /// `{W/U}` adds to both White and Blue. Generic numbers and `{C}` count
    /// as Colorless only when `include_colorless` is set. Colors with a zero
    /// total are omitted.
    pub fn color_distribution(&self, include_colorless: bool) -> Vec<(ColorCategory, u32)> {
        let mut totals = [0u32; 6];

        for card in self.cards {
            let Some(cost) = card.mana_cost.as_deref() else {
                continue;
            };
            for symbol in mana::symbols(cost) {
                for (i, (letter, _)) in ColorCategory::PIPS.iter().enumerate() {
                    if symbol.contains(*letter) {
                        totals[i] = totals[i].saturating_add(card.quantity);
                    }
                }
                if include_colorless && mana::is_colorless_symbol(symbol) {
                    totals[5] = totals[5].saturating_add(card.quantity);
                }
            }
        }

        ColorCategory::ALL
            .into_iter()
            .take(6)
            .zip(totals)
            .filter(|(_, n)| *n > 0)
            .collect()
    }

    /// Compute every statistic at once.
    pub fn summary(&self, include_colorless: bool) -> DeckStatsSummary {
        let card_count = self
            .cards
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.quantity));
        let land_count = self
            .cards
            .iter()
            .filter(|c| c.is_land())
            .fold(0u32, |acc, c| acc.saturating_add(c.quantity));

        DeckStatsSummary {
            card_count,
            land_count,
            curve_by_type: self.mana_curve(CurveMode::Type).to_vec(),
            curve_by_color: self.mana_curve(CurveMode::Color).to_vec(),
            descriptive: self.descriptive_stats(),
            type_distribution: self.type_distribution(),
            color_distribution: self.color_distribution(include_colorless),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bucket_index(mana_value: f64) -> usize {
    let floored = mana_value.floor();
    if floored >= (CURVE_BUCKETS - 1) as f64 {
        CURVE_BUCKETS - 1
    } else if floored > 0.0 {
        floored as usize
    } else {
        0
    }
}

fn curve_color(card: &CardStackEntry) -> ColorCategory {
    match card.colors.as_slice() {
        [] => ColorCategory::Colorless,
        [single] => ColorCategory::from_code(single).unwrap_or(ColorCategory::Colorless),
        _ => ColorCategory::Multicolor,
    }
}

fn main_type(type_line: &str) -> Option<&str> {
    type_line
        .split(TYPE_SEPARATOR)
        .next()
        .and_then(|types| types.split_whitespace().last())
}

/// Value at position `k` of the multiset described by sorted `(value, copies)` pairs.
fn nth_value(sorted: &[(f64, u64)], k: u64) -> f64 {
    let mut seen = 0u64;
    for (value, copies) in sorted {
        seen += copies;
        if k < seen {
            return *value;
        }
    }
    sorted.last().map(|(v, _)| *v).unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
