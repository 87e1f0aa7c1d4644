//! Deck statistics: mana curve, type and color distributions, mean and median
//! mana value.
//!
//! All computations are pure and recomputed from scratch on every call.

pub mod aggregator;

pub use aggregator::DeckStatsAggregator;
