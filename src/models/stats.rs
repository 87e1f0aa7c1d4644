use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CurveMode
// ---------------------------------------------------------------------------

/// How mana-curve buckets are subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    Type,
    Color,
}

// ---------------------------------------------------------------------------
// TypeCategory
// ---------------------------------------------------------------------------

/// Spell types tracked in the mana curve, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCategory {
    Creature,
    Instant,
    Sorcery,
    Enchantment,
    Artifact,
    Planeswalker,
    Battle,
}

impl TypeCategory {
    /// Priority order: an `Artifact Creature` is counted as a `Creature`.
    pub const ALL: [TypeCategory; 7] = [
        TypeCategory::Creature,
        TypeCategory::Instant,
        TypeCategory::Sorcery,
        TypeCategory::Enchantment,
        TypeCategory::Artifact,
        TypeCategory::Planeswalker,
        TypeCategory::Battle,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            TypeCategory::Creature => "Creature",
            TypeCategory::Instant => "Instant",
            TypeCategory::Sorcery => "Sorcery",
            TypeCategory::Enchantment => "Enchantment",
            TypeCategory::Artifact => "Artifact",
            TypeCategory::Planeswalker => "Planeswalker",
            TypeCategory::Battle => "Battle",
        }
    }

    /// First category whose keyword appears anywhere in `type_line`.
    pub fn first_match(type_line: &str) -> Option<TypeCategory> {
        Self::ALL
            .into_iter()
            .find(|t| type_line.contains(t.keyword()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// ColorCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCategory {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
    Multicolor,
}

impl ColorCategory {
    pub const ALL: [ColorCategory; 7] = [
        ColorCategory::White,
        ColorCategory::Blue,
        ColorCategory::Black,
        ColorCategory::Red,
        ColorCategory::Green,
        ColorCategory::Colorless,
        ColorCategory::Multicolor,
    ];

    /// The five colors paired with their single-letter codes.
    pub const PIPS: [(char, ColorCategory); 5] = [
        ('W', ColorCategory::White),
        ('U', ColorCategory::Blue),
        ('B', ColorCategory::Black),
        ('R', ColorCategory::Red),
        ('G', ColorCategory::Green),
    ];

    /// Map a color code (`"W"`, `"U"`, `"B"`, `"R"`, `"G"`) to its color.
    pub fn from_code(code: &str) -> Option<ColorCategory> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::PIPS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, color)| *color),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorCategory::White => "White",
            ColorCategory::Blue => "Blue",
            ColorCategory::Black => "Black",
            ColorCategory::Red => "Red",
            ColorCategory::Green => "Green",
            ColorCategory::Colorless => "Colorless",
            ColorCategory::Multicolor => "Multicolor",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// ManaCurveBucket
// ---------------------------------------------------------------------------

/// Number of curve buckets: mana values 0 through 6 plus `7+`.
pub const CURVE_BUCKETS: usize = 8;

/// Cards at one mana value (or `7+` for the last bucket).
///
/// Only the subtotals of the mode the curve was computed in are filled.
/// `total` counts every non-land card in the bucket, including those that
/// matched no type keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCurveBucket {
    pub label: String,
    pub total: u32,
    by_type: [u32; 7],
    by_color: [u32; 7],
}

impl ManaCurveBucket {
    pub fn new(index: usize) -> Self {
        let label = if index + 1 >= CURVE_BUCKETS {
            format!("{}+", CURVE_BUCKETS - 1)
        } else {
            index.to_string()
        };
        Self {
            label,
            total: 0,
            by_type: [0; 7],
            by_color: [0; 7],
        }
    }

    pub fn type_count(&self, category: TypeCategory) -> u32 {
        self.by_type[category.index()]
    }

    pub fn color_count(&self, category: ColorCategory) -> u32 {
        self.by_color[category.index()]
    }

    pub(crate) fn add_type(&mut self, category: TypeCategory, quantity: u32) {
        let slot = &mut self.by_type[category.index()];
        *slot = slot.saturating_add(quantity);
    }

    pub(crate) fn add_color(&mut self, category: ColorCategory, quantity: u32) {
        let slot = &mut self.by_color[category.index()];
        *slot = slot.saturating_add(quantity);
    }
}

// ---------------------------------------------------------------------------
// DescriptiveStats
// ---------------------------------------------------------------------------

/// Mean and median mana value of a deck's non-land cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub median: f64,
}

// ---------------------------------------------------------------------------
// DeckStatsSummary
// ---------------------------------------------------------------------------

/// Every statistic for a deck in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStatsSummary {
    pub card_count: u32,
    pub land_count: u32,
    pub curve_by_type: Vec<ManaCurveBucket>,
    pub curve_by_color: Vec<ManaCurveBucket>,
    pub descriptive: DescriptiveStats,
    pub type_distribution: Vec<(String, u32)>,
    pub color_distribution: Vec<(ColorCategory, u32)>,
}
