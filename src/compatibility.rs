// 💞 Compatibility Evaluator - two life path numbers → relationship type + theme
//
// Type comes from the distance between the numbers, theme from their reduced sum.

use crate::reduce::reduce;
use serde::{Deserialize, Serialize};

// ============================================================================
// RELATIONSHIP TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    /// Distance 0
    TooSimilar,

    /// Distance 1
    WellBalanced,

    /// Distance 2 or 3
    StimulatingDifference,

    /// Distance 4 or more
    SlowGrowth,
}

impl RelationshipType {
    pub fn from_distance(distance: u32) -> Self {
        match distance {
            0 => RelationshipType::TooSimilar,
            1 => RelationshipType::WellBalanced,
            2 | 3 => RelationshipType::StimulatingDifference,
            _ => RelationshipType::SlowGrowth,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelationshipType::TooSimilar => "too similar: friction or deep understanding",
            RelationshipType::WellBalanced => "well balanced: complementary",
            RelationshipType::StimulatingDifference => "stimulating difference",
            RelationshipType::SlowGrowth => "takes time to understand but high mutual growth",
        }
    }
}

// ============================================================================
// THEME TABLE
// ============================================================================

pub const UNKNOWN_THEME: &str = "unknown relationship";

/// Relationship themes keyed by the reduced sum of both numbers
pub const THEMES: [(u32, &str); 12] = [
    (1, "independence and challenge: two strong wills sharpening each other"),
    (2, "empathy: a bond of quiet mutual understanding"),
    (3, "playfulness: a light, joyful and expressive pairing"),
    (4, "stability: a steady partnership built step by step"),
    (5, "change-seeking: a relationship that thrives on freedom and novelty"),
    (6, "love and home: a caring, domestic partnership"),
    (7, "spiritual distance: closeness that still needs room to breathe"),
    (8, "shared achievement: building success and security together"),
    (9, "service and destiny: a bond devoted to something larger"),
    (11, "spiritual growth: partners who awaken each other"),
    (22, "shared ideals: building a lasting vision together"),
    (33, "unconditional love: a partnership of compassion and healing"),
];

pub fn theme_for(total: u32) -> &'static str {
    THEMES
        .iter()
        .find(|(key, _)| *key == total)
        .map(|(_, theme)| *theme)
        .unwrap_or(UNKNOWN_THEME)
}

// ============================================================================
// EVALUATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub first: u32,
    pub second: u32,
    pub relationship_type: RelationshipType,
    pub relationship_label: String,
    /// Reduced sum used as the theme key
    pub total: u32,
    pub theme: String,
}

impl CompatibilityResult {
    pub fn summary(&self) -> String {
        format!(
            "{} + {} → {} | theme {}: {}",
            self.first, self.second, self.relationship_label, self.total, self.theme
        )
    }
}

pub fn evaluate(n1: u32, n2: u32) -> CompatibilityResult {
    let relationship_type = RelationshipType::from_distance(n1.abs_diff(n2));
    let total = reduce(n1 as u64 + n2 as u64);

    CompatibilityResult {
        first: n1,
        second: n2,
        relationship_type,
        relationship_label: relationship_type.label().to_string(),
        total,
        theme: theme_for(total).to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
