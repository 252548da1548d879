//! Colors and the category taxonomy used by the question export.
#![allow(dead_code)]
//!
//! The category set is an ordered list of labels, not a hardcoded enum: the
//! Analysis API has shipped both a three-way and a five-way taxonomy, and the
//! formatter must work with either. Labels outside the active set fall back
//! to the default (black) header color.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Colors
// ────────────────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels, matching the palette the web UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default text color. Every block renders in this unless explicitly colored.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
/// Document title color (blue-600).
pub const PRIMARY: Rgb = Rgb::new(37, 99, 235);
/// Subtitle color for the simulator line (gray-600).
pub const SECONDARY: Rgb = Rgb::new(75, 85, 99);
/// Question text color (gray-800).
pub const QUESTION_TEXT: Rgb = Rgb::new(31, 41, 55);
/// Section label color for "Expected Answer:" etc. (gray-700).
pub const SECTION_LABEL: Rgb = Rgb::new(55, 65, 81);

/// Fixed star→color table for scoring-guide lines.
///
/// 5 = emerald, 4 = blue, 3 = amber, 2 = red, 1 = dark red. Out-of-range
/// star values render in the default black.
pub fn score_color(stars: u8) -> Rgb {
    match stars {
        5 => Rgb::new(16, 185, 129),
        4 => Rgb::new(59, 130, 246),
        3 => Rgb::new(245, 158, 11),
        2 => Rgb::new(239, 68, 68),
        1 => Rgb::new(153, 27, 27),
        _ => BLACK,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// One category label with its section-header color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub name: String,
    pub color: Rgb,
}

/// The ordered set of category labels active for an export.
///
/// Iteration order is render order; questions are grouped and numbered per
/// label in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySet {
    labels: Vec<CategoryLabel>,
}

impl CategorySet {
    pub fn new(labels: Vec<CategoryLabel>) -> Self {
        Self { labels }
    }

    /// The legacy three-way taxonomy.
    pub fn three_way() -> Self {
        Self::new(vec![
            CategoryLabel {
                name: "Technical".to_string(),
                color: Rgb::new(37, 99, 235),
            },
            CategoryLabel {
                name: "Behavioral".to_string(),
                color: Rgb::new(16, 185, 129),
            },
            CategoryLabel {
                name: "Screening".to_string(),
                color: Rgb::new(245, 158, 11),
            },
        ])
    }

    /// The current five-way taxonomy used by the question generator.
    pub fn five_way() -> Self {
        Self::new(vec![
            CategoryLabel {
                name: "Core Knowledge".to_string(),
                color: Rgb::new(37, 99, 235),
            },
            CategoryLabel {
                name: "Practical Skills".to_string(),
                color: Rgb::new(22, 163, 74),
            },
            CategoryLabel {
                name: "Tools & Technology".to_string(),
                color: Rgb::new(147, 51, 234),
            },
            CategoryLabel {
                name: "Scenario-Based".to_string(),
                color: Rgb::new(249, 115, 22),
            },
            CategoryLabel {
                name: "Process & Best Practices".to_string(),
                color: Rgb::new(13, 148, 136),
            },
        ])
    }

    /// Resolves a taxonomy by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "three-way" => Some(Self::three_way()),
            "five-way" => Some(Self::five_way()),
            _ => None,
        }
    }

    pub fn labels(&self) -> &[CategoryLabel] {
        &self.labels
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }

    /// Header color for a label; unknown labels get the default black.
    pub fn color_for(&self, name: &str) -> Rgb {
        self.labels
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.color)
            .unwrap_or(BLACK)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_table_is_exact() {
        assert_eq!(score_color(5), Rgb::new(16, 185, 129));
        assert_eq!(score_color(4), Rgb::new(59, 130, 246));
        assert_eq!(score_color(3), Rgb::new(245, 158, 11));
        assert_eq!(score_color(2), Rgb::new(239, 68, 68));
        assert_eq!(score_color(1), Rgb::new(153, 27, 27));
    }

    #[test]
    fn test_score_color_out_of_range_falls_back_to_black() {
        assert_eq!(score_color(0), BLACK);
        assert_eq!(score_color(6), BLACK);
    }

    #[test]
    fn test_three_way_order() {
        let set = CategorySet::three_way();
        let names: Vec<&str> = set.labels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Technical", "Behavioral", "Screening"]);
    }

    #[test]
    fn test_five_way_order() {
        let set = CategorySet::five_way();
        let names: Vec<&str> = set.labels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Core Knowledge",
                "Practical Skills",
                "Tools & Technology",
                "Scenario-Based",
                "Process & Best Practices"
            ]
        );
    }

    #[test]
    fn test_unknown_label_color_is_black() {
        let set = CategorySet::three_way();
        assert_eq!(set.color_for("Trivia"), BLACK);
        assert!(!set.contains("Trivia"));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            CategorySet::from_name("three-way"),
            Some(CategorySet::three_way())
        );
        assert_eq!(
            CategorySet::from_name("five-way"),
            Some(CategorySet::five_way())
        );
        assert_eq!(CategorySet::from_name("six-way"), None);
    }
}
