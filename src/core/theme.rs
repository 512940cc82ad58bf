//! # Category Themes
//!
//! Static presentation metadata per category: the label and subtitle on the
//! home tile, the theme color and the header glyph. Pure configuration; the
//! navigation state machine never looks at it.

use crate::core::types::{CategoryType, ColorKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTheme {
    pub label: &'static str,
    pub subtitle: &'static str,
    pub color: ColorKey,
    pub icon: &'static str,
}

impl CategoryType {
    pub fn theme(&self) -> CategoryTheme {
        let (label, subtitle, color, icon) = match self {
            CategoryType::Maths => ("Maths", "Numbers", ColorKey::Blue, "123"),
            CategoryType::Letter => ("Letter", "Writing", ColorKey::Slate, "✎"),
            CategoryType::Clock => ("Clock", "Time", ColorKey::Indigo, "◷"),
            CategoryType::Game => ("Games", "Play", ColorKey::Green, "▶"),
            CategoryType::Picture => ("Picture", "Visuals", ColorKey::Pink, "◉"),
            CategoryType::Sudoku => ("Sudoku", "Logic", ColorKey::Orange, "#"),
            CategoryType::WordSearch => ("Word Search", "Words", ColorKey::Violet, "⌕"),
            CategoryType::Grammar => ("Grammar", "Writing", ColorKey::Yellow, "¶"),
            CategoryType::Vocabulary => ("Vocabulary", "Words", ColorKey::Teal, "Aa"),
            CategoryType::Reading => ("Reading", "Stories", ColorKey::Sky, "☰"),
            CategoryType::Sound => ("Sound", "Phonics", ColorKey::Fuchsia, "♪"),
            CategoryType::Science => ("Science", "Explore", ColorKey::Emerald, "⚗"),
        };
        CategoryTheme {
            label,
            subtitle,
            color,
            icon,
        }
    }
}

/// Header theme for a category key. Unknown keys get the Maths theme.
pub fn header_theme(key: &str) -> CategoryTheme {
    key.parse::<CategoryType>()
        .unwrap_or(CategoryType::Maths)
        .theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_theme_known_key() {
        assert_eq!(header_theme("SCIENCE").label, "Science");
        assert_eq!(header_theme("WORD_SEARCH").color, ColorKey::Violet);
    }

    #[test]
    fn test_header_theme_falls_back_to_maths() {
        assert_eq!(header_theme("MUSIC"), CategoryType::Maths.theme());
    }

    #[test]
    fn test_every_category_has_a_label() {
        for category in CategoryType::ALL {
            assert!(!category.theme().label.is_empty());
        }
    }
}
