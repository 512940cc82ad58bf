//! # Domain Types
//!
//! The closed vocabularies of the app: subjects (`CategoryType`), game kinds
//! (`ActivityType`), theme keys (`ColorKey`) and the immutable
//! `ActivityConfig` record that ties them together.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level subjects shown on the home screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    Maths,
    Letter,
    Clock,
    Game,
    Picture,
    Sudoku,
    WordSearch,
    Grammar,
    Vocabulary,
    Reading,
    Sound,
    Science,
}

impl CategoryType {
    /// Home screen order.
    pub const ALL: [CategoryType; 12] = [
        CategoryType::Maths,
        CategoryType::Letter,
        CategoryType::Clock,
        CategoryType::Game,
        CategoryType::Picture,
        CategoryType::Sudoku,
        CategoryType::WordSearch,
        CategoryType::Grammar,
        CategoryType::Vocabulary,
        CategoryType::Reading,
        CategoryType::Sound,
        CategoryType::Science,
    ];

    /// The canonical upper-case key, e.g. `"WORD_SEARCH"`.
    pub fn key(&self) -> &'static str {
        match self {
            CategoryType::Maths => "MATHS",
            CategoryType::Letter => "LETTER",
            CategoryType::Clock => "CLOCK",
            CategoryType::Game => "GAME",
            CategoryType::Picture => "PICTURE",
            CategoryType::Sudoku => "SUDOKU",
            CategoryType::WordSearch => "WORD_SEARCH",
            CategoryType::Grammar => "GRAMMAR",
            CategoryType::Vocabulary => "VOCABULARY",
            CategoryType::Reading => "READING",
            CategoryType::Sound => "SOUND",
            CategoryType::Science => "SCIENCE",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a category name from config or the environment is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {:?}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for CategoryType {
    type Err = ParseCategoryError;

    /// Accepts `WORD_SEARCH`, `word_search` and `word-search`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        CategoryType::ALL
            .into_iter()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Game kinds. Each maps to exactly one game screen in `core::dispatch`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Memory,
    Quiz,
    Pattern,
    Sorting,
    AiStory,
    AiScience,
    MathGame,
    ClockGame,
    PictureQuiz,
    SudokuGame,
    MatchingGame,
    SentenceGame,
    FillGame,
    ReadingGame,
    /// Declared, no game component yet.
    WordSearchGame,
    /// Declared, no game component yet.
    PhonicsGame,
}

/// Theme keys used by activities and category themes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Blue,
    Indigo,
    Purple,
    Pink,
    Rose,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Violet,
    Fuchsia,
    Slate,
    Red,
    Brown,
    Gray,
}

impl ColorKey {
    pub const ALL: [ColorKey; 20] = [
        ColorKey::Blue,
        ColorKey::Indigo,
        ColorKey::Purple,
        ColorKey::Pink,
        ColorKey::Rose,
        ColorKey::Orange,
        ColorKey::Amber,
        ColorKey::Yellow,
        ColorKey::Lime,
        ColorKey::Green,
        ColorKey::Emerald,
        ColorKey::Teal,
        ColorKey::Cyan,
        ColorKey::Sky,
        ColorKey::Violet,
        ColorKey::Fuchsia,
        ColorKey::Slate,
        ColorKey::Red,
        ColorKey::Brown,
        ColorKey::Gray,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ColorKey::Blue => "blue",
            ColorKey::Indigo => "indigo",
            ColorKey::Purple => "purple",
            ColorKey::Pink => "pink",
            ColorKey::Rose => "rose",
            ColorKey::Orange => "orange",
            ColorKey::Amber => "amber",
            ColorKey::Yellow => "yellow",
            ColorKey::Lime => "lime",
            ColorKey::Green => "green",
            ColorKey::Emerald => "emerald",
            ColorKey::Teal => "teal",
            ColorKey::Cyan => "cyan",
            ColorKey::Sky => "sky",
            ColorKey::Violet => "violet",
            ColorKey::Fuchsia => "fuchsia",
            ColorKey::Slate => "slate",
            ColorKey::Red => "red",
            ColorKey::Brown => "brown",
            ColorKey::Gray => "gray",
        }
    }
}

/// One selectable mini-game. Defined at load time, never mutated.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityConfig {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub category: CategoryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<&'static str>,
    pub title: &'static str,
    pub color: ColorKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_label: Option<&'static str>,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_accepts_common_spellings() {
        assert_eq!("MATHS".parse::<CategoryType>(), Ok(CategoryType::Maths));
        assert_eq!("word_search".parse::<CategoryType>(), Ok(CategoryType::WordSearch));
        assert_eq!("word-search".parse::<CategoryType>(), Ok(CategoryType::WordSearch));
        assert_eq!(" science ".parse::<CategoryType>(), Ok(CategoryType::Science));
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        let err = "ASTRONOMY".parse::<CategoryType>().unwrap_err();
        assert_eq!(err, ParseCategoryError("ASTRONOMY".to_string()));
        assert!(err.to_string().contains("ASTRONOMY"));
    }

    #[test]
    fn test_category_keys_round_trip_through_serde() {
        for category in CategoryType::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_color_keys_match_serde_names() {
        for color in ColorKey::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.key()));
        }
        assert!(serde_json::from_str::<ColorKey>("\"chartreuse\"").is_err());
    }

    #[test]
    fn test_activity_config_serializes_like_registry_record() {
        let activity = ActivityConfig {
            id: "math-add-1",
            kind: ActivityType::MathGame,
            category: CategoryType::Maths,
            sub_category: Some("Addition"),
            title: "Addition",
            color: ColorKey::Blue,
            level_label: Some("Easy"),
            icon: "+",
        };
        let value = serde_json::to_value(activity).unwrap();
        assert_eq!(value["type"], "MATH_GAME");
        assert_eq!(value["category"], "MATHS");
        assert_eq!(value["subCategory"], "Addition");
        assert_eq!(value["levelLabel"], "Easy");
        assert_eq!(value["color"], "blue");
    }
}
