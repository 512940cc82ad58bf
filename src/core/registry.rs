//! # Activity Registry
//!
//! The static, ordered list of every activity the app offers. This is data,
//! not logic: order matters (it drives the grouped list layout), nothing else
//! does.

use crate::core::types::{ActivityConfig, ActivityType, CategoryType, ColorKey};

const fn activity(
    id: &'static str,
    kind: ActivityType,
    category: CategoryType,
    sub_category: Option<&'static str>,
    title: &'static str,
    color: ColorKey,
    level_label: Option<&'static str>,
    icon: &'static str,
) -> ActivityConfig {
    ActivityConfig {
        id,
        kind,
        category,
        sub_category,
        title,
        color,
        level_label,
        icon,
    }
}

use ActivityType as A;
use CategoryType as C;
use ColorKey as K;

pub static ACTIVITIES: &[ActivityConfig] = &[
    // Maths
    activity("math-count-1", A::MathGame, C::Maths, Some("Counting"), "Counting", K::Blue, Some("Easy"), "123"),
    activity("math-count-2", A::MathGame, C::Maths, Some("Counting"), "Counting", K::Blue, Some("Medium"), "123"),
    activity("math-add-1", A::MathGame, C::Maths, Some("Addition"), "Addition", K::Indigo, Some("Easy"), "+"),
    activity("math-add-2", A::MathGame, C::Maths, Some("Addition"), "Addition", K::Indigo, Some("Medium"), "+"),
    activity("math-add-3", A::MathGame, C::Maths, Some("Addition"), "Addition", K::Indigo, Some("Hard"), "+"),
    activity("math-mix-1", A::MathGame, C::Maths, Some("Mixed"), "Mixed Problems", K::Purple, Some("Hard"), "+-"),
    activity("math-mix-2", A::MathGame, C::Maths, Some("Mixed"), "Mixed Problems", K::Purple, Some("Bonus"), "+-"),
    activity("math-shapes", A::Pattern, C::Maths, None, "Shape Patterns", K::Sky, None, "◆"),
    // Letter
    activity("letter-upper", A::MatchingGame, C::Letter, Some("Alphabet"), "Big Letters", K::Slate, Some("A-Z"), "A"),
    activity("letter-lower", A::MatchingGame, C::Letter, Some("Alphabet"), "Small Letters", K::Slate, Some("a-z"), "a"),
    activity("letter-sort", A::Sorting, C::Letter, Some("Order"), "ABC Order", K::Gray, Some("Sort"), "↕"),
    // Clock
    activity("clock-hours", A::ClockGame, C::Clock, Some("Read the Clock"), "O'Clock", K::Indigo, Some("Hours"), "◷"),
    activity("clock-half", A::ClockGame, C::Clock, Some("Read the Clock"), "Half Past", K::Indigo, Some("Half"), "◷"),
    activity("clock-quarter", A::ClockGame, C::Clock, Some("Read the Clock"), "Quarter Past", K::Indigo, Some("Quarter"), "◷"),
    // Games
    activity("game-memory-animals", A::Memory, C::Game, Some("Memory"), "Animal Memory", K::Green, Some("Animals"), "▣"),
    activity("game-memory-fruits", A::Memory, C::Game, Some("Memory"), "Fruit Memory", K::Green, Some("Fruits"), "▣"),
    activity("game-pattern", A::Pattern, C::Game, Some("Thinking"), "What Comes Next?", K::Lime, Some("Patterns"), "◇"),
    activity("game-sorting", A::Sorting, C::Game, Some("Thinking"), "Sort It Out", K::Lime, Some("Sorting"), "≡"),
    activity("game-quiz", A::Quiz, C::Game, None, "Fun Quiz", K::Emerald, None, "?"),
    // Picture
    activity("picture-animals", A::PictureQuiz, C::Picture, Some("Name It"), "Animals", K::Pink, Some("Animals"), "◉"),
    activity("picture-food", A::PictureQuiz, C::Picture, Some("Name It"), "Food", K::Pink, Some("Food"), "◉"),
    activity("picture-colors", A::PictureQuiz, C::Picture, Some("Colors"), "Colors", K::Rose, Some("Colors"), "◐"),
    // Sudoku
    activity("sudoku-4", A::SudokuGame, C::Sudoku, Some("Grids"), "Mini Sudoku", K::Orange, Some("4x4"), "#"),
    activity("sudoku-6", A::SudokuGame, C::Sudoku, Some("Grids"), "Sudoku", K::Orange, Some("6x6"), "#"),
    // Word search
    activity("wordsearch-animals", A::WordSearchGame, C::WordSearch, Some("Puzzles"), "Animal Words", K::Violet, Some("Animals"), "⌕"),
    // Grammar
    activity("grammar-sentence", A::SentenceGame, C::Grammar, Some("Sentences"), "Build a Sentence", K::Yellow, Some("Build"), "✎"),
    activity("grammar-fill", A::FillGame, C::Grammar, Some("Sentences"), "Fill the Blank", K::Yellow, Some("Fill"), "_"),
    // Vocabulary
    activity("vocab-opposites", A::MatchingGame, C::Vocabulary, Some("Word Pairs"), "Opposites", K::Teal, Some("Opposites"), "⇄"),
    activity("vocab-rhymes", A::MatchingGame, C::Vocabulary, Some("Word Pairs"), "Rhymes", K::Teal, Some("Rhymes"), "♪"),
    activity("vocab-quiz", A::Quiz, C::Vocabulary, Some("Quiz"), "Word Quiz", K::Cyan, Some("Quiz"), "?"),
    // Reading
    activity("reading-short", A::ReadingGame, C::Reading, Some("Read Along"), "Short Stories", K::Sky, Some("Level 1"), "☰"),
    activity("reading-long", A::ReadingGame, C::Reading, Some("Read Along"), "Longer Stories", K::Sky, Some("Level 2"), "☰"),
    activity("reading-ai-story", A::AiStory, C::Reading, Some("Story Maker"), "Make a Story", K::Fuchsia, Some("Create"), "✦"),
    // Sound: no activities yet
    // Science
    activity("science-facts", A::AiScience, C::Science, Some("Discover"), "Science Facts", K::Emerald, Some("Facts"), "⚗"),
    activity("science-quiz", A::Quiz, C::Science, Some("Discover"), "Nature Quiz", K::Emerald, Some("Quiz"), "?"),
    activity("science-sorting", A::Sorting, C::Science, None, "Living or Not?", K::Brown, None, "✿"),
];

/// Looks up an activity by id.
pub fn find(id: &str) -> Option<&'static ActivityConfig> {
    ACTIVITIES.iter().find(|a| a.id == id)
}
