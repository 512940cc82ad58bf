//! # Game Dispatch
//!
//! Maps each `ActivityType` to the screen that plays it. The match has no
//! wildcard arm: a new activity type does not compile until it is given a
//! screen, even if that screen is `ComingSoon`.

use crate::core::types::ActivityType;

/// Which game component the shell mounts for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameScreen {
    Memory,
    Quiz,
    Pattern,
    Sorting,
    AiStory,
    AiScience,
    Math,
    Clock,
    Picture,
    Sudoku,
    Matching,
    Sentence,
    Fill,
    Reading,
    ComingSoon,
}

impl GameScreen {
    /// AI activities never report completion.
    pub fn reports_completion(&self) -> bool {
        !matches!(
            self,
            GameScreen::AiStory | GameScreen::AiScience | GameScreen::ComingSoon
        )
    }
}

pub fn screen_for(kind: ActivityType) -> GameScreen {
    match kind {
        ActivityType::Memory => GameScreen::Memory,
        ActivityType::Quiz => GameScreen::Quiz,
        ActivityType::Pattern => GameScreen::Pattern,
        ActivityType::Sorting => GameScreen::Sorting,
        ActivityType::AiStory => GameScreen::AiStory,
        ActivityType::AiScience => GameScreen::AiScience,
        ActivityType::MathGame => GameScreen::Math,
        ActivityType::ClockGame => GameScreen::Clock,
        ActivityType::PictureQuiz => GameScreen::Picture,
        ActivityType::SudokuGame => GameScreen::Sudoku,
        ActivityType::MatchingGame => GameScreen::Matching,
        ActivityType::SentenceGame => GameScreen::Sentence,
        ActivityType::FillGame => GameScreen::Fill,
        ActivityType::ReadingGame => GameScreen::Reading,
        ActivityType::WordSearchGame | ActivityType::PhonicsGame => GameScreen::ComingSoon,
    }
}
