//! # Games
//!
//! Terminal stand-ins for the activity screens. The shell mounts one game
//! per active activity (`mount`) and forwards key events to it. A game
//! talks back through `GameEvent`:
//!
//! ```text
//! Game ──GameEvent::Completed(points)──────► Action::GameCompleted
//!      ──GameEvent::RequestContent(req)────► Action::RequestContent
//! ```
//!
//! Content arrives the other way, through the `ContentSlot` handed to
//! `render` and `handle_event`.

mod practice_card;
mod question_card;
mod story_card;

pub use practice_card::PracticeCard;
pub use question_card::QuestionCard;
pub use story_card::StoryCard;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::content::ContentRequest;
use crate::core::action::Action;
use crate::core::dispatch::{GameScreen, screen_for};
use crate::core::state::ContentSlot;
use crate::core::types::ActivityConfig;
use crate::tui::event::TuiEvent;
use crate::tui::theme::TEXT_PRIMARY;

/// Points reported for finishing any game.
pub const POINTS_PER_GAME: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Completed(u32),
    RequestContent(ContentRequest),
}

impl From<GameEvent> for Action {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Completed(points) => Action::GameCompleted { points },
            GameEvent::RequestContent(request) => Action::RequestContent(request),
        }
    }
}

pub trait Game {
    /// Called once, right after mounting.
    fn start(&mut self) -> Option<GameEvent> {
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, content: &ContentSlot);

    fn handle_event(&mut self, event: &TuiEvent, content: &ContentSlot) -> Option<GameEvent>;

    /// True while the game wants Backspace and letters as text.
    fn captures_text(&self) -> bool {
        false
    }

    /// Key hints for the bottom line.
    fn hints(&self) -> &'static str;
}

/// Picks the game component for an activity.
pub fn mount(activity: &ActivityConfig) -> Box<dyn Game> {
    let screen = screen_for(activity.kind);
    match screen {
        GameScreen::Math => Box::new(QuestionCard::math(activity.level_label)),
        GameScreen::AiScience => Box::new(QuestionCard::science()),
        GameScreen::AiStory => Box::new(StoryCard::new()),
        GameScreen::Memory
        | GameScreen::Quiz
        | GameScreen::Pattern
        | GameScreen::Sorting
        | GameScreen::Clock
        | GameScreen::Picture
        | GameScreen::Sudoku
        | GameScreen::Matching
        | GameScreen::Sentence
        | GameScreen::Fill
        | GameScreen::Reading => Box::new(PracticeCard::new(*activity, screen)),
        GameScreen::ComingSoon => Box::new(ComingSoonCard),
    }
}

/// Placeholder for activity types without a game yet.
pub struct ComingSoonCard;

impl Game for ComingSoonCard {
    fn render(&mut self, frame: &mut Frame, area: Rect, _content: &ContentSlot) {
        let text = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("Coming Soon!", Style::default().fg(TEXT_PRIMARY)).centered(),
        ]);
        frame.render_widget(text, area);
    }

    fn handle_event(&mut self, _event: &TuiEvent, _content: &ContentSlot) -> Option<GameEvent> {
        None
    }

    fn hints(&self) -> &'static str {
        "Esc back"
    }
}

#[cfg(test)]
pub(crate) fn render_to_string(game: &mut dyn Game, content: &ContentSlot) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let backend = TestBackend::new(70, 14);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            game.render(f, area, content);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{ACTIVITIES, find};

    #[test]
    fn test_game_event_into_action() {
        assert_eq!(Action::from(GameEvent::Completed(10)), Action::GameCompleted { points: 10 });
        assert_eq!(
            Action::from(GameEvent::RequestContent(ContentRequest::Science)),
            Action::RequestContent(ContentRequest::Science)
        );
    }

    #[test]
    fn test_content_games_request_on_start() {
        let mut math = mount(find("math-add-2").unwrap());
        assert_eq!(
            math.start(),
            Some(GameEvent::RequestContent(ContentRequest::Math {
                difficulty: Some("Medium".into())
            }))
        );
        let mut science = mount(find("science-facts").unwrap());
        assert_eq!(
            science.start(),
            Some(GameEvent::RequestContent(ContentRequest::Science))
        );
        let mut story = mount(find("reading-ai-story").unwrap());
        assert_eq!(story.start(), None);
        assert!(story.captures_text());
    }

    #[test]
    fn test_every_activity_mounts_and_renders() {
        for activity in ACTIVITIES {
            let mut game = mount(activity);
            game.start();
            let text = render_to_string(game.as_mut(), &ContentSlot::Idle);
            assert!(!text.trim().is_empty(), "{} rendered nothing", activity.id);
        }
    }

    #[test]
    fn test_word_search_is_coming_soon() {
        let mut game = mount(find("wordsearch-animals").unwrap());
        let text = render_to_string(game.as_mut(), &ContentSlot::Idle);
        assert!(text.contains("Coming Soon!"));
        assert_eq!(game.handle_event(&TuiEvent::Submit, &ContentSlot::Idle), None);
    }
}
