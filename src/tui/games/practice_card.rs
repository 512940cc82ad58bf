//! Stand-in for the hands-on games (memory, clock, sudoku, ...). Shows what
//! the activity is and lets the child mark it finished with Enter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::dispatch::GameScreen;
use crate::core::listing::OTHER_GROUP;
use crate::core::state::ContentSlot;
use crate::core::types::ActivityConfig;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{GREEN_SUCCESS, TEXT_MUTED, TEXT_PRIMARY, palette};

use super::{Game, GameEvent, POINTS_PER_GAME};

fn describe(screen: GameScreen) -> &'static str {
    match screen {
        GameScreen::Memory => "Flip the cards and find the pairs.",
        GameScreen::Quiz => "Answer the questions.",
        GameScreen::Pattern => "Find what comes next in the pattern.",
        GameScreen::Sorting => "Put everything in the right order.",
        GameScreen::Clock => "Read the time on the clock.",
        GameScreen::Picture => "Name what you see in the picture.",
        GameScreen::Sudoku => "Fill the grid so no number repeats.",
        GameScreen::Matching => "Match each item with its partner.",
        GameScreen::Sentence => "Put the words in order to make a sentence.",
        GameScreen::Fill => "Fill in the missing word.",
        GameScreen::Reading => "Read along with the story.",
        GameScreen::Math
        | GameScreen::AiStory
        | GameScreen::AiScience
        | GameScreen::ComingSoon => "",
    }
}

#[derive(Debug)]
pub struct PracticeCard {
    activity: ActivityConfig,
    screen: GameScreen,
    pub finished: bool,
}

impl PracticeCard {
    pub fn new(activity: ActivityConfig, screen: GameScreen) -> Self {
        Self {
            activity,
            screen,
            finished: false,
        }
    }
}

impl Game for PracticeCard {
    fn render(&mut self, frame: &mut Frame, area: Rect, _content: &ContentSlot) {
        let colors = palette(self.activity.color);
        let label = Style::default().fg(TEXT_MUTED);
        let value = Style::default().fg(TEXT_PRIMARY);

        let mut lines = vec![
            Line::styled(
                format!("{} {}", self.activity.icon, self.activity.title),
                colors.heading(),
            ),
            Line::styled(describe(self.screen), value),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Group: ", label),
                Span::styled(self.activity.sub_category.unwrap_or(OTHER_GROUP), value),
            ]),
        ];
        if let Some(level) = self.activity.level_label {
            lines.push(Line::from(vec![Span::styled("Level: ", label), Span::styled(level, value)]));
        }
        lines.push(Line::raw(""));
        lines.push(if self.finished {
            Line::styled(
                "Finished! Great job!",
                Style::default().fg(GREEN_SUCCESS).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled("Press Enter when you are done", colors.button(true))
        });

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn handle_event(&mut self, event: &TuiEvent, _content: &ContentSlot) -> Option<GameEvent> {
        if matches!(event, TuiEvent::Submit) && !self.finished {
            self.finished = true;
            return Some(GameEvent::Completed(POINTS_PER_GAME));
        }
        None
    }

    fn hints(&self) -> &'static str {
        "Enter done · Esc back"
    }
}
