//! Story maker: the child types a topic and gets a short story about it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::content::{Content, ContentRequest};
use crate::core::state::ContentSlot;
use crate::core::types::ColorKey;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{TEXT_MUTED, TEXT_PRIMARY, palette};

use super::{Game, GameEvent};

const MAX_TOPIC_CHARS: usize = 40;

#[derive(Debug, Default)]
pub struct StoryCard {
    pub topic: String,
}

impl StoryCard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Game for StoryCard {
    fn render(&mut self, frame: &mut Frame, area: Rect, content: &ContentSlot) {
        let [input_area, story_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let colors = palette(ColorKey::Pink);
        let input = Paragraph::new(Line::from(vec![
            Span::styled(self.topic.clone(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("_", Style::default().fg(colors.accent).add_modifier(Modifier::SLOW_BLINK)),
        ]))
        .block(
            Block::bordered()
                .title(Span::styled(" What should the story be about? ", colors.heading()))
                .border_style(Style::default().fg(colors.accent)),
        );
        frame.render_widget(input, input_area);

        let muted = Style::default().fg(TEXT_MUTED);
        let body = match content {
            ContentSlot::Idle => Paragraph::new(Line::styled(
                "Type a topic and press Enter (or just Enter for a surprise)",
                muted,
            )),
            ContentSlot::Loading { .. } => Paragraph::new(Line::styled("Writing your story...", muted)),
            ContentSlot::Ready {
                content: Content::Story(story),
                ..
            } => Paragraph::new(Line::styled(story.clone(), Style::default().fg(TEXT_PRIMARY))),
            ContentSlot::Ready { .. } => Paragraph::new(""),
        };
        frame.render_widget(body.wrap(Wrap { trim: true }), story_area);
    }

    fn handle_event(&mut self, event: &TuiEvent, content: &ContentSlot) -> Option<GameEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                if self.topic.chars().count() < MAX_TOPIC_CHARS {
                    self.topic.push(*c);
                }
                None
            }
            TuiEvent::Backspace => {
                self.topic.pop();
                None
            }
            TuiEvent::Submit if !content.is_loading() => Some(GameEvent::RequestContent(
                ContentRequest::Story {
                    topic: self.topic.clone(),
                },
            )),
            _ => None,
        }
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn hints(&self) -> &'static str {
        "type a topic · Enter make story · Esc back"
    }
}
