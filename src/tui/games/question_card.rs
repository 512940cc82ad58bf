//! Multiple-choice card for generated content (math questions and science
//! facts). Asks for content on mount, then lets the child pick an option.
//! A correct pick completes the game once; Enter afterwards asks for
//! another question.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::content::{Content, ContentRequest};
use crate::core::state::ContentSlot;
use crate::core::types::ColorKey;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{AMBER_WARNING, GREEN_SUCCESS, TEXT_MUTED, TEXT_PRIMARY, palette};

use super::{Game, GameEvent, POINTS_PER_GAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Correct,
    Wrong,
}

#[derive(Debug)]
pub struct QuestionCard {
    request: ContentRequest,
    reports_completion: bool,
    /// Request id of the content currently on screen.
    shown: Option<u64>,
    selected: usize,
    answer: Option<Answer>,
    completed: bool,
}

impl QuestionCard {
    /// Math questions at the given level; the level is passed to the
    /// service as the difficulty.
    pub fn math(level_label: Option<&str>) -> Self {
        Self::new(
            ContentRequest::Math {
                difficulty: level_label.map(str::to_string),
            },
            true,
        )
    }

    pub fn science() -> Self {
        Self::new(ContentRequest::Science, false)
    }

    fn new(request: ContentRequest, reports_completion: bool) -> Self {
        Self {
            request,
            reports_completion,
            shown: None,
            selected: 0,
            answer: None,
            completed: false,
        }
    }

    fn request_more(&self) -> GameEvent {
        GameEvent::RequestContent(self.request.clone())
    }

    /// Resets the pick state when a new piece of content arrives.
    fn observe(&mut self, content: &ContentSlot) {
        if let ContentSlot::Ready { request_id, .. } = content
            && self.shown != Some(*request_id)
        {
            self.shown = Some(*request_id);
            self.selected = 0;
            self.answer = None;
        }
    }
}

impl Game for QuestionCard {
    fn start(&mut self) -> Option<GameEvent> {
        Some(self.request_more())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, content: &ContentSlot) {
        self.observe(content);
        let muted = Style::default().fg(TEXT_MUTED);

        let ready = match content {
            ContentSlot::Idle => {
                frame.render_widget(Paragraph::new(Line::styled("Press Enter for a question", muted)), area);
                return;
            }
            ContentSlot::Loading { .. } => {
                frame.render_widget(Paragraph::new(Line::styled("Thinking of a question...", muted)), area);
                return;
            }
            ContentSlot::Ready { content, .. } => content,
        };
        let Some((question, options, _)) = ready.as_choice() else {
            return;
        };

        let mut lines = Vec::new();
        if let Content::Science(fact) = ready {
            lines.push(Line::styled(
                fact.topic.clone(),
                palette(ColorKey::Emerald).heading(),
            ));
            lines.push(Line::styled(fact.fact.clone(), Style::default().fg(TEXT_PRIMARY)));
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            question.to_string(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));

        let buttons = palette(ColorKey::Blue);
        let mut spans = Vec::new();
        for (i, option) in options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[ {option} ]"), buttons.button(i == self.selected)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));

        match self.answer {
            Some(Answer::Correct) => lines.push(Line::styled(
                "Correct! Press Enter for another one.",
                Style::default().fg(GREEN_SUCCESS),
            )),
            Some(Answer::Wrong) => {
                lines.push(Line::styled("Not quite, try again!", Style::default().fg(AMBER_WARNING)))
            }
            None => {}
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn handle_event(&mut self, event: &TuiEvent, content: &ContentSlot) -> Option<GameEvent> {
        self.observe(content);
        let ready = match content {
            ContentSlot::Idle => {
                return matches!(event, TuiEvent::Submit).then(|| self.request_more());
            }
            ContentSlot::Loading { .. } => return None,
            ContentSlot::Ready { content, .. } => content,
        };
        let (_, options, answer) = ready.as_choice()?;
        if options.is_empty() {
            return None;
        }
        let last = options.len() - 1;

        if matches!(event, TuiEvent::Submit) {
            if self.answer == Some(Answer::Correct) {
                return Some(self.request_more());
            }
            if options[self.selected.min(last)] != answer {
                self.answer = Some(Answer::Wrong);
                return None;
            }
            self.answer = Some(Answer::Correct);
            if self.reports_completion && !self.completed {
                self.completed = true;
                return Some(GameEvent::Completed(POINTS_PER_GAME));
            }
            return None;
        }

        if self.answer == Some(Answer::Correct) {
            return None;
        }
        match event.as_direction()? {
            TuiEvent::Left | TuiEvent::Up => self.selected = self.selected.saturating_sub(1),
            TuiEvent::Right | TuiEvent::Down => self.selected = (self.selected + 1).min(last),
            _ => {}
        }
        None
    }

    fn hints(&self) -> &'static str {
        "←/→ choose · Enter answer · Esc back"
    }
}
