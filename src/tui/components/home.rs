//! # Home Component
//!
//! The category grid. Follows the persistent state + transient wrapper
//! pattern:
//! - `HomeState` lives in `TuiState` and handles key events
//! - `HomeScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::types::{CategoryType, ColorKey};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::{TEXT_MUTED, TEXT_PRIMARY, palette};

pub const COLUMNS: usize = 4;
const TILE_HEIGHT: u16 = 4;

/// Events emitted by the home grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    Select(CategoryType),
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub selected: usize,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> CategoryType {
        CategoryType::ALL[self.selected.min(CategoryType::ALL.len() - 1)]
    }

    /// Points the cursor at `category` (used when returning home).
    pub fn focus(&mut self, category: CategoryType) {
        if let Some(index) = CategoryType::ALL.iter().position(|c| *c == category) {
            self.selected = index;
        }
    }
}

impl EventHandler for HomeState {
    type Event = HomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HomeEvent> {
        let last = CategoryType::ALL.len() - 1;
        if matches!(event, TuiEvent::Submit) {
            return Some(HomeEvent::Select(self.selected_category()));
        }
        match event.as_direction()? {
            TuiEvent::Left => self.selected = self.selected.saturating_sub(1),
            TuiEvent::Right => self.selected = (self.selected + 1).min(last),
            TuiEvent::Up => self.selected = self.selected.saturating_sub(COLUMNS),
            TuiEvent::Down => {
                if self.selected + COLUMNS <= last {
                    self.selected += COLUMNS;
                }
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the home grid.
pub struct HomeScreen<'a> {
    state: &'a mut HomeState,
}

impl<'a> HomeScreen<'a> {
    pub fn new(state: &'a mut HomeState) -> Self {
        Self { state }
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = CategoryType::ALL.len().div_ceil(COLUMNS);
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(TILE_HEIGHT), rows));
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(area);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Kinder", Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
                Span::styled("Smart", palette(ColorKey::Blue).heading()),
            ]),
            Line::styled("What do you want to learn today?", Style::default().fg(TEXT_MUTED)),
        ]);
        frame.render_widget(header, areas[0]);

        for (row, chunk) in CategoryType::ALL.chunks(COLUMNS).enumerate() {
            let cells = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(areas[row + 1]);
            for (col, category) in chunk.iter().enumerate() {
                let index = row * COLUMNS + col;
                render_tile(frame, cells[col], *category, index == self.state.selected);
            }
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, category: CategoryType, selected: bool) {
    let theme = category.theme();
    let colors = palette(theme.color);
    let border_style = if selected {
        colors.heading()
    } else {
        Style::default().fg(colors.accent).add_modifier(Modifier::DIM)
    };
    let label_style = if selected {
        colors.button(true)
    } else {
        colors.heading()
    };

    let tile = Paragraph::new(vec![
        Line::styled(format!("{} {}", theme.icon, theme.label), label_style),
        Line::styled(theme.subtitle, Style::default().fg(colors.accent)),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(border_style));
    frame.render_widget(tile, area);
}
