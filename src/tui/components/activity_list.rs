//! # ActivityList Component
//!
//! The category page: a themed header, then one bordered block per
//! sub-category group with a row of buttons. Buttons show the level label,
//! or the activity icon when there is none.
//!
//! ```text
//! ┌ Counting ─────────────┐
//! │ [ 1 ]  [ 2 ]          │
//! └───────────────────────┘
//! ┌ Addition ─────────────┐
//! │ [ Easy ]  [ Medium ]  │
//! └───────────────────────┘
//! ▶ Count to 10
//! ```
//!
//! The cursor walks the flattened listing, so Up/Down and Left/Right both
//! move through every button in display order.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::listing::{ActivityGroup, ActivityListing};
use crate::core::theme::header_theme;
use crate::core::types::{ActivityConfig, CategoryType};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme::{TEXT_MUTED, TEXT_PRIMARY, palette};

const BUTTON_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Select(ActivityConfig),
}

#[derive(Debug, Default)]
pub struct ActivityListState {
    pub selected: usize,
    category: Option<CategoryType>,
}

impl ActivityListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cursor when a different category is opened.
    pub fn sync(&mut self, category: CategoryType) {
        if self.category != Some(category) {
            self.category = Some(category);
            self.selected = 0;
        }
    }

    /// Points the cursor at `activity_id` (used when leaving a game).
    pub fn focus(&mut self, listing: &ActivityListing, activity_id: &str) {
        if let Some(index) = listing.flatten().iter().position(|a| a.id == activity_id) {
            self.selected = index;
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, listing: &ActivityListing) -> Option<ListEvent> {
        let activities = listing.flatten();
        if activities.is_empty() {
            return None;
        }
        let last = activities.len() - 1;
        self.selected = self.selected.min(last);

        if matches!(event, TuiEvent::Submit) {
            return Some(ListEvent::Select(*activities[self.selected]));
        }
        match event.as_direction()? {
            TuiEvent::Up | TuiEvent::Left => self.selected = self.selected.saturating_sub(1),
            TuiEvent::Down | TuiEvent::Right => self.selected = (self.selected + 1).min(last),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the category page.
pub struct ActivityList<'a> {
    state: &'a mut ActivityListState,
    category: CategoryType,
    listing: &'a ActivityListing<'a>,
}

impl<'a> ActivityList<'a> {
    pub fn new(
        state: &'a mut ActivityListState,
        category: CategoryType,
        listing: &'a ActivityListing<'a>,
    ) -> Self {
        Self {
            state,
            category,
            listing,
        }
    }
}

fn button_label(activity: &ActivityConfig) -> String {
    format!("[ {} ]", activity.level_label.unwrap_or(activity.icon))
}

/// Greedy-wraps a group's buttons into lines of at most `width` columns,
/// returning the group indices on each line.
fn wrap_buttons(group: &ActivityGroup, width: usize) -> Vec<Vec<usize>> {
    let mut lines: Vec<Vec<usize>> = vec![Vec::new()];
    let mut used = 0;
    for (index, activity) in group.activities.iter().enumerate() {
        let len = button_label(activity).chars().count();
        let needed = if used == 0 { len } else { used + BUTTON_GAP.len() + len };
        if used > 0 && needed > width {
            lines.push(Vec::new());
            used = len;
        } else {
            used = needed;
        }
        if let Some(line) = lines.last_mut() {
            line.push(index);
        }
    }
    lines
}

impl Component for ActivityList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = header_theme(self.category.key());
        let colors = palette(theme.color);

        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        let header = Paragraph::new(vec![
            Line::styled(format!("{} {}", theme.icon, theme.label), colors.heading()),
            Line::styled(theme.subtitle, Style::default().fg(TEXT_MUTED)),
        ]);
        frame.render_widget(header, header_area);

        let groups = match self.listing {
            ActivityListing::ComingSoon => {
                let notice = Paragraph::new(Line::styled(
                    "Activities coming soon!",
                    Style::default().fg(TEXT_PRIMARY),
                ))
                .block(Block::bordered().border_style(Style::default().fg(colors.accent)));
                frame.render_widget(notice, body_area.intersection(Rect { height: 3, ..body_area }));
                return;
            }
            ActivityListing::Groups(groups) => groups,
        };

        let inner_width = body_area.width.saturating_sub(2) as usize;
        let wrapped: Vec<Vec<Vec<usize>>> =
            groups.iter().map(|g| wrap_buttons(g, inner_width)).collect();

        let mut constraints: Vec<Constraint> = wrapped
            .iter()
            .map(|lines| Constraint::Length(lines.len() as u16 + 2))
            .collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(body_area);

        let mut offset = 0;
        let mut selected_title = None;
        for (i, (group, lines)) in groups.iter().zip(&wrapped).enumerate() {
            let group_colors = palette(group.color);
            let mut text = Vec::with_capacity(lines.len());
            for line in lines {
                let mut spans = Vec::new();
                for (n, &index) in line.iter().enumerate() {
                    let activity = group.activities[index];
                    let selected = offset + index == self.state.selected;
                    if selected {
                        selected_title = Some(activity.title);
                    }
                    if n > 0 {
                        spans.push(Span::raw(BUTTON_GAP));
                    }
                    spans.push(Span::styled(button_label(activity), group_colors.button(selected)));
                }
                text.push(Line::from(spans));
            }
            offset += group.activities.len();

            let block = Block::bordered()
                .title(Span::styled(format!(" {} ", group.name), group_colors.heading()))
                .border_style(Style::default().fg(group_colors.accent));
            frame.render_widget(Paragraph::new(text).block(block), areas[i]);
        }

        if let Some(title) = selected_title {
            let footer = Line::from(vec![
                Span::styled("▶ ", colors.heading()),
                Span::styled(title, Style::default().fg(TEXT_PRIMARY)),
            ]);
            frame.render_widget(footer, areas[groups.len()]);
        }
    }
}
