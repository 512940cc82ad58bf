//! # TitleBar Component
//!
//! Top status bar: app name, where the child is (breadcrumb) and the
//! current status message.
//!
//! Stateless: all data arrives as props, so the parent decides where each
//! value comes from.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"KinderSmart | Maths › Addition | ⠋ Loading..."`
//! 2. **Status message**: `"KinderSmart | Maths | Well done!"`
//! 3. **Home**: `"KinderSmart | What do you want to learn today?"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::theme::{TEXT_MUTED, TEXT_PRIMARY};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar {
    /// Path segments below home, e.g. `["Maths", "Addition"]`.
    pub breadcrumb: Vec<String>,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(breadcrumb: Vec<String>, status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            breadcrumb,
            status_message,
            is_loading,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let mut parts = vec![String::from("KinderSmart")];
        if !self.breadcrumb.is_empty() {
            parts.push(self.breadcrumb.join(" › "));
        }
        if self.is_loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            parts.push(format!("{spinner} Loading..."));
        } else if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text();
        let (name, rest) = text.split_at("KinderSmart".len());
        let line = Line::from(vec![
            Span::styled(
                name.to_string(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(rest.to_string(), Style::default().fg(TEXT_MUTED)),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
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

    #[test]
    fn test_home_title() {
        let text = rendered(TitleBar::new(vec![], "Hello".into(), false, 0));
        assert!(text.contains("KinderSmart | Hello"));
    }

    #[test]
    fn test_breadcrumb_and_status() {
        let text = rendered(TitleBar::new(
            vec!["Maths".into(), "Addition".into()],
            "Well done!".into(),
            false,
            0,
        ));
        assert!(text.contains("Maths › Addition"));
        assert!(text.contains("Well done!"));
    }

    #[test]
    fn test_loading_replaces_status() {
        let text = rendered(TitleBar::new(vec!["Science".into()], "Science".into(), true, 3));
        assert!(text.contains("Loading..."));
        assert!(text.contains('⠸'));
    }

    #[test]
    fn test_no_separator_without_content() {
        let title_bar = TitleBar::new(vec![], String::new(), false, 0);
        assert_eq!(title_bar.text(), "KinderSmart");
    }
}
