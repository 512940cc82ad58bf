//! # GameShell Component
//!
//! Frame around the active game: a border in the activity's color, the
//! activity title, and the way back. The mounted game draws inside.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use crate::core::state::ContentSlot;
use crate::core::types::ActivityConfig;
use crate::tui::component::Component;
use crate::tui::games::Game;
use crate::tui::theme::{TEXT_MUTED, palette};

pub struct GameShell<'a> {
    activity: &'a ActivityConfig,
    game: &'a mut dyn Game,
    content: &'a ContentSlot,
}

impl<'a> GameShell<'a> {
    pub fn new(activity: &'a ActivityConfig, game: &'a mut dyn Game, content: &'a ContentSlot) -> Self {
        Self {
            activity,
            game,
            content,
        }
    }
}

impl Component for GameShell<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let colors = palette(self.activity.color);
        let mut title = vec![Span::styled(
            format!(" {} {} ", self.activity.icon, self.activity.title),
            colors.heading(),
        )];
        if let Some(level) = self.activity.level_label {
            title.push(Span::styled(format!("({level}) "), Style::default().fg(colors.accent)));
        }

        let block = Block::bordered()
            .title(Line::from(title))
            .title_bottom(Line::styled(" Esc back ", Style::default().fg(TEXT_MUTED)).right_aligned())
            .border_style(Style::default().fg(colors.accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.game.render(frame, inner, self.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::find;
    use crate::tui::games::mount;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shell_shows_title_and_back_hint() {
        let activity = *find("clock-half").unwrap();
        let mut game = mount(&activity);
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                GameShell::new(&activity, game.as_mut(), &ContentSlot::Idle).render(f, area);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Half Past"));
        assert!(text.contains("(Half)"));
        assert!(text.contains("Esc back"));
    }
}
