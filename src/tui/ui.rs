use crate::core::listing::ActivityListing;
use crate::core::navigation::View;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ActivityList, GameShell, HomeScreen, TitleBar};
use crate::tui::theme::TEXT_MUTED;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::Line;

const HOME_HINTS: &str = "←↑↓→ move · Enter open · q quit";
const LIST_HINTS: &str = "←↑↓→ move · Enter play · Esc back · q quit";

/// Breadcrumb below home for the title bar.
fn breadcrumb(view: &View) -> Vec<String> {
    match view {
        View::Home => Vec::new(),
        View::CategoryList(category) => vec![category.theme().label.to_string()],
        View::ActiveGame(activity) => vec![
            activity.category.theme().label.to_string(),
            activity.title.to_string(),
        ],
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hints_area] = layout.areas(frame.area());

    let view = app.view();
    TitleBar::new(
        breadcrumb(&view),
        app.status_message.clone(),
        app.content.is_loading(),
        spinner_frame,
    )
    .render(frame, title_area);

    let hints = match &view {
        View::Home => {
            HomeScreen::new(&mut tui.home).render(frame, main_area);
            HOME_HINTS
        }
        View::CategoryList(category) => {
            let listing = app.listing().unwrap_or(ActivityListing::ComingSoon);
            ActivityList::new(&mut tui.activity_list, *category, &listing).render(frame, main_area);
            LIST_HINTS
        }
        View::ActiveGame(activity) => match tui.game.as_mut() {
            Some(mounted) => {
                GameShell::new(activity, mounted.game.as_mut(), &app.content).render(frame, main_area);
                mounted.game.hints()
            }
            None => "Esc back",
        },
    };

    frame.render_widget(Line::styled(hints, Style::default().fg(TEXT_MUTED)), hints_area);
}
