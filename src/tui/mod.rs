//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! key ──handle_event()──► Action ──apply()──► update() ──► Effect
//!                                    │                       │
//!                          mount/unmount game        FetchContent
//!                                    │                       │
//!                         GameEvent from start()     tokio::spawn(fetch)
//!                                                            │
//!                     Action::ContentLoaded ◄──── mpsc ◄─────┘
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Animating** (content loading): draws every ~80ms for the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod games;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::collections::VecDeque;
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::content::{ContentRequest, ContentService, MockContentService};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::listing::list_activities;
use crate::core::navigation::View;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ActivityListState, HomeEvent, HomeState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::games::{Game, GameEvent, mount};

/// The game component for the active activity.
pub struct MountedGame {
    pub activity_id: &'static str,
    pub game: Box<dyn Game>,
}

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub home: HomeState,
    pub activity_list: ActivityListState,
    pub game: Option<MountedGame>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presentation state matching an app that may already have a
    /// category open.
    pub fn for_app(app: &App) -> Self {
        let mut tui = Self::new();
        sync_view(app, &mut tui, &View::Home);
        tui
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Lets terminals that support it report Esc without the
        // escape-sequence delay. Ignored elsewhere.
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Routes a key event to whatever the current view shows.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    match app.view() {
        View::Home => match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => tui.home.handle_event(event).map(|home_event| match home_event {
                HomeEvent::Select(category) => Action::SelectCategory(category),
            }),
        },
        View::CategoryList(category) => match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(Action::Back),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => {
                let listing = list_activities(app.registry, category);
                tui.activity_list.sync(category);
                tui.activity_list
                    .handle_event(event, &listing)
                    .map(|list_event| match list_event {
                        ListEvent::Select(activity) => Action::SelectActivity(activity),
                    })
            }
        },
        View::ActiveGame(_) => {
            let Some(mounted) = tui.game.as_mut() else {
                warn!("Active game view without a mounted game");
                return matches!(event, TuiEvent::Escape).then_some(Action::Back);
            };
            match event {
                TuiEvent::Escape => Some(Action::Back),
                TuiEvent::Backspace if !mounted.game.captures_text() => Some(Action::Back),
                _ => mounted.game.handle_event(event, &app.content).map(Action::from),
            }
        }
    }
}

/// Applies an action through the reducer and keeps presentation state in
/// step with the new view. Returns every effect the loop must carry out,
/// including those caused by a freshly mounted game.
pub fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Vec<Effect> {
    let mut effects = Vec::new();
    let mut pending = VecDeque::from([action]);
    while let Some(action) = pending.pop_front() {
        let before = app.view();
        let effect = update(app, action);
        if effect != Effect::None {
            effects.push(effect);
        }
        if let Some(event) = sync_view(app, tui, &before) {
            pending.push_back(event.into());
        }
    }
    effects
}

/// Mounts or unmounts the game and moves cursors after a view change.
/// Returns the first event of a newly mounted game.
fn sync_view(app: &App, tui: &mut TuiState, before: &View) -> Option<GameEvent> {
    match app.view() {
        View::Home => {
            tui.game = None;
            if let View::CategoryList(category) = before {
                tui.home.focus(*category);
            }
            None
        }
        View::CategoryList(category) => {
            tui.game = None;
            tui.activity_list.sync(category);
            if let View::ActiveGame(activity) = before {
                let listing = list_activities(app.registry, category);
                tui.activity_list.focus(&listing, activity.id);
            }
            None
        }
        View::ActiveGame(activity) => {
            if tui.game.as_ref().is_some_and(|m| m.activity_id == activity.id) {
                return None;
            }
            info!("Mounting game for {} ({:?})", activity.id, activity.kind);
            let mut game = mount(&activity);
            let first = game.start();
            tui.game = Some(MountedGame {
                activity_id: activity.id,
                game,
            });
            first
        }
    }
}

/// Runs a content request in the background and posts the result back
/// to the event loop.
pub fn spawn_content_request(
    service: Arc<dyn ContentService>,
    request_id: u64,
    request: ContentRequest,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    debug!("Spawning content request #{} on {}", request_id, service.name());
    tokio::spawn(async move {
        let content = service.fetch(&request).await;
        if tx
            .send(Action::ContentLoaded {
                request_id,
                content,
            })
            .is_err()
        {
            warn!("Failed to deliver content #{}: receiver dropped", request_id);
        }
    })
}

/// Carries out effects. Returns true when the app should quit.
fn perform(effects: Vec<Effect>, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Quit => quit = true,
            Effect::FetchContent {
                request_id,
                request,
            } => {
                spawn_content_request(app.content_service.clone(), request_id, request, tx.clone());
            }
            Effect::None => {}
        }
    }
    quit
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mock = MockContentService::new(config.delays);
    info!("Using content service: {} with delays {:?}", mock.name(), mock.delays());
    let service: Arc<dyn ContentService> = Arc::new(mock);
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::for_app(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Spinner timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.content.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_event(&app, &mut tui, &event) {
                let effects = apply(&mut app, &mut tui, action);
                should_quit |= perform(effects, &app, &tx);
            }
        }

        // Content from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = apply(&mut app, &mut tui, action);
            should_quit |= perform(effects, &app, &tx);
        }

        if should_quit {
            info!("Quitting");
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::core::registry::find;
    use crate::core::state::ContentSlot;
    use crate::core::types::CategoryType;
    use crate::test_support::{RecordingHook, instant_service, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Feeds keys through the same path as the run loop. Content requests
    /// are answered synchronously by the app's service.
    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        let mut all = Vec::new();
        for event in events {
            if let Some(action) = handle_event(app, tui, event) {
                all.extend(apply(app, tui, action));
            }
        }
        all
    }

    fn deliver(app: &mut App, tui: &mut TuiState, effects: &[Effect]) {
        for effect in effects {
            if let Effect::FetchContent {
                request_id,
                request,
            } = effect
            {
                let content = tokio_test::block_on(app.content_service.fetch(request));
                apply(
                    app,
                    tui,
                    Action::ContentLoaded {
                        request_id: *request_id,
                        content,
                    },
                );
            }
        }
    }

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ui::draw_ui(f, app, tui, 0))
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
    fn test_math_game_flow() {
        let hook = Arc::new(RecordingHook::default());
        let mut app = test_app().with_completion_hook(hook.clone());
        let mut tui = TuiState::for_app(&app);

        // Maths is the first tile, math-count-1 (Easy) the first button
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.view(), View::CategoryList(CategoryType::Maths));
        let effects = press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.navigation.current_activity().map(|a| a.id), Some("math-count-1"));
        assert!(matches!(effects.as_slice(), [Effect::FetchContent { .. }]));
        assert!(app.content.is_loading());
        assert!(tui.game.is_some());

        deliver(&mut app, &mut tui, &effects);
        let Some(Content::Math(question)) = app.content.content() else {
            panic!("expected a math question");
        };
        assert_eq!(question.question, "2 + 3 = ?");

        // "5" is the second option
        press(&mut app, &mut tui, &[TuiEvent::Right, TuiEvent::Submit]);
        assert_eq!(hook.calls(), vec![("math-count-1".to_string(), 10)]);
        assert!(app.status_message.starts_with("Well done!"));
    }

    #[test]
    fn test_back_restores_cursors() {
        let mut app = test_app();
        let mut tui = TuiState::for_app(&app);
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::Right, TuiEvent::Right, TuiEvent::Submit],
        );
        assert_eq!(app.view(), View::CategoryList(CategoryType::Clock));

        press(&mut app, &mut tui, &[TuiEvent::Down, TuiEvent::Submit]);
        assert_eq!(app.navigation.current_activity().map(|a| a.id), Some("clock-half"));

        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.view(), View::CategoryList(CategoryType::Clock));
        assert!(tui.game.is_none());
        assert_eq!(tui.activity_list.selected, 1);

        press(&mut app, &mut tui, &[TuiEvent::Backspace]);
        assert_eq!(app.view(), View::Home);
        assert_eq!(tui.home.selected_category(), CategoryType::Clock);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::InputChar('q')]), vec![Effect::Quit]);

        apply(&mut app, &mut tui, Action::SelectActivity(*find("reading-ai-story").unwrap()));
        // Inside a game 'q' is just a letter
        assert!(press(&mut app, &mut tui, &[TuiEvent::InputChar('q')]).is_empty());
        assert_eq!(press(&mut app, &mut tui, &[TuiEvent::ForceQuit]), vec![Effect::Quit]);
    }

    #[test]
    fn test_story_game_keeps_backspace() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let story = *find("reading-ai-story").unwrap();
        apply(&mut app, &mut tui, Action::SelectActivity(story));
        press(
            &mut app,
            &mut tui,
            &"Dragon".chars().map(TuiEvent::InputChar).collect::<Vec<_>>(),
        );
        press(&mut app, &mut tui, &[TuiEvent::Backspace]);
        assert_eq!(app.view(), View::ActiveGame(story));

        let effects = press(&mut app, &mut tui, &[TuiEvent::InputChar('n'), TuiEvent::Submit]);
        assert_eq!(
            effects,
            vec![Effect::FetchContent {
                request_id: 1,
                request: ContentRequest::Story {
                    topic: "Dragon".into()
                }
            }]
        );
        deliver(&mut app, &mut tui, &effects);
        let Some(Content::Story(text)) = app.content.content() else {
            panic!("expected a story");
        };
        assert!(text.contains("dragon"));
        assert!(screen(&app, &mut tui).contains("dragon"));
    }

    #[test]
    fn test_leaving_game_drops_late_content() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        apply(&mut app, &mut tui, Action::SelectCategory(CategoryType::Science));
        let effects = apply(
            &mut app,
            &mut tui,
            Action::SelectActivity(*find("science-facts").unwrap()),
        );
        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        deliver(&mut app, &mut tui, &effects);
        assert_eq!(app.content, ContentSlot::Idle);
    }

    #[test]
    fn test_start_category_syncs_list() {
        let mut app = test_app();
        app.navigation.select_category(CategoryType::Reading);
        let tui = TuiState::for_app(&app);
        assert_eq!(tui.activity_list.selected, 0);
        assert!(tui.game.is_none());
    }

    #[test]
    fn test_screens_render() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(screen(&app, &mut tui).contains("q quit"));

        apply(&mut app, &mut tui, Action::SelectCategory(CategoryType::Sound));
        let text = screen(&app, &mut tui);
        assert!(text.contains("Activities coming soon!"));
        assert!(text.contains("KinderSmart | Sound"));

        apply(&mut app, &mut tui, Action::SelectCategory(CategoryType::Science));
        let effects = apply(
            &mut app,
            &mut tui,
            Action::SelectActivity(*find("science-facts").unwrap()),
        );
        assert!(screen(&app, &mut tui).contains("Loading..."));
        deliver(&mut app, &mut tui, &effects);
        let text = screen(&app, &mut tui);
        assert!(!text.contains("Loading..."));
        assert!(text.contains("Esc back"));
    }

    #[tokio::test]
    async fn test_spawned_request_posts_content() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_content_request(
            instant_service(),
            7,
            ContentRequest::Math {
                difficulty: Some("HARD".into()),
            },
            tx,
        );
        handle.await.unwrap();
        let Ok(Action::ContentLoaded { request_id, content }) = rx.try_recv() else {
            panic!("expected ContentLoaded");
        };
        assert_eq!(request_id, 7);
        assert_eq!(content.as_choice().map(|(_, _, answer)| answer), Some("6"));
    }

    #[tokio::test]
    async fn test_spawned_request_survives_closed_channel() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let handle = spawn_content_request(instant_service(), 1, ContentRequest::Science, tx);
        assert!(handle.await.is_ok());
    }
}
