//! # Application State
//!
//! Core business state for KinderSmart. Domain logic only; presentation
//! state (cursors, the mounted game component) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: Navigation                 // (category, activity) pair
//! ├── registry: &'static [ActivityConfig]    // activities on offer
//! ├── content_service: Arc<dyn ContentService>
//! ├── completion_hook: Arc<dyn CompletionHook>
//! ├── content: ContentSlot                   // idle / loading / ready
//! ├── status_message: String                 // title bar text
//! └── next_request_id: u64                   // tags content requests
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use log::info;

use crate::content::{Content, ContentRequest, ContentService};
use crate::core::config::ResolvedConfig;
use crate::core::listing::{ActivityListing, list_activities};
use crate::core::navigation::{Navigation, View};
use crate::core::registry::ACTIVITIES;
use crate::core::types::ActivityConfig;

/// Called when a game reports that the child finished it.
///
/// No scoring exists yet; this is the seam where it would plug in.
pub trait CompletionHook: Send + Sync {
    fn on_game_complete(&self, activity: &ActivityConfig, points: u32);
}

/// Default hook: logs and forgets.
pub struct LogCompletionHook;

impl CompletionHook for LogCompletionHook {
    fn on_game_complete(&self, activity: &ActivityConfig, points: u32) {
        info!("Game complete: {} ({} points)", activity.id, points);
    }
}

/// Content for the active game, as seen by the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentSlot {
    #[default]
    Idle,
    Loading {
        request_id: u64,
        request: ContentRequest,
    },
    Ready {
        request_id: u64,
        content: Content,
    },
}

impl ContentSlot {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentSlot::Loading { .. })
    }

    pub fn content(&self) -> Option<&Content> {
        match self {
            ContentSlot::Ready { content, .. } => Some(content),
            _ => None,
        }
    }
}

pub struct App {
    pub navigation: Navigation,
    pub registry: &'static [ActivityConfig],
    pub content_service: Arc<dyn ContentService>,
    pub completion_hook: Arc<dyn CompletionHook>,
    pub content: ContentSlot,
    pub status_message: String,
    next_request_id: u64,
}

impl App {
    pub fn new(content_service: Arc<dyn ContentService>) -> Self {
        Self {
            navigation: Navigation::new(),
            registry: ACTIVITIES,
            content_service,
            completion_hook: Arc::new(LogCompletionHook),
            content: ContentSlot::Idle,
            status_message: String::from("What do you want to learn today?"),
            next_request_id: 0,
        }
    }

    pub fn from_config(content_service: Arc<dyn ContentService>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(content_service);
        if let Some(category) = config.start_category {
            app.navigation.select_category(category);
        }
        app
    }

    pub fn with_completion_hook(mut self, hook: Arc<dyn CompletionHook>) -> Self {
        self.completion_hook = hook;
        self
    }

    pub fn view(&self) -> View {
        self.navigation.view()
    }

    /// Grouped activities for the current category, if one is open.
    pub fn listing(&self) -> Option<ActivityListing<'static>> {
        match self.view() {
            View::CategoryList(category) => Some(list_activities(self.registry, category)),
            _ => None,
        }
    }

    /// Allocates the id for a new content request.
    pub(crate) fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }
}
