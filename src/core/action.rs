//! # Actions
//!
//! Everything that can happen in KinderSmart becomes an `Action`.
//! Child taps a category tile? That's `Action::SelectCategory(c)`.
//! Content service answers? That's `Action::ContentLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! telling the adapter what I/O to perform. No side effects here beyond
//! logging and the completion hook.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::content::{Content, ContentRequest};
use crate::core::navigation::View;
use crate::core::state::{App, ContentSlot};
use crate::core::types::{ActivityConfig, CategoryType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(CategoryType),
    SelectActivity(ActivityConfig),
    Back,
    GameCompleted { points: u32 },
    RequestContent(ContentRequest),
    ContentLoaded { request_id: u64, content: Content },
    Quit,
}

/// Side effects the adapter must carry out after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchContent {
        request_id: u64,
        request: ContentRequest,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectCategory(category) => {
            app.navigation.select_category(category);
            app.content = ContentSlot::Idle;
            app.status_message = category.theme().label.to_string();
            Effect::None
        }
        Action::SelectActivity(activity) => {
            app.navigation.select_activity(activity);
            app.content = ContentSlot::Idle;
            app.status_message = activity.title.to_string();
            Effect::None
        }
        Action::Back => {
            if app.navigation.go_back() {
                app.content = ContentSlot::Idle;
                app.status_message = match app.view() {
                    View::Home => String::from("What do you want to learn today?"),
                    View::CategoryList(category) => category.theme().label.to_string(),
                    View::ActiveGame(activity) => activity.title.to_string(),
                };
            }
            Effect::None
        }
        Action::GameCompleted { points } => {
            match app.navigation.current_activity() {
                Some(activity) => {
                    app.completion_hook.on_game_complete(activity, points);
                    app.status_message = format!("Well done! {}", activity.title);
                }
                None => debug!("Ignoring completion of {} points outside a game", points),
            }
            Effect::None
        }
        Action::RequestContent(request) => {
            if !matches!(app.view(), View::ActiveGame(_)) {
                debug!("Ignoring content request outside a game: {:?}", request);
                return Effect::None;
            }
            let request_id = app.next_request_id();
            info!("Requesting content #{}: {:?}", request_id, request);
            app.content = ContentSlot::Loading {
                request_id,
                request: request.clone(),
            };
            Effect::FetchContent {
                request_id,
                request,
            }
        }
        Action::ContentLoaded {
            request_id,
            content,
        } => {
            let awaited = matches!(
                &app.content,
                ContentSlot::Loading { request_id: pending, .. } if *pending == request_id
            );
            if awaited {
                debug!("Content #{} arrived", request_id);
                app.content = ContentSlot::Ready {
                    request_id,
                    content,
                };
            } else {
                debug!("Dropping stale content #{}", request_id);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
