//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::content::{ContentDelays, ContentService, MockContentService};
use crate::core::state::{App, CompletionHook};
use crate::core::types::ActivityConfig;

/// A mock service with no delays and a fixed seed.
pub fn instant_service() -> Arc<dyn ContentService> {
    Arc::new(MockContentService::with_seed(ContentDelays::none(), 2026))
}

/// Creates a test App backed by an instant mock service.
pub fn test_app() -> App {
    App::new(instant_service())
}

/// Remembers every completion it is told about.
#[derive(Default)]
pub struct RecordingHook {
    calls: Mutex<Vec<(String, u32)>>,
}

impl RecordingHook {
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CompletionHook for RecordingHook {
    fn on_game_complete(&self, activity: &ActivityConfig, points: u32) {
        self.calls
            .lock()
            .unwrap()
            .push((activity.id.to_string(), points));
    }
}
