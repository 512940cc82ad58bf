//! # Navigation
//!
//! The three-level view state machine.
//!
//! ```text
//!            select_category(c)             select_activity(a)
//!   Home ──────────────────────► CategoryList(c) ──────────────────► ActiveGame(a)
//!    ▲                                │  ▲                                │
//!    └──────────── back ──────────────┘  └──── back (a.category) ─────────┘
//! ```
//!
//! The current view is derived from the `(category, activity)` pair and is
//! never stored on its own.

use log::info;

use crate::core::types::{ActivityConfig, CategoryType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    CategoryList(CategoryType),
    ActiveGame(ActivityConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    current_category: Option<CategoryType>,
    current_activity: Option<ActivityConfig>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_category(&self) -> Option<CategoryType> {
        self.current_category
    }

    pub fn current_activity(&self) -> Option<&ActivityConfig> {
        self.current_activity.as_ref()
    }

    /// The active view. An activity wins over a category.
    pub fn view(&self) -> View {
        match (self.current_activity, self.current_category) {
            (Some(activity), _) => View::ActiveGame(activity),
            (None, Some(category)) => View::CategoryList(category),
            (None, None) => View::Home,
        }
    }

    pub fn select_category(&mut self, category: CategoryType) {
        info!("Navigate: category {}", category);
        self.current_category = Some(category);
        self.current_activity = None;
    }

    pub fn select_activity(&mut self, activity: ActivityConfig) {
        info!("Navigate: activity {} ({})", activity.id, activity.title);
        self.current_activity = Some(activity);
    }

    /// Leaves the category list for the home screen.
    pub fn back_to_categories(&mut self) {
        info!("Navigate: home");
        self.current_category = None;
        self.current_activity = None;
    }

    /// Leaves the active game for its category's list.
    pub fn back_to_activities(&mut self) {
        if let Some(activity) = self.current_activity.take() {
            info!("Navigate: back to {} list", activity.category);
            self.current_category = Some(activity.category);
        }
    }

    /// One step up. Returns `false` when already on the home screen.
    pub fn go_back(&mut self) -> bool {
        match self.view() {
            View::ActiveGame(_) => {
                self.back_to_activities();
                true
            }
            View::CategoryList(_) => {
                self.back_to_categories();
                true
            }
            View::Home => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ACTIVITIES;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigation::new();
        assert_eq!(nav.view(), View::Home);
        assert!(nav.current_category().is_none());
        assert!(nav.current_activity().is_none());
    }

    #[test]
    fn test_select_category_then_back_returns_home() {
        for category in CategoryType::ALL {
            let mut nav = Navigation::new();
            nav.select_category(category);
            assert_eq!(nav.view(), View::CategoryList(category));
            assert!(nav.go_back());
            assert_eq!(nav.view(), View::Home);
        }
    }

    #[test]
    fn test_select_activity_then_back_returns_to_its_category() {
        for activity in ACTIVITIES {
            let mut nav = Navigation::new();
            nav.select_category(activity.category);
            nav.select_activity(*activity);
            assert_eq!(nav.view(), View::ActiveGame(*activity));
            assert!(nav.go_back());
            assert_eq!(nav.view(), View::CategoryList(activity.category));
        }
    }

    #[test]
    fn test_back_from_game_uses_activity_category_not_stale_one() {
        let activity = ACTIVITIES
            .iter()
            .find(|a| a.category == CategoryType::Science)
            .unwrap();
        let mut nav = Navigation::new();
        nav.select_category(CategoryType::Maths);
        nav.select_activity(*activity);
        nav.go_back();
        assert_eq!(nav.view(), View::CategoryList(CategoryType::Science));
    }

    #[test]
    fn test_activity_selected_from_home_still_backs_into_list() {
        let mut nav = Navigation::new();
        nav.select_activity(ACTIVITIES[0]);
        nav.go_back();
        assert_eq!(nav.view(), View::CategoryList(ACTIVITIES[0].category));
    }

    #[test]
    fn test_back_at_home_is_noop() {
        let mut nav = Navigation::new();
        assert!(!nav.go_back());
        assert_eq!(nav.view(), View::Home);
    }

    #[test]
    fn test_full_round_trip() {
        let mut nav = Navigation::new();
        nav.select_category(CategoryType::Clock);
        nav.select_activity(ACTIVITIES[11]);
        nav.go_back();
        nav.go_back();
        assert_eq!(nav, Navigation::new());
    }
}
