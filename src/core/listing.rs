//! # Activity Listing
//!
//! Derives the category page from the registry: filter by category, then
//! group by sub-category in first-seen order.
//!
//! ```text
//! registry ──filter(category)──► [a1 a2 a3 a4]
//!                                   │
//!                 group by sub_category (None → "Other")
//!                                   ▼
//!              Counting: [a1 a3]   Addition: [a2]   Other: [a4]
//! ```
//!
//! Recomputed on every render; it is a pure function of its inputs.

use indexmap::IndexMap;

use crate::core::types::{ActivityConfig, CategoryType, ColorKey};

/// Label for activities without a sub-category.
pub const OTHER_GROUP: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGroup<'a> {
    pub name: &'a str,
    /// Color of the first activity in the group.
    pub color: ColorKey,
    pub activities: Vec<&'a ActivityConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityListing<'a> {
    /// No activity matches the category.
    ComingSoon,
    Groups(Vec<ActivityGroup<'a>>),
}

impl<'a> ActivityListing<'a> {
    pub fn groups(&self) -> &[ActivityGroup<'a>] {
        match self {
            ActivityListing::ComingSoon => &[],
            ActivityListing::Groups(groups) => groups,
        }
    }

    /// All activities in display order (group by group).
    pub fn flatten(&self) -> Vec<&'a ActivityConfig> {
        self.groups()
            .iter()
            .flat_map(|g| g.activities.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups().iter().map(|g| g.activities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the grouped listing for `category`.
pub fn list_activities(registry: &[ActivityConfig], category: CategoryType) -> ActivityListing<'_> {
    let mut grouped: IndexMap<&str, Vec<&ActivityConfig>> = IndexMap::new();
    for activity in registry.iter().filter(|a| a.category == category) {
        grouped
            .entry(activity.sub_category.unwrap_or(OTHER_GROUP))
            .or_default()
            .push(activity);
    }

    if grouped.is_empty() {
        return ActivityListing::ComingSoon;
    }

    let groups = grouped
        .into_iter()
        .filter_map(|(name, activities)| {
            let color = activities.first()?.color;
            Some(ActivityGroup {
                name,
                color,
                activities,
            })
        })
        .collect();

    ActivityListing::Groups(groups)
}
