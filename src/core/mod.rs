//! # Core Application Logic
//!
//! This module contains KinderSmart's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigation (views)   │
//!                    │  • Registry + listing   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Content   │
//!           │  Adapter   │              │  Service   │
//!           │ (ratatui)  │              │  (async)   │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`]: categories, activity kinds, theme keys, `ActivityConfig`
//! - [`registry`]: the static activity list
//! - [`listing`]: filter + group activities for a category page
//! - [`theme`]: category labels and colors
//! - [`dispatch`]: activity kind → game screen
//! - [`navigation`]: the Home / CategoryList / ActiveGame state machine
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod dispatch;
pub mod listing;
pub mod navigation;
pub mod registry;
pub mod state;
pub mod theme;
pub mod types;
