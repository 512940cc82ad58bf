//! # TUI Components
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status bar with breadcrumb and status message
//! - `GameShell`: frame around the mounted game
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it for
//! one frame:
//! - `HomeState` / `HomeScreen`: the category grid
//! - `ActivityListState` / `ActivityList`: grouped activities of a category
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status bar)
//! ├── home.rs           (category grid)
//! ├── activity_list.rs  (grouped activity buttons)
//! └── game_shell.rs     (active game frame)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod activity_list;
pub mod game_shell;
pub mod home;
pub use activity_list::{ActivityList, ActivityListState, ListEvent};
pub use game_shell::GameShell;
pub use home::{HomeEvent, HomeScreen, HomeState};
