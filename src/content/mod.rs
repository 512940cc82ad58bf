//! # Content Service
//!
//! Asynchronous source of quiz questions, science facts and stories. The
//! app only talks to the [`ContentService`] trait; [`MockContentService`]
//! serves canned tables with artificial latency.

pub mod mock;
pub mod service;
pub mod types;

pub use mock::{ContentDelays, MockContentService};
pub use service::ContentService;
pub use types::{Content, ContentRequest, MathQuestion, ScienceFact, Story};
