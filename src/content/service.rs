use async_trait::async_trait;

use super::types::{Content, ContentRequest, MathQuestion, ScienceFact, Story};

/// Source of generated learning content.
///
/// Every call may be slow, so callers must handle a pending state, but none
/// of them can fail: unknown inputs fall back to defaults.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Returns the name of the service.
    fn name(&self) -> &str;

    /// A question for `difficulty` (`easy`, `medium`, `hard`, any case).
    /// Anything else, including `None`, yields the default question.
    async fn generate_math_question(&self, difficulty: Option<&str>) -> MathQuestion;

    /// A random fact record.
    async fn generate_science_fact(&self) -> ScienceFact;

    /// A one-sentence story about `topic`. Blank topics become "Playtime".
    async fn generate_story(&self, topic: &str) -> Story;

    /// Dispatches a request to the matching generator.
    async fn fetch(&self, request: &ContentRequest) -> Content {
        match request {
            ContentRequest::Math { difficulty } => {
                Content::Math(self.generate_math_question(difficulty.as_deref()).await)
            }
            ContentRequest::Science => Content::Science(self.generate_science_fact().await),
            ContentRequest::Story { topic } => Content::Story(self.generate_story(topic).await),
        }
    }
}
