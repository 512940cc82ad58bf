use std::sync::Arc;
use std::time::Duration;

use kindersmart::content::mock::STORY_TEMPLATES;
use kindersmart::content::{
    Content, ContentDelays, ContentRequest, ContentService, MockContentService,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn instant_service(seed: u64) -> MockContentService {
    MockContentService::with_seed(ContentDelays::none(), seed)
}

fn matches_a_template(story: &str, topic: &str) -> bool {
    STORY_TEMPLATES
        .iter()
        .any(|(prefix, suffix)| story == format!("{prefix}{topic}{suffix}"))
}

// ============================================================================
// Math
// ============================================================================

#[tokio::test]
async fn test_math_difficulty_is_case_insensitive() {
    let service = instant_service(1);
    let upper = service.generate_math_question(Some("EASY")).await;
    let lower = service.generate_math_question(Some("easy")).await;
    assert_eq!(upper, lower);
    assert_eq!(upper.question, "2 + 3 = ?");
}

#[tokio::test]
async fn test_unknown_difficulty_falls_back() {
    let service = instant_service(1);
    let fallback = service.generate_math_question(Some("impossible")).await;
    let none = service.generate_math_question(None).await;
    assert_eq!(fallback.question, "1 + 1 = ?");
    assert_eq!(fallback, none);
}

// ============================================================================
// Science
// ============================================================================

#[tokio::test]
async fn test_science_answers_are_options() {
    let service = instant_service(9);
    for _ in 0..30 {
        let fact = service.generate_science_fact().await;
        assert!(fact.options.contains(&fact.answer), "{:?}", fact);
    }
}

// ============================================================================
// Stories
// ============================================================================

#[tokio::test]
async fn test_story_topics() {
    let service = instant_service(3);
    for _ in 0..10 {
        let story = service.generate_story("").await;
        assert!(matches_a_template(&story, "playtime"), "{}", story);

        let story = service.generate_story("  Dragon ").await;
        assert!(matches_a_template(&story, "dragon"), "{}", story);
    }
}

// ============================================================================
// Through the trait object
// ============================================================================

#[tokio::test]
async fn test_fetch_through_trait_object() {
    let service: Arc<dyn ContentService> = Arc::new(instant_service(5));
    let content = service
        .fetch(&ContentRequest::Math {
            difficulty: Some("Medium".into()),
        })
        .await;
    assert_eq!(content.as_choice().map(|(q, _, a)| (q, a)), Some(("7 - 2 = ?", "5")));

    let content = service
        .fetch(&ContentRequest::Story {
            topic: "Owl".into(),
        })
        .await;
    assert!(matches!(content, Content::Story(ref s) if s.contains("owl")));
}

#[tokio::test(start_paused = true)]
async fn test_story_waits_for_its_delay() {
    let delays = ContentDelays {
        story: Duration::from_millis(300),
        ..ContentDelays::none()
    };
    let service = MockContentService::with_seed(delays, 1);
    let start = tokio::time::Instant::now();
    service.generate_story("Cat").await;
    assert!(start.elapsed() >= Duration::from_millis(300));
}
