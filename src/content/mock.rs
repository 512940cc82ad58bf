//! # Mock Content Service
//!
//! Canned content from static tables, handed out after an artificial delay
//! so callers exercise their loading states exactly as they would against a
//! real generator.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::service::ContentService;
use super::types::{MathQuestion, ScienceFact, Story};

pub const DEFAULT_MATH_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_SCIENCE_DELAY: Duration = Duration::from_millis(400);
pub const DEFAULT_STORY_DELAY: Duration = Duration::from_millis(300);

/// Topic used when the story topic is blank.
pub const DEFAULT_STORY_TOPIC: &str = "Playtime";

// ============================================================================
// Tables
// ============================================================================

struct MathEntry {
    key: &'static str,
    question: &'static str,
    options: [&'static str; 3],
    answer: &'static str,
}

static MATH_QUESTIONS: [MathEntry; 3] = [
    MathEntry {
        key: "easy",
        question: "2 + 3 = ?",
        options: ["4", "5", "6"],
        answer: "5",
    },
    MathEntry {
        key: "medium",
        question: "7 - 2 = ?",
        options: ["4", "5", "6"],
        answer: "5",
    },
    MathEntry {
        key: "hard",
        question: "4 + 5 - 3 = ?",
        options: ["5", "6", "7"],
        answer: "6",
    },
];

static DEFAULT_MATH_QUESTION: MathEntry = MathEntry {
    key: "default",
    question: "1 + 1 = ?",
    options: ["1", "2", "3"],
    answer: "2",
};

struct FactEntry {
    topic: &'static str,
    fact: &'static str,
    question: &'static str,
    options: [&'static str; 3],
    answer: &'static str,
}

static SCIENCE_FACTS: [FactEntry; 3] = [
    FactEntry {
        topic: "Space",
        fact: "The Sun is a giant star that keeps us warm and bright every day.",
        question: "What keeps our planet warm?",
        options: ["The Sun", "The Moon", "The Clouds"],
        answer: "The Sun",
    },
    FactEntry {
        topic: "Plants",
        fact: "Plants drink sunlight and water to make their own food.",
        question: "What do plants use to make food?",
        options: ["Sunlight", "Cats", "Coins"],
        answer: "Sunlight",
    },
    FactEntry {
        topic: "Water",
        fact: "Water can turn into ice when it gets very cold.",
        question: "What happens to water when it freezes?",
        options: ["It turns to ice", "It turns to candy", "It disappears"],
        answer: "It turns to ice",
    },
];

/// Story templates as (prefix, suffix) around the lower-cased topic.
pub static STORY_TEMPLATES: [(&str, &str); 3] = [
    (
        "Once upon a time there was a tiny ",
        " who wished to make their friends smile.",
    ),
    (
        "A playful ",
        " found a magic feather and flew to the rainbow castle.",
    ),
    (
        "Every morning the ",
        " bounced out of bed ready for a big hug and a new adventure.",
    ),
];

// ============================================================================
// Pure lookups
// ============================================================================

/// Case-insensitive table lookup; unmatched or missing difficulty gets the default.
pub fn lookup_math_question(difficulty: Option<&str>) -> MathQuestion {
    let key = difficulty.map(str::to_lowercase).unwrap_or_default();
    let entry = MATH_QUESTIONS
        .iter()
        .find(|e| e.key == key)
        .unwrap_or(&DEFAULT_MATH_QUESTION);
    MathQuestion {
        question: entry.question.to_string(),
        options: entry.options.iter().map(|o| o.to_string()).collect(),
        answer: entry.answer.to_string(),
    }
}

/// All fact records, in table order.
pub fn science_facts() -> Vec<ScienceFact> {
    SCIENCE_FACTS.iter().map(fact_from_entry).collect()
}

fn fact_from_entry(entry: &FactEntry) -> ScienceFact {
    ScienceFact {
        topic: entry.topic.to_string(),
        fact: entry.fact.to_string(),
        question: entry.question.to_string(),
        options: entry.options.iter().map(|o| o.to_string()).collect(),
        answer: entry.answer.to_string(),
    }
}

/// Fills template `template_index` (modulo the template count) with `topic`.
pub fn render_story(topic: &str, template_index: usize) -> Story {
    let trimmed = topic.trim();
    let topic = if trimmed.is_empty() {
        DEFAULT_STORY_TOPIC
    } else {
        trimmed
    };
    let (prefix, suffix) = STORY_TEMPLATES[template_index % STORY_TEMPLATES.len()];
    format!("{prefix}{}{suffix}", topic.to_lowercase())
}

// ============================================================================
// Randomness
// ============================================================================

/// xorshift64*: uniform enough for picking one of a handful of entries.
#[derive(Debug)]
struct XorShift64(u64);

impl XorShift64 {
    fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(2685821657736338717)
    }

    fn pick(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

// ============================================================================
// Service
// ============================================================================

/// Artificial latency per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDelays {
    pub math: Duration,
    pub science: Duration,
    pub story: Duration,
}

impl Default for ContentDelays {
    fn default() -> Self {
        Self {
            math: DEFAULT_MATH_DELAY,
            science: DEFAULT_SCIENCE_DELAY,
            story: DEFAULT_STORY_DELAY,
        }
    }
}

impl ContentDelays {
    pub fn none() -> Self {
        Self {
            math: Duration::ZERO,
            science: Duration::ZERO,
            story: Duration::ZERO,
        }
    }
}

pub struct MockContentService {
    delays: ContentDelays,
    rng: Mutex<XorShift64>,
}

impl MockContentService {
    /// A service with a random seed.
    pub fn new(delays: ContentDelays) -> Self {
        let (high, low) = uuid::Uuid::new_v4().as_u64_pair();
        Self::with_seed(delays, high ^ low)
    }

    /// A service whose random picks are reproducible.
    pub fn with_seed(delays: ContentDelays, seed: u64) -> Self {
        Self {
            delays,
            rng: Mutex::new(XorShift64::new(seed)),
        }
    }

    pub fn delays(&self) -> ContentDelays {
        self.delays
    }

    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.pick(len)
    }
}

impl Default for MockContentService {
    fn default() -> Self {
        Self::new(ContentDelays::default())
    }
}

#[async_trait]
impl ContentService for MockContentService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_math_question(&self, difficulty: Option<&str>) -> MathQuestion {
        tokio::time::sleep(self.delays.math).await;
        let question = lookup_math_question(difficulty);
        debug!("Math question for {:?}: {}", difficulty, question.question);
        question
    }

    async fn generate_science_fact(&self) -> ScienceFact {
        tokio::time::sleep(self.delays.science).await;
        let index = self.pick(SCIENCE_FACTS.len());
        debug!("Science fact #{} ({})", index, SCIENCE_FACTS[index].topic);
        fact_from_entry(&SCIENCE_FACTS[index])
    }

    async fn generate_story(&self, topic: &str) -> Story {
        tokio::time::sleep(self.delays.story).await;
        let index = self.pick(STORY_TEMPLATES.len());
        debug!("Story template #{} for topic {:?}", index, topic);
        render_story(topic, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{Content, ContentRequest};

    fn instant() -> MockContentService {
        MockContentService::with_seed(ContentDelays::none(), 7)
    }

    fn is_known_story(story: &str, topic: &str) -> bool {
        STORY_TEMPLATES
            .iter()
            .any(|(prefix, suffix)| *story == format!("{prefix}{topic}{suffix}"))
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup_math_question(Some("EASY")), lookup_math_question(Some("easy")));
        assert_eq!(lookup_math_question(Some("Hard")).answer, "6");
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let default = lookup_math_question(None);
        assert_eq!(default.question, "1 + 1 = ?");
        assert_eq!(lookup_math_question(Some("impossible")), default);
        assert_eq!(lookup_math_question(Some("")), default);
        assert_eq!(lookup_math_question(Some("default")), default);
    }

    #[test]
    fn test_math_answers_are_options() {
        for difficulty in [Some("easy"), Some("medium"), Some("hard"), None] {
            let q = lookup_math_question(difficulty);
            assert!(q.options.contains(&q.answer), "{:?}", difficulty);
        }
    }

    #[test]
    fn test_render_story_blank_topic() {
        assert_eq!(
            render_story("   ", 0),
            "Once upon a time there was a tiny playtime who wished to make their friends smile."
        );
    }

    #[test]
    fn test_render_story_trims_and_lowercases() {
        assert_eq!(
            render_story("  Big Dragon ", 1),
            "A playful big dragon found a magic feather and flew to the rainbow castle."
        );
    }

    #[test]
    fn test_render_story_index_wraps() {
        assert_eq!(render_story("cat", 5), render_story("cat", 2));
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = XorShift64::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = XorShift64::new(42);
        for _ in 0..1000 {
            assert!(rng.pick(3) < 3);
        }
    }

    #[test]
    fn test_pick_reaches_every_entry() {
        let service = instant();
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[service.pick(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[tokio::test]
    async fn test_science_fact_is_consistent() {
        let service = instant();
        let known = science_facts();
        for _ in 0..20 {
            let fact = service.generate_science_fact().await;
            assert!(fact.options.contains(&fact.answer));
            assert!(known.contains(&fact));
        }
    }

    #[tokio::test]
    async fn test_story_shapes() {
        let service = instant();
        let story = service.generate_story("").await;
        assert!(story.to_lowercase().contains("playtime"));
        assert!(is_known_story(&story, "playtime"));

        let story = service.generate_story("Dragon").await;
        assert!(story.contains("dragon"));
        assert!(is_known_story(&story, "dragon"));
    }

    #[tokio::test]
    async fn test_fetch_dispatches_by_request() {
        let service = instant();
        let content = service
            .fetch(&ContentRequest::Math {
                difficulty: Some("MEDIUM".into()),
            })
            .await;
        assert_eq!(content, Content::Math(lookup_math_question(Some("medium"))));

        let content = service.fetch(&ContentRequest::Science).await;
        assert!(matches!(content, Content::Science(_)));

        let content = service
            .fetch(&ContentRequest::Story {
                topic: "Owl".into(),
            })
            .await;
        match content {
            Content::Story(story) => assert!(is_known_story(&story, "owl")),
            other => panic!("expected a story, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delays_are_honored() {
        let service = MockContentService::with_seed(ContentDelays::default(), 1);

        let start = tokio::time::Instant::now();
        service.generate_math_question(Some("easy")).await;
        assert!(start.elapsed() >= DEFAULT_MATH_DELAY);

        let start = tokio::time::Instant::now();
        service.generate_science_fact().await;
        assert!(start.elapsed() >= DEFAULT_SCIENCE_DELAY);

        let start = tokio::time::Instant::now();
        service.generate_story("bee").await;
        assert!(start.elapsed() >= DEFAULT_STORY_DELAY);
    }

    #[test]
    fn test_reports_configured_delays() {
        let delays = ContentDelays {
            story: Duration::from_millis(250),
            ..ContentDelays::none()
        };
        assert_eq!(MockContentService::with_seed(delays, 1).delays(), delays);
        assert_eq!(instant().delays(), ContentDelays::none());
    }

    #[test]
    fn test_works_outside_async_tests() {
        let service = instant();
        let q = tokio_test::block_on(service.generate_math_question(Some("hard")));
        assert_eq!(q.question, "4 + 5 - 3 = ?");
    }
}
