use serde::{Deserialize, Serialize};

/// A multiple-choice arithmetic question. `answer` is one of `options`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MathQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A short fact followed by a question about it. `answer` is one of `options`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScienceFact {
    pub topic: String,
    pub fact: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

pub type Story = String;

/// What a game asked the content service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRequest {
    Math { difficulty: Option<String> },
    Science,
    Story { topic: String },
}

/// What the content service answered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Math(MathQuestion),
    Science(ScienceFact),
    Story(Story),
}

impl Content {
    /// Question, options and answer, for content that can be quizzed on.
    pub fn as_choice(&self) -> Option<(&str, &[String], &str)> {
        match self {
            Content::Math(q) => Some((q.question.as_str(), q.options.as_slice(), q.answer.as_str())),
            Content::Science(f) => Some((f.question.as_str(), f.options.as_slice(), f.answer.as_str())),
            Content::Story(_) => None,
        }
    }
}
