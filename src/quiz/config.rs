//! Question data
//!
//! This module defines the immutable question records a quiz is built from.
//! Records are usually embedded in the page as JSON; the field names used by
//! existing pages (`question`, `options`, `correct`) are accepted alongside
//! the canonical ones.

use serde::{Deserialize, Serialize};

use super::prompt::{self, PromptSegment};

/// A single fill-in-the-blank question
///
/// The engine does not validate questions. A prompt without a blank marker
/// or an empty choice list produces a question that cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text containing one blank marker
    #[serde(alias = "question")]
    pub prompt: String,
    /// Candidate answers, in display order
    #[serde(alias = "options")]
    pub choices: Vec<String>,
    /// The choice text that counts as correct
    #[serde(alias = "correct")]
    pub correct_answer: String,
    /// Text revealed once the question is answered
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Splits the prompt around its blank
    pub fn segments(&self) -> Vec<PromptSegment> {
        prompt::split(&self.prompt)
    }

    /// Returns whether the rendered question has a drop zone
    pub fn has_blank(&self) -> bool {
        prompt::has_blank(&self.segments())
    }

    /// Checks a dropped payload against the correct answer
    ///
    /// Comparison is exact: no trimming and no case folding.
    pub fn is_correct(&self, chosen: &str) -> bool {
        chosen == self.correct_answer
    }

    /// Returns the text of the choice at `index`
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }
}

/// An ordered list of questions making up one quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl From<Vec<Question>> for Quiz {
    fn from(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl Quiz {
    /// Parses a quiz from a JSON array of question records
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json::Error` if the text is not a JSON
    /// array of question records.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Returns the number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks if the quiz contains any questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at `index`
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Returns all questions in order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
