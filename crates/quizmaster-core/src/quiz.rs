//! Quiz lifecycle: creation with a minimum question count, listing, and the one-way
//! `draft -> published` transition.
//!
//! Expected business outcomes (too few questions, unknown quiz) come back as
//! [`Verdict::Rejected`]. Only store failures are errors.

pub mod error;
pub mod lifecycle;

use thiserror::Error;

pub use lifecycle::{create_quiz, get_quiz, list_quizzes, publish_quiz};

pub const DEFAULT_MIN_QUESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRules {
    pub min_questions: usize,
}

impl QuizRules {
    #[must_use]
    pub fn new(min_questions: usize) -> Self {
        Self { min_questions }
    }
}

impl Default for QuizRules {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUESTIONS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    Accepted(T),
    Rejected(Rejection),
}

/// Reasons a well-formed request is turned down. The display text is shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("At least {0} questions required")]
    TooFewQuestions(usize),

    #[error("Quiz not found")]
    QuizNotFound,
}
