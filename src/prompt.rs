use std::collections::VecDeque;
use std::io;

use thiserror::Error;

use crate::domain::types::Amount;

#[derive(Debug, Error)]
pub enum PromptError {
    /// The answer source ended before a response arrived.
    #[error("input stream closed")]
    Closed,
    /// A scripted answer did not fit the question being asked.
    #[error("answer does not match the question: {0}")]
    Mismatch(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The question shapes the core may ask of its interactive frontend.
///
/// Exactly one question is pending at a time. How a frontend renders and
/// collects the answer is its own concern; a terminal, a GUI, and a scripted
/// test harness are all valid implementations.
pub trait Prompt {
    /// Free-text input, trimmed.
    fn text(&mut self, message: &str) -> Result<String, PromptError>;

    /// Secret input; the frontend must not echo the answer.
    fn password(&mut self, message: &str) -> Result<String, PromptError>;

    /// Numeric input. An empty answer resolves to `default` when one is
    /// given; unparseable input is the frontend's to re-collect.
    fn amount(&mut self, message: &str, default: Option<Amount>) -> Result<Amount, PromptError>;

    /// Single choice out of `choices`; returns the chosen index.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, PromptError>;
}

/// A pre-seeded answer for `ScriptedPrompt`.
///
/// `Text` stands in for raw keystrokes and is coerced to the question being
/// asked: parsed for amount questions, matched against the choice labels for
/// select questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Password(String),
    Amount(Amount),
    Select(usize),
}

impl Answer {
    pub fn text(s: &str) -> Self {
        Answer::Text(s.to_string())
    }

    pub fn password(s: &str) -> Self {
        Answer::Password(s.to_string())
    }
}

/// Deterministic frontend that answers from a fixed script, in order.
///
/// Once the script runs out every question fails with `PromptError::Closed`,
/// which is exactly what an exhausted stdin looks like to the core.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompt {
            answers: answers.into_iter().collect(),
        }
    }

    fn pop(&mut self) -> Result<Answer, PromptError> {
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}

impl Prompt for ScriptedPrompt {
    fn text(&mut self, _message: &str) -> Result<String, PromptError> {
        match self.pop()? {
            Answer::Text(s) => Ok(s.trim().to_string()),
            other => Err(PromptError::Mismatch(format!(
                "expected text, got {:?}",
                other
            ))),
        }
    }

    fn password(&mut self, _message: &str) -> Result<String, PromptError> {
        match self.pop()? {
            Answer::Password(s) | Answer::Text(s) => Ok(s),
            other => Err(PromptError::Mismatch(format!(
                "expected password, got {:?}",
                other
            ))),
        }
    }

    fn amount(&mut self, _message: &str, default: Option<Amount>) -> Result<Amount, PromptError> {
        match self.pop()? {
            Answer::Amount(amount) => Ok(amount),
            Answer::Text(s) => {
                if s.trim().is_empty() {
                    if let Some(default) = default {
                        return Ok(default);
                    }
                }
                Amount::from_str_rounded(&s)
                    .map_err(|_| PromptError::Mismatch(format!("unparseable amount {:?}", s)))
            }
            other => Err(PromptError::Mismatch(format!(
                "expected amount, got {:?}",
                other
            ))),
        }
    }

    fn select(&mut self, _message: &str, choices: &[&str]) -> Result<usize, PromptError> {
        match self.pop()? {
            // Passed through unvalidated; menus report out-of-range choices
            Answer::Select(index) => Ok(index),
            Answer::Text(s) => choices
                .iter()
                .position(|choice| *choice == s.trim())
                .ok_or_else(|| PromptError::Mismatch(format!("no choice labelled {:?}", s))),
            other => Err(PromptError::Mismatch(format!(
                "expected selection, got {:?}",
                other
            ))),
        }
    }
}
