use std::fmt;

use crate::{AnswerOption, MIN_OPTIONS, Rejection};

/// Identifier assigned to a question when it is committed to a survey.
///
/// Uniqueness within one survey is the only contract; the numeric value
/// carries no meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed question.
///
/// Questions are produced by [`DraftQuestion::commit`](crate::DraftQuestion::commit)
/// or [`Question::try_new`], so every instance has non-empty text and at least
/// two labelled options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<AnswerOption>,
}

impl Question {
    pub(crate) fn new(id: QuestionId, text: String, options: Vec<AnswerOption>) -> Self {
        Self { id, text, options }
    }

    /// Build a question with arbitrary option scores, applying the same checks as a commit.
    pub fn try_new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, Rejection> {
        let text = text.into();
        if text.is_empty() {
            return Err(Rejection::EmptyQuestionText);
        }
        if options.len() < MIN_OPTIONS {
            return Err(Rejection::OptionFloor);
        }
        if let Some(index) = options.iter().position(|option| !option.has_text()) {
            return Err(Rejection::EmptyOptionText(index));
        }
        Ok(Self::new(id, text, options))
    }

    /// Get the identifier.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the options in display order.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Get the option at `index`.
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Check if any option carries the given score.
    pub fn offers_score(&self, score: i64) -> bool {
        self.options.iter().any(|option| option.score == score)
    }

    /// The highest score any single option of this question awards.
    pub fn max_score(&self) -> i64 {
        self.options
            .iter()
            .map(|option| option.score)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_applies_commit_checks() {
        let id = QuestionId::new(1);
        assert_eq!(
            Question::try_new(id, "", vec![]),
            Err(Rejection::EmptyQuestionText)
        );
        assert_eq!(
            Question::try_new(id, "Lonely?", vec![AnswerOption::new("Yes", 1)]),
            Err(Rejection::OptionFloor)
        );
        assert_eq!(
            Question::try_new(
                id,
                "Blank?",
                vec![AnswerOption::new("Yes", 1), AnswerOption::blank(0)]
            ),
            Err(Rejection::EmptyOptionText(1))
        );
    }

    #[test]
    fn max_score_ignores_option_order() {
        let question = Question::try_new(
            QuestionId::new(3),
            "Weekend plans?",
            vec![
                AnswerOption::new("Party", 10),
                AnswerOption::new("Book", 0),
                AnswerOption::new("Dinner", 6),
            ],
        )
        .unwrap();

        assert_eq!(question.max_score(), 10);
        assert!(question.offers_score(6));
        assert!(!question.offers_score(5));
    }
}
