use crate::{Question, QuestionId};

/// The complete authored artifact: title, description and ordered questions.
///
/// Title and description are free text and never validated. Questions keep
/// insertion order; removing one preserves the relative order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Survey {
    /// Title of the survey (may be empty).
    pub title: String,

    /// Short description shown before the first question (may be empty).
    pub description: String,

    questions: Vec<Question>,
}

impl Survey {
    /// Create an empty survey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at `index`.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by id.
    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Append a committed question.
    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Remove the question with the given id, returning it if it existed.
    pub fn remove(&mut self, id: QuestionId) -> Option<Question> {
        let position = self.questions.iter().position(|q| q.id() == id)?;
        Some(self.questions.remove(position))
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Sum over every question of its highest option score, saturating at the bounds of `i64`.
    pub fn max_score(&self) -> i64 {
        self.questions
            .iter()
            .map(Question::max_score)
            .fold(0, i64::saturating_add)
    }
}
