/// A selectable answer choice carrying a text label and an integer score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    /// The label shown to the person taking the survey.
    pub text: String,

    /// Points added to the total when this option is chosen.
    pub score: i64,
}

impl AnswerOption {
    /// Create a new option with the given label and score.
    pub fn new(text: impl Into<String>, score: i64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Create an option with an empty label, as offered by a fresh draft.
    pub fn blank(score: i64) -> Self {
        Self::new(String::new(), score)
    }

    /// Check whether the label has been filled in.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}
