use crate::{MIN_OPTIONS, QuestionId};

/// Why an action left the session unchanged.
///
/// Rejections are never shown to the user; frontends use them to decide
/// which controls to offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("a question needs at least {} options", MIN_OPTIONS)]
    OptionFloor,

    #[error("no option at index {0}")]
    NoSuchOption(usize),

    #[error("question text is empty")]
    EmptyQuestionText,

    #[error("option {0} has no text")]
    EmptyOptionText(usize),

    #[error("no question with id {0}")]
    NoSuchQuestion(QuestionId),

    #[error("the survey has no questions")]
    EmptySurvey,

    #[error("score {0} is not offered by the current question")]
    ScoreNotOffered(i64),

    #[error("'{action}' is not available while {mode}")]
    WrongMode {
        action: &'static str,
        mode: &'static str,
    },
}

/// Error type for running a session through a frontend.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// User cancelled the session (Ctrl+C, closed terminal, etc.)
    #[error("Survey cancelled by user")]
    Cancelled,

    /// Frontend-specific failure (I/O, terminal setup, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl SessionError {
    /// Create a frontend error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
