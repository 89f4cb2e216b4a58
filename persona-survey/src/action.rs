use std::fmt;

use crate::QuestionId;

/// Every user intent the session understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the survey title.
    SetTitle(String),
    /// Replace the survey description.
    SetDescription(String),
    /// Replace the draft question text.
    SetQuestionText(String),
    /// Append a blank option to the draft.
    AddOption,
    /// Set the label of a draft option.
    UpdateOption { index: usize, text: String },
    /// Remove a draft option, as long as more than two remain.
    RemoveOption { index: usize },
    /// Commit the draft to the survey.
    AddQuestion,
    /// Remove a committed question.
    RemoveQuestion { id: QuestionId },
    /// Begin a fresh take-pass at the first question.
    StartSurvey,
    /// Record a score for the current question and advance.
    AnswerQuestion { score: i64 },
    /// Pick an option of the current question by position and advance.
    ChooseOption { index: usize },
    /// Retake the same survey from the first question.
    ResetSurvey,
    /// Leave the result screen for the (still populated) creator.
    BackToCreator,
    /// The "Create Survey" tab.
    ShowCreator,
}

impl Action {
    /// A short, stable name for logs and rejections.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTitle(_) => "set title",
            Self::SetDescription(_) => "set description",
            Self::SetQuestionText(_) => "set question text",
            Self::AddOption => "add option",
            Self::UpdateOption { .. } => "update option",
            Self::RemoveOption { .. } => "remove option",
            Self::AddQuestion => "add question",
            Self::RemoveQuestion { .. } => "remove question",
            Self::StartSurvey => "start survey",
            Self::AnswerQuestion { .. } => "answer question",
            Self::ChooseOption { .. } => "choose option",
            Self::ResetSurvey => "retake survey",
            Self::BackToCreator => "back to creator",
            Self::ShowCreator => "show creator",
        }
    }

    /// Actions that author a question from a prompt and option labels on a fresh draft.
    ///
    /// Options beyond the initial two are added first; scores follow the
    /// draft's numbering (1, 2, 3, ...).
    pub fn compose_question(text: impl Into<String>, labels: &[&str]) -> Vec<Action> {
        let mut actions = vec![Action::SetQuestionText(text.into())];
        actions.extend((2..labels.len()).map(|_| Action::AddOption));
        actions.extend(
            labels
                .iter()
                .enumerate()
                .map(|(index, label)| Action::UpdateOption {
                    index,
                    text: (*label).to_string(),
                }),
        );
        actions.push(Action::AddQuestion);
        actions
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateOption { index, .. } | Self::RemoveOption { index } => {
                write!(f, "{} #{}", self.name(), index + 1)
            }
            Self::ChooseOption { index } => write!(f, "{} #{}", self.name(), index + 1),
            Self::RemoveQuestion { id } => write!(f, "{} {id}", self.name()),
            Self::AnswerQuestion { score } => write!(f, "{} ({score})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_two_options() {
        let actions = Action::compose_question("Q?", &["a", "b"]);
        assert_eq!(
            actions,
            vec![
                Action::SetQuestionText("Q?".into()),
                Action::UpdateOption {
                    index: 0,
                    text: "a".into()
                },
                Action::UpdateOption {
                    index: 1,
                    text: "b".into()
                },
                Action::AddQuestion,
            ]
        );
    }

    #[test]
    fn compose_adds_missing_options_first() {
        let actions = Action::compose_question("Q?", &["a", "b", "c", "d"]);
        let adds = actions
            .iter()
            .take_while(|a| !matches!(a, Action::UpdateOption { .. }))
            .filter(|a| **a == Action::AddOption)
            .count();
        assert_eq!(adds, 2);
        assert_eq!(actions.last(), Some(&Action::AddQuestion));
    }

    #[test]
    fn display() {
        assert_eq!(Action::RemoveOption { index: 2 }.to_string(), "remove option #3");
        assert_eq!(
            Action::AnswerQuestion { score: 4 }.to_string(),
            "answer question (4)"
        );
        assert_eq!(Action::StartSurvey.to_string(), "start survey");
    }
}
