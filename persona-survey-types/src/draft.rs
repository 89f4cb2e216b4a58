use crate::{AnswerOption, Question, QuestionId, Rejection};

/// A question must always present at least this many alternatives.
pub const MIN_OPTIONS: usize = 2;

/// The in-progress, uncommitted question being edited.
///
/// A fresh draft has empty text and exactly two blank options scored 1 and 2.
/// The draft may hold empty labels while it is being edited; [`commit`](Self::commit)
/// is the only place where text is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftQuestion {
    text: String,
    options: Vec<AnswerOption>,
}

impl Default for DraftQuestion {
    fn default() -> Self {
        Self {
            text: String::new(),
            options: vec![AnswerOption::blank(1), AnswerOption::blank(2)],
        }
    }
}

impl DraftQuestion {
    /// Create a draft in its initial shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Replace the question text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a blank option scored one higher than the current option count.
    pub fn add_option(&mut self) {
        let score = self.options.len() as i64 + 1;
        self.options.push(AnswerOption::blank(score));
    }

    /// Set the label of the option at `index`.
    pub fn update_option(&mut self, index: usize, text: impl Into<String>) -> Result<(), Rejection> {
        let option = self
            .options
            .get_mut(index)
            .ok_or(Rejection::NoSuchOption(index))?;
        option.text = text.into();
        Ok(())
    }

    /// Check whether another option can be removed without dropping below the floor.
    pub fn can_remove_option(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    /// Remove the option at `index`.
    ///
    /// Scores of the remaining options are left untouched.
    pub fn remove_option(&mut self, index: usize) -> Result<AnswerOption, Rejection> {
        if !self.can_remove_option() {
            return Err(Rejection::OptionFloor);
        }
        if index >= self.options.len() {
            return Err(Rejection::NoSuchOption(index));
        }
        Ok(self.options.remove(index))
    }

    /// Check the commit gate: non-empty text and every option labelled.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.text.is_empty() {
            return Err(Rejection::EmptyQuestionText);
        }
        match self.options.iter().position(|option| !option.has_text()) {
            Some(index) => Err(Rejection::EmptyOptionText(index)),
            None => Ok(()),
        }
    }

    /// Shorthand for `validate().is_ok()`.
    pub fn is_committable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Turn the draft into a committed question and reset it to its initial shape.
    ///
    /// On rejection the draft is left exactly as it was.
    pub fn commit(&mut self, id: QuestionId) -> Result<Question, Rejection> {
        self.validate()?;
        let DraftQuestion { text, options } = std::mem::take(self);
        Ok(Question::new(id, text, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(labels: &[&str]) -> DraftQuestion {
        let mut draft = DraftQuestion::new();
        draft.set_text("Do you enjoy parties?");
        while draft.options().len() < labels.len() {
            draft.add_option();
        }
        for (index, label) in labels.iter().enumerate() {
            draft.update_option(index, *label).unwrap();
        }
        draft
    }

    #[test]
    fn initial_shape() {
        let draft = DraftQuestion::new();
        assert_eq!(draft.text(), "");
        assert_eq!(
            draft.options(),
            &[AnswerOption::blank(1), AnswerOption::blank(2)]
        );
    }

    #[test]
    fn add_option_scores_by_count() {
        let mut draft = DraftQuestion::new();
        draft.add_option();
        draft.add_option();
        let scores: Vec<_> = draft.options().iter().map(|o| o.score).collect();
        assert_eq!(scores, [1, 2, 3, 4]);
    }

    #[test]
    fn add_option_after_removal_reuses_count() {
        let mut draft = DraftQuestion::new();
        draft.add_option();
        draft.remove_option(0).unwrap();
        draft.add_option();
        let scores: Vec<_> = draft.options().iter().map(|o| o.score).collect();
        assert_eq!(scores, [2, 3, 3]);
    }

    #[test]
    fn update_out_of_range_is_rejected() {
        let mut draft = DraftQuestion::new();
        assert_eq!(
            draft.update_option(5, "nope"),
            Err(Rejection::NoSuchOption(5))
        );
        assert_eq!(draft, DraftQuestion::new());
    }

    #[test]
    fn remove_respects_floor() {
        let mut draft = DraftQuestion::new();
        assert_eq!(draft.remove_option(0), Err(Rejection::OptionFloor));
        assert_eq!(draft.options().len(), 2);

        draft.add_option();
        assert_eq!(draft.remove_option(1).unwrap().score, 2);
        assert_eq!(draft.options().len(), 2);
        assert_eq!(draft.remove_option(1), Err(Rejection::OptionFloor));
    }

    #[test]
    fn remove_out_of_range_above_floor() {
        let mut draft = DraftQuestion::new();
        draft.add_option();
        assert_eq!(draft.remove_option(3), Err(Rejection::NoSuchOption(3)));
        assert_eq!(draft.options().len(), 3);
    }

    #[test]
    fn commit_gate() {
        let mut draft = DraftQuestion::new();
        assert_eq!(draft.validate(), Err(Rejection::EmptyQuestionText));

        draft.set_text("Question");
        assert_eq!(draft.validate(), Err(Rejection::EmptyOptionText(0)));

        draft.update_option(0, "Yes").unwrap();
        assert_eq!(draft.validate(), Err(Rejection::EmptyOptionText(1)));

        draft.update_option(1, "No").unwrap();
        assert!(draft.is_committable());
    }

    #[test]
    fn rejected_commit_leaves_draft_alone() {
        let mut draft = filled(&["Yes", ""]);
        let before = draft.clone();
        assert!(draft.commit(QuestionId::new(1)).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn commit_resets_draft() {
        let mut draft = filled(&["Always", "Often", "Sometimes", "Never"]);
        let question = draft.commit(QuestionId::new(7)).unwrap();

        assert_eq!(question.id(), QuestionId::new(7));
        assert_eq!(question.text(), "Do you enjoy parties?");
        assert_eq!(question.options().len(), 4);
        assert_eq!(question.max_score(), 4);
        assert_eq!(draft, DraftQuestion::new());
    }
}
