//! The survey session state machine.
//!
//! A [`Session`] owns the survey being authored, the draft question and the
//! answers of the current take-pass. Every change goes through an [`Action`];
//! an action that does not apply leaves the session untouched.

use log::{debug, info};

use crate::{
    Action, Answers, DraftQuestion, Outcome, Progress, Question, QuestionId, Rejection, Survey,
};

/// Which screen the session is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Authoring the survey.
    Creating,
    /// Taking the survey, showing the question at `index`.
    Taking { index: usize },
    /// The take-pass is complete; the outcome is computed once on entry.
    ShowingResults { outcome: Outcome },
}

impl Mode {
    /// A short name for logs and rejections.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Creating => "creating",
            Self::Taking { .. } => "taking",
            Self::ShowingResults { .. } => "showing results",
        }
    }

    /// Check if this is the creator.
    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating)
    }
}

/// A single-user survey session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    survey: Survey,
    draft: DraftQuestion,
    answers: Answers,
    mode: Mode,
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with an empty survey, in the creator.
    pub fn new() -> Self {
        Self {
            survey: Survey::new(),
            draft: DraftQuestion::new(),
            answers: Answers::new(),
            mode: Mode::Creating,
            next_id: 1,
        }
    }

    /// Get the survey.
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Get the draft question.
    pub fn draft(&self) -> &DraftQuestion {
        &self.draft
    }

    /// Get the answers recorded in the current take-pass.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The question being shown while taking the survey.
    pub fn current_question(&self) -> Option<&Question> {
        match self.mode {
            Mode::Taking { index } => self.survey.question(index),
            _ => None,
        }
    }

    /// Progress through the survey while taking it.
    pub fn progress(&self) -> Option<Progress> {
        match self.mode {
            Mode::Taking { index } => Some(Progress {
                index,
                total: self.survey.len(),
            }),
            _ => None,
        }
    }

    /// The cached outcome, once the results are shown.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.mode {
            Mode::ShowingResults { outcome } => Some(outcome),
            _ => None,
        }
    }

    /// Whether "Add Question" would commit the draft.
    pub fn can_commit(&self) -> bool {
        self.mode.is_creating() && self.draft.is_committable()
    }

    /// Whether the survey can be taken.
    pub fn can_start(&self) -> bool {
        !self.survey.is_empty()
    }

    /// Report whether `action` would take effect, without applying it.
    ///
    /// Nothing is logged and the session is not touched.
    pub fn check(&self, action: &Action) -> Result<(), Rejection> {
        let name = action.name();
        match action {
            Action::SetTitle(_)
            | Action::SetDescription(_)
            | Action::SetQuestionText(_)
            | Action::AddOption => self.require_creating(name),
            Action::UpdateOption { index, .. } => {
                self.require_creating(name)?;
                self.require_option(*index)
            }
            Action::RemoveOption { index } => {
                self.require_creating(name)?;
                if !self.draft.can_remove_option() {
                    return Err(Rejection::OptionFloor);
                }
                self.require_option(*index)
            }
            Action::AddQuestion => {
                self.require_creating(name)?;
                self.draft.validate()
            }
            Action::RemoveQuestion { id } => {
                self.require_creating(name)?;
                self.survey
                    .find(*id)
                    .map(|_| ())
                    .ok_or(Rejection::NoSuchQuestion(*id))
            }
            Action::StartSurvey if self.survey.is_empty() => Err(Rejection::EmptySurvey),
            Action::StartSurvey => Ok(()),
            Action::AnswerQuestion { score } => self.check_answer(name, *score),
            Action::ChooseOption { index } => {
                let score = self.chosen_score(name, *index)?;
                self.check_answer(name, score)
            }
            Action::ResetSurvey | Action::BackToCreator => self.require_results(name),
            Action::ShowCreator => Ok(()),
        }
    }

    /// Apply `action` in place.
    ///
    /// On rejection the session is unchanged and the reason is returned.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Rejection> {
        if let Err(rejection) = self.check(&action) {
            debug!(
                "Ignoring '{}' while {}: {rejection}",
                action.name(),
                self.mode.name()
            );
            return Err(rejection);
        }
        self.apply(action)
    }

    /// The pure transition: apply `action` and return the next state.
    ///
    /// Rejected actions yield the state unchanged.
    pub fn reduce(mut self, action: Action) -> Self {
        // Rejections are already logged by dispatch and never surfaced.
        let _ = self.dispatch(action);
        self
    }

    /// Carry out an action that already passed `check`.
    fn apply(&mut self, action: Action) -> Result<(), Rejection> {
        let name = action.name();
        match action {
            Action::SetTitle(title) => self.survey.set_title(title),
            Action::SetDescription(description) => self.survey.set_description(description),
            Action::SetQuestionText(text) => self.draft.set_text(text),
            Action::AddOption => self.draft.add_option(),
            Action::UpdateOption { index, text } => self.draft.update_option(index, text)?,
            Action::RemoveOption { index } => {
                self.draft.remove_option(index)?;
            }
            Action::AddQuestion => {
                let id = QuestionId::new(self.next_id);
                let question = self.draft.commit(id)?;
                self.next_id += 1;
                info!(
                    "Added question {id} with {} options",
                    question.options().len()
                );
                self.survey.push(question);
            }
            Action::RemoveQuestion { id } => {
                self.survey
                    .remove(id)
                    .ok_or(Rejection::NoSuchQuestion(id))?;
                info!("Removed question {id}");
            }
            Action::StartSurvey | Action::ResetSurvey => self.begin_pass(),
            Action::AnswerQuestion { score } => self.record_answer(score),
            Action::ChooseOption { index } => {
                let score = self.chosen_score(name, index)?;
                self.record_answer(score);
            }
            Action::BackToCreator | Action::ShowCreator => {
                // Leaving a pass halfway discards it; the next start begins afresh anyway.
                if !self.mode.is_creating() {
                    self.answers.clear();
                    self.mode = Mode::Creating;
                }
            }
        }
        Ok(())
    }

    fn begin_pass(&mut self) {
        self.answers.clear();
        self.mode = Mode::Taking { index: 0 };
        info!("Starting survey with {} questions", self.survey.len());
    }

    fn check_answer(&self, name: &'static str, score: i64) -> Result<(), Rejection> {
        if self.taking_question(name)?.offers_score(score) {
            Ok(())
        } else {
            Err(Rejection::ScoreNotOffered(score))
        }
    }

    fn chosen_score(&self, name: &'static str, index: usize) -> Result<i64, Rejection> {
        self.taking_question(name)?
            .option(index)
            .map(|option| option.score)
            .ok_or(Rejection::NoSuchOption(index))
    }

    fn record_answer(&mut self, score: i64) {
        let Mode::Taking { index } = self.mode else {
            return;
        };
        self.answers.push(score);
        if index + 1 < self.survey.len() {
            self.mode = Mode::Taking { index: index + 1 };
        } else {
            let outcome = crate::score(&self.survey, &self.answers);
            info!(
                "Survey complete: {} ({})",
                outcome.label(),
                outcome.scorecard
            );
            self.mode = Mode::ShowingResults { outcome };
        }
    }

    fn taking_question(&self, name: &'static str) -> Result<&Question, Rejection> {
        match self.mode {
            Mode::Taking { index } => self.survey.question(index).ok_or(Rejection::EmptySurvey),
            _ => Err(self.wrong_mode(name)),
        }
    }

    fn require_creating(&self, name: &'static str) -> Result<(), Rejection> {
        match self.mode {
            Mode::Creating => Ok(()),
            _ => Err(self.wrong_mode(name)),
        }
    }

    fn require_option(&self, index: usize) -> Result<(), Rejection> {
        if index < self.draft.options().len() {
            Ok(())
        } else {
            Err(Rejection::NoSuchOption(index))
        }
    }

    fn require_results(&self, name: &'static str) -> Result<(), Rejection> {
        match self.mode {
            Mode::ShowingResults { .. } => Ok(()),
            _ => Err(self.wrong_mode(name)),
        }
    }

    fn wrong_mode(&self, action: &'static str) -> Rejection {
        Rejection::WrongMode {
            action,
            mode: self.mode.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn authored(questions: &[(&str, &[&str])]) -> Session {
        questions
            .iter()
            .flat_map(|(text, labels)| Action::compose_question(*text, labels))
            .fold(Session::new(), Session::reduce)
    }

    #[test]
    fn starts_in_creator() {
        let session = Session::new();
        assert_eq!(session.mode(), &Mode::Creating);
        assert!(!session.can_start());
        assert!(!session.can_commit());
        assert_eq!(session.progress(), None);
    }

    /// Records log lines per thread so parallel tests do not see each other's output.
    mod captured_log {
        use std::sync::{Mutex, Once};
        use std::thread::{self, ThreadId};

        use log::{LevelFilter, Log, Metadata, Record};

        static RECORDS: Mutex<Vec<(ThreadId, String)>> = Mutex::new(Vec::new());

        struct Capture;

        impl Log for Capture {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                if let Ok(mut records) = RECORDS.lock() {
                    let line = format!("{} {}", record.level(), record.args());
                    records.push((thread::current().id(), line));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: Capture = Capture;

        pub(super) fn install() {
            static INIT: Once = Once::new();
            INIT.call_once(|| {
                let _ = log::set_logger(&LOGGER);
                log::set_max_level(LevelFilter::Trace);
            });
        }

        pub(super) fn lines_for(thread: ThreadId) -> Vec<String> {
            RECORDS
                .lock()
                .map(|records| {
                    records
                        .iter()
                        .filter(|(id, _)| *id == thread)
                        .map(|(_, line)| line.clone())
                        .collect()
                })
                .unwrap_or_default()
        }
    }

    #[test]
    fn check_writes_no_log() {
        captured_log::install();
        let worker = std::thread::spawn(|| {
            let mut session = Action::compose_question("Crowds?", &["No", "Yes"])
                .into_iter()
                .filter(|action| *action != Action::AddQuestion)
                .fold(Session::new(), Session::reduce);
            let me = std::thread::current().id();

            assert_eq!(session.check(&Action::AddQuestion), Ok(()));
            assert_eq!(session.check(&Action::StartSurvey), Err(Rejection::EmptySurvey));
            assert!(session.survey().is_empty());
            assert_eq!(captured_log::lines_for(me), Vec::<String>::new());

            session.dispatch(Action::AddQuestion).unwrap();
            assert_eq!(
                captured_log::lines_for(me),
                ["INFO Added question 1 with 2 options"]
            );
        });
        worker.join().unwrap();
    }

    #[test]
    fn check_agrees_with_dispatch() {
        let creating = authored(&[("one", &["a", "b"]), ("two", &["a", "b", "c"])]);
        let taking = creating.clone().reduce(Action::StartSurvey);
        let results = taking
            .clone()
            .reduce(Action::ChooseOption { index: 0 })
            .reduce(Action::ChooseOption { index: 0 });
        let actions = [
            Action::SetTitle("t".into()),
            Action::AddOption,
            Action::UpdateOption {
                index: 1,
                text: "x".into(),
            },
            Action::UpdateOption {
                index: 5,
                text: "x".into(),
            },
            Action::RemoveOption { index: 0 },
            Action::AddQuestion,
            Action::RemoveQuestion {
                id: QuestionId::new(1),
            },
            Action::RemoveQuestion {
                id: QuestionId::new(9),
            },
            Action::StartSurvey,
            Action::AnswerQuestion { score: 2 },
            Action::AnswerQuestion { score: 7 },
            Action::ChooseOption { index: 1 },
            Action::ChooseOption { index: 4 },
            Action::ResetSurvey,
            Action::BackToCreator,
            Action::ShowCreator,
        ];

        for session in [Session::new(), creating, taking, results] {
            for action in &actions {
                let predicted = session.check(action);
                let applied = session.clone().dispatch(action.clone());
                assert_eq!(predicted, applied, "{action} while {}", session.mode().name());
            }
        }
    }

    #[test]
    fn check_does_not_mutate() {
        let session = authored(&[("Q?", &["a", "b"])]);
        let before = session.clone();

        assert_eq!(session.check(&Action::StartSurvey), Ok(()));
        assert_eq!(session, before);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut session = authored(&[("one", &["a", "b"]), ("two", &["a", "b"])]);
        let first = session.survey().questions()[0].id();
        session.dispatch(Action::RemoveQuestion { id: first }).unwrap();

        let session = Action::compose_question("three", &["a", "b"])
            .into_iter()
            .fold(session, Session::reduce);
        let ids: Vec<_> = session.survey().questions().iter().map(|q| q.id()).collect();
        assert_eq!(ids, [QuestionId::new(2), QuestionId::new(3)]);
    }

    #[test]
    fn remove_unknown_question_is_rejected() {
        let mut session = authored(&[("one", &["a", "b"])]);
        let before = session.clone();
        assert_eq!(
            session.dispatch(Action::RemoveQuestion {
                id: QuestionId::new(42)
            }),
            Err(Rejection::NoSuchQuestion(QuestionId::new(42)))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn start_requires_questions() {
        let mut session = Session::new();
        assert_eq!(
            session.dispatch(Action::StartSurvey),
            Err(Rejection::EmptySurvey)
        );
        assert!(session.mode().is_creating());
    }

    #[test]
    fn authoring_is_locked_while_taking() {
        let mut session = authored(&[("one", &["a", "b"])]).reduce(Action::StartSurvey);
        let before = session.clone();

        for action in [
            Action::SetTitle("x".into()),
            Action::AddOption,
            Action::AddQuestion,
            Action::RemoveQuestion {
                id: QuestionId::new(1),
            },
        ] {
            assert!(matches!(
                session.dispatch(action),
                Err(Rejection::WrongMode { mode: "taking", .. })
            ));
        }
        assert_eq!(session, before);
    }

    #[test]
    fn answering_outside_a_pass_is_rejected() {
        let mut session = authored(&[("one", &["a", "b"])]);
        assert!(matches!(
            session.dispatch(Action::AnswerQuestion { score: 1 }),
            Err(Rejection::WrongMode { .. })
        ));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn score_must_be_offered() {
        let mut session = authored(&[("one", &["a", "b"])]).reduce(Action::StartSurvey);
        assert_eq!(
            session.dispatch(Action::AnswerQuestion { score: 9 }),
            Err(Rejection::ScoreNotOffered(9))
        );
        assert_eq!(session.mode(), &Mode::Taking { index: 0 });
    }

    #[test]
    fn choose_option_out_of_range() {
        let mut session = authored(&[("one", &["a", "b"])]).reduce(Action::StartSurvey);
        assert_eq!(
            session.dispatch(Action::ChooseOption { index: 2 }),
            Err(Rejection::NoSuchOption(2))
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn walks_questions_then_caches_outcome() {
        let session = authored(&[("one", &["a", "b"]), ("two", &["a", "b", "c"])])
            .reduce(Action::StartSurvey);
        assert_eq!(session.progress().map(|p| p.label()).as_deref(), Some("Question 1 of 2"));
        assert_eq!(session.current_question().map(|q| q.text()), Some("one"));

        let session = session.reduce(Action::ChooseOption { index: 1 });
        assert_eq!(session.mode(), &Mode::Taking { index: 1 });
        assert_eq!(session.answers().as_slice(), &[2]);

        let session = session.reduce(Action::ChooseOption { index: 2 });
        let outcome = session.outcome().copied().unwrap();
        assert_eq!(outcome.scorecard.total, 5);
        assert_eq!(outcome.scorecard.max, 5);
        assert_eq!(outcome.category, Category::HighlyExtroverted);
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn retake_clears_answers() {
        let session = authored(&[("one", &["a", "b"])])
            .reduce(Action::StartSurvey)
            .reduce(Action::ChooseOption { index: 0 })
            .reduce(Action::ResetSurvey);

        assert_eq!(session.mode(), &Mode::Taking { index: 0 });
        assert!(session.answers().is_empty());
        assert_eq!(session.survey().len(), 1);
    }

    #[test]
    fn retake_only_from_results() {
        let mut session = authored(&[("one", &["a", "b"])]);
        assert!(session.dispatch(Action::ResetSurvey).is_err());
        assert!(session.dispatch(Action::BackToCreator).is_err());
    }

    #[test]
    fn create_tab_abandons_pass() {
        let session = authored(&[("one", &["a", "b"]), ("two", &["a", "b"])])
            .reduce(Action::StartSurvey)
            .reduce(Action::ChooseOption { index: 0 })
            .reduce(Action::ShowCreator);

        assert_eq!(session.mode(), &Mode::Creating);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn create_tab_in_creator_is_noop() {
        let session = authored(&[("one", &["a", "b"])]);
        assert_eq!(session.clone().reduce(Action::ShowCreator), session);
    }

    #[test]
    fn restart_from_results_begins_fresh_pass() {
        let session = authored(&[("one", &["a", "b"])])
            .reduce(Action::StartSurvey)
            .reduce(Action::ChooseOption { index: 1 })
            .reduce(Action::StartSurvey);

        assert_eq!(session.mode(), &Mode::Taking { index: 0 });
        assert!(session.answers().is_empty());
    }
}
