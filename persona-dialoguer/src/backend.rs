//! Dialoguer frontend implementation for the SessionFrontend trait.

use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use log::debug;
use persona_survey::{Action, Mode, Outcome, Session, SessionError, SessionFrontend};
use thiserror::Error;

use crate::menu::{CreatorChoice, creator_menu, question_summary};

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the session (e.g., pressed Ctrl+C).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(dialoguer::Error),
}

impl From<dialoguer::Error> for DialoguerError {
    fn from(err: dialoguer::Error) -> Self {
        if is_cancelled(&err) {
            DialoguerError::Cancelled
        } else {
            DialoguerError::Dialoguer(err)
        }
    }
}

impl From<DialoguerError> for SessionError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SessionError::Cancelled,
            other => SessionError::frontend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

const RESULT_CHOICES: [&str; 3] = ["Retake Survey", "Create New Survey", "Quit"];

/// Dialoguer frontend for interactive CLI prompts.
///
/// This frontend uses the `dialoguer` library to present the creator as a
/// menu and each question as a single-select prompt.
#[derive(Debug, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Apply an action chosen from the menus. Menus only offer permitted actions,
    /// so a rejection here is only logged.
    fn apply(&self, session: &mut Session, action: Action) {
        if let Err(rejection) = session.dispatch(action) {
            debug!("Menu offered an unavailable action: {rejection}");
        }
    }

    fn ask_text(&self, prompt: &str, current: &str) -> Result<String, DialoguerError> {
        let theme = self.theme();
        let text = Input::<String>::with_theme(&*theme)
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }

    fn pick(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, DialoguerError> {
        let theme = self.theme();
        let picked = Select::with_theme(&*theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(picked)
    }

    /// One round of the creator menu. Returns `false` when the user quits.
    fn creator_step(&self, session: &mut Session) -> Result<bool, DialoguerError> {
        println!();
        for line in question_summary(session) {
            println!("{line}");
        }
        println!();

        let entries = creator_menu(session);
        let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
        let Some(index) = self.pick("Create Survey", &labels)? else {
            return Ok(true);
        };

        let draft = session.draft();
        match entries[index].1 {
            CreatorChoice::EditTitle => {
                let title = self.ask_text("Survey Title", &session.survey().title)?;
                self.apply(session, Action::SetTitle(title));
            }
            CreatorChoice::EditDescription => {
                let description = self.ask_text("Description", &session.survey().description)?;
                self.apply(session, Action::SetDescription(description));
            }
            CreatorChoice::EditQuestion => {
                let text = self.ask_text("Question", draft.text())?;
                self.apply(session, Action::SetQuestionText(text));
            }
            CreatorChoice::EditOption(index) => {
                let current = draft.options()[index].text.clone();
                let text = self.ask_text(&format!("Option {}", index + 1), &current)?;
                self.apply(session, Action::UpdateOption { index, text });
            }
            CreatorChoice::AddOption => self.apply(session, Action::AddOption),
            CreatorChoice::RemoveOption => {
                let labels: Vec<String> = draft
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(i, option)| format!("Option {}: {}", i + 1, option.text))
                    .collect();
                if let Some(index) = self.pick("Remove which option?", &labels)? {
                    self.apply(session, Action::RemoveOption { index });
                }
            }
            CreatorChoice::AddQuestion => self.apply(session, Action::AddQuestion),
            CreatorChoice::RemoveQuestion => {
                let questions = session.survey().questions();
                let labels: Vec<String> = questions
                    .iter()
                    .enumerate()
                    .map(|(i, q)| format!("{}. {}", i + 1, q.text()))
                    .collect();
                if let Some(index) = self.pick("Remove which question?", &labels)? {
                    let id = questions[index].id();
                    self.apply(session, Action::RemoveQuestion { id });
                }
            }
            CreatorChoice::TakeSurvey => self.apply(session, Action::StartSurvey),
            CreatorChoice::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Ask the current question. Escape goes back to the creator.
    fn taking_step(&self, session: &mut Session) -> Result<bool, DialoguerError> {
        let (Some(question), Some(progress)) = (session.current_question(), session.progress())
        else {
            return Ok(true);
        };

        if progress.index == 0 {
            let survey = session.survey();
            println!();
            if !survey.title.is_empty() {
                println!("{}", survey.title);
            }
            if !survey.description.is_empty() {
                println!("{}", survey.description);
            }
        }

        let prompt = format!("{}: {}", progress.label(), question.text());
        let labels: Vec<String> = question.options().iter().map(|o| o.text.clone()).collect();
        match self.pick(&prompt, &labels)? {
            Some(index) => self.apply(session, Action::ChooseOption { index }),
            None => self.apply(session, Action::ShowCreator),
        }
        Ok(true)
    }

    fn results_step(&self, session: &mut Session, outcome: &Outcome) -> Result<bool, DialoguerError> {
        println!();
        println!("{}", outcome.label());
        println!("{}", outcome.description());
        println!();
        println!("Your Score: {}", outcome.scorecard);
        println!();

        let labels: Vec<String> = RESULT_CHOICES.iter().map(|s| s.to_string()).collect();
        match self.pick("What next?", &labels)? {
            Some(0) => self.apply(session, Action::ResetSurvey),
            Some(1) => self.apply(session, Action::BackToCreator),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl SessionFrontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn run(&self, mut session: Session) -> Result<Session, Self::Error> {
        loop {
            let keep_going = match session.mode().clone() {
                Mode::Creating => self.creator_step(&mut session)?,
                Mode::Taking { .. } => self.taking_step(&mut session)?,
                Mode::ShowingResults { outcome } => self.results_step(&mut session, &outcome)?,
            };
            if !keep_going {
                break;
            }
        }
        Ok(session)
    }
}
