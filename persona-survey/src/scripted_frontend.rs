//! Scripted frontend for driving sessions without user interaction.
//!
//! `ScriptedFrontend` replays a fixed list of actions, as a user would have
//! triggered them. This is useful for testing surveys end to end.
//!
//! # Example
//!
//! ```rust
//! use persona_survey::{Action, ScriptedFrontend, Session};
//!
//! let frontend = ScriptedFrontend::new()
//!     .with_actions(Action::compose_question("Morning person?", &["No", "Yes"]))
//!     .with_action(Action::StartSurvey)
//!     .with_action(Action::ChooseOption { index: 0 });
//!
//! let session = Session::new().run_with(&frontend).unwrap();
//! assert_eq!(session.outcome().unwrap().scorecard.to_string(), "1 / 2");
//! ```

use crate::{Action, Rejection, Session, SessionError, SessionFrontend};

/// A frontend that replays pre-recorded actions.
#[derive(Debug, Clone)]
pub struct ScriptedFrontend {
    actions: Vec<Action>,
    strict: bool,
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {step} ({action}) was rejected: {reason}")]
    Rejected {
        step: usize,
        action: Action,
        reason: Rejection,
    },
}

impl From<ScriptError> for SessionError {
    fn from(err: ScriptError) -> Self {
        SessionError::frontend(err)
    }
}

impl Default for ScriptedFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedFrontend {
    /// Create an empty, strict script: any rejected action fails the run.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            strict: true,
        }
    }

    /// Ignore rejected actions instead of failing, like a user clicking a disabled button.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Append one action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Get the recorded actions.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl SessionFrontend for ScriptedFrontend {
    type Error = ScriptError;

    fn run(&self, mut session: Session) -> Result<Session, Self::Error> {
        for (step, action) in self.actions.iter().enumerate() {
            match session.dispatch(action.clone()) {
                Ok(()) => {}
                Err(reason) if self.strict => {
                    return Err(ScriptError::Rejected {
                        step,
                        action: action.clone(),
                        reason,
                    });
                }
                Err(_) => {}
            }
        }
        Ok(session)
    }
}
