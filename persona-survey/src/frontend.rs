use crate::{Session, SessionError};

/// Trait for frontends that let a user drive a session.
///
/// A frontend presents the session (creator, questions, results), turns user
/// input into [`Action`](crate::Action)s, and returns the final state once the
/// user quits.
pub trait SessionFrontend {
    /// The error type for this frontend.
    type Error: Into<SessionError>;

    /// Run an interactive session until the user quits.
    ///
    /// # Returns
    /// * `Ok(session)` with the state at the moment the user quit
    /// * `Err` on cancellation or frontend failure
    fn run(&self, session: Session) -> Result<Session, Self::Error>;
}

impl Session {
    /// Hand this session to a frontend and wait for the user to finish.
    pub fn run_with<F: SessionFrontend>(self, frontend: &F) -> Result<Session, SessionError> {
        frontend.run(self).map_err(Into::into)
    }
}
