//! # persona-survey
//!
//! Author a short multiple-choice personality survey, then take it and receive
//! a category derived from the additive score. Frontend-agnostic.
//!
//! The whole application is one [`Session`]: an explicit state object driven by
//! [`Action`]s through the pure transition [`Session::reduce`].
//!
//! ## Usage
//!
//! ```rust
//! use persona_survey::{Action, Category, Mode, Session};
//!
//! let session = [
//!     Action::SetTitle("Party animal?".into()),
//!     Action::SetQuestionText("Do you enjoy big parties?".into()),
//!     Action::UpdateOption { index: 0, text: "No".into() },
//!     Action::UpdateOption { index: 1, text: "Yes".into() },
//!     Action::AddQuestion,
//!     Action::StartSurvey,
//!     Action::ChooseOption { index: 1 },
//! ]
//! .into_iter()
//! .fold(Session::new(), Session::reduce);
//!
//! let Mode::ShowingResults { outcome } = session.mode() else {
//!     panic!("expected results");
//! };
//! assert_eq!(outcome.category, Category::HighlyExtroverted);
//! assert_eq!(outcome.scorecard.to_string(), "2 / 2");
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `SessionFrontend`:
//! - `persona-ratatui` - full-screen terminal UI
//! - `persona-dialoguer` - line-oriented CLI prompts

// Re-export all types from persona-survey-types
pub use persona_survey_types::*;

mod action;
pub use action::Action;

mod session;
pub use session::{Mode, Session};

mod frontend;
pub use frontend::SessionFrontend;

// Scripted frontend for driving sessions without user interaction
mod scripted_frontend;
pub use scripted_frontend::{ScriptError, ScriptedFrontend};
