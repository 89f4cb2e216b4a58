//! Core types for the persona-survey crate.
//!
//! This crate provides the foundational types for authoring and scoring surveys:
//! - `Survey`, `Question` and `AnswerOption` - The committed survey structure
//! - `DraftQuestion` - The in-progress question being edited
//! - `Answers` and `Progress` - State of a take-pass
//! - `Scorecard`, `Category` and `Outcome` - The scoring function and its result

mod option;
pub use option::AnswerOption;

mod question;
pub use question::{Question, QuestionId};

mod survey;
pub use survey::Survey;

mod draft;
pub use draft::{DraftQuestion, MIN_OPTIONS};

mod answers;
pub use answers::Answers;

mod progress;
pub use progress::Progress;

mod scoring;
pub use scoring::{Category, Outcome, Scorecard, score};

mod error;
pub use error::{Rejection, SessionError};
