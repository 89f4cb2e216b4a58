//! # persona-dialoguer
//!
//! Dialoguer frontend for persona-survey.
//!
//! This crate provides a command-line interface for authoring and taking a
//! survey using the `dialoguer` library. The creator is a menu of the actions
//! currently available; each question is a single-select prompt.
//!
//! ## Example
//!
//! ```rust,ignore
//! use persona_survey::Session;
//! use persona_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let frontend = DialoguerFrontend::new();
//!     let session = Session::new().run_with(&frontend)?;
//!     println!("Authored {} questions", session.survey().len());
//!     Ok(())
//! }
//! ```

mod backend;
mod menu;

pub use backend::{DialoguerError, DialoguerFrontend};
