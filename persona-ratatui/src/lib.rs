//! # persona-ratatui
//!
//! Ratatui frontend for persona-survey.
//!
//! Presents the creator, the question-by-question taking view and the result
//! screen in a full-screen terminal UI driven entirely by the keyboard.
//!
//! ## Example
//!
//! ```rust,ignore
//! use persona_survey::Session;
//! use persona_ratatui::RatatuiFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let frontend = RatatuiFrontend::new().with_title("Personality Survey");
//!     let session = Session::new().run_with(&frontend)?;
//!     println!("Authored {} questions", session.survey().len());
//!     Ok(())
//! }
//! ```

mod app;
mod backend;
mod draw;

pub use backend::{RatatuiError, RatatuiFrontend, Theme};
