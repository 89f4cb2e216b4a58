//! Ratatui frontend implementation for the SessionFrontend trait.
//!
//! Owns the terminal for the duration of a session: raw mode, alternate
//! screen, the draw/read loop, and restoring everything afterwards.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self as term, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use log::debug;
use persona_survey::{Session, SessionError, SessionFrontend};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;

use crate::app::{App, Flow};
use crate::draw::draw;

/// Smallest terminal the creator layout fits in.
const MIN_SIZE: (u16, u16) = (60, 24);

/// Error type for the Ratatui frontend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the session (Ctrl+C).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<RatatuiError> for SessionError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => SessionError::Cancelled,
            other => SessionError::frontend(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Full-screen terminal frontend.
///
/// Shows the creator, the taking view with a progress bar, and the result
/// screen, switching between them as the session changes mode.
#[derive(Debug, Clone)]
pub struct RatatuiFrontend {
    /// Title shown at the top of every screen.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFrontend {
    /// Create a new Ratatui frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Personality Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of every screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        let (width, height) = term::size()?;
        if width < MIN_SIZE.0 || height < MIN_SIZE.1 {
            return Err(RatatuiError::Terminal(format!(
                "terminal is {width}x{height}, need at least {}x{}",
                MIN_SIZE.0, MIN_SIZE.1
            )));
        }
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        app: &mut App,
    ) -> Result<Flow, RatatuiError> {
        loop {
            terminal.draw(|frame| draw(frame, app, &self.theme, &self.title))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key) {
                    Flow::Continue => {}
                    flow => return Ok(flow),
                }
            }
        }
    }
}

impl SessionFrontend for RatatuiFrontend {
    type Error = RatatuiError;

    fn run(&self, session: Session) -> Result<Session, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut app = App::new(session);

        let flow = self.event_loop(&mut terminal, &mut app);
        // Restore even when the loop failed, then report the first error.
        let restored = self.restore_terminal(&mut terminal);
        let flow = flow?;
        restored?;

        debug!("Terminal frontend finished with {flow:?}");
        if flow == Flow::Cancel {
            return Err(RatatuiError::Cancelled);
        }
        Ok(app.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_stores_title_and_theme() {
        let frontend = RatatuiFrontend::default();
        assert_eq!(frontend.title, "Personality Survey");
        assert_eq!(frontend.theme.primary, Color::Magenta);

        let theme = Theme {
            primary: Color::Cyan,
            ..Theme::default()
        };
        let frontend = RatatuiFrontend::new()
            .with_title("Weekend Plans")
            .with_theme(theme);
        assert_eq!(frontend.title, "Weekend Plans");
        assert_eq!(frontend.theme.primary, Color::Cyan);
        assert_eq!(frontend.theme.highlight, Color::Yellow);
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");

        let err = RatatuiError::Terminal("test error".to_string());
        assert_eq!(err.to_string(), "Terminal error: test error");
    }

    #[test]
    fn cancellation_maps_to_session_error() {
        let err: SessionError = RatatuiError::Cancelled.into();
        assert!(err.is_cancelled());

        let err: SessionError = RatatuiError::Terminal("gone".into()).into();
        assert!(!err.is_cancelled());
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Magenta);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }
}
