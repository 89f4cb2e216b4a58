//! Keyboard-driven view state on top of a [`Session`].
//!
//! Everything here is pure: keys go in, actions are dispatched to the session,
//! and the drawing code reads the result. No terminal is needed to test it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use persona_survey::{Action, Mode, Session};

/// Which creator control has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Title,
    Description,
    QuestionText,
    Option(usize),
    AddOption,
    AddQuestion,
    Question(usize),
}

impl Focus {
    fn is_text(self) -> bool {
        matches!(
            self,
            Self::Title | Self::Description | Self::QuestionText | Self::Option(_)
        )
    }
}

/// Buttons on the result screen.
pub(crate) const RESULT_BUTTONS: [&str; 2] = ["Retake Survey", "Create New Survey"];

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
    Cancel,
}

pub(crate) struct App {
    pub(crate) session: Session,
    pub(crate) focus: Focus,
    /// Cursor position in the focused text field, in characters.
    pub(crate) cursor: usize,
    /// Highlighted option while taking, or highlighted button on the result screen.
    pub(crate) selected: usize,
}

impl App {
    pub(crate) fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            focus: Focus::Title,
            cursor: 0,
            selected: 0,
        };
        app.cursor = app.focused_text().map_or(0, |text| text.chars().count());
        app
    }

    /// Creator controls in tab order.
    pub(crate) fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::Title, Focus::Description, Focus::QuestionText];
        ring.extend((0..self.session.draft().options().len()).map(Focus::Option));
        ring.extend([Focus::AddOption, Focus::AddQuestion]);
        ring.extend((0..self.session.survey().len()).map(Focus::Question));
        ring
    }

    /// Current value of the focused text field.
    pub(crate) fn focused_text(&self) -> Option<&str> {
        let draft = self.session.draft();
        match self.focus {
            Focus::Title => Some(self.session.survey().title.as_str()),
            Focus::Description => Some(self.session.survey().description.as_str()),
            Focus::QuestionText => Some(draft.text()),
            Focus::Option(index) => draft.options().get(index).map(|o| o.text.as_str()),
            _ => None,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Cancel;
        }
        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::F(1) => {
                self.dispatch(Action::ShowCreator);
                self.clamp_focus();
                return Flow::Continue;
            }
            KeyCode::F(2) => {
                self.dispatch(Action::StartSurvey);
                return Flow::Continue;
            }
            _ => {}
        }

        match self.session.mode() {
            Mode::Creating => self.handle_creator_key(key),
            Mode::Taking { .. } => self.handle_taking_key(key),
            Mode::ShowingResults { .. } => self.handle_results_key(key),
        }
        Flow::Continue
    }

    fn handle_creator_key(&mut self, key: KeyEvent) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Char('d') if control => self.remove_focused(),
            KeyCode::Enter => self.activate(),
            _ if self.focus.is_text() && !control => self.edit(key.code),
            _ => {}
        }
    }

    fn handle_taking_key(&mut self, key: KeyEvent) {
        let count = self
            .session
            .current_question()
            .map_or(0, |q| q.options().len());
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => self.choose(self.selected),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                {
                    self.choose(digit as usize - 1);
                }
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = (self.selected + 1) % RESULT_BUTTONS.len();
            }
            KeyCode::Char('r') => self.press_result_button(0),
            KeyCode::Char('c') => self.press_result_button(1),
            KeyCode::Enter => self.press_result_button(self.selected),
            _ => {}
        }
    }

    fn press_result_button(&mut self, button: usize) {
        if button == 0 {
            self.dispatch(Action::ResetSurvey);
        } else {
            self.dispatch(Action::BackToCreator);
            self.clamp_focus();
        }
    }

    fn choose(&mut self, index: usize) {
        self.dispatch(Action::ChooseOption { index });
    }

    /// Dispatch, resetting the highlighted option or button whenever the action is accepted.
    ///
    /// Every accepted action outside the creator shows a new question or screen,
    /// including a restart that lands on the same index.
    fn dispatch(&mut self, action: Action) -> bool {
        let applied = self.session.dispatch(action).is_ok();
        if applied {
            self.selected = 0;
        }
        applied
    }

    fn move_focus(&mut self, step: isize) {
        let ring = self.focus_ring();
        let position = ring.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (position + step).rem_euclid(ring.len() as isize) as usize;
        self.set_focus(ring[next]);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor = self.focused_text().map_or(0, |text| text.chars().count());
    }

    /// Keep focus on an existing control after the creator changed shape.
    fn clamp_focus(&mut self) {
        let focus = match self.focus {
            Focus::Option(index) => {
                let count = self.session.draft().options().len();
                Focus::Option(index.min(count.saturating_sub(1)))
            }
            Focus::Question(_) if self.session.survey().is_empty() => Focus::AddQuestion,
            Focus::Question(index) => Focus::Question(index.min(self.session.survey().len() - 1)),
            other => other,
        };
        self.set_focus(focus);
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::AddOption => {
                if self.dispatch(Action::AddOption) {
                    let last = self.session.draft().options().len() - 1;
                    self.set_focus(Focus::Option(last));
                }
            }
            Focus::AddQuestion => {
                if self.dispatch(Action::AddQuestion) {
                    self.set_focus(Focus::QuestionText);
                }
            }
            Focus::Question(_) => {}
            _ => self.move_focus(1),
        }
    }

    fn remove_focused(&mut self) {
        match self.focus {
            Focus::Option(index) => {
                self.dispatch(Action::RemoveOption { index });
            }
            Focus::Question(index) => {
                if let Some(id) = self.session.survey().question(index).map(|q| q.id()) {
                    self.dispatch(Action::RemoveQuestion { id });
                }
            }
            _ => return,
        }
        self.clamp_focus();
    }

    fn edit(&mut self, code: KeyCode) {
        let Some(current) = self.focused_text() else {
            return;
        };
        let mut chars: Vec<char> = current.chars().collect();
        let cursor = self.cursor.min(chars.len());
        let new_cursor = match code {
            KeyCode::Char(c) => {
                chars.insert(cursor, c);
                cursor + 1
            }
            KeyCode::Backspace if cursor > 0 => {
                chars.remove(cursor - 1);
                cursor - 1
            }
            KeyCode::Delete if cursor < chars.len() => {
                chars.remove(cursor);
                cursor
            }
            KeyCode::Left => cursor.saturating_sub(1),
            KeyCode::Right => (cursor + 1).min(chars.len()),
            KeyCode::Home => 0,
            KeyCode::End => chars.len(),
            _ => return,
        };
        self.cursor = new_cursor;

        if matches!(code, KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete) {
            let text: String = chars.into_iter().collect();
            let action = match self.focus {
                Focus::Title => Action::SetTitle(text),
                Focus::Description => Action::SetDescription(text),
                Focus::QuestionText => Action::SetQuestionText(text),
                Focus::Option(index) => Action::UpdateOption { index, text },
                _ => return,
            };
            self.dispatch(action);
        }
    }
}
