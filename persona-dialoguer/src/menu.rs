//! The creator menu: which entries to offer for the current session state.

use persona_survey::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CreatorChoice {
    EditTitle,
    EditDescription,
    EditQuestion,
    EditOption(usize),
    AddOption,
    RemoveOption,
    AddQuestion,
    RemoveQuestion,
    TakeSurvey,
    Quit,
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        format!("({placeholder})")
    } else {
        text.to_string()
    }
}

/// Menu entries for the creator. Unavailable actions are left out rather than shown disabled.
pub(crate) fn creator_menu(session: &Session) -> Vec<(String, CreatorChoice)> {
    let survey = session.survey();
    let draft = session.draft();

    let mut entries = vec![
        (
            format!("Survey Title: {}", or_placeholder(&survey.title, "e.g., Introvert vs Extrovert Test")),
            CreatorChoice::EditTitle,
        ),
        (
            format!(
                "Description: {}",
                or_placeholder(&survey.description, "Brief description of your survey...")
            ),
            CreatorChoice::EditDescription,
        ),
        (
            format!("Question: {}", or_placeholder(draft.text(), "Enter your question...")),
            CreatorChoice::EditQuestion,
        ),
    ];
    for (i, option) in draft.options().iter().enumerate() {
        entries.push((
            format!(
                "  Option {} ({} pt): {}",
                i + 1,
                option.score,
                or_placeholder(&option.text, &format!("Option {}...", i + 1))
            ),
            CreatorChoice::EditOption(i),
        ));
    }
    entries.push(("+ Add Option".to_string(), CreatorChoice::AddOption));
    if draft.can_remove_option() {
        entries.push(("- Remove Option".to_string(), CreatorChoice::RemoveOption));
    }
    if session.can_commit() {
        entries.push(("Add Question".to_string(), CreatorChoice::AddQuestion));
    }
    if session.can_start() {
        entries.push(("Remove Question".to_string(), CreatorChoice::RemoveQuestion));
        entries.push(("Take Survey".to_string(), CreatorChoice::TakeSurvey));
    }
    entries.push(("Quit".to_string(), CreatorChoice::Quit));
    entries
}

/// The committed questions as printed above the creator menu.
pub(crate) fn question_summary(session: &Session) -> Vec<String> {
    let survey = session.survey();
    let mut lines = vec![format!("Questions ({})", survey.len())];
    for (i, question) in survey.questions().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, question.text()));
        lines.extend(
            question
                .options()
                .iter()
                .map(|option| format!("   • {}", option.text)),
        );
    }
    lines
}
