use persona_survey::{Action, Session};

pub const TITLE: &str = "Introvert vs Extrovert Test";

const DESCRIPTION: &str =
    "Five quick questions about where you get your energy from. Answer with your first instinct.";

/// Four-point scale shared by every question, from least to most outgoing.
const SCALE: [&str; 4] = [
    "Not at all like me",
    "A little like me",
    "Mostly like me",
    "Exactly like me",
];

const QUESTIONS: [&str; 5] = [
    "After a busy week, a big party sounds like the perfect way to recharge.",
    "I start conversations with strangers easily.",
    "I think out loud and figure things out by talking them through.",
    "I enjoy being the center of attention.",
    "A weekend with no plans and no people sounds boring.",
];

/// The authoring actions for the sample survey, in the order a user would perform them.
///
/// Every question offers the same four options, scored 1 to 4.
pub fn introversion_script() -> Vec<Action> {
    let mut actions = vec![
        Action::SetTitle(TITLE.to_string()),
        Action::SetDescription(DESCRIPTION.to_string()),
    ];
    for question in QUESTIONS {
        actions.extend(Action::compose_question(question, &SCALE));
    }
    actions
}

/// A session in the creator with the sample survey already authored.
pub fn introversion_session() -> Session {
    introversion_script()
        .into_iter()
        .fold(Session::new(), Session::reduce)
}
