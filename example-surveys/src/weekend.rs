use persona_survey::Action;

/// A two-question survey with uneven option counts, handy for trying out the frontends.
pub fn weekend_script() -> Vec<Action> {
    let mut actions = vec![Action::SetTitle("Weekend Plans".to_string())];
    actions.extend(Action::compose_question(
        "Saturday night, you would rather...",
        &["Read at home", "Dinner with a friend", "Throw a party"],
    ));
    actions.extend(Action::compose_question(
        "A friend invites you on a last-minute trip.",
        &["Politely decline", "Say yes"],
    ));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_survey::Session;

    #[test]
    fn max_score_counts_best_options() {
        let session = weekend_script()
            .into_iter()
            .fold(Session::new(), Session::reduce);
        assert_eq!(session.survey().len(), 2);
        assert_eq!(session.survey().max_score(), 5);
    }
}
