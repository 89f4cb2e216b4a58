use std::fmt;

use crate::{Answers, Survey};

/// Personality category derived from the share of the maximum score reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 80% and above.
    HighlyExtroverted,
    /// 60% up to 80%.
    ModeratelyExtroverted,
    /// 40% up to 60%.
    Ambivert,
    /// 20% up to 40%.
    ModeratelyIntroverted,
    /// Below 20%.
    HighlyIntroverted,
    /// The survey has no positive maximum, so no percentage exists.
    Unscored,
}

impl Category {
    /// Thresholds in evaluation order. Each lower bound is inclusive.
    const BANDS: [(f64, Category); 4] = [
        (80.0, Category::HighlyExtroverted),
        (60.0, Category::ModeratelyExtroverted),
        (40.0, Category::Ambivert),
        (20.0, Category::ModeratelyIntroverted),
    ];

    /// Look up the category for a percentage; the first band whose lower bound is met wins.
    pub fn from_percentage(percentage: f64) -> Self {
        Self::BANDS
            .iter()
            .find(|(lower, _)| percentage >= *lower)
            .map(|(_, category)| *category)
            .unwrap_or(Category::HighlyIntroverted)
    }

    /// The category title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyExtroverted => "Highly Extroverted",
            Self::ModeratelyExtroverted => "Moderately Extroverted",
            Self::Ambivert => "Ambivert",
            Self::ModeratelyIntroverted => "Moderately Introverted",
            Self::HighlyIntroverted => "Highly Introverted",
            Self::Unscored => "No Result",
        }
    }

    /// The fixed sentence describing the category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighlyExtroverted => {
                "You're outgoing, energetic, and thrive in social settings. You draw energy from interactions with others."
            }
            Self::ModeratelyExtroverted => {
                "You enjoy social interactions but also appreciate your alone time. You're well-balanced in your approach."
            }
            Self::Ambivert => {
                "You're right in the middle! You can be social when needed but also enjoy introspection and solitude."
            }
            Self::ModeratelyIntroverted => {
                "You prefer quieter settings and meaningful conversations. You recharge through solitary activities."
            }
            Self::HighlyIntroverted => {
                "You're reflective, thoughtful, and prefer deep connections over large gatherings. You find energy in solitude."
            }
            Self::Unscored => {
                "This survey has no scorable questions, so no personality type can be derived."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated score against the highest reachable score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorecard {
    /// Sum of the chosen option scores.
    pub total: i64,
    /// Sum over all questions of the best option score.
    pub max: i64,
}

impl Scorecard {
    /// Percentage of the maximum reached, or `None` when the maximum is not positive.
    pub fn percentage(&self) -> Option<f64> {
        if self.max <= 0 {
            return None;
        }
        Some(100.0 * self.total as f64 / self.max as f64)
    }

    /// Category for this scorecard, `Unscored` when there is no percentage.
    pub fn category(&self) -> Category {
        self.percentage()
            .map_or(Category::Unscored, Category::from_percentage)
    }
}

impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.total, self.max)
    }
}

/// The computed result of a completed take-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub category: Category,
    pub scorecard: Scorecard,
}

impl Outcome {
    /// Category title.
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Category description.
    pub fn description(&self) -> &'static str {
        self.category.description()
    }
}

/// Score a take-pass: sum the answers, compare against the survey maximum, pick a category.
pub fn score(survey: &Survey, answers: &Answers) -> Outcome {
    let scorecard = Scorecard {
        total: answers.total(),
        max: survey.max_score(),
    };
    Outcome {
        category: scorecard.category(),
        scorecard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries_belong_to_higher_band() {
        assert_eq!(Category::from_percentage(100.0), Category::HighlyExtroverted);
        assert_eq!(Category::from_percentage(80.0), Category::HighlyExtroverted);
        assert_eq!(
            Category::from_percentage(79.999),
            Category::ModeratelyExtroverted
        );
        assert_eq!(
            Category::from_percentage(60.0),
            Category::ModeratelyExtroverted
        );
        assert_eq!(Category::from_percentage(59.9), Category::Ambivert);
        assert_eq!(Category::from_percentage(40.0), Category::Ambivert);
        assert_eq!(
            Category::from_percentage(20.0),
            Category::ModeratelyIntroverted
        );
        assert_eq!(
            Category::from_percentage(19.999),
            Category::HighlyIntroverted
        );
        assert_eq!(Category::from_percentage(0.0), Category::HighlyIntroverted);
    }

    #[test]
    fn zero_max_is_unscored() {
        let card = Scorecard { total: 0, max: 0 };
        assert_eq!(card.percentage(), None);
        assert_eq!(card.category(), Category::Unscored);
    }

    #[test]
    fn scorecard_display() {
        let card = Scorecard { total: 7, max: 10 };
        assert_eq!(card.to_string(), "7 / 10");
        assert_eq!(card.category(), Category::ModeratelyExtroverted);
    }

    #[test]
    fn empty_survey_scores_without_panicking() {
        let outcome = score(&Survey::new(), &Answers::new());
        assert_eq!(outcome.category, Category::Unscored);
        assert_eq!(outcome.label(), "No Result");
    }

    #[test]
    fn labels_and_descriptions() {
        assert_eq!(Category::Ambivert.to_string(), "Ambivert");
        assert!(
            Category::HighlyIntroverted
                .description()
                .ends_with("You find energy in solitude.")
        );
    }
}
