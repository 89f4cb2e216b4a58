/// The ordered list of scores chosen so far in the current take-pass.
///
/// Entry `i` belongs to question `i` of the survey; the sequence is
/// append-only until it is cleared for a new pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    scores: Vec<i64>,
}

impl Answers {
    /// Create an empty answer sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score for the next question.
    pub fn push(&mut self, score: i64) {
        self.scores.push(score);
    }

    /// Forget every recorded answer.
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all recorded scores, saturating at the bounds of `i64`.
    pub fn total(&self) -> i64 {
        self.scores
            .iter()
            .fold(0, |total, score| total.saturating_add(*score))
    }

    /// Get the recorded scores in question order.
    pub fn as_slice(&self) -> &[i64] {
        &self.scores
    }
}

impl FromIterator<i64> for Answers {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_in_order_recorded() {
        let mut answers = Answers::new();
        answers.push(3);
        answers.push(1);
        assert_eq!(answers.total(), 4);
        assert_eq!(answers.as_slice(), &[3, 1]);

        answers.clear();
        assert!(answers.is_empty());
        assert_eq!(answers.total(), 0);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let answers: Answers = [i64::MAX, 1, 5].into_iter().collect();
        assert_eq!(answers.total(), i64::MAX);
    }
}
