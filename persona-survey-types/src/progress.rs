/// Position of the current question within a take-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the question being shown.
    pub index: usize,

    /// Number of questions in the survey.
    pub total: usize,
}

impl Progress {
    /// One-based position, as shown to the user.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Caption of the form `Question i of N`.
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.position(), self.total)
    }

    /// Filled share of the progress bar, `(i + 1) / N`, clamped to `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.position() as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}
