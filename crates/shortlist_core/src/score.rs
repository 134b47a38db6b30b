use std::fmt;

/// Visual classification of a rounded match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    /// Lower bounds are inclusive: 85, 70 and 50.
    pub fn classify(score: i64) -> Self {
        if score >= 85 {
            ScoreTier::Excellent
        } else if score >= 70 {
            ScoreTier::Good
        } else if score >= 50 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
            ScoreTier::Poor => "poor",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to the nearest integer with halves going up (`84.5 -> 85`,
/// `-0.5 -> 0`). Non-finite scores round to 0.
pub fn round_score(match_score: f64) -> i64 {
    if !match_score.is_finite() {
        return 0;
    }
    (match_score + 0.5).floor() as i64
}

/// A score as displayed: rounded value plus its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreView {
    pub value: i64,
    pub tier: ScoreTier,
}

impl ScoreView {
    pub fn from_raw(match_score: f64) -> Self {
        let value = round_score(match_score);
        Self {
            value,
            tier: ScoreTier::classify(value),
        }
    }

    /// Width for a 0-100 progress bar.
    pub fn bar_percent(&self) -> u8 {
        self.value.clamp(0, 100) as u8
    }
}

impl fmt::Display for ScoreView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value)
    }
}
