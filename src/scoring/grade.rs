// Grades and score results: the shared output shape of every scorer.
//
// Each scorer produces a continuous score and buckets it into a grade using
// the same fixed thresholds. Only the wording of the description differs
// between scorers.

use serde::Serialize;

/// Scores strictly above this are graded High.
pub const HIGH_THRESHOLD: f64 = 0.8;
/// Scores strictly above this (and not High) are graded Medium.
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// Qualitative bucket derived from a continuous score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Low,
    Medium,
    High,
}

impl Grade {
    /// Determine the grade from a score. Both boundaries are strict:
    /// exactly 0.8 is Medium and exactly 0.4 is Low.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > HIGH_THRESHOLD => Grade::High,
            s if s > MEDIUM_THRESHOLD => Grade::Medium,
            _ => Grade::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Low => "low",
            Grade::Medium => "medium",
            Grade::High => "high",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scored metric: the raw score, its grade, and a human-readable summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub grade: Grade,
    pub description: String,
}

impl ScoreResult {
    /// Grade a score and attach the scorer-specific description for that grade.
    pub fn graded(score: f64, describe: fn(Grade) -> &'static str) -> Self {
        let grade = Grade::from_score(score);
        Self {
            score,
            grade,
            description: describe(grade).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(Grade::from_score(0.8), Grade::Medium);
        assert_eq!(Grade::from_score(0.4), Grade::Low);
        assert_eq!(Grade::from_score(0.800_001), Grade::High);
        assert_eq!(Grade::from_score(0.400_001), Grade::Medium);
    }

    #[test]
    fn test_grade_serializes_lowercase() {
        let json = serde_json::to_string(&Grade::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_graded_uses_description_for_grade() {
        let result = ScoreResult::graded(0.9, |g| match g {
            Grade::High => "great",
            _ => "not great",
        });
        assert_eq!(result.grade, Grade::High);
        assert_eq!(result.description, "great");
    }
}
