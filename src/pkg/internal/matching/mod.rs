pub mod scorer;
pub mod vectorizer;

pub use scorer::compute_match;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            Band::High
        } else if score >= 40.0 {
            Band::Medium
        } else {
            Band::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub band: Band,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds_exact() {
        assert_eq!(Band::from_score(0.0), Band::Low);
        assert_eq!(Band::from_score(39.99), Band::Low);
        assert_eq!(Band::from_score(40.0), Band::Medium);
        assert_eq!(Band::from_score(59.99), Band::Medium);
        assert_eq!(Band::from_score(60.0), Band::High);
        assert_eq!(Band::from_score(100.0), Band::High);
    }

    #[test]
    fn test_band_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Band::High).unwrap(), "\"high\"");
    }
}
