use super::vectorizer::vectorize_pair;
use super::{Band, MatchResult};

/// Scores a candidate profile against a job description. Never fails: inputs
/// with no usable terms (or no overlap at all) score exactly 0.
pub fn compute_match(subject_text: &str, query_text: &str) -> MatchResult {
    let pair = vectorize_pair(subject_text, query_text);
    let score = (cosine(&pair.subject, &pair.query) * 100.0 * 100.0).round() / 100.0;
    tracing::debug!("match score: {}", score);
    MatchResult {
        score,
        band: Band::from_score(score),
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
