use serde::{Deserialize, Serialize};

use crate::pkg::internal::extract::{ExtractionFailed, ExtractionOutcome};
use crate::pkg::internal::matching::{Band, MatchResult};

pub const NOT_FOUND: &str = "Not found";

/// A parsed candidate profile as the extractor reports it. Absent fields stay
/// absent here; the sentinel string only appears in [`ProfileView`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    pub experience: Option<String>,
}

impl CandidateRecord {
    // Only name, skills and education take part in scoring. Folding
    // experience in here would shift every score.
    pub fn subject_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(name) = &self.name {
            parts.push(name);
        }
        parts.extend(self.skills.iter().map(String::as_str));
        parts.extend(self.education.iter().map(String::as_str));
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProfile {
    pub record: CandidateRecord,
    pub matched: Option<MatchResult>,
}

pub fn assemble_record(
    outcome: ExtractionOutcome,
    matched: Option<MatchResult>,
) -> std::result::Result<ParsedProfile, ExtractionFailed> {
    let record = outcome?;
    Ok(ParsedProfile { record, matched })
}

impl ParsedProfile {
    pub fn view(&self) -> ProfileView {
        ProfileView::render(&self.record, self.matched)
    }
}

/// Presentation boundary: every field is always present, absence shows up as
/// the `"Not found"` sentinel and list fields are comma-joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub match_score: Option<f64>,
    pub match_band: Option<Band>,
}

impl ProfileView {
    pub fn render(record: &CandidateRecord, matched: Option<MatchResult>) -> Self {
        ProfileView {
            name: sentinel(record.name.as_deref()),
            email: sentinel(record.email.as_deref()),
            phone: sentinel(record.phone.as_deref()),
            skills: joined(&record.skills),
            education: joined(&record.education),
            experience: sentinel(record.experience.as_deref()),
            match_score: matched.map(|m| m.score),
            match_band: matched.map(|m| m.band),
        }
    }
}

fn sentinel(field: Option<&str>) -> String {
    field.unwrap_or(NOT_FOUND).to_string()
}

fn joined(items: &[String]) -> String {
    if items.is_empty() {
        NOT_FOUND.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::matching::compute_match;

    fn record() -> CandidateRecord {
        CandidateRecord {
            name: Some("Jane Doe".into()),
            email: None,
            phone: None,
            skills: vec!["python".into(), "django".into()],
            education: vec!["BSc Computer Science".into()],
            experience: Some("5 years".into()),
        }
    }

    #[test]
    fn test_subject_text_uses_name_skills_education_only() {
        let subject = record().subject_text();
        assert_eq!(subject, "Jane Doe python django BSc Computer Science");
        assert!(!subject.contains("5 years"));
    }

    #[test]
    fn test_sentinels_only_at_the_presentation_boundary() {
        let rec = record();
        assert_eq!(rec.email, None);
        let view = ProfileView::render(&rec, None);
        assert_eq!(view.email, NOT_FOUND);
        assert_eq!(view.phone, NOT_FOUND);
        assert_eq!(view.skills, "python, django");
        assert_eq!(view.experience, "5 years");
    }

    #[test]
    fn test_sentinel_never_reaches_the_scoring_vocabulary() {
        let empty = CandidateRecord::default();
        assert_eq!(empty.subject_text(), "");
        assert_eq!(compute_match(&empty.subject_text(), "found").score, 0.0);
    }

    #[test]
    fn test_assemble_keeps_extractor_output_intact() {
        let rec = record();
        let matched = compute_match(&rec.subject_text(), "python developer");
        let profile = assemble_record(Ok(rec.clone()), Some(matched)).unwrap();
        assert_eq!(profile.record, rec);
        assert_eq!(profile.matched, Some(matched));
        assert_eq!(profile.view().match_score, Some(matched.score));
    }

    #[test]
    fn test_empty_record_renders_fully_sentinelled() {
        let view = ProfileView::render(&CandidateRecord::default(), None);
        for field in [&view.name, &view.email, &view.phone, &view.skills, &view.education, &view.experience] {
            assert_eq!(field, NOT_FOUND);
        }
        assert_eq!(view.match_score, None);
        assert_eq!(view.match_band, None);
    }
}
