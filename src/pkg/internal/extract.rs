use async_trait::async_trait;

use crate::pkg::internal::profile::CandidateRecord;

#[derive(Debug, Clone, thiserror::Error)]
#[error("could not extract a structured profile: {reason}")]
pub struct ExtractionFailed {
    pub reason: String,
}

impl ExtractionFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        ExtractionFailed {
            reason: reason.into(),
        }
    }
}

pub type ExtractionOutcome = std::result::Result<CandidateRecord, ExtractionFailed>;

// The parser behind this trait is a hard boundary: the rest of the crate only
// ever sees a record or a failure, never its document handling.
#[async_trait]
pub trait ExtractOps {
    async fn extract(&self, data: Vec<u8>, content_type: &str) -> ExtractionOutcome;
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::pkg::internal::matching::compute_match;
    use crate::pkg::internal::profile::assemble_record;

    struct FixtureParser {
        fail: bool,
    }

    #[async_trait]
    impl ExtractOps for FixtureParser {
        async fn extract(&self, data: Vec<u8>, _content_type: &str) -> ExtractionOutcome {
            if self.fail {
                return Err(ExtractionFailed::new("unreadable document"));
            }
            let text =
                String::from_utf8(data).map_err(|e| ExtractionFailed::new(e.to_string()))?;
            Ok(CandidateRecord {
                name: text.lines().next().map(str::to_string),
                skills: vec!["python".into(), "flask".into()],
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_failed_extraction_propagates_without_scoring() {
        let parser = FixtureParser { fail: true };
        let outcome = parser.extract(b"%PDF-1.4".to_vec(), "application/pdf").await;
        assert!(assemble_record(outcome, None).is_err());
    }

    #[tokio::test]
    async fn test_extracted_record_with_empty_query_has_no_match() {
        let parser = FixtureParser { fail: false };
        let outcome = parser.extract(b"Jane Doe".to_vec(), "text/plain").await;
        let profile = assemble_record(outcome, None).unwrap();
        assert!(profile.matched.is_none());
        assert_eq!(profile.view().match_score, None);
    }

    #[tokio::test]
    async fn test_extracted_record_scored_against_query() {
        let parser = FixtureParser { fail: false };
        let record = parser
            .extract(b"Jane Doe".to_vec(), "text/plain")
            .await
            .unwrap();
        let matched = compute_match(&record.subject_text(), "python flask developer");
        let profile = assemble_record(Ok(record), Some(matched)).unwrap();
        assert!(profile.matched.unwrap().score > 0.0);
    }
}
