use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pkg::internal::profile::CandidateRecord;

/// A stored profile row. The id is assigned by the database at insertion and
/// never changes afterwards; absent fields are NULL, never sentinel text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileEntry {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProfileEntry {
    pub fn record(&self) -> CandidateRecord {
        CandidateRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: split_list(self.skills.as_deref()),
            education: split_list(self.education.as_deref()),
            experience: self.experience.clone(),
        }
    }
}

fn split_list(joined: Option<&str>) -> Vec<String> {
    joined
        .map(|s| s.split(", ").map(str::to_string).collect())
        .unwrap_or_default()
}
