use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::profiles::spec::ProfileEntry;
use crate::pkg::internal::profile::CandidateRecord;
use crate::prelude::Result;

pub struct ProfileMutator<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ProfileMutator<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        ProfileMutator { conn }
    }

    pub async fn create(&mut self, record: &CandidateRecord) -> Result<ProfileEntry> {
        let row = sqlx::query_as::<_, ProfileEntry>(
            r#"
            INSERT INTO profiles (name, email, phone, skills, education, experience)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, skills, education, experience, created_at
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(join_list(&record.skills))
        .bind(join_list(&record.education))
        .bind(&record.experience)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(row)
    }
}

fn join_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}
