use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::profiles::spec::ProfileEntry;
use crate::prelude::Result;

pub struct ProfileSelector<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ProfileSelector<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        ProfileSelector { conn }
    }

    pub async fn list_all(&mut self) -> Result<Vec<ProfileEntry>> {
        let rows = sqlx::query_as::<_, ProfileEntry>(
            "SELECT id, name, email, phone, skills, education, experience, created_at
             FROM profiles ORDER BY id ASC",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }
}
