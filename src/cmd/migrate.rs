use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::ConnectOptions;

use crate::conf::settings;
use crate::prelude::Result;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
    let mut conn = options.connect().await?;
    tracing::debug!("connected to db");
    MIGRATOR.run(&mut conn).await?;

    println!("Migrations applied successfully");
    Ok(())
}
