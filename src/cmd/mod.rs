use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sqlx::{Connection, SqliteConnection};

use crate::conf::settings;
use crate::pkg::internal::adaptors::profiles::mutators::ProfileMutator;
use crate::pkg::internal::adaptors::profiles::selectors::ProfileSelector;
use crate::pkg::internal::matching::compute_match;
use crate::pkg::internal::profile::{assemble_record, CandidateRecord, ProfileView};
use crate::prelude::Result;

mod migrate;

#[derive(Parser)]
#[command(about = "parses candidate profiles and scores them against job descriptions")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// score a profile text file against a job description text file
    Score { resume: PathBuf, job: PathBuf },
    /// persist an extracted record (json), optionally scoring it first
    Ingest {
        record: PathBuf,
        #[arg(long)]
        job: Option<PathBuf>,
    },
    /// show every stored profile in insertion order
    List,
    Migrate,
}

pub async fn run() -> Result<()> {
    tracing::debug!("{} starting", settings.service_name);
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Score { resume, job }) => score(&resume, &job).await?,
        Some(SubCommandType::Ingest { record, job }) => ingest(&record, job.as_deref()).await?,
        Some(SubCommandType::List) => list().await?,
        Some(SubCommandType::Migrate) => migrate::apply().await?,
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

async fn score(resume: &Path, job: &Path) -> Result<()> {
    let subject = tokio::fs::read_to_string(resume).await?;
    let query = tokio::fs::read_to_string(job).await?;
    let result = compute_match(&subject, &query);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn ingest(record_path: &Path, job: Option<&Path>) -> Result<()> {
    let raw = tokio::fs::read_to_string(record_path).await?;
    let record: CandidateRecord = serde_json::from_str(&raw)?;
    let matched = match job {
        Some(path) => {
            let query = tokio::fs::read_to_string(path).await?;
            // an empty job description means no scoring was requested,
            // which is not the same as a score of zero
            if query.trim().is_empty() {
                None
            } else {
                Some(compute_match(&record.subject_text(), &query))
            }
        }
        None => None,
    };
    let profile = assemble_record(Ok(record), matched)?;
    let mut conn = connect().await?;
    let entry = ProfileMutator::new(&mut conn).create(&profile.record).await?;
    tracing::info!("stored profile as record {}", entry.id);
    let out = serde_json::json!({ "id": entry.id, "profile": profile.view() });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn list() -> Result<()> {
    let mut conn = connect().await?;
    let entries = ProfileSelector::new(&mut conn).list_all().await?;
    for entry in entries {
        let view = ProfileView::render(&entry.record(), None);
        let out = serde_json::json!({ "id": entry.id, "profile": view });
        println!("{}", out);
    }
    Ok(())
}

async fn connect() -> Result<SqliteConnection> {
    Ok(SqliteConnection::connect(&settings.database_url).await?)
}
