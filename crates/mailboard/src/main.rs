//! `Mailboard` - email triage dashboard core
//!
//! Operational entry point: resolves the data directory, opens storage,
//! seeds the collection on first run, optionally imports from an external
//! source, and logs a dashboard summary.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use anyhow::Context;
use chrono::Utc;
use mailboard_api::SourceClient;
use mailboard_core::{
    EmployeeRoster, RecordStats, RecordStore, ShortcutStore, Storage, daily_trend,
    priority_by_region, top_by_region, top_by_sender,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mailboard=debug,mailboard_core=debug,mailboard_api=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mailboard");

    let db_path = database_path().context("Failed to resolve the database path")?;
    info!("Using database at {db_path}");

    let storage = Storage::new(&db_path)
        .await
        .context("Failed to open storage")?;
    let records = RecordStore::new(storage.clone());
    let shortcuts = ShortcutStore::new(storage);

    let roster = match std::env::var("MAILBOARD_SOURCE_URL") {
        Ok(source_url) => import_from_source(&source_url, &records).await,
        Err(_) => EmployeeRoster::new(),
    };

    let collection = records
        .list()
        .await
        .context("Failed to load the record collection")?;
    let now = Utc::now();

    let stats = RecordStats::compute(&collection, now);
    info!(
        "Collection: {} records ({} pending, {} classified, {} archived)",
        stats.total, stats.pending, stats.classified, stats.archived
    );
    info!(
        "{} urgent, {} in the last 7 days",
        stats.urgent, stats.recent
    );

    for day in daily_trend(&collection, now) {
        debug!("{}: {} records, {} pending", day.date, day.total, day.pending);
    }

    for row in priority_by_region(&collection) {
        if row.total > 0 {
            debug!(
                "{}: {} low, {} medium, {} high, {} urgent",
                row.region.as_str(),
                row.low,
                row.medium,
                row.high,
                row.urgent
            );
        }
    }

    for (region, count) in top_by_region(&collection) {
        info!("Top region {region}: {count} records");
    }
    for (sender, count) in top_by_sender(&collection) {
        info!("Top sender {sender}: {count} records");
    }

    let counted = shortcuts
        .with_counts(&collection, now)
        .await
        .context("Failed to count shortcut matches")?;
    for (shortcut, count) in counted {
        info!("Shortcut '{}': {count} matching", shortcut.title);
    }

    if !roster.list().is_empty() {
        info!("Roster: {} employees", roster.list().len());
    }

    Ok(())
}

/// Resolves the SQLite database path as a UTF-8 string.
///
/// `MAILBOARD_DB` overrides the full path; otherwise the file lives under
/// the platform data directory, which is created on first run. A non-UTF-8
/// platform path is an error, not a silent fallback.
fn database_path() -> anyhow::Result<String> {
    if let Ok(path) = std::env::var("MAILBOARD_DB") {
        return Ok(path);
    }

    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailboard");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    path_to_string(&data_dir.join("mailboard.db"))
}

fn path_to_string(path: &Path) -> anyhow::Result<String> {
    path.to_str()
        .map(ToString::to_string)
        .with_context(|| format!("Non-UTF-8 database path {}", path.display()))
}

/// Imports the record collection and employee roster from the external
/// source. Any failure keeps the local collection and logs a warning.
async fn import_from_source(source_url: &str, records: &RecordStore) -> EmployeeRoster {
    info!("Importing from source {source_url}");

    let client = match SourceClient::new(source_url) {
        Ok(client) => client,
        Err(e) => {
            warn!("Invalid source URL: {e}");
            return EmployeeRoster::new();
        }
    };

    match client.fetch_records().await {
        Ok(imported) => match records.replace_all(&imported).await {
            Ok(()) => info!("Imported {} records from the source", imported.len()),
            Err(e) => warn!("Failed to persist imported records: {e}"),
        },
        Err(e) => warn!("Record import failed, keeping the local collection: {e}"),
    }

    match client.fetch_employees().await {
        Ok(employees) => EmployeeRoster::from_entries(employees),
        Err(e) => {
            warn!("Employee import failed: {e}");
            EmployeeRoster::new()
        }
    }
}
