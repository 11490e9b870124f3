//! Ingestion orchestration
//!
//! Top-level run of a full reload: clear prior data, read both source files
//! concurrently, then insert every accepted record inside one transaction.
//! Any failure at any stage is fatal to the run; either the full dataset is
//! committed or the tables remain in their truncated state.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions, Postgres};
use sqlx::{Acquire, Transaction};
use tracing::{error, info};
use vintry_common::WineType;

use crate::reader::read_wine_file;
use crate::record::WineRecord;

/// Emit a progress line every this many inserted records.
const PROGRESS_INTERVAL: usize = 1000;

const INSERT_WINE: &str = r#"
INSERT INTO wines (
    wine_type, fixed_acidity, volatile_acidity, citric_acid, residual_sugar,
    chlorides, free_sulfur_dioxide, total_sulfur_dioxide, density, ph,
    sulphates, alcohol, quality
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
"#;

/// Errors from a load run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no valid records found in either source file")]
    NoRecords,
}

/// Loader configuration, constructed once at process start.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    /// Upper bound on any single database statement; keeps a wedged server
    /// from stalling the run indefinitely.
    pub statement_timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/vintry".to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
            statement_timeout_secs: 300,
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self, LoadError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| LoadError::Config("DATABASE_URL not set".to_string()))?;

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let connect_timeout_secs = std::env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let statement_timeout_secs = std::env::var("DB_STATEMENT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(300);

        Ok(Self {
            database_url,
            max_connections,
            connect_timeout_secs,
            statement_timeout_secs,
        })
    }
}

/// Runs a full reload and closes the pool on every exit path.
pub async fn run(config: &LoaderConfig, red: &Path, white: &Path) -> Result<u64, LoadError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    info!("database connection pool established");

    let result = reload(&pool, config, red, white).await;

    pool.close().await;
    info!("connection pool closed");

    result
}

/// One reload: truncate, read, bulk insert. Exposed for integration tests
/// that manage their own pool.
pub async fn reload(
    pool: &PgPool,
    config: &LoaderConfig,
    red: &Path,
    white: &Path,
) -> Result<u64, LoadError> {
    let mut conn = pool.acquire().await?;

    sqlx::query(&format!(
        "SET statement_timeout = '{}s'",
        config.statement_timeout_secs
    ))
    .execute(&mut *conn)
    .await?;

    // A full reload replaces all prior state, not an incremental upsert.
    info!("clearing existing data from wines and wine_audit_log");
    sqlx::query("TRUNCATE TABLE wines RESTART IDENTITY CASCADE")
        .execute(&mut *conn)
        .await?;
    sqlx::query("TRUNCATE TABLE wine_audit_log RESTART IDENTITY CASCADE")
        .execute(&mut *conn)
        .await?;

    info!("processing source files");
    let (red_records, white_records) = tokio::try_join!(
        read_wine_file(red, WineType::Red),
        read_wine_file(white, WineType::White),
    )?;

    let mut records = red_records;
    records.extend(white_records);
    info!(total = records.len(), "valid records read from both files");

    if records.is_empty() {
        error!("no valid records found in either source file, aborting");
        return Err(LoadError::NoRecords);
    }

    bulk_insert(&mut conn, &records).await
}

/// Inserts every record inside one transaction: all rows or none.
///
/// Progress is reported every [`PROGRESS_INTERVAL`] records and at
/// completion. The first failed statement rolls the transaction back and
/// propagates the error.
pub async fn bulk_insert(
    conn: &mut PgConnection,
    records: &[WineRecord],
) -> Result<u64, LoadError> {
    let total = records.len();
    info!(total, "starting bulk insert");

    let mut tx = conn.begin().await?;
    let mut inserted: usize = 0;
    for record in records {
        if let Err(err) = insert_record(&mut tx, record).await {
            error!(error = %err, inserted, "insert failed, rolling back transaction");
            if let Err(rb) = tx.rollback().await {
                error!(error = %rb, "rollback failed");
            }
            return Err(LoadError::Database(err));
        }
        inserted += 1;
        if inserted % PROGRESS_INTERVAL == 0 || inserted == total {
            info!(inserted, total, "bulk insert progress");
        }
    }
    tx.commit().await?;

    info!(inserted, "successfully inserted all records");
    Ok(inserted as u64)
}

async fn insert_record(
    tx: &mut Transaction<'_, Postgres>,
    record: &WineRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(INSERT_WINE)
        .bind(record.wine_type)
        .bind(record.fixed_acidity)
        .bind(record.volatile_acidity)
        .bind(record.citric_acid)
        .bind(record.residual_sugar)
        .bind(record.chlorides)
        .bind(record.free_sulfur_dioxide)
        .bind(record.total_sulfur_dioxide)
        .bind(record.density)
        .bind(record.ph)
        .bind(record.sulphates)
        .bind(record.alcohol)
        .bind(record.quality)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
