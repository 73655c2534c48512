//! Embedded PostgreSQL migrations.
//!
//! Each migration is a single SQL file compiled into the binary and applied
//! through a raw tokio-postgres client, one transaction per file. Applied
//! versions are tracked in `__northwoods_migrations`.

use std::collections::HashSet;

use tracing::info;

use super::pg_tls::connect_raw;
use super::pool::DbError;
use super::util::{pg_to_diesel_error, to_diesel_error};

/// Migration definitions in apply order.
pub static MIGRATIONS: &[(&str, &str)] = &[
    (
        "0001_initial_schema",
        include_str!("../../migrations/postgres/0001_initial_schema/up.sql"),
    ),
    (
        "0002_search_indexes",
        include_str!("../../migrations/postgres/0002_search_indexes/up.sql"),
    ),
];

const CREATE_TRACKING_TABLE: &str = "CREATE TABLE IF NOT EXISTS __northwoods_migrations (
    version VARCHAR(100) PRIMARY KEY NOT NULL,
    run_on TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Versions from [`MIGRATIONS`] not yet in `applied`, in order.
pub fn pending(applied: &HashSet<String>) -> Vec<&'static (&'static str, &'static str)> {
    MIGRATIONS
        .iter()
        .filter(|(version, _)| !applied.contains(*version))
        .collect()
}

/// Session advisory lock held while migrating, so concurrent runners
/// (replicas starting together, parallel tests) apply each file once.
pub const MIGRATION_LOCK_KEY: i64 = 0x6e6f_7274_6877_6f6f;

/// Apply pending migrations. Returns the versions applied by this call.
///
/// Blocks until any other runner on the same database has finished; the
/// applied set is read only after the lock is held.
pub async fn run_migrations(database_url: &str, no_tls: bool) -> Result<Vec<String>, DbError> {
    let mut client = connect_raw(database_url, no_tls)
        .await
        .map_err(to_diesel_error)?;

    client
        .execute("SELECT pg_advisory_lock($1)", &[&MIGRATION_LOCK_KEY])
        .await
        .map_err(pg_to_diesel_error)?;

    let result = apply_pending(&mut client).await;

    // The lock also goes away with the session if this fails.
    if let Err(e) = client
        .execute("SELECT pg_advisory_unlock($1)", &[&MIGRATION_LOCK_KEY])
        .await
    {
        tracing::warn!("Failed to release migration lock: {}", e);
    }

    let ran = result?;
    if ran.is_empty() {
        info!("No pending migrations");
    } else {
        info!("Applied {} migration(s)", ran.len());
    }

    Ok(ran)
}

async fn apply_pending(client: &mut tokio_postgres::Client) -> Result<Vec<String>, DbError> {
    client
        .batch_execute(CREATE_TRACKING_TABLE)
        .await
        .map_err(pg_to_diesel_error)?;

    let applied: HashSet<String> = client
        .query("SELECT version FROM __northwoods_migrations", &[])
        .await
        .map_err(pg_to_diesel_error)?
        .iter()
        .map(|row| row.get::<_, String>(0))
        .collect();

    let mut ran = Vec::new();
    for (version, sql) in pending(&applied) {
        info!("Applying migration: {}", version);

        let tx = client.transaction().await.map_err(pg_to_diesel_error)?;
        tx.batch_execute(sql).await.map_err(|e| {
            tracing::error!("Migration {} failed: {}", version, e);
            pg_to_diesel_error(e)
        })?;
        tx.execute(
            "INSERT INTO __northwoods_migrations (version) VALUES ($1)",
            &[version],
        )
        .await
        .map_err(pg_to_diesel_error)?;
        tx.commit().await.map_err(pg_to_diesel_error)?;

        ran.push(version.to_string());
    }

    Ok(ran)
}
