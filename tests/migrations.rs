//! Migration runner against a live PostGIS database.
//!
//! Skipped unless `TEST_DATABASE_URL` is set.

use northwoods::repository::migrations::{run_migrations, MIGRATIONS};

#[tokio::test]
async fn test_concurrent_runners_apply_each_migration_once() {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        return;
    };
    let no_tls = std::env::var("TEST_DATABASE_TLS").is_err();

    let runs = futures_util::future::join_all(
        (0..4).map(|_| run_migrations(&url, no_tls)),
    )
    .await;

    let mut applied = Vec::new();
    for run in runs {
        applied.extend(run.unwrap());
    }
    let total = applied.len();
    applied.sort();
    applied.dedup();

    // No version was applied by two runners.
    assert_eq!(applied.len(), total);
    assert!(total <= MIGRATIONS.len());
    assert!(run_migrations(&url, no_tls).await.unwrap().is_empty());
}
