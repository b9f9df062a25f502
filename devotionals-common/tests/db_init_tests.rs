//! Tests for on-disk database initialization

use devotionals_common::db::{init_database, DEFAULT_BUSY_TIMEOUT_MS};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("devotionals.db");

    let result = init_database(&db_path, DEFAULT_BUSY_TIMEOUT_MS).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_reopen_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("devotionals.db");

    let pool = init_database(&db_path, DEFAULT_BUSY_TIMEOUT_MS).await.unwrap();
    sqlx::query("INSERT INTO devotionals (verse, content) VALUES (?, ?)")
        .bind("John 1:1")
        .bind("In the beginning was the Word")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    // Second startup must not recreate or clear the table
    let pool = init_database(&db_path, DEFAULT_BUSY_TIMEOUT_MS).await.unwrap();
    let verse: String = sqlx::query_scalar("SELECT verse FROM devotionals WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(verse, "John 1:1");
}

#[tokio::test]
async fn test_ids_are_not_reused_after_physical_delete() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("devotionals.db");
    let pool = init_database(&db_path, DEFAULT_BUSY_TIMEOUT_MS).await.unwrap();

    for _ in 0..2 {
        sqlx::query("INSERT INTO devotionals (verse, content) VALUES ('v', 'c')")
            .execute(&pool)
            .await
            .unwrap();
    }
    sqlx::query("DELETE FROM devotionals WHERE id = 2")
        .execute(&pool)
        .await
        .unwrap();

    let id = sqlx::query("INSERT INTO devotionals (verse, content) VALUES ('v', 'c')")
        .execute(&pool)
        .await
        .unwrap()
        .last_insert_rowid();

    assert_eq!(id, 3);
}

#[tokio::test]
async fn test_journal_mode_is_wal() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("devotionals.db");
    let pool = init_database(&db_path, DEFAULT_BUSY_TIMEOUT_MS).await.unwrap();

    let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(mode.to_lowercase(), "wal");
}
