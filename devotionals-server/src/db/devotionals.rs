//! Queries against the `devotionals` table
//!
//! Every read and write is scoped to live rows (`deleted_at IS NULL`), so a
//! soft-deleted row behaves as if it did not exist. Each operation is a
//! single statement touching at most one row.

use devotionals_common::db::{Devotional, DEVOTIONALS_TABLE, SQL_NOW};
use sqlx::SqlitePool;

use super::UpdateBuilder;

/// Validated input for a new devotional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevotional {
    pub verse: String,
    pub content: String,
}

/// Validated partial update; at least one field is set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevotionalChanges {
    pub verse: Option<String>,
    pub content: Option<String>,
}

/// All live devotionals, newest first
///
/// Rows created within the same millisecond fall back to id order.
pub async fn list_live(db: &SqlitePool) -> sqlx::Result<Vec<Devotional>> {
    sqlx::query_as::<_, Devotional>(
        r#"
        SELECT id, verse, content, created_at, updated_at, deleted_at
        FROM devotionals
        WHERE deleted_at IS NULL
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(db)
    .await
}

/// A single live devotional
pub async fn find_live(db: &SqlitePool, id: i64) -> sqlx::Result<Option<Devotional>> {
    sqlx::query_as::<_, Devotional>(
        r#"
        SELECT id, verse, content, created_at, updated_at, deleted_at
        FROM devotionals
        WHERE id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Insert a devotional and return its new id
///
/// `created_at` comes from the column default.
pub async fn insert(db: &SqlitePool, devotional: &NewDevotional) -> sqlx::Result<i64> {
    let result = sqlx::query("INSERT INTO devotionals (verse, content) VALUES (?, ?)")
        .bind(&devotional.verse)
        .bind(&devotional.content)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Apply `changes` to a live devotional and return the refreshed row
///
/// `updated_at` is refreshed on every call. Returns `None` when no live row
/// has this id, and an error when `changes` sets no field.
pub async fn update_live(
    db: &SqlitePool,
    id: i64,
    changes: &DevotionalChanges,
) -> sqlx::Result<Option<Devotional>> {
    let builder = UpdateBuilder::new(DEVOTIONALS_TABLE)
        .set_if_some("verse", changes.verse.clone())
        .set_if_some("content", changes.content.clone())
        .touch("updated_at");

    let mut query = builder
        .build_live_update(id)
        .ok_or_else(|| sqlx::Error::Protocol("update sets no column".to_string()))?;

    query.build_query_as::<Devotional>().fetch_optional(db).await
}

/// Soft-delete a live devotional
///
/// Returns false when no live row has this id, including a row that was
/// already deleted.
pub async fn soft_delete(db: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let sql = format!(
        "UPDATE devotionals SET deleted_at = {} WHERE id = ? AND deleted_at IS NULL",
        SQL_NOW
    );

    let result = sqlx::query(&sql).bind(id).execute(db).await?;

    Ok(result.rows_affected() > 0)
}
