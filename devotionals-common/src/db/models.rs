//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Table holding every devotional, live or soft-deleted
pub const DEVOTIONALS_TABLE: &str = "devotionals";

/// A devotional row as stored in the `devotionals` table.
///
/// A record whose `deleted_at` is set is soft-deleted and never returned by
/// the service, but the row itself is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Devotional {
    pub id: i64,
    pub verse: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}
