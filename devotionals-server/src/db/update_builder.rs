//! Parameterized partial-update statements
//!
//! Collects `(column, value)` pairs and renders a single
//! `UPDATE ... RETURNING *` statement. Values are always bound; only column
//! names, which come from code, are written into the SQL text.

use devotionals_common::db::SQL_NOW;
use sqlx::{QueryBuilder, Sqlite};

/// Builder for an update of one live row, addressed by id
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<(&'static str, String)>,
    stamped: Vec<&'static str>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            stamped: Vec::new(),
        }
    }

    /// Assign `value` to `column`
    pub fn set(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Assign `value` to `column` only when present
    pub fn set_if_some(self, column: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    /// Stamp `column` with the store's current time
    pub fn touch(mut self, column: &'static str) -> Self {
        self.stamped.push(column);
        self
    }

    /// True when no column has a value assigned; stamps do not count
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Render the statement for the live row `id`
    ///
    /// Returns `None` when no column has a value assigned. Stamping a row
    /// without changing any of its values is not an update.
    pub fn build_live_update(self, id: i64) -> Option<QueryBuilder<'static, Sqlite>> {
        if self.is_empty() {
            return None;
        }

        let mut query = QueryBuilder::new(format!("UPDATE {} SET ", self.table));

        {
            let mut columns = query.separated(", ");
            for (column, value) in self.assignments {
                columns.push(format!("{} = ", column));
                columns.push_bind_unseparated(value);
            }
            for column in self.stamped {
                columns.push(format!("{} = {}", column, SQL_NOW));
            }
        }

        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND deleted_at IS NULL RETURNING *");

        Some(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_single_assignment_with_stamp() {
        let query = UpdateBuilder::new("devotionals")
            .set("verse", "Updated")
            .touch("updated_at")
            .build_live_update(1)
            .unwrap();

        assert_eq!(
            query.sql(),
            "UPDATE devotionals SET verse = ?, \
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') \
             WHERE id = ? AND deleted_at IS NULL RETURNING *"
        );
    }

    #[test]
    fn test_set_if_some_skips_absent_values() {
        let builder = UpdateBuilder::new("devotionals")
            .set_if_some("verse", None)
            .set_if_some("content", Some("New content".to_string()));

        assert!(!builder.is_empty());

        let query = builder.build_live_update(3).unwrap();
        assert_eq!(
            query.sql(),
            "UPDATE devotionals SET content = ? WHERE id = ? AND deleted_at IS NULL RETURNING *"
        );
    }

    #[test]
    fn test_values_are_never_interpolated() {
        let hostile = "x'; DROP TABLE devotionals; --";
        let query = UpdateBuilder::new("devotionals")
            .set("verse", hostile)
            .set("content", "c")
            .build_live_update(9)
            .unwrap();

        assert!(!query.sql().contains("DROP TABLE"));
        assert_eq!(query.sql().matches('?').count(), 3);
    }

    #[test]
    fn test_empty_builder_renders_nothing() {
        let builder = UpdateBuilder::new("devotionals");
        assert!(builder.is_empty());
        assert!(builder.build_live_update(1).is_none());
    }

    #[test]
    fn test_stamp_only_renders_nothing() {
        let builder = UpdateBuilder::new("devotionals")
            .set_if_some("verse", None)
            .touch("updated_at");

        assert!(builder.is_empty());
        assert!(builder.build_live_update(1).is_none());
    }
}
