//! Database access layer for the devotionals table

pub mod devotionals;
pub mod update_builder;

pub use devotionals::{DevotionalChanges, NewDevotional};
pub use update_builder::UpdateBuilder;
