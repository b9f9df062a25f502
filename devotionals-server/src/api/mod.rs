//! HTTP API handlers

pub mod devotionals;
pub mod health;
pub mod types;

pub use devotionals::{
    create_devotional, delete_devotional, get_devotional, list_devotionals, update_devotional,
};
pub use health::health_routes;
