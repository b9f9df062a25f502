//! # Devotionals Common Library
//!
//! Shared code for the devotionals service:
//! - Error and result types
//! - Configuration loading (TOML file + compiled defaults)
//! - Database initialization and the `Devotional` model

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
