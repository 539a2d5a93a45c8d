//! Word pair storage.
//!
//! This module defines the `WordStore` trait, the SQL implementation,
//! and the data types they exchange.
//!
//! ## Architecture
//!
//! The store is backend-agnostic behind `WordStore`: handlers receive a
//! trait object and never see SQL. The shipped backend is `SqlStore`,
//! one implementation covering MySQL (deployments) and SQLite (local use
//! and tests) through sqlx's `Any` driver.

pub mod sql;
pub mod traits;
pub mod types;

// Re-export public types
pub use sql::{Dialect, SqlStore};
pub use traits::WordStore;
pub use types::{NewWordPair, WordFilter, WordPair, WordPairPatch, MAX_TEXT_LEN};
