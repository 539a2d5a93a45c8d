//! # Palabra Core
//!
//! Core library for Palabra - a small bilingual (Spanish/English)
//! dictionary service with an exact-lookup translate operation.
//!
//! This crate provides the domain logic, storage abstraction, and data
//! models independent of the HTTP interface.
//!
//! ## Architecture
//!
//! - **store**: Word store trait, SQL implementation, and data types
//! - **language**: Language enums and the source-language heuristic
//! - **error**: Error taxonomy shared by every operation

pub mod error;
pub mod language;
pub mod store;

pub use error::{PalabraError, Result};
pub use language::{guess_lang, resolve_source_lang, Direction, Lang};
pub use store::{Dialect, NewWordPair, SqlStore, WordFilter, WordPair, WordPairPatch, WordStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
