//! Word store trait definition.
//!
//! `WordStore` is the interface the HTTP layer talks to. A store handle
//! is constructed once at startup and injected into every handler, which
//! keeps the SQL backend swappable for fakes in tests.

use async_trait::async_trait;

use super::types::{NewWordPair, WordFilter, WordPair, WordPairPatch};
use crate::error::Result;
use crate::language::Lang;

/// Storage interface for word pairs.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Verify datastore connectivity.
    ///
    /// # Errors
    ///
    /// Returns `PalabraError::Unavailable` if the datastore cannot be
    /// reached.
    async fn ping(&self) -> Result<()>;

    /// List word pairs matching the filter, newest id first.
    ///
    /// The `q` filter is a case-insensitive substring match on
    /// `source_text`; `limit`/`offset` page the same ordering. An empty
    /// filter returns every row.
    async fn list(&self, filter: &WordFilter) -> Result<Vec<WordPair>>;

    /// Get a word pair by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(pair))` if found, `Ok(None)` if not found.
    async fn get(&self, id: i64) -> Result<Option<WordPair>>;

    /// Insert a new word pair.
    ///
    /// # Returns
    ///
    /// Returns the created row with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `PalabraError::Validation` if a field fails the model
    /// limits, `PalabraError::Conflict` if (`source_lang`, `source_text`)
    /// already exists.
    async fn create(&self, new: &NewWordPair) -> Result<WordPair>;

    /// Apply a patch to an existing word pair and return the updated row.
    ///
    /// Only fields present in the patch change; the id never does.
    ///
    /// # Errors
    ///
    /// Returns `PalabraError::NotFound` if the id is absent,
    /// `PalabraError::Conflict` if the patched pair collides with
    /// another row.
    async fn update(&self, id: i64, patch: &WordPairPatch) -> Result<WordPair>;

    /// Delete a word pair by id.
    ///
    /// # Errors
    ///
    /// Returns `PalabraError::NotFound` if the id is absent.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Exact lookup of the row with this `source_lang` and `source_text`.
    ///
    /// Equality is case-sensitive as stored, unlike the list filter.
    async fn lookup(&self, lang: Lang, text: &str) -> Result<Option<WordPair>>;
}
