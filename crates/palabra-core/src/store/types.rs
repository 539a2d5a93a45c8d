//! Core data types for the word store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PalabraError, Result};
use crate::language::Lang;

/// Longest accepted source or target text, in characters.
pub const MAX_TEXT_LEN: usize = 255;

/// A stored dictionary row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    /// Surrogate primary key, assigned by the store on creation
    pub id: i64,

    /// Language of `source_text`
    pub source_lang: Lang,

    /// The word or phrase being translated
    pub source_text: String,

    /// Its translation in the other language
    pub target_text: String,

    /// When the row was created
    pub created_at: DateTime<Utc>,

    /// When the row was last changed
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new word pair.
#[derive(Debug, Clone)]
pub struct NewWordPair {
    /// Language of `source_text`
    pub source_lang: Lang,

    /// The word or phrase being translated
    pub source_text: String,

    /// Its translation in the other language
    pub target_text: String,
}

impl NewWordPair {
    pub fn new(
        source_lang: Lang,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
    ) -> Self {
        Self {
            source_lang,
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }

    /// Check the text fields against the stored-column limits.
    pub fn validate(&self) -> Result<()> {
        validate_text("sourceText", &self.source_text)?;
        validate_text("targetText", &self.target_text)?;
        Ok(())
    }
}

/// Partial update for a word pair.
///
/// Only fields that are set are applied; unset fields keep their stored
/// values. The id is never part of a patch.
#[derive(Debug, Clone, Default)]
pub struct WordPairPatch {
    pub source_lang: Option<Lang>,
    pub source_text: Option<String>,
    pub target_text: Option<String>,
}

impl WordPairPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_lang(mut self, lang: Lang) -> Self {
        self.source_lang = Some(lang);
        self
    }

    pub fn source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn target_text(mut self, text: impl Into<String>) -> Self {
        self.target_text = Some(text.into());
        self
    }

    /// True when no field is set; applying such a patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.source_lang.is_none() && self.source_text.is_none() && self.target_text.is_none()
    }

    /// Check whichever text fields are present against the column limits.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref text) = self.source_text {
            validate_text("sourceText", text)?;
        }
        if let Some(ref text) = self.target_text {
            validate_text("targetText", text)?;
        }
        Ok(())
    }
}

/// Filter for listing word pairs.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    /// Case-insensitive substring of `source_text`
    pub q: Option<String>,

    /// Maximum number of rows returned
    pub limit: Option<i64>,

    /// Rows to skip from the top of the ordering
    pub offset: Option<i64>,
}

impl WordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit.is_some_and(|v| v < 0) {
            return Err(PalabraError::Validation(
                "limit must be non-negative".to_string(),
            ));
        }
        if self.offset.is_some_and(|v| v < 0) {
            return Err(PalabraError::Validation(
                "offset must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PalabraError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(PalabraError::Validation(format!(
            "{} too long (max {} characters)",
            field, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_word_pair_validate() {
        let pair = NewWordPair::new(Lang::Es, "hola", "hello");
        assert!(pair.validate().is_ok());

        let empty = NewWordPair::new(Lang::Es, "", "hello");
        assert!(empty.validate().is_err());

        let long = NewWordPair::new(Lang::En, "a".repeat(256), "b");
        assert!(long.validate().is_err());

        let at_limit = NewWordPair::new(Lang::En, "a".repeat(255), "b");
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_patch_builder() {
        let patch = WordPairPatch::new()
            .source_lang(Lang::En)
            .target_text("bye");

        assert_eq!(patch.source_lang, Some(Lang::En));
        assert_eq!(patch.source_text, None);
        assert_eq!(patch.target_text, Some("bye".to_string()));
        assert!(!patch.is_empty());
        assert!(WordPairPatch::new().is_empty());
    }

    #[test]
    fn test_patch_validate_checks_present_fields_only() {
        let patch = WordPairPatch::new().source_text("");
        assert!(patch.validate().is_err());

        let patch = WordPairPatch::new().source_lang(Lang::Es);
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_word_filter_builder() {
        let filter = WordFilter::new().query("ola").limit(10).offset(5);

        assert_eq!(filter.q, Some("ola".to_string()));
        assert_eq!(filter.limit, Some(10));
        assert_eq!(filter.offset, Some(5));
        assert!(filter.validate().is_ok());

        assert!(WordFilter::new().limit(-1).validate().is_err());
        assert!(WordFilter::new().offset(-1).validate().is_err());
    }

    #[test]
    fn test_word_pair_wire_shape() {
        let pair = WordPair {
            id: 7,
            source_lang: Lang::Es,
            source_text: "hola".to_string(),
            target_text: "hello".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&pair).expect("serializes");
        assert_eq!(value["id"], 7);
        assert_eq!(value["sourceLang"], "es");
        assert_eq!(value["sourceText"], "hola");
        assert_eq!(value["targetText"], "hello");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
