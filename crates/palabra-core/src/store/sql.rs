//! SQL word store backed by sqlx's `Any` driver.
//!
//! One backend covers both supported dialects: MySQL for deployments and
//! SQLite for local use and tests. The statements below stick to syntax
//! the two dialects share (`?` placeholders, `LIKE ... ESCAPE`); only the
//! schema DDL is split per dialect.

use std::str::FromStr;
use std::sync::Once;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};

use super::traits::WordStore;
use super::types::{NewWordPair, WordFilter, WordPair, WordPairPatch};
use crate::error::{PalabraError, Result};
use crate::language::Lang;

/// Datastore dialects the store can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = PalabraError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mysql" => Ok(Dialect::MySql),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(PalabraError::Validation(format!(
                "Unsupported dialect: {} (expected mysql or sqlite)",
                other
            ))),
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, source_lang, source_text, target_text, created_at, updated_at FROM words";

static INSTALL_DRIVERS: Once = Once::new();

/// SQL-backed word store over a bounded connection pool.
pub struct SqlStore {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlStore {
    const POOL_MAX_CONNECTIONS: u32 = 5;
    const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connect a pool against `url`.
    ///
    /// The URL scheme must match `dialect` (`mysql://...` or
    /// `sqlite://...`).
    ///
    /// # Errors
    ///
    /// Returns `PalabraError::Unavailable` if no connection can be
    /// established.
    pub async fn connect(dialect: Dialect, url: &str) -> Result<Self> {
        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

        let pool = AnyPoolOptions::new()
            .max_connections(Self::POOL_MAX_CONNECTIONS)
            .acquire_timeout(Self::POOL_ACQUIRE_TIMEOUT)
            .connect(url)
            .await
            .map_err(|e| PalabraError::Unavailable(e.to_string()))?;

        Ok(Self { pool, dialect })
    }

    /// Create the words table and its unique index if missing.
    ///
    /// MySQL gets a native enum column and a binary collation on
    /// `source_text`, so stored pairs compare case-sensitively; SQLite
    /// compares TEXT byte-wise already and the enum becomes a CHECK.
    /// Safe to call on every startup; nothing is migrated or versioned.
    pub async fn sync_schema(&self) -> Result<()> {
        match self.dialect {
            Dialect::MySql => {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS words (
                        id BIGINT NOT NULL AUTO_INCREMENT,
                        source_lang ENUM('es', 'en') NOT NULL,
                        source_text VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
                        target_text VARCHAR(255) NOT NULL,
                        created_at VARCHAR(40) NOT NULL,
                        updated_at VARCHAR(40) NOT NULL,
                        PRIMARY KEY (id),
                        UNIQUE KEY uniq_words_source (source_lang, source_text)
                    ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
                    "#,
                )
                .execute(&self.pool)
                .await?;
            }
            Dialect::Sqlite => {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS words (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        source_lang TEXT NOT NULL CHECK (source_lang IN ('es', 'en')),
                        source_text TEXT NOT NULL,
                        target_text TEXT NOT NULL,
                        created_at TEXT NOT NULL,
                        updated_at TEXT NOT NULL
                    )
                    "#,
                )
                .execute(&self.pool)
                .await?;
                sqlx::query(
                    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_words_source \
                     ON words (source_lang, source_text)",
                )
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    // LIKE pattern for a case-insensitive substring match. `%`, `_` and
    // the escape character are escaped so the query text is matched
    // literally; `!` is the escape character because both dialects accept
    // it spelled the same way in ESCAPE.
    fn like_pattern(q: &str) -> String {
        let escaped = q
            .to_lowercase()
            .replace('!', "!!")
            .replace('%', "!%")
            .replace('_', "!_");
        format!("%{}%", escaped)
    }

    fn pair_from_row(row: &AnyRow) -> Result<WordPair> {
        let id: i64 = row.try_get("id")?;
        let lang_raw: String = row.try_get("source_lang")?;
        let source_text: String = row.try_get("source_text")?;
        let target_text: String = row.try_get("target_text")?;
        let created_raw: String = row.try_get("created_at")?;
        let updated_raw: String = row.try_get("updated_at")?;

        let source_lang = lang_raw
            .parse::<Lang>()
            .map_err(|_| PalabraError::Storage(format!("Invalid language in row: {}", lang_raw)))?;

        Ok(WordPair {
            id,
            source_lang,
            source_text,
            target_text,
            created_at: Self::parse_timestamp("created_at", &created_raw)?,
            updated_at: Self::parse_timestamp("updated_at", &updated_raw)?,
        })
    }

    fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| PalabraError::Storage(format!("Invalid {} timestamp: {}", field, e)))
    }
}

#[async_trait]
impl WordStore for SqlStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| PalabraError::Unavailable(e.to_string()))?;
        Ok(())
    }

    async fn list(&self, filter: &WordFilter) -> Result<Vec<WordPair>> {
        filter.validate()?;

        let mut sql = String::from(SELECT_COLUMNS);
        if filter.q.is_some() {
            sql.push_str(" WHERE LOWER(source_text) LIKE ? ESCAPE '!'");
        }
        sql.push_str(" ORDER BY id DESC");
        let paged = filter.limit.is_some() || filter.offset.is_some();
        if paged {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut query = sqlx::query(&sql);
        if let Some(ref q) = filter.q {
            query = query.bind(Self::like_pattern(q));
        }
        if paged {
            query = query
                .bind(filter.limit.unwrap_or(i64::MAX))
                .bind(filter.offset.unwrap_or(0));
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(Self::pair_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<WordPair>> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(ref row) => Ok(Some(Self::pair_from_row(row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, new: &NewWordPair) -> Result<WordPair> {
        new.validate()?;

        let now = Utc::now();
        let stamp = now.to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO words (source_lang, source_text, target_text, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new.source_lang.as_str())
        .bind(&new.source_text)
        .bind(&new.target_text)
        .bind(&stamp)
        .bind(&stamp)
        .execute(&self.pool)
        .await?;

        let id = result
            .last_insert_id()
            .ok_or_else(|| PalabraError::Storage("Driver reported no insert id".to_string()))?;

        Ok(WordPair {
            id,
            source_lang: new.source_lang,
            source_text: new.source_text.clone(),
            target_text: new.target_text.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: i64, patch: &WordPairPatch) -> Result<WordPair> {
        patch.validate()?;

        let mut tx = self.pool.begin().await?;

        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&mut *tx).await?;
        let current = match row {
            Some(ref row) => Self::pair_from_row(row)?,
            None => {
                return Err(PalabraError::NotFound(format!(
                    "No word pair with id {}",
                    id
                )))
            }
        };

        if patch.is_empty() {
            return Ok(current);
        }

        let source_lang = patch.source_lang.unwrap_or(current.source_lang);
        let source_text = patch
            .source_text
            .clone()
            .unwrap_or(current.source_text);
        let target_text = patch
            .target_text
            .clone()
            .unwrap_or(current.target_text);
        let updated_at = Utc::now();

        sqlx::query(
            "UPDATE words SET source_lang = ?, source_text = ?, target_text = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(source_lang.as_str())
        .bind(&source_text)
        .bind(&target_text)
        .bind(updated_at.to_rfc3339())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(WordPair {
            id,
            source_lang,
            source_text,
            target_text,
            created_at: current.created_at,
            updated_at,
        })
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM words WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PalabraError::NotFound(format!(
                "No word pair with id {}",
                id
            )));
        }

        Ok(())
    }

    async fn lookup(&self, lang: Lang, text: &str) -> Result<Option<WordPair>> {
        let sql = format!("{} WHERE source_lang = ? AND source_text = ?", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(lang.as_str())
            .bind(text)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(ref row) => Ok(Some(Self::pair_from_row(row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(SqlStore::like_pattern("ola"), "%ola%");
        assert_eq!(SqlStore::like_pattern("HOLA"), "%hola%");
        assert_eq!(SqlStore::like_pattern("100%"), "%100!%%");
        assert_eq!(SqlStore::like_pattern("a_b"), "%a!_b%");
        assert_eq!(SqlStore::like_pattern("a!b"), "%a!!b%");
    }

    #[test]
    fn test_dialect_round_trip() {
        assert_eq!("mysql".parse::<Dialect>().expect("parses"), Dialect::MySql);
        assert_eq!(
            "sqlite".parse::<Dialect>().expect("parses"),
            Dialect::Sqlite
        );
        assert_eq!(Dialect::MySql.to_string(), "mysql");
        assert!("postgres".parse::<Dialect>().is_err());
    }
}
