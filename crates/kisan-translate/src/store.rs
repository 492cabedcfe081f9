//! Persistent tier for translated strings.
//!
//! The persistent store is an injected capability: embedding contexts that
//! have no durable storage simply construct a [`Translator`](crate::Translator)
//! without one, and caching stays in-memory only.

use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::Path;

/// Key-value contract for the persistent cache tier.
///
/// Entries are written once per key and never updated or expired by the
/// translation layer; deletion is entirely the store's own concern.
pub trait TranslationStore: Send + Sync {
    /// Look up a cached translation by key.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a translation under the given key.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed translation store.
pub struct SqliteTranslationStore {
    conn: Mutex<Connection>,
}

impl SqliteTranslationStore {
    /// Create a new store at the given path.
    ///
    /// Creates the database file and schema if they don't exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        self.conn.lock().execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS translations (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                cached_at INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Number of cached entries.
    pub fn count(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .lock()
                .query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl TranslationStore for SqliteTranslationStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT value FROM translations WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        self.conn.lock().execute(
            "INSERT OR REPLACE INTO translations (key, value, cached_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = SqliteTranslationStore::in_memory().unwrap();
        assert_eq!(store.get("en:hi:Hello").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = SqliteTranslationStore::in_memory().unwrap();
        store.set("en:hi:Hello", "नमस्ते").unwrap();
        assert_eq!(store.get("en:hi:Hello").unwrap().as_deref(), Some("नमस्ते"));
    }

    #[test]
    fn test_set_same_key_twice_keeps_latest() {
        let store = SqliteTranslationStore::in_memory().unwrap();
        store.set("en:hi:Hello", "first").unwrap();
        store.set("en:hi:Hello", "second").unwrap();
        assert_eq!(store.get("en:hi:Hello").unwrap().as_deref(), Some("second"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_value_is_stored() {
        let store = SqliteTranslationStore::in_memory().unwrap();
        store.set("en:hi:", "").unwrap();
        assert_eq!(store.get("en:hi:").unwrap().as_deref(), Some(""));
    }
}
