//! SQLite-based todo storage.

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::path::Path;

use crate::todo::{Todo, TodoUpdateRequest};

/// SQLite-backed todo list.
pub struct SqliteTodoStore {
    conn: Mutex<Connection>,
}

impl SqliteTodoStore {
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
    #[cfg(test)]
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
            CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                content TEXT NOT NULL,
                done INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_todos_created ON todos(created_at DESC);
            "#,
        )?;
        Ok(())
    }

    /// Convert a database row to a Todo.
    fn row_to_todo(row: &rusqlite::Row) -> rusqlite::Result<Todo> {
        let created_at_str: String = row.get(3)?;
        let updated_at_str: String = row.get(4)?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());
        let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        let done: i32 = row.get(2)?;

        Ok(Todo {
            id: row.get(0)?,
            content: row.get(1)?,
            done: done != 0,
            created_at,
            updated_at,
        })
    }

    /// List all todos, newest first.
    pub fn list(&self) -> Result<Vec<Todo>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, content, done, created_at, updated_at FROM todos ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map([], Self::row_to_todo)?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Failed to read todos: {}", e))
    }

    /// Get a todo by ID.
    pub fn get(&self, id: &str) -> Result<Option<Todo>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, content, done, created_at, updated_at FROM todos WHERE id = ?1",
        )?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::row_to_todo(row)?))
        } else {
            Ok(None)
        }
    }

    /// Create a new todo with the given content.
    pub fn create(&self, content: &str) -> Result<Todo> {
        let now = Utc::now();
        let todo = Todo {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.to_string(),
            done: false,
            created_at: now,
            updated_at: now,
        };

        self.conn.lock().execute(
            "INSERT INTO todos (id, content, done, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                todo.id,
                todo.content,
                todo.done as i32,
                todo.created_at.to_rfc3339(),
                todo.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(todo)
    }

    /// Apply a partial update to a todo.
    ///
    /// Returns the updated todo, or an error if it doesn't exist.
    pub fn update(&self, id: &str, request: TodoUpdateRequest) -> Result<Todo> {
        let mut todo = self
            .get(id)?
            .ok_or_else(|| anyhow::anyhow!("Todo not found: {}", id))?;

        if let Some(content) = request.content {
            todo.content = content;
        }
        if let Some(done) = request.done {
            todo.done = done;
        }
        todo.updated_at = Utc::now();

        self.conn.lock().execute(
            "UPDATE todos SET content = ?2, done = ?3, updated_at = ?4 WHERE id = ?1",
            params![
                todo.id,
                todo.content,
                todo.done as i32,
                todo.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(todo)
    }

    /// Flip a todo's done state.
    pub fn toggle(&self, id: &str) -> Result<Todo> {
        let todo = self
            .get(id)?
            .ok_or_else(|| anyhow::anyhow!("Todo not found: {}", id))?;

        self.update(
            id,
            TodoUpdateRequest {
                content: None,
                done: Some(!todo.done),
            },
        )
    }

    /// Delete a todo. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.conn
            .lock()
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Get the todo count.
    pub fn count(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .lock()
                .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
