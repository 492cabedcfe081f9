//! Async facade over the SQLite todo store.
//!
//! SQLite calls are blocking; this wrapper moves them onto the blocking
//! thread pool so UI code can await them.

use std::sync::Arc;

use anyhow::Result;

use crate::todo::{Todo, TodoCreateRequest, TodoUpdateRequest};
use crate::todo_store::SqliteTodoStore;

/// Async todo client backed by local SQLite storage.
#[derive(Clone)]
pub struct TodoClient {
    store: Arc<SqliteTodoStore>,
}

impl TodoClient {
    pub fn new(store: SqliteTodoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// List all todos, newest first.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.list()).await?
    }

    /// Get a todo by ID.
    ///
    /// Returns an error if the todo doesn't exist.
    pub async fn get_todo(&self, id: &str) -> Result<Todo> {
        let store = self.store.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || {
            store
                .get(&id)?
                .ok_or_else(|| anyhow::anyhow!("Todo not found: {}", id))
        })
        .await?
    }

    /// Create a new todo.
    pub async fn create_todo(&self, request: TodoCreateRequest) -> Result<Todo> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.create(&request.content)).await?
    }

    /// Update an existing todo.
    pub async fn update_todo(&self, id: &str, request: TodoUpdateRequest) -> Result<Todo> {
        let store = self.store.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || store.update(&id, request)).await?
    }

    /// Flip a todo's done state.
    pub async fn toggle_todo(&self, id: &str) -> Result<Todo> {
        let store = self.store.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || store.toggle(&id)).await?
    }

    /// Delete a todo.
    pub async fn delete_todo(&self, id: &str) -> Result<()> {
        let store = self.store.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || store.delete(&id)).await?
    }
}
