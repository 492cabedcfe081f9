//! Farm services for Kisan: the alert feed and the todo list.

pub mod alert;
pub mod todo;
pub mod todo_client;
pub mod todo_store;

pub use alert::{Alert, AlertDraft, AlertFeed, AlertKind, Severity};
pub use todo::{Todo, TodoCreateRequest, TodoUpdateRequest};
pub use todo_client::TodoClient;
pub use todo_store::SqliteTodoStore;
