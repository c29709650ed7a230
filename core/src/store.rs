//! In-memory todo store.
//!
//! # Design
//! A single `RwLock<HashMap<String, Todo>>` guards every record. Listing a
//! user's todos takes the shared lock so readers run in parallel; every other
//! operation, `get_by_id` included, takes the exclusive lock. No I/O happens
//! while a guard is held.
//!
//! Every operation accepts a `CancellationToken` so callers can thread their
//! request context through, but nothing here awaits anything except the lock,
//! so the token is never consulted and operations always run to completion.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::id::{IdGenerator, UuidGenerator};
use crate::types::Todo;

/// CRUD operations over todos, scoped by username for listing.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Every todo owned by `username`, in no particular order.
    async fn get_all_for_user(&self, ctx: &CancellationToken, username: &str) -> Vec<Todo>;

    async fn get_by_id(&self, ctx: &CancellationToken, id: &str) -> Result<Todo>;

    /// Store `todo` under a fresh ID, stamping `created_on` with the current
    /// time. Caller-supplied `id` and `created_on` are discarded.
    async fn add(&self, ctx: &CancellationToken, todo: Todo) -> Todo;

    /// Replace the record stored under `id` with `todo`.
    ///
    /// Fails with `InconsistentIds` if `todo.id != id`, then with `NotFound`
    /// if nothing is stored under `id`.
    async fn update(&self, ctx: &CancellationToken, id: &str, todo: Todo) -> Result<()>;

    async fn delete(&self, ctx: &CancellationToken, id: &str) -> Result<()>;
}

/// `TodoService` backed by a `HashMap` behind a reader-writer lock.
pub struct InmemTodoService {
    todos: RwLock<HashMap<String, Todo>>,
    ids: Arc<dyn IdGenerator>,
}

impl InmemTodoService {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
            ids,
        }
    }
}

impl Default for InmemTodoService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InmemTodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InmemTodoService").finish_non_exhaustive()
    }
}

#[async_trait]
impl TodoService for InmemTodoService {
    async fn get_all_for_user(&self, _ctx: &CancellationToken, username: &str) -> Vec<Todo> {
        let todos = self.todos.read().await;
        todos
            .values()
            .filter(|todo| todo.username == username)
            .cloned()
            .collect()
    }

    async fn get_by_id(&self, _ctx: &CancellationToken, id: &str) -> Result<Todo> {
        let todos = self.todos.write().await;
        todos.get(id).cloned().ok_or(TodoError::NotFound)
    }

    async fn add(&self, _ctx: &CancellationToken, mut todo: Todo) -> Todo {
        let mut todos = self.todos.write().await;
        todo.id = self.ids.next_id();
        todo.created_on = Utc::now();
        debug!(id = %todo.id, username = %todo.username, "todo added");
        todos.insert(todo.id.clone(), todo.clone());
        todo
    }

    async fn update(&self, _ctx: &CancellationToken, id: &str, todo: Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        if id != todo.id {
            return Err(TodoError::InconsistentIds);
        }
        let slot = todos.get_mut(id).ok_or(TodoError::NotFound)?;
        *slot = todo;
        debug!(id, "todo updated");
        Ok(())
    }

    async fn delete(&self, _ctx: &CancellationToken, id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(id).ok_or(TodoError::NotFound)?;
        debug!(id, "todo deleted");
        Ok(())
    }
}
