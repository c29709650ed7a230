//! In-memory storage engine for the todo service.
//!
//! # Overview
//! `InmemTodoService` keeps every `Todo` in a single map guarded by a
//! reader-writer lock and implements the `TodoService` trait: list by user,
//! get, add, update and delete.
//!
//! # Design
//! - No global state. Construct a store and share it by `Arc` with whatever
//!   serves requests.
//! - The store assigns IDs and creation timestamps; callers never choose them.
//! - ID generation sits behind `IdGenerator` so tests can use predictable IDs.
//! - Errors are limited to `TodoError::NotFound` and
//!   `TodoError::InconsistentIds`.

pub mod error;
pub mod id;
pub mod store;
pub mod types;

pub use error::{Result, TodoError};
pub use id::{IdGenerator, UuidGenerator};
pub use store::{InmemTodoService, TodoService};
pub use types::Todo;

pub use tokio_util::sync::CancellationToken;
