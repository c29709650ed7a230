//! HTTP adapter for the todo store.
//!
//! # Design
//! Each route maps onto exactly one `TodoService` operation. The store is
//! passed in as `Arc<dyn TodoService>` and carried as router state, so the
//! same instance can be shared with anything else in the process. A fresh
//! `CancellationToken` is handed to the store on every request.

pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use todo_core::{CancellationToken, Todo, TodoService};

pub use config::Config;
pub use error::ApiError;

pub type SharedService = Arc<dyn TodoService>;

pub fn app(service: SharedService) -> Router {
    Router::new()
        .route("/users/{username}/todos", get(list_user_todos))
        .route("/todos", post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(service)
}

pub async fn run(listener: TcpListener, service: SharedService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

async fn list_user_todos(
    State(service): State<SharedService>,
    Path(username): Path<String>,
) -> Json<Vec<Todo>> {
    let ctx = CancellationToken::new();
    Json(service.get_all_for_user(&ctx, &username).await)
}

async fn create_todo(
    State(service): State<SharedService>,
    Json(input): Json<Todo>,
) -> (StatusCode, Json<Todo>) {
    let ctx = CancellationToken::new();
    let todo = service.add(&ctx, input).await;
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let ctx = CancellationToken::new();
    Ok(Json(service.get_by_id(&ctx, &id).await?))
}

async fn update_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    Json(input): Json<Todo>,
) -> Result<StatusCode, ApiError> {
    let ctx = CancellationToken::new();
    service.update(&ctx, &id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let ctx = CancellationToken::new();
    service.delete(&ctx, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
