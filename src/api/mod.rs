//! REST adapter exposing the task registry under `/api/v1`.

mod dto;
mod error;
mod handlers;
mod middleware;

pub use dto::{
    CreateTaskRequest, ListQuery, ListSort, PriorityInput, SetDueDateRequest, SetPriorityRequest,
    TaskResponse, UpdateTaskRequest,
};
pub use error::ApiError;

use std::{
    io,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, patch},
};
use mockable::Clock;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::task::{ports::TaskStorage, services::TaskRegistry};

/// Registry shared between request handlers; the mutex serialises every
/// operation.
pub type SharedRegistry<S, C> = Arc<Mutex<TaskRegistry<S, C>>>;

/// Builds the API router over `registry`.
#[must_use]
pub fn router<S, C>(registry: SharedRegistry<S, C>) -> Router
where
    S: TaskStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/v1/tasks",
            get(handlers::list_tasks::<S, C>).post(handlers::create_task::<S, C>),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(handlers::get_task::<S, C>)
                .put(handlers::update_task::<S, C>)
                .delete(handlers::delete_task::<S, C>),
        )
        .route(
            "/api/v1/tasks/{id}/complete",
            patch(handlers::complete_task::<S, C>),
        )
        .route(
            "/api/v1/tasks/{id}/uncomplete",
            patch(handlers::uncomplete_task::<S, C>),
        )
        .route(
            "/api/v1/tasks/{id}/due-date",
            patch(handlers::set_due_date::<S, C>),
        )
        .route(
            "/api/v1/tasks/{id}/priority",
            patch(handlers::set_priority::<S, C>),
        )
        .route("/api/v1/stats", get(handlers::stats::<S, C>))
        .layer(from_fn(middleware::log_requests))
        .with_state(registry)
}

/// Serves the API on `addr` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot be bound or the server
/// fails.
pub async fn serve<S, C>(registry: TaskRegistry<S, C>, addr: SocketAddr) -> io::Result<()>
where
    S: TaskStorage + 'static,
    C: Clock + Send + Sync + 'static,
{
    let app = router(Arc::new(Mutex::new(registry)));
    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;
    info!(addr = %bound, "task API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C; serving until killed");
        std::future::pending::<()>().await;
    }
}
