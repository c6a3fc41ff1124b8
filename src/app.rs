//! HTTP application wiring.
//!
//! Builds the axum `Router` around a shared `ProjectStore` and logs every
//! incoming route.

use crate::projects::handlers::{
    handle_create_project, handle_delete_project, handle_list_projects, handle_update_project,
};
use crate::projects::protocol::{ENDPOINT_PROJECT, ENDPOINT_PROJECTS};
use crate::projects::store::ProjectStore;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    Router,
    extract::Extension,
    routing::{get, put},
};
use std::sync::Arc;

pub fn build_router(store: Arc<ProjectStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_PROJECTS,
            get(handle_list_projects).post(handle_create_project),
        )
        .route(
            ENDPOINT_PROJECT,
            put(handle_update_project).delete(handle_delete_project),
        )
        .layer(Extension(store))
        .layer(middleware::from_fn(log_routes))
}

/// Logs `[METHOD] /uri` for each request before dispatching it.
pub async fn log_routes(request: Request, next: Next) -> Response {
    tracing::info!("{}", route_label(&request));
    next.run(request).await
}

fn route_label(request: &Request) -> String {
    format!(
        "[{}] {}",
        request.method().as_str().to_uppercase(),
        request.uri()
    )
}
