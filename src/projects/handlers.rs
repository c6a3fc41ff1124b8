use super::protocol::{CreateProjectRequest, ErrorResponse, UpdateProjectRequest};
use super::store::{ProjectStore, StoreError};
use super::types::Project;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use std::sync::Arc;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::InvalidArgument => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn handle_list_projects(
    Extension(store): Extension<Arc<ProjectStore>>,
) -> Json<Vec<Project>> {
    Json(store.list())
}

// Creation never fails: a missing or non-JSON body creates a project with
// empty fields.
pub async fn handle_create_project(
    Extension(store): Extension<Arc<ProjectStore>>,
    body: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> (StatusCode, Json<Project>) {
    let req = match body {
        Ok(Json(req)) => req,
        Err(e) => {
            tracing::debug!("Unreadable create body: {}", e);
            CreateProjectRequest::default()
        }
    };

    let project = store.create(req.name, req.owner);
    tracing::debug!("Project created: {}", project.id);

    (StatusCode::CREATED, Json(project))
}

// An absent or malformed body counts as missing fields, so the store still
// gets to report an unknown id first.
pub async fn handle_update_project(
    Extension(store): Extension<Arc<ProjectStore>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> Result<Json<Project>, StoreError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(e) => {
            tracing::debug!("Unreadable update body for {}: {}", id, e);
            UpdateProjectRequest::default()
        }
    };

    match store.update(&id, req.name, req.owner) {
        Ok(project) => {
            tracing::debug!("Project updated: {}", project.id);
            Ok(Json(project))
        }
        Err(e) => {
            tracing::warn!("Failed to update project {}: {}", id, e);
            Err(e)
        }
    }
}

pub async fn handle_delete_project(
    Extension(store): Extension<Arc<ProjectStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StoreError> {
    match store.delete(&id) {
        Ok(()) => {
            tracing::debug!("Project deleted: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            tracing::warn!("Failed to delete project {}: {}", id, e);
            Err(e)
        }
    }
}
