//! Project API Protocol
//!
//! Defines the REST endpoints and the Data Transfer Objects (DTOs) exchanged
//! with HTTP clients. Responses carrying a project serialize `Project` directly.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: list (GET) and create (POST).
pub const ENDPOINT_PROJECTS: &str = "/projects";
/// Single-record endpoint: update (PUT) and delete (DELETE).
pub const ENDPOINT_PROJECT: &str = "/projects/:id";

// --- Data Transfer Objects ---

/// Body of `POST /projects`.
///
/// Missing fields are stored as empty strings; creation does not validate them.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
}

/// Body of `PUT /projects/:id`.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported by the store after the existence check, not by the JSON extractor.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Error body returned with 4xx responses.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
