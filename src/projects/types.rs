use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a project record.
///
/// Wrapper around a UUID v4 string. Serialized as a bare JSON string so the
/// wire shape stays `{ "id": "...", ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProjectId(pub String);

impl ProjectId {
    /// Generates a new random UUID v4-based ProjectId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single project record held by the `ProjectStore`.
///
/// `id` is assigned once at creation and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub owner: String,
}
