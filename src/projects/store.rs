use super::types::{Project, ProjectId};

use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Failures produced by `ProjectStore` operations.
///
/// The `Display` text of each variant is the message relayed to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("Project not found")]
    NotFound,
    /// `name` or `owner` was missing or empty.
    #[error("Name and owner are required")]
    InvalidArgument,
}

/// Owns the in-memory project collection.
///
/// Records are kept in insertion order. Every operation holds the lock for its
/// whole duration, so id generation, lookups and mutations never interleave.
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
        }
    }

    // Operations never leave the vector half-written, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Project>> {
        self.projects.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every project, in insertion order.
    pub fn list(&self) -> Vec<Project> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Appends a new project with a freshly generated id.
    ///
    /// `name` and `owner` are stored as given; no emptiness check runs here.
    pub fn create(&self, name: impl Into<String>, owner: impl Into<String>) -> Project {
        let mut projects = self.lock();

        let mut id = ProjectId::new();
        while projects.iter().any(|p| p.id == id) {
            id = ProjectId::new();
        }

        let project = Project {
            id,
            name: name.into(),
            owner: owner.into(),
        };
        projects.push(project.clone());

        tracing::debug!("Created project {} ({} total)", project.id, projects.len());
        project
    }

    /// Replaces `name` and `owner` of the project with the given id, in place.
    ///
    /// Existence is checked before the fields: an unknown id always yields
    /// `NotFound`, even when the fields are also missing.
    pub fn update(
        &self,
        id: &str,
        name: Option<String>,
        owner: Option<String>,
    ) -> Result<Project, StoreError> {
        let mut projects = self.lock();

        let project = projects
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(StoreError::NotFound)?;

        let (name, owner) = match (non_empty(name), non_empty(owner)) {
            (Some(name), Some(owner)) => (name, owner),
            _ => return Err(StoreError::InvalidArgument),
        };

        project.name = name;
        project.owner = owner;

        tracing::debug!("Updated project {}", project.id);
        Ok(project.clone())
    }

    /// Removes the project with the given id. Remaining records keep their order.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut projects = self.lock();

        let index = projects
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or(StoreError::NotFound)?;
        let removed = projects.remove(index);

        tracing::debug!("Deleted project {} ({} left)", removed.id, projects.len());
        Ok(())
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
