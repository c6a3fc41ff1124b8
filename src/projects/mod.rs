//! Project Registry Module
//!
//! The only stateful subsystem of the service: an in-memory collection of
//! project records and the REST surface over it.
//!
//! ## Core Concepts
//! - **Ownership**: `ProjectStore` is the sole owner of the collection. Handlers
//!   receive copies of records, never a handle into the store's vector.
//! - **Ordering**: Records are listed in insertion order; updates keep a
//!   record's position, deletes keep the relative order of the rest.
//! - **Validation**: `update` checks existence before field presence. `create`
//!   performs no field validation.
//!
//! ## Submodules
//! - **`types`**: `Project` and `ProjectId`.
//! - **`store`**: `ProjectStore` and its error kinds.
//! - **`protocol`**: Endpoint paths and request/response DTOs.
//! - **`handlers`**: Axum handlers mapping store outcomes to HTTP responses.

pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;
