//! Project Registry Library
//!
//! Core modules of a small REST service that keeps "project" records in
//! memory. The binary (`main.rs`) only parses configuration, installs logging
//! and serves the router built here.
//!
//! ## Modules
//! - **`projects`**: The record store, its error kinds, and the HTTP handlers
//!   and DTOs layered on top of it.
//! - **`app`**: Router construction and request logging middleware.
//! - **`config`**: Command-line / environment configuration.
//! - **`telemetry`**: `tracing` subscriber bootstrap.

pub mod app;
pub mod config;
pub mod projects;
pub mod telemetry;
