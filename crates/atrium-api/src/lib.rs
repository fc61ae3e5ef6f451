//! # atrium-api
//!
//! HTTP API layer for Atrium built on Axum.
//!
//! Provides the REST endpoints, extractors, DTOs, error mapping, and the
//! application builder that wires state and middleware together.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
