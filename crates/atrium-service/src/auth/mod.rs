//! Login, logout, and password self-service.

pub mod service;

pub use service::{AuthService, LoginOutcome};
