//! # atrium-entity
//!
//! Domain entity models for the Atrium CMS backend: users, sessions,
//! posts and their publication workflow, taxonomy, events, uploads,
//! settings documents, and audit entries.

pub mod audit;
pub mod event;
pub mod permission;
pub mod post;
pub mod quote;
pub mod session;
pub mod settings;
pub mod taxonomy;
pub mod upload;
pub mod user;
