//! Post CRUD and the publication workflow.

pub mod service;

pub use service::PostService;
