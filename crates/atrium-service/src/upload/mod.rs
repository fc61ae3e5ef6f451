//! Upload metadata management.

pub mod service;

pub use service::UploadService;
