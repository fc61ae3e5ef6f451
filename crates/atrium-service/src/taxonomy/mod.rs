//! Category and tag management.

pub mod service;

pub use service::TaxonomyService;
