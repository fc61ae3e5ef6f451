//! Taxonomy aggregate: categories and tags.

pub mod model;

pub use model::{Category, CreateCategory, CreateTag, Tag};
