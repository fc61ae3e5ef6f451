//! Settings aggregate: per-category JSON documents and their typed shapes.

pub mod document;
pub mod model;

pub use document::{BannerItem, HomePageDocument, PersonItem};
pub use model::Setting;
