//! Uploaded-object metadata aggregate.

pub mod model;

pub use model::{CreateUpload, Upload};
