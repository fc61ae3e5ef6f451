//! Post aggregate: content entity, publication status, and workflow rules.

pub mod model;
pub mod status;
pub mod workflow;

pub use model::{CreatePost, Post, UpdatePost};
pub use status::PostStatus;
pub use workflow::WorkflowAction;
