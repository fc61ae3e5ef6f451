//! Authorization graph: roles, permissions, and their join rows.

pub mod model;

pub use model::{Permission, Role};
