//! Session aggregate.

pub mod model;

pub use model::{CreateSession, Session};
