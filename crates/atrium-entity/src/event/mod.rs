//! Event aggregate.

pub mod model;

pub use model::{CreateEvent, Event};
