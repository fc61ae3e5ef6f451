//! Homepage quote aggregate.

pub mod model;

pub use model::Quote;
