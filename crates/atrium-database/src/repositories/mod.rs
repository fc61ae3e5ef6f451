//! Repository implementations, one per aggregate.

pub mod analytics;
pub mod audit;
pub mod event;
pub mod permission;
pub mod post;
pub mod quote;
pub mod session;
pub mod settings;
pub mod taxonomy;
pub mod upload;
pub mod user;
