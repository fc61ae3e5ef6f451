//! User administration.

pub mod service;

pub use service::UserService;
