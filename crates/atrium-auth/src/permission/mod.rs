//! Role and permission resolution.

pub mod resolver;
