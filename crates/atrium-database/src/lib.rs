//! # atrium-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for the Atrium CMS backend.

pub mod connection;
pub mod migration;
pub mod repositories;
