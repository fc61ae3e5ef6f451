//! Integration tests exercising the HTTP API against a live database.
//!
//! Run with `cargo test -- --ignored` after pointing
//! `ATRIUM__DATABASE__URL` at a scratch PostgreSQL database.

mod helpers;

mod auth_test;
mod settings_test;
mod workflow_test;
