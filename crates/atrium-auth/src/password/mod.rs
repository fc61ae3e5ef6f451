//! Password hashing, policy validation, and temporary-password generation.

pub mod generator;
pub mod hasher;
pub mod validator;
