//! JWT access-token issuing and validation.

pub mod claims;
pub mod decoder;
pub mod encoder;
