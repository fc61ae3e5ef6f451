//! Session liveness validation with a sliding inactivity window.

pub mod guard;
