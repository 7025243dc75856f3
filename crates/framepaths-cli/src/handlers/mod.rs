//! Command handlers.
//!
//! Each handler takes the bootstrapped layout (when it needs one) and a
//! writer for its output, so it can be driven from tests.

pub mod encode;
pub mod ensure;
pub mod paths;
