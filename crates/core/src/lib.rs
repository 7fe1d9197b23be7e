//! Core utilities for the walker crates.
//!
//! This crate provides foundational types and utilities used across the workspace:
//! - Error types and result aliases
//! - Logging initialization
//! - The monotonic animation timer

mod error;
mod logging;
mod timer;

pub use error::{Error, Result};
pub use logging::{DEFAULT_FILTER, init_logging};
pub use timer::Timer;
