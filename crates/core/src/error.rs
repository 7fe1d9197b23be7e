//! Error types for the walker crates.

use thiserror::Error;

/// Main error type for the walker crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An input outside the valid domain of a pure function
    /// (oscillator period, elapsed time, frame speed).
    #[error("Domain error: {0}")]
    Domain(String),

    /// A transform computation that cannot be carried out, such as
    /// inverting a singular matrix.
    #[error("Computation error: {0}")]
    Computation(String),

    /// A node id that does not belong to the scene graph it was used with.
    #[error("Invalid node id: {0}")]
    InvalidNode(usize),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Window creation or management errors
    #[error("Window error: {0}")]
    Window(String),
}

/// Result type alias using the walker Error type.
pub type Result<T> = std::result::Result<T, Error>;
