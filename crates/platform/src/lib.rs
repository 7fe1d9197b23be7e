//! Platform layer for the walker host.
//!
//! This crate provides:
//! - Window management via winit
//! - Keyboard input tracking

mod input;
mod window;

pub use input::{InputState, KeyCode};
pub use window::Window;
