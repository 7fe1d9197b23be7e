//! Scene graph and walk-cycle animation for the running bot.
//!
//! This crate provides the animation core:
//! - Transform primitives and re-pivoting
//! - The triangle-wave oscillator and per-joint angles
//! - The per-frame scene graph and body layout
//! - Camera, shading and the shared sphere mesh
//! - The draw list handed to a renderer
//!
//! # Example
//!
//! ```
//! use walker_scene::{Camera, SceneConfig, SphereMesh, build_frame};
//!
//! let config = SceneConfig::default();
//! let mesh = SphereMesh::body().unwrap();
//! let eye = Camera::new().eye_transform(&config.pose);
//!
//! let frame = build_frame(&config, 1500.0, &eye, mesh.handle(0)).unwrap();
//! for draw in frame.draw_list().unwrap() {
//!     // bind draw.uniforms, draw draw.mesh.index_count indices
//!     assert_eq!(draw.mesh.index_count, 864);
//! }
//! ```

pub mod body;
pub mod camera;
pub mod config;
pub mod draw;
pub mod joints;
pub mod light;
pub mod mesh;
pub mod node;
pub mod oscillator;
pub mod transform;

pub use body::{BodyPart, Frame, Side, build_frame};
pub use camera::Camera;
pub use config::{ColorChannel, ConfigAction, Pose, SceneConfig};
pub use draw::{DrawCommand, ObjectUniforms};
pub use joints::JointAngles;
pub use light::ShadingUniforms;
pub use mesh::{MeshHandle, SphereMesh, Vertex};
pub use node::{Node, NodeId, SceneGraph};
pub use oscillator::oscillate;
pub use transform::Transform;
