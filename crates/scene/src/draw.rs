//! Draw list handed to the renderer.
//!
//! One [`DrawCommand`] per node in depth-first order. Each command binds
//! the node's world transform as the model-view matrix, along with its
//! normal matrix, and draws the shared mesh as an indexed triangle list.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use walker_core::Result;

use crate::body::{BodyPart, Frame};
use crate::mesh::MeshHandle;
use crate::transform::Transform;

/// Per-draw uniform block.
///
/// # Memory Layout
///
/// - Offset 0: model-view matrix (64 bytes)
/// - Offset 64: normal matrix (64 bytes)
/// - Total size: 128 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// Part-local to eye space.
    pub model_view: Mat4,
    /// `transpose(inverse(model_view))`, for normals.
    pub normal_matrix: Mat4,
}

impl ObjectUniforms {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Uniforms for a node's world transform.
    ///
    /// # Errors
    /// Returns [`walker_core::Error::Computation`] if the transform is singular.
    pub fn new(world: &Transform) -> Result<Self> {
        Ok(Self {
            model_view: world.matrix(),
            normal_matrix: world.normal_matrix()?,
        })
    }
}

/// One indexed draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub part: BodyPart,
    pub mesh: MeshHandle,
    pub uniforms: ObjectUniforms,
}

impl Frame {
    /// Draw commands for every node, depth-first from the trunk.
    ///
    /// # Errors
    /// Fails if any world transform is singular; no partial list is returned.
    pub fn draw_list(&self) -> Result<Vec<DrawCommand>> {
        self.graph
            .depth_first()
            .into_iter()
            .map(|id| {
                let node = self.graph.get(id)?;
                Ok(DrawCommand {
                    part: node.part,
                    mesh: node.mesh,
                    uniforms: ObjectUniforms::new(&node.world)?,
                })
            })
            .collect()
    }
}
