//! Body layout of the walking figure.
//!
//! Every part is the same sphere, squashed and placed by its local
//! transform. Parts are added depth-first: trunk, head and eyes, then the
//! right arm and leg chains, then the left ones.
//!
//! Limbs rotate about the end they attach at. Each limb builds its own pivot
//! shift and applies it with [`Transform::repivot`]; no shift is shared
//! between parts.

use glam::{Quat, Vec3};
use walker_core::Result;

use crate::config::SceneConfig;
use crate::joints::JointAngles;
use crate::mesh::MeshHandle;
use crate::node::{NodeId, SceneGraph};
use crate::transform::Transform;

/// Fingers per hand.
pub const FINGERS_PER_HAND: u8 = 4;
/// Toes per foot.
pub const TOES_PER_FOOT: u8 = 3;
/// Nodes in a complete figure.
pub const NODE_COUNT: usize = 4 + 2 * (4 + FINGERS_PER_HAND as usize + TOES_PER_FOOT as usize);

/// Trunk proportions relative to the sphere.
const TRUNK_SCALE: Vec3 = Vec3::new(2.0, 3.0, 1.0);
/// Undoes the trunk's scale so children are placed in unstretched units.
const UNDO_TRUNK: Vec3 = Vec3::new(1.0 / 2.0, 1.0 / 3.0, 1.0);
/// Rotation that makes the arms hang down instead of pointing up.
const ARM_FLIP: f32 = 180.0;

/// Which side of the body a part is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Right, Side::Left];

    /// `+1` for the right side, `-1` for the left.
    pub fn sign(self) -> f32 {
        match self {
            Side::Right => 1.0,
            Side::Left => -1.0,
        }
    }
}

/// A body part; fingers and toes carry their index along the hand or foot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Trunk,
    Head,
    Eye(Side),
    Arm(Side),
    Elbow(Side),
    Finger(Side, u8),
    Thigh(Side),
    Knee(Side),
    Toe(Side, u8),
}

/// A fully built figure for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub graph: SceneGraph,
    pub angles: JointAngles,
    pub trunk: NodeId,
}

impl Frame {
    /// Find the node for a body part.
    pub fn find(&self, part: BodyPart) -> Option<NodeId> {
        self.graph.find(part)
    }

    /// World transform of a body part.
    pub fn world(&self, part: BodyPart) -> Option<Transform> {
        let id = self.find(part)?;
        self.graph.get(id).ok().map(|node| node.world)
    }
}

/// Build the whole figure for the frame at `elapsed_ms`.
///
/// The result depends only on the arguments, so building twice with the
/// same inputs yields bit-identical transforms.
///
/// # Errors
/// Fails if the config is invalid or any transform cannot be inverted; no
/// partial figure is returned.
pub fn build_frame(
    config: &SceneConfig,
    elapsed_ms: f32,
    eye: &Transform,
    mesh: MeshHandle,
) -> Result<Frame> {
    config.validate()?;
    let angles = JointAngles::sample(elapsed_ms, config.frame_speed)?;

    let mut graph = SceneGraph::new(eye, mesh)?;

    let trunk = graph.add_root(BodyPart::Trunk, trunk_local(config.pose.position)?);

    let head = graph.add_child(trunk, BodyPart::Head, head_local(angles.head_yaw)?)?;
    for side in Side::BOTH {
        graph.add_child(head, BodyPart::Eye(side), eye_local(side)?)?;
    }

    for side in Side::BOTH {
        let (arm_swing, thigh_swing, knee_bend) = match side {
            Side::Right => (angles.right_arm, angles.right_thigh, angles.right_knee),
            Side::Left => (angles.left_arm, angles.left_thigh, angles.left_knee),
        };

        let arm = graph.add_child(trunk, BodyPart::Arm(side), arm_local(side, arm_swing)?)?;
        let elbow = graph.add_child(arm, BodyPart::Elbow(side), elbow_local(angles.elbow)?)?;
        for i in 0..FINGERS_PER_HAND {
            graph.add_child(elbow, BodyPart::Finger(side, i), finger_local(i)?)?;
        }

        let thigh = graph.add_child(
            trunk,
            BodyPart::Thigh(side),
            thigh_local(side, thigh_swing)?,
        )?;
        let knee = graph.add_child(thigh, BodyPart::Knee(side), knee_local(knee_bend)?)?;
        for i in 0..TOES_PER_FOOT {
            graph.add_child(knee, BodyPart::Toe(side, i), toe_local(i)?)?;
        }
    }

    tracing::trace!(
        elapsed_ms,
        nodes = graph.len(),
        head_yaw = angles.head_yaw,
        "Built frame"
    );

    Ok(Frame {
        graph,
        angles,
        trunk,
    })
}

/// `scale(undo) * T(socket) * rotation * scale(proportions)`, the shape every
/// attached part follows.
fn attached(undo: Vec3, socket: Vec3, rotation: Transform, proportions: Vec3) -> Result<Transform> {
    Ok(Transform::scale(undo)?
        * Transform::translation(socket)
        * rotation
        * Transform::scale(proportions)?)
}

fn trunk_local(position: Vec3) -> Result<Transform> {
    Ok(Transform::translation(position) * Transform::scale(TRUNK_SCALE)?)
}

fn head_local(yaw: f32) -> Result<Transform> {
    attached(
        UNDO_TRUNK,
        Vec3::new(0.0, 4.8, 0.0),
        Transform::rotation_y(yaw),
        Vec3::new(1.0, 1.2, 1.0),
    )
}

fn eye_local(side: Side) -> Result<Transform> {
    attached(
        Vec3::new(1.0, 1.0 / 1.2, 1.0),
        Vec3::new(0.7 * side.sign(), 0.4, 1.0),
        Transform::IDENTITY,
        Vec3::splat(1.0 / 5.0),
    )
}

fn arm_local(side: Side, swing: f32) -> Result<Transform> {
    let rotation =
        Quat::from_rotation_x(ARM_FLIP.to_radians()) * Quat::from_rotation_x(swing.to_radians());
    let arm = attached(
        UNDO_TRUNK,
        Vec3::new(2.8 * side.sign(), 5.0, 0.0),
        Transform::rotation(rotation),
        Vec3::new(1.0 / 1.8, 1.5, 1.0),
    )?;
    let shoulder = Transform::translation(Vec3::new(0.0, -1.0, 0.0));
    arm.repivot(&shoulder)
}

fn elbow_local(bend: f32) -> Result<Transform> {
    let forearm = attached(
        Vec3::new(1.8, 1.0 / 1.5, 1.0),
        Vec3::new(0.001, 3.0, 0.0),
        Transform::rotation_x(bend),
        Vec3::new(1.0 / 2.0, 1.5, 1.0),
    )?;
    let elbow = Transform::translation(Vec3::new(0.0, -1.0, 0.0));
    forearm.repivot(&elbow)
}

fn finger_local(index: u8) -> Result<Transform> {
    attached(
        Vec3::new(2.0, 1.0 / 1.5, 1.0),
        Vec3::new(0.0, 1.6, 0.7 - 0.5 * index as f32),
        Transform::IDENTITY,
        Vec3::new(1.0 / 5.0, 1.0 / 2.0, 1.0 / 5.0),
    )
}

fn thigh_local(side: Side, swing: f32) -> Result<Transform> {
    // The right leg sits on -X, opposite the right arm.
    let thigh = attached(
        UNDO_TRUNK,
        Vec3::new(-1.5 * side.sign(), -6.0, 0.0),
        Transform::rotation_x(swing),
        Vec3::new(1.0 / 1.5, 1.5, 1.0),
    )?;
    let hip = Transform::translation(Vec3::new(0.0, 1.0, 0.0));
    thigh.repivot(&hip)
}

fn knee_local(bend: f32) -> Result<Transform> {
    let shin = attached(
        Vec3::new(1.5, 1.0 / 1.5, 1.0),
        Vec3::new(0.001, -3.0, 0.0),
        Transform::rotation_x(bend),
        Vec3::new(1.0 / 2.0, 1.5, 1.0),
    )?;
    let knee = Transform::translation(Vec3::new(0.0, 1.0, 0.0));
    shin.repivot(&knee)
}

fn toe_local(index: u8) -> Result<Transform> {
    attached(
        Vec3::new(2.0, 1.0 / 1.5, 1.0),
        Vec3::new(0.4 - 0.4 * index as f32, -1.8, 0.8),
        Transform::IDENTITY,
        Vec3::new(1.0 / 8.0, 1.0 / 8.0, 1.0 / 2.0),
    )
}
