//! Arena-backed scene graph of rigid body parts.
//!
//! Nodes live in a flat `Vec` and refer to their parent by [`NodeId`]. A
//! child can only be attached to a node that is already in the graph, so
//! the tree is always built parent-before-child and can never contain a
//! cycle. Each node's world transform is resolved the moment it is added:
//!
//! - root: `inverse(eye) * local`
//! - child: `parent.world * local`
//!
//! Because every rotation a limb carries ends up in its world transform,
//! everything attached below it swings along.

use walker_core::{Error, Result};

use crate::body::BodyPart;
use crate::mesh::MeshHandle;
use crate::transform::Transform;

/// Index of a node within its [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One rigid body part.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub part: BodyPart,
    /// Transform relative to the parent's frame.
    pub local: Transform,
    /// Transform into the shared eye frame.
    pub world: Transform,
    pub parent: Option<NodeId>,
    pub mesh: MeshHandle,
}

/// The per-frame tree of body parts.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    eye_inverse: Transform,
    mesh: MeshHandle,
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
}

impl SceneGraph {
    /// Start an empty graph viewed from `eye`, drawing every node with `mesh`.
    ///
    /// # Errors
    /// Returns [`Error::Computation`] if the eye transform is singular.
    pub fn new(eye: &Transform, mesh: MeshHandle) -> Result<Self> {
        Ok(Self {
            eye_inverse: eye.try_inverse()?,
            mesh,
            nodes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Add a root node.
    pub fn add_root(&mut self, part: BodyPart, local: Transform) -> NodeId {
        let world = self.eye_inverse * local;
        self.push(part, local, world, None)
    }

    /// Add a node under `parent`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNode`] if `parent` is not in this graph.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        part: BodyPart,
        local: Transform,
    ) -> Result<NodeId> {
        let parent_world = self.get(parent)?.world;
        let world = parent_world * local;
        Ok(self.push(part, local, world, Some(parent)))
    }

    fn push(
        &mut self,
        part: BodyPart,
        local: Transform,
        world: Transform,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            part,
            local,
            world,
            parent,
            mesh: self.mesh,
        });
        self.children.push(Vec::new());
        if let Some(parent) = parent {
            self.children[parent.0].push(id);
        }
        id
    }

    /// Look up a node.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNode`] if `id` is not in this graph.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::InvalidNode(id.0))
    }

    /// Children of a node in the order they were added.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First node drawn as `part`.
    pub fn find(&self, part: BodyPart) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.part == part)
            .map(NodeId)
    }

    /// Inverse of the eye transform the graph was built with.
    pub fn eye_inverse(&self) -> &Transform {
        &self.eye_inverse
    }

    /// All root nodes.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(i, _)| NodeId(i))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node ids in depth-first pre-order, children in insertion order.
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots().collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Recompute every world transform from the local transforms.
    ///
    /// Nodes are stored parent-before-child, so one forward pass suffices.
    /// The result is identical to what insertion produced; this exists so
    /// tests and tools can check the stored world transforms.
    pub fn recompose(&self) -> Vec<Transform> {
        let mut worlds: Vec<Transform> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let world = match node.parent {
                Some(parent) => worlds[parent.0] * node.local,
                None => self.eye_inverse * node.local,
            };
            worlds.push(world);
        }
        worlds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Side;
    use glam::Vec3;

    const MESH: MeshHandle = MeshHandle {
        id: 0,
        index_count: 36,
    };

    fn chain() -> (SceneGraph, [Transform; 4], [NodeId; 3]) {
        let eye = Transform::rotation_y(40.0) * Transform::translation(Vec3::new(0.0, 0.0, 30.0));
        let l0 = Transform::translation(Vec3::new(1.0, 2.0, 3.0))
            * Transform::scale(Vec3::new(2.0, 3.0, 1.0)).unwrap();
        let l1 = Transform::translation(Vec3::new(0.0, 5.0, 0.0)) * Transform::rotation_x(30.0);
        let l2 = Transform::rotation_z(-20.0) * Transform::uniform_scale(0.5).unwrap();

        let mut graph = SceneGraph::new(&eye, MESH).unwrap();
        let root = graph.add_root(BodyPart::Trunk, l0);
        let a = graph.add_child(root, BodyPart::Arm(Side::Right), l1).unwrap();
        let b = graph.add_child(a, BodyPart::Elbow(Side::Right), l2).unwrap();
        (graph, [eye, l0, l1, l2], [root, a, b])
    }

    #[test]
    fn test_three_level_composition_is_exact() {
        let (graph, [eye, l0, l1, l2], [root, a, b]) = chain();
        let eye_inv = eye.try_inverse().unwrap();

        assert_eq!(graph.get(root).unwrap().world, eye_inv * l0);
        assert_eq!(graph.get(a).unwrap().world, eye_inv * l0 * l1);
        assert_eq!(graph.get(b).unwrap().world, eye_inv * l0 * l1 * l2);
    }

    #[test]
    fn test_child_follows_parent_rotation() {
        let eye = Transform::IDENTITY;
        let mut graph = SceneGraph::new(&eye, MESH).unwrap();
        let root = graph.add_root(BodyPart::Trunk, Transform::rotation_z(90.0));
        let child = graph
            .add_child(
                root,
                BodyPart::Head,
                Transform::translation(Vec3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();

        let p = graph.get(child).unwrap().world.origin();
        assert!((p - Vec3::Y).length() < 1e-5, "got {p:?}");
    }

    #[test]
    fn test_parents_and_children_are_linked() {
        let (graph, _, [root, a, b]) = chain();
        assert_eq!(graph.get(root).unwrap().parent, None);
        assert_eq!(graph.get(a).unwrap().parent, Some(root));
        assert_eq!(graph.get(b).unwrap().parent, Some(a));
        assert_eq!(graph.children(root), &[a]);
        assert_eq!(graph.children(a), &[b]);
        assert!(graph.children(b).is_empty());
        assert_eq!(graph.roots().collect::<Vec<_>>(), vec![root]);
    }

    #[test]
    fn test_every_node_shares_the_mesh() {
        let (graph, _, _) = chain();
        assert!(graph.nodes().iter().all(|node| node.mesh == MESH));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let (mut graph, _, _) = chain();
        let err = graph
            .add_child(NodeId(42), BodyPart::Head, Transform::IDENTITY)
            .unwrap_err();
        assert_eq!(err, Error::InvalidNode(42));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_singular_eye_rejected() {
        let eye = Transform::from_matrix(glam::Mat4::ZERO);
        assert!(matches!(
            SceneGraph::new(&eye, MESH),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_depth_first_order() {
        let mut graph = SceneGraph::new(&Transform::IDENTITY, MESH).unwrap();
        let root = graph.add_root(BodyPart::Trunk, Transform::IDENTITY);
        let arm = graph
            .add_child(root, BodyPart::Arm(Side::Right), Transform::IDENTITY)
            .unwrap();
        let thigh = graph
            .add_child(root, BodyPart::Thigh(Side::Right), Transform::IDENTITY)
            .unwrap();
        // Added after the thigh but belongs under the arm.
        let elbow = graph
            .add_child(arm, BodyPart::Elbow(Side::Right), Transform::IDENTITY)
            .unwrap();

        assert_eq!(graph.depth_first(), vec![root, arm, elbow, thigh]);
    }

    #[test]
    fn test_recompose_matches_stored_worlds() {
        let (graph, _, _) = chain();
        let stored: Vec<Transform> = graph.nodes().iter().map(|n| n.world).collect();
        assert_eq!(graph.recompose(), stored);
    }
}
