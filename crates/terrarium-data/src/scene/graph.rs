// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;
use terrarium_core::math::Vec3;
use terrarium_core::scene::{NodeId, PlaneAttachment, PlaneRole, SceneSink};

use super::node::{Parent, SceneNode, Transform};

/// A flat, index-addressed scene graph.
///
/// Stands in for the renderer's node tree in headless runs and tests. Node
/// ids are indices into the node list and stay valid until [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root node standing for a tracked anchor.
    pub fn add_anchor(&mut self, name: impl Into<String>, transform: Transform) -> NodeId {
        self.push(SceneNode::anchor(name.into(), transform))
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index() as usize)
    }

    /// The direct children of `id`, in the order they were attached.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.0.as_slice())
            .unwrap_or(&[])
    }

    /// The plane requests attached directly under `id`.
    pub fn planes_of(&self, id: NodeId) -> impl Iterator<Item = &PlaneAttachment> + '_ {
        self.children_of(id)
            .iter()
            .filter_map(|child| self.node(*child))
            .filter_map(SceneNode::plane_attachment)
    }

    /// Number of nodes, anchors included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every node, as a session restart that drops existing anchors does.
    pub fn clear(&mut self) {
        log::debug!("Clearing scene graph ({} node(s)).", self.nodes.len());
        self.nodes.clear();
    }

    /// A serializable summary of every node, in id order.
    pub fn snapshot(&self) -> SceneSnapshot {
        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| NodeSnapshot {
                id: index as u32,
                parent: node.parent.map(|Parent(id)| id.index()),
                name: node.name.clone(),
                role: node.plane_attachment().map(|plane| plane.role),
                position: node.transform.translation,
                opacity: node.opacity,
            })
            .collect();
        SceneSnapshot { nodes }
    }

    fn push(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

impl SceneSink for SceneGraph {
    fn add_child(&mut self, parent: NodeId, plane: PlaneAttachment) -> NodeId {
        let parent_exists = self.node(parent).is_some();
        if !parent_exists {
            log::warn!(
                "Parent node {} does not exist; adding {:?} plane as a root node.",
                parent.index(),
                plane.role
            );
        }

        let id = self.push(SceneNode::plane(parent_exists.then_some(Parent(parent)), plane));
        if let Some(node) = self.nodes.get_mut(parent.index() as usize) {
            node.children.0.push(id);
        }
        id
    }
}

/// A read-only dump of a [`SceneGraph`], suitable for logging or diffing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    /// Every node, in id order.
    pub nodes: Vec<NodeSnapshot>,
}

/// One entry of a [`SceneSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// The node id.
    pub id: u32,
    /// The parent id, if any.
    pub parent: Option<u32>,
    /// The node label.
    pub name: String,
    /// The plane role, for plane nodes.
    pub role: Option<PlaneRole>,
    /// Position relative to the parent.
    pub position: Vec3,
    /// Node opacity.
    pub opacity: f32,
}

impl SceneSnapshot {
    /// Pretty-prints the snapshot as RON.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrarium_core::asset::HighlightMaterial;
    use terrarium_core::scene::{PlaneMaterial, PlaneTransform};

    fn highlight(role: PlaneRole) -> PlaneAttachment {
        PlaneAttachment {
            role,
            transform: PlaneTransform::flat(Vec3::ZERO, 0.1, 0.1),
            material: PlaneMaterial::Highlight(HighlightMaterial::DEBUG),
        }
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let mut graph = SceneGraph::new();
        let anchor = graph.add_anchor("marker", Transform::identity());
        let child = graph.add_child(anchor, highlight(PlaneRole::DebugOverlay));

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.children_of(anchor), &[child]);
        assert_eq!(graph.node(child).unwrap().parent, Some(Parent(anchor)));
        assert_eq!(graph.node(child).unwrap().opacity, 0.25);
        assert_eq!(graph.planes_of(anchor).count(), 1);
    }

    #[test]
    fn test_unknown_parent_becomes_root() {
        let mut graph = SceneGraph::new();
        let child = graph.add_child(NodeId::new(42), highlight(PlaneRole::Window));
        assert!(graph.node(child).unwrap().parent.is_none());
        assert!(graph.children_of(NodeId::new(42)).is_empty());
    }

    #[test]
    fn test_clear_and_snapshot() {
        let mut graph = SceneGraph::new();
        let anchor = graph.add_anchor("marker", Transform::identity());
        graph.add_child(anchor, highlight(PlaneRole::LeftMirror));

        let snapshot = graph.snapshot();
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.nodes[1].parent, Some(0));
        assert_eq!(snapshot.nodes[1].role, Some(PlaneRole::LeftMirror));
        assert!(snapshot.to_ron().unwrap().contains("LeftMirror"));

        graph.clear();
        assert!(graph.is_empty());
    }
}
