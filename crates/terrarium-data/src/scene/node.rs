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

use terrarium_core::math::{Quaternion, Vec3};
use terrarium_core::scene::{NodeId, PlaneAttachment, PlaneMaterial, PlaneTransform};

/// A node's position, rotation and scale relative to its [`Parent`].
///
/// Nodes without a parent are placed relative to the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The translation (position) of the node.
    pub translation: Vec3,
    /// The rotation of the node.
    pub rotation: Quaternion,
    /// The scale of the node.
    pub scale: Vec3,
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quaternion::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// The local transform of a plane node: its placement relative to the anchor.
    pub fn from_plane(plane: &PlaneTransform) -> Self {
        Self {
            translation: plane.position,
            rotation: plane.rotation,
            scale: Vec3::ONE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// The node this node is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub NodeId);

/// The direct children of a node, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children(pub Vec<NodeId>);

/// What a node holds.
#[derive(Debug, Clone)]
pub enum NodeContent {
    /// An empty node standing for a tracked anchor.
    Anchor,
    /// A rendered plane.
    Plane(PlaneAttachment),
}

/// One node of the [`SceneGraph`](super::SceneGraph).
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// A human-readable label.
    pub name: String,
    /// Placement relative to the parent.
    pub transform: Transform,
    /// The node this one hangs from, if any.
    pub parent: Option<Parent>,
    /// The nodes hanging from this one.
    pub children: Children,
    /// Node opacity in `[0, 1]`.
    pub opacity: f32,
    /// What the node holds.
    pub content: NodeContent,
}

impl SceneNode {
    pub(super) fn anchor(name: String, transform: Transform) -> Self {
        Self {
            name,
            transform,
            parent: None,
            children: Children::default(),
            opacity: 1.0,
            content: NodeContent::Anchor,
        }
    }

    pub(super) fn plane(parent: Option<Parent>, plane: PlaneAttachment) -> Self {
        let opacity = match &plane.material {
            PlaneMaterial::Highlight(highlight) => highlight.opacity,
            PlaneMaterial::Surface { .. } => 1.0,
        };
        Self {
            name: format!("{:?}", plane.role),
            transform: Transform::from_plane(&plane.transform),
            parent,
            children: Children::default(),
            opacity,
            content: NodeContent::Plane(plane),
        }
    }

    /// Returns the plane request this node was created from, if it is a plane.
    pub fn plane_attachment(&self) -> Option<&PlaneAttachment> {
        match &self.content {
            NodeContent::Plane(plane) => Some(plane),
            NodeContent::Anchor => None,
        }
    }
}
