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

//! Composes layout and material output into attachment requests for the scene graph.
//!
//! The adapter does no geometry of its own. Every request is built before the
//! first one is handed to the [`SceneSink`], so a failing marker never leaves a
//! partial overlay behind.

use terrarium_core::asset::{HighlightMaterial, TextureSource};
use terrarium_core::scene::{NodeId, PlaneAttachment, PlaneMaterial, PlaneRole, SceneSink};
use terrarium_core::{MarkerDescriptor, TerrariumError};
use terrarium_data::TerrariumConfig;
use terrarium_lanes::{MaterialSelector, WindowLayoutLane};

/// What one admitted detection put into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentReport {
    /// The anchor node the planes hang from.
    pub anchor: NodeId,
    /// The marker that was admitted.
    pub marker: String,
    /// Created nodes, in attachment order.
    pub nodes: Vec<(PlaneRole, NodeId)>,
    /// `true` if the window image was missing and the placeholder was used.
    pub placeholder_used: bool,
}

impl AttachmentReport {
    /// The node created for `role`, if any.
    pub fn node_for(&self, role: PlaneRole) -> Option<NodeId> {
        self.nodes
            .iter()
            .find_map(|(r, id)| (*r == role).then_some(*id))
    }
}

/// Drives the layout and material lanes and attaches their output to an anchor.
#[derive(Debug, Clone, Copy)]
pub struct RenderAttachmentAdapter {
    layout: WindowLayoutLane,
    selector: MaterialSelector,
    debug: bool,
}

impl RenderAttachmentAdapter {
    /// Builds an adapter from the overlay configuration.
    pub fn new(config: &TerrariumConfig) -> Self {
        Self::from_parts(
            WindowLayoutLane::new(config.window_size),
            MaterialSelector::new(),
            config.debug,
        )
    }

    /// Builds an adapter from explicit lanes.
    pub fn from_parts(layout: WindowLayoutLane, selector: MaterialSelector, debug: bool) -> Self {
        Self {
            layout,
            selector,
            debug,
        }
    }

    /// Whether the debug overlay is attached.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Computes every attachment request for `marker` without touching the scene.
    ///
    /// Returns the requests in attachment order and whether the placeholder
    /// material stands in for a missing window image.
    pub fn plan(
        &self,
        marker: &MarkerDescriptor,
        textures: &dyn TextureSource,
    ) -> Result<(Vec<PlaneAttachment>, bool), TerrariumError> {
        let planes = self.layout.layout(marker)?;
        let materials = self.selector.resolve(&marker.identifier, textures);

        let mut requests = vec![
            PlaneAttachment {
                role: PlaneRole::Window,
                transform: planes.primary,
                material: materials.primary_material(),
            },
            PlaneAttachment {
                role: PlaneRole::LeftMirror,
                transform: planes.left,
                material: materials.mirrored_material(),
            },
            PlaneAttachment {
                role: PlaneRole::RightMirror,
                transform: planes.right,
                material: materials.mirrored_material(),
            },
        ];

        if self.debug {
            requests.push(PlaneAttachment {
                role: PlaneRole::DebugOverlay,
                transform: self.layout.debug_overlay(marker)?,
                material: PlaneMaterial::Highlight(HighlightMaterial::DEBUG),
            });
        }

        Ok((requests, materials.placeholder_used))
    }

    /// Attaches the overlay for `marker` under `anchor`.
    pub fn attach(
        &self,
        anchor: NodeId,
        marker: &MarkerDescriptor,
        textures: &dyn TextureSource,
        sink: &mut dyn SceneSink,
    ) -> Result<AttachmentReport, TerrariumError> {
        let (requests, placeholder_used) = self.plan(marker, textures)?;

        let nodes = requests
            .into_iter()
            .map(|request| {
                let role = request.role;
                let id = sink.add_child(anchor, request);
                log::debug!(
                    "Attached {:?} plane as node {} under anchor {}.",
                    role,
                    id.index(),
                    anchor.index()
                );
                (role, id)
            })
            .collect();

        Ok(AttachmentReport {
            anchor,
            marker: marker.identifier.clone(),
            nodes,
            placeholder_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrarium_core::asset::Texture;
    use terrarium_data::assets::TextureLibrary;
    use terrarium_data::scene::{SceneGraph, Transform};

    fn library() -> TextureLibrary {
        TextureLibrary::new().with(Texture {
            name: "terrarium-window-light-unnatural-warm".into(),
            width: 512,
            height: 512,
        })
    }

    #[test]
    fn test_plan_assigns_materials_by_role() {
        let adapter = RenderAttachmentAdapter::new(&TerrariumConfig::default());
        let marker = MarkerDescriptor::new("some-logo", 0.1, 0.08);

        let (requests, placeholder_used) = adapter.plan(&marker, &library()).unwrap();
        assert!(!placeholder_used);

        let roles: Vec<_> = requests.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            vec![PlaneRole::Window, PlaneRole::LeftMirror, PlaneRole::RightMirror]
        );
        let mirrored: Vec<_> = requests
            .iter()
            .map(|r| r.material.descriptor().map(|d| d.mirrored))
            .collect();
        assert_eq!(mirrored, vec![Some(false), Some(true), Some(true)]);
    }

    #[test]
    fn test_invalid_marker_attaches_nothing() {
        let adapter = RenderAttachmentAdapter::new(&TerrariumConfig::default().with_debug(true));
        let mut graph = SceneGraph::new();
        let anchor = graph.add_anchor("marker", Transform::identity());

        let result = adapter.attach(
            anchor,
            &MarkerDescriptor::new("logo", -0.1, 0.08),
            &library(),
            &mut graph,
        );

        assert!(result.is_err());
        assert!(graph.children_of(anchor).is_empty());
    }
}
