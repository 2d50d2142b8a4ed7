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

//! Fakes shared by the agent integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use terrarium_agents::TerrariumAgent;
use terrarium_core::asset::Texture;
use terrarium_core::scene::NodeId;
use terrarium_core::session::{ArSession, RunOptions, TrackingConfiguration};
use terrarium_core::tracking::AnchorEvent;
use terrarium_core::MarkerDescriptor;
use terrarium_data::assets::TextureLibrary;
use terrarium_data::scene::{SceneGraph, Transform};
use terrarium_data::{ReferenceImage, ReferenceImageCatalog, TerrariumConfig};

pub const DARK_MARKER: &str = "city-science-logo-dark";

/// An AR session that records every call.
#[derive(Debug, Default)]
pub struct RecordingSession {
    pub runs: Vec<(TrackingConfiguration, RunOptions)>,
    pub pauses: usize,
}

impl ArSession for RecordingSession {
    fn run(&mut self, configuration: &TrackingConfiguration, options: RunOptions) {
        self.runs.push((configuration.clone(), options));
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

pub fn catalog() -> ReferenceImageCatalog {
    ReferenceImageCatalog::new(
        "AR Resources",
        vec![
            ReferenceImage::new(DARK_MARKER, 0.10, 0.08),
            ReferenceImage::new("city-science-logo-light", 0.10, 0.08),
        ],
    )
    .expect("catalog sizes are positive")
}

pub fn textures() -> TextureLibrary {
    let texture = |name: &str| Texture {
        name: name.to_string(),
        width: 1024,
        height: 1024,
    };
    TextureLibrary::new()
        .with(texture("terrarium-window-dark"))
        .with(texture("terrarium-window-light-unnatural-warm"))
}

pub fn agent(config: TerrariumConfig) -> TerrariumAgent {
    TerrariumAgent::new(config, Some(catalog()), Arc::new(textures()))
}

pub fn dark_marker() -> MarkerDescriptor {
    MarkerDescriptor::new(DARK_MARKER, 0.10, 0.08)
}

/// Adds an anchor node to `graph` and returns the runtime's event for it.
pub fn image_event(graph: &mut SceneGraph, marker: MarkerDescriptor) -> AnchorEvent {
    let node: NodeId = graph.add_anchor(marker.identifier.clone(), Transform::identity());
    AnchorEvent::image(node, marker)
}
