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

mod common;

use std::sync::Arc;

use approx::assert_relative_eq;
use terrarium_agents::TerrariumAgent;
use terrarium_core::asset::{TextureRef, TextureTransform};
use terrarium_core::math::Vec3;
use terrarium_core::scene::{PlaneMaterial, PlaneRole};
use terrarium_core::MarkerDescriptor;
use terrarium_data::assets::TextureLibrary;
use terrarium_data::scene::SceneGraph;
use terrarium_data::TerrariumConfig;

fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-6);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-6);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-6);
}

#[test]
fn test_reference_marker_produces_three_planes() {
    // --- 1. ARRANGE ---
    let agent = common::agent(TerrariumConfig::default());
    let mut session = common::RecordingSession::default();
    let mut graph = SceneGraph::new();
    agent.start(&mut session);
    let event = common::image_event(&mut graph, common::dark_marker());

    // --- 2. ACT ---
    let report = agent
        .on_anchor_added(&event, &mut graph)
        .unwrap()
        .expect("first detection is admitted");

    // --- 3. ASSERT ---
    assert_eq!(report.anchor, event.node);
    assert_eq!(report.marker, "city-science-logo-dark");
    assert!(!report.placeholder_used);
    assert_eq!(graph.children_of(event.node).len(), 3);
    assert!(report.node_for(PlaneRole::DebugOverlay).is_none());

    let expected = [
        (PlaneRole::Window, Vec3::new(0.20, 0.0, -0.19), false),
        (PlaneRole::LeftMirror, Vec3::new(-0.10, 0.0, -0.19), true),
        (PlaneRole::RightMirror, Vec3::new(0.50, 0.0, -0.19), true),
    ];
    for (role, position, mirrored) in expected {
        let node = graph
            .node(report.node_for(role).expect("role was attached"))
            .unwrap();
        let plane = node.plane_attachment().unwrap();

        assert_vec3_eq(plane.transform.position, position);
        assert_vec3_eq(node.transform.translation, position);
        assert_eq!((plane.transform.width, plane.transform.height), (0.3, 0.3));

        let PlaneMaterial::Surface { descriptor, texture } = &plane.material else {
            panic!("{role:?} should carry a surface material");
        };
        assert_eq!(descriptor.texture, Some(TextureRef::named("terrarium-window-dark")));
        assert_eq!(descriptor.mirrored, mirrored);
        assert!(texture.is_some());
        let expected_transform = if mirrored {
            TextureTransform::MIRROR_U
        } else {
            TextureTransform::IDENTITY
        };
        assert_eq!(descriptor.texture_transform(), expected_transform);
    }
}

#[test]
fn test_unknown_marker_gets_light_window() {
    let agent = common::agent(TerrariumConfig::default());
    let mut session = common::RecordingSession::default();
    let mut graph = SceneGraph::new();
    agent.start(&mut session);
    let event = common::image_event(&mut graph, MarkerDescriptor::new("anything-else", 0.2, 0.2));

    let report = agent.on_anchor_added(&event, &mut graph).unwrap().unwrap();

    let window = graph.node(report.node_for(PlaneRole::Window).unwrap()).unwrap();
    let descriptor = window.plane_attachment().unwrap().material.descriptor().unwrap();
    assert_eq!(
        descriptor.texture,
        Some(TextureRef::named("terrarium-window-light-unnatural-warm"))
    );
}

#[test]
fn test_debug_overlay_only_when_enabled() {
    // --- 1. ARRANGE ---
    let agent = common::agent(TerrariumConfig::default().with_debug(true));
    let mut session = common::RecordingSession::default();
    let mut graph = SceneGraph::new();
    agent.start(&mut session);
    let event = common::image_event(&mut graph, common::dark_marker());

    // --- 2. ACT ---
    let report = agent.on_anchor_added(&event, &mut graph).unwrap().unwrap();

    // --- 3. ASSERT ---
    assert_eq!(graph.children_of(event.node).len(), 4);

    let overlay = graph
        .node(report.node_for(PlaneRole::DebugOverlay).unwrap())
        .unwrap();
    let plane = overlay.plane_attachment().unwrap();
    assert_eq!(plane.transform.position, Vec3::ZERO);
    assert_eq!((plane.transform.width, plane.transform.height), (0.10, 0.08));
    assert_eq!(overlay.opacity, 0.25);
    match &plane.material {
        PlaneMaterial::Highlight(highlight) => assert_eq!(highlight.opacity, 0.25),
        other => panic!("debug overlay should be a highlight, got {other:?}"),
    }
}

#[test]
fn test_missing_texture_falls_back_to_placeholder() {
    // --- 1. ARRANGE ---
    let agent = TerrariumAgent::new(
        TerrariumConfig::default(),
        Some(common::catalog()),
        Arc::new(TextureLibrary::new()),
    );
    let mut session = common::RecordingSession::default();
    let mut graph = SceneGraph::new();
    agent.start(&mut session);
    let event = common::image_event(&mut graph, common::dark_marker());

    // --- 2. ACT ---
    let report = agent.on_anchor_added(&event, &mut graph).unwrap().unwrap();

    // --- 3. ASSERT ---
    assert!(report.placeholder_used);
    assert_eq!(report.nodes.len(), 3);
    for child in graph.planes_of(event.node) {
        let descriptor = child.material.descriptor().unwrap();
        assert!(descriptor.is_placeholder());
        assert_eq!(descriptor.mirrored, child.role != PlaneRole::Window);
    }
}

#[test]
fn test_custom_window_size_scales_the_layout() {
    let config = TerrariumConfig::default().with_window_size(0.5).unwrap();
    let agent = common::agent(config);
    let mut session = common::RecordingSession::default();
    let mut graph = SceneGraph::new();
    agent.start(&mut session);
    let event = common::image_event(&mut graph, common::dark_marker());

    let report = agent.on_anchor_added(&event, &mut graph).unwrap().unwrap();

    let right = graph.node(report.node_for(PlaneRole::RightMirror).unwrap()).unwrap();
    // 0.05 + 0.25 + 0.5
    assert_relative_eq!(right.transform.translation.x, 0.8, epsilon = 1e-6);
    assert_relative_eq!(right.transform.translation.z, -0.29, epsilon = 1e-6);
}
