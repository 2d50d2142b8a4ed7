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

// Terrarium Sandbox
// Headless run of the overlay against a scripted AR session.
//
// Usage: sandbox [config.ron] [catalog-dir]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use terrarium_agents::TerrariumAgent;
use terrarium_core::asset::Texture;
use terrarium_core::session::{ArSession, RunOptions, TrackingConfiguration};
use terrarium_core::tracking::{AnchorEvent, AnchorKind};
use terrarium_data::assets::TextureLibrary;
use terrarium_data::scene::{SceneGraph, Transform};
use terrarium_data::{ReferenceImageCatalog, TerrariumConfig};

/// Stands in for the device's tracking session: remembers what it was asked to detect.
#[derive(Default)]
struct ScriptedSession {
    detection_targets: Vec<terrarium_core::MarkerDescriptor>,
    running: bool,
}

impl ArSession for ScriptedSession {
    fn run(&mut self, configuration: &TrackingConfiguration, options: RunOptions) {
        log::debug!(
            "Session run: {} target(s), reset={}, remove anchors={}",
            configuration.detection_images.len(),
            options.reset_tracking,
            options.remove_existing_anchors
        );
        self.detection_targets = configuration.detection_images.clone();
        self.running = true;
    }

    fn pause(&mut self) {
        self.running = false;
    }
}

fn assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn texture(name: &str) -> Texture {
    Texture {
        name: name.to_string(),
        width: 2048,
        height: 2048,
    }
}

/// Feeds every detection target to the agent, plus one floor plane, as the runtime would.
fn detect_all(
    agent: &TerrariumAgent,
    session: &ScriptedSession,
    graph: &mut SceneGraph,
) -> Result<()> {
    if !session.running {
        return Ok(());
    }

    let floor = graph.add_anchor("floor", Transform::default());
    agent.on_anchor_added(
        &AnchorEvent {
            node: floor,
            kind: AnchorKind::Plane,
        },
        graph,
    )?;

    for marker in &session.detection_targets {
        let node = graph.add_anchor(marker.identifier.clone(), Transform::default());
        match agent.on_anchor_added(&AnchorEvent::image(node, marker.clone()), graph)? {
            Some(report) => log::info!(
                "'{}' -> {} plane(s){}",
                report.marker,
                report.nodes.len(),
                if report.placeholder_used {
                    " (placeholder material)"
                } else {
                    ""
                }
            ),
            None => log::info!("'{}' ignored", marker.identifier),
        }
    }

    for request in agent.drain_indicator_requests() {
        log::info!("Indicator: {request:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| assets_dir().join("terrarium.ron"));
    let catalog_dir = args.next().map(PathBuf::from).unwrap_or_else(assets_dir);

    let config = TerrariumConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let catalog = ReferenceImageCatalog::find_group(&catalog_dir, &config.reference_group)
        .with_context(|| format!("loading catalog from {}", catalog_dir.display()))?;

    let textures = TextureLibrary::new()
        .with(texture("terrarium-window-dark"))
        .with(texture("terrarium-window-light-unnatural-warm"));

    let agent = TerrariumAgent::new(config, catalog, Arc::new(textures));
    let mut session = ScriptedSession::default();
    let mut graph = SceneGraph::new();

    if let Err(err) = agent.start(&mut session).into_result() {
        log::error!("{err}");
        return Ok(());
    }
    detect_all(&agent, &session, &mut graph)?;

    // A user-triggered reset drops every anchor and locks onto the next marker again.
    graph.clear();
    agent.restart(&mut session);
    detect_all(&agent, &session, &mut graph)?;

    agent.pause(&mut session);

    println!("{}", graph.snapshot().to_ron()?);
    Ok(())
}
