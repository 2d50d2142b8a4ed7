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

//! The contract with the AR runtime's tracking session.
//!
//! Camera tracking and pose estimation belong to the runtime. The overlay only
//! tells it which images to look for and when to (re)start or pause.

use serde::{Deserialize, Serialize};

use crate::marker::MarkerDescriptor;

/// How the runtime should build environment reflection maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnvironmentTexturing {
    /// No environment texturing.
    None,
    /// Probes are placed by the application.
    Manual,
    /// The runtime places probes on its own.
    #[default]
    Automatic,
}

/// Scene lighting hints forwarded to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Add a default light when the scene has none.
    pub auto_default_lighting: bool,
    /// Keep lights in sync with the runtime's light estimate.
    pub auto_update_lighting: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            auto_default_lighting: true,
            auto_update_lighting: true,
        }
    }
}

/// Everything the runtime needs to start world tracking with image detection.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingConfiguration {
    /// The reference images to detect.
    pub detection_images: Vec<MarkerDescriptor>,
    /// Environment texturing mode.
    pub environment_texturing: EnvironmentTexturing,
    /// Lighting hints.
    pub lighting: LightingConfig,
}

/// Options applied when (re)running a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Discard the current world map and start tracking from scratch.
    pub reset_tracking: bool,
    /// Remove every anchor (and the nodes attached to them).
    pub remove_existing_anchors: bool,
}

impl RunOptions {
    /// The options used for every (re)start: a completely fresh session.
    pub const FRESH: Self = Self {
        reset_tracking: true,
        remove_existing_anchors: true,
    };
}

/// The AR runtime's tracking session.
pub trait ArSession {
    /// Starts or restarts tracking with `configuration`.
    fn run(&mut self, configuration: &TrackingConfiguration, options: RunOptions);

    /// Suspends tracking until the next `run`.
    fn pause(&mut self);
}
