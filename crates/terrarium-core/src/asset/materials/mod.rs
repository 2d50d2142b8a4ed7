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

//! Defines the material descriptions attached to overlay planes.

mod highlight;
mod surface;
mod texture_transform;

pub use highlight::*;
pub use surface::*;
pub use texture_transform::*;

use serde::{Deserialize, Serialize};

/// The shading model a renderer should use for a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LightingModel {
    /// Metallic-roughness PBR shading, reacting to the estimated scene lighting.
    #[default]
    PhysicallyBased,
}
