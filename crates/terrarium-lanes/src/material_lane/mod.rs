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

//! Material Lane
//!
//! Chooses the window image for a marker and resolves it against a texture source.

mod resolve;
mod variant;

pub use resolve::*;
pub use variant::*;

use terrarium_core::asset::{MaterialDescriptor, MaterialPair, TextureSource};
use terrarium_core::lane::{Lane, LaneKind};

/// Maps marker identifiers to window materials.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialSelector;

impl MaterialSelector {
    /// Creates a new `MaterialSelector`.
    pub fn new() -> Self {
        Self
    }

    /// Returns the window material and its mirrored twin for `identifier`.
    ///
    /// Total: any identifier, known or not, yields a pair.
    pub fn select(&self, identifier: &str) -> MaterialPair {
        let variant = WindowVariant::for_marker(identifier);
        log::trace!("Marker '{identifier}' uses the {variant:?} window.");
        MaterialPair::from_primary(MaterialDescriptor::textured(variant.texture()))
    }

    /// Selects the pair for `identifier` and resolves it, falling back to the placeholder.
    pub fn resolve(&self, identifier: &str, source: &dyn TextureSource) -> ResolvedMaterials {
        resolve_or_placeholder(&self.select(identifier), source)
    }
}

impl Lane for MaterialSelector {
    fn strategy_name(&self) -> &'static str {
        "WindowMaterial"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrarium_core::asset::{LightingModel, TextureRef};

    #[test]
    fn test_select_dark_and_default() {
        let selector = MaterialSelector::new();

        let dark = selector.select("city-science-logo-dark");
        assert_eq!(dark.primary.texture, Some(TextureRef::named("terrarium-window-dark")));

        let other = selector.select("anything-else");
        assert_eq!(
            other.primary.texture,
            Some(TextureRef::named("terrarium-window-light-unnatural-warm"))
        );
    }

    #[test]
    fn test_pair_shares_lighting_and_differs_by_mirror_flag() {
        let pair = MaterialSelector.select("city-science-logo-dark");

        assert_eq!(pair.primary.lighting_model, LightingModel::PhysicallyBased);
        assert_eq!(pair.primary.lighting_model, pair.mirrored.lighting_model);
        assert_eq!(pair.primary.metalness, pair.mirrored.metalness);
        assert_eq!(pair.primary.roughness, pair.mirrored.roughness);
        assert_eq!(pair.primary.texture, pair.mirrored.texture);
        assert!(!pair.primary.mirrored);
        assert!(pair.mirrored.mirrored);
    }
}
