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

//! Turning a [`MaterialPair`] into paintable plane materials.

use terrarium_core::asset::{AssetHandle, MaterialPair, Texture, TextureSource};
use terrarium_core::scene::PlaneMaterial;
use terrarium_core::TerrariumError;

/// A material pair together with the texture it resolved to.
#[derive(Debug, Clone)]
pub struct ResolvedMaterials {
    /// The descriptors to paint with.
    pub pair: MaterialPair,
    /// The loaded texture, shared by both descriptors. `None` for the placeholder.
    pub texture: Option<AssetHandle<Texture>>,
    /// `true` when the requested texture was missing and the placeholder stands in.
    pub placeholder_used: bool,
}

impl ResolvedMaterials {
    /// The material for the window plane.
    pub fn primary_material(&self) -> PlaneMaterial {
        PlaneMaterial::Surface {
            descriptor: self.pair.primary.clone(),
            texture: self.texture.clone(),
        }
    }

    /// The material for both mirror panels.
    pub fn mirrored_material(&self) -> PlaneMaterial {
        PlaneMaterial::Surface {
            descriptor: self.pair.mirrored.clone(),
            texture: self.texture.clone(),
        }
    }
}

/// Loads the pair's texture from `source`.
///
/// Fails with [`TerrariumError::AssetMissing`] when the source has no such
/// texture. A pair without a texture resolves to itself.
pub fn try_resolve(
    pair: &MaterialPair,
    source: &dyn TextureSource,
) -> Result<ResolvedMaterials, TerrariumError> {
    let Some(texture_ref) = pair.primary.texture.as_ref() else {
        return Ok(ResolvedMaterials {
            pair: pair.clone(),
            texture: None,
            placeholder_used: pair.primary.is_placeholder(),
        });
    };

    let texture = source
        .load(texture_ref)
        .ok_or_else(|| TerrariumError::AssetMissing {
            name: texture_ref.name.clone(),
        })?;

    Ok(ResolvedMaterials {
        pair: pair.clone(),
        texture: Some(texture),
        placeholder_used: false,
    })
}

/// Like [`try_resolve`], but substitutes the placeholder pair when the texture is missing.
pub fn resolve_or_placeholder(pair: &MaterialPair, source: &dyn TextureSource) -> ResolvedMaterials {
    match try_resolve(pair, source) {
        Ok(resolved) => resolved,
        Err(err) => {
            log::warn!("{err}; using placeholder material.");
            ResolvedMaterials {
                pair: MaterialPair::placeholder(),
                texture: None,
                placeholder_used: true,
            }
        }
    }
}
