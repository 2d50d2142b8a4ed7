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

//! Defines the textured PBR surface used by the window and mirror planes.

use serde::{Deserialize, Serialize};

use super::{LightingModel, TextureTransform};
use crate::asset::TextureRef;
use crate::math::LinearRgba;

/// A physically-based material showing a captured window image.
///
/// The metallic-roughness parameters give the image a reflective sheen so it
/// picks up the estimated real-world lighting on top of the picture.
///
/// # Examples
///
/// ```
/// use terrarium_core::asset::{MaterialDescriptor, TextureRef, TextureTransform};
///
/// let primary = MaterialDescriptor::textured(TextureRef::named("terrarium-window-dark"));
/// let mirror = primary.as_mirrored();
///
/// assert_eq!(mirror.texture_transform(), TextureTransform::MIRROR_U);
/// assert_eq!(mirror.metalness, primary.metalness);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    /// The diffuse image. `None` only for the placeholder material.
    pub texture: Option<TextureRef>,

    /// Multiplied with the texture; the flat color when there is no texture.
    pub base_color: LinearRgba,

    /// The shading model.
    pub lighting_model: LightingModel,

    /// The metalness factor (0.0 = dielectric, 1.0 = metal).
    pub metalness: f32,

    /// The roughness factor (0.0 = mirror-smooth, 1.0 = rough).
    pub roughness: f32,

    /// When set, the image is flipped horizontally through [`TextureTransform::MIRROR_U`].
    pub mirrored: bool,
}

impl MaterialDescriptor {
    /// Metalness shared by every window material.
    pub const METALNESS: f32 = 0.5;
    /// Roughness shared by every window material.
    pub const ROUGHNESS: f32 = 0.0;

    /// Creates the standard window material showing `texture`.
    pub fn textured(texture: TextureRef) -> Self {
        Self {
            texture: Some(texture),
            base_color: LinearRgba::WHITE,
            ..Self::placeholder()
        }
    }

    /// An untextured stand-in used when the window image cannot be located.
    ///
    /// Keeps the same lighting parameters as a real window material.
    pub fn placeholder() -> Self {
        Self {
            texture: None,
            base_color: LinearRgba::MAGENTA,
            lighting_model: LightingModel::PhysicallyBased,
            metalness: Self::METALNESS,
            roughness: Self::ROUGHNESS,
            mirrored: false,
        }
    }

    /// Returns a copy that differs only by having the mirror flag set.
    pub fn as_mirrored(&self) -> Self {
        Self {
            mirrored: true,
            ..self.clone()
        }
    }

    /// Returns `true` if this is the untextured placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.texture.is_none()
    }

    /// The texture-coordinate transform implied by the mirror flag.
    pub fn texture_transform(&self) -> TextureTransform {
        if self.mirrored {
            TextureTransform::MIRROR_U
        } else {
            TextureTransform::IDENTITY
        }
    }
}

/// The two materials produced for one marker: the window itself and its mirrors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPair {
    /// Applied to the primary window plane.
    pub primary: MaterialDescriptor,
    /// Applied to both the left and right planes.
    pub mirrored: MaterialDescriptor,
}

impl MaterialPair {
    /// Builds the pair, deriving the mirrored material from `primary`.
    pub fn from_primary(primary: MaterialDescriptor) -> Self {
        let mirrored = primary.as_mirrored();
        Self { primary, mirrored }
    }

    /// The pair used when the window image is missing.
    pub fn placeholder() -> Self {
        Self::from_primary(MaterialDescriptor::placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textured_material_defaults() {
        let m = MaterialDescriptor::textured(TextureRef::named("window"));
        assert_eq!(m.texture, Some(TextureRef::named("window")));
        assert_eq!(m.lighting_model, LightingModel::PhysicallyBased);
        assert_eq!(m.metalness, 0.5);
        assert_eq!(m.roughness, 0.0);
        assert!(!m.mirrored);
        assert_eq!(m.texture_transform(), TextureTransform::IDENTITY);
    }

    #[test]
    fn test_mirrored_differs_only_by_flag() {
        let pair = MaterialPair::from_primary(MaterialDescriptor::textured(TextureRef::named("w")));
        assert!(pair.mirrored.mirrored);
        assert_eq!(
            MaterialDescriptor {
                mirrored: false,
                ..pair.mirrored.clone()
            },
            pair.primary
        );
    }

    #[test]
    fn test_placeholder_keeps_lighting() {
        let pair = MaterialPair::placeholder();
        assert!(pair.primary.is_placeholder());
        assert!(pair.mirrored.is_placeholder());
        assert_eq!(pair.primary.metalness, MaterialDescriptor::METALNESS);
        assert_eq!(pair.primary.roughness, MaterialDescriptor::ROUGHNESS);
        assert!(pair.mirrored.mirrored);
    }
}
