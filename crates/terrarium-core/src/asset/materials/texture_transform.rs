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

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// A 2D affine transform applied to texture coordinates: `uv' = uv * scale + offset`.
///
/// Only touches how the image is sampled. Geometry and shading are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureTransform {
    /// Per-axis scale, applied first.
    pub scale: Vec2,
    /// Translation applied after scaling.
    pub offset: Vec2,
}

impl TextureTransform {
    /// Samples the image unchanged.
    pub const IDENTITY: Self = Self {
        scale: Vec2::ONE,
        offset: Vec2::ZERO,
    };

    /// Flips the image horizontally inside the unit square: `u' = 1 - u`.
    ///
    /// Scale `u` by -1, then translate by one texture width.
    pub const MIRROR_U: Self = Self {
        scale: Vec2::new(-1.0, 1.0),
        offset: Vec2::new(1.0, 0.0),
    };

    /// Maps a texture coordinate through the transform.
    #[inline]
    pub fn apply(&self, uv: Vec2) -> Vec2 {
        uv * self.scale + self.offset
    }
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
