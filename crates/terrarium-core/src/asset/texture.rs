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

use super::{Asset, AssetHandle, AssetUUID};

/// A by-name reference to a texture asset bundled with the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureRef {
    /// The bundle name of the image (without extension).
    pub name: String,
    /// Stable id derived from `name`.
    pub id: AssetUUID,
}

impl TextureRef {
    /// Creates a reference to the texture called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = AssetUUID::from_name(&name);
        Self { name, id }
    }
}

/// A decoded texture, as handed out by a [`TextureSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// The bundle name the texture was loaded from.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Asset for Texture {}

/// Locates bundled texture assets by name.
///
/// Implemented by the host application (image bundle, asset catalog, VFS...).
pub trait TextureSource: Send + Sync {
    /// Returns a handle to the texture, or `None` if no such asset exists.
    fn load(&self, texture: &TextureRef) -> Option<AssetHandle<Texture>>;
}
