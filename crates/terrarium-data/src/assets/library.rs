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

use terrarium_core::asset::{AssetHandle, Texture, TextureRef, TextureSource};

use super::Assets;

/// A [`TextureSource`] backed by textures registered up front.
///
/// Textures are keyed by the stable id derived from their bundle name, so a
/// [`TextureRef`] built anywhere in the process finds the same entry.
#[derive(Default, Clone)]
pub struct TextureLibrary {
    textures: Assets<Texture>,
}

impl TextureLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture under its own name and returns its handle.
    pub fn insert(&mut self, texture: Texture) -> AssetHandle<Texture> {
        let id = TextureRef::named(texture.name.as_str()).id;
        let handle = AssetHandle::new(texture);
        self.textures.insert(id, handle.clone());
        handle
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, texture: Texture) -> Self {
        self.insert(texture);
        self
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if no texture is registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureSource for TextureLibrary {
    fn load(&self, texture: &TextureRef) -> Option<AssetHandle<Texture>> {
        let found = self.textures.get(&texture.id).cloned();
        if found.is_none() {
            log::trace!("Texture '{}' is not in the library.", texture.name);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(name: &str) -> Texture {
        Texture {
            name: name.to_string(),
            width: 1024,
            height: 1024,
        }
    }

    #[test]
    fn test_load_returns_cached_handle() {
        let mut library = TextureLibrary::new();
        let inserted = library.insert(texture("terrarium-window-dark"));

        let loaded = library
            .load(&TextureRef::named("terrarium-window-dark"))
            .unwrap();
        assert!(loaded.ptr_eq(&inserted));
        assert_eq!(loaded.width, 1024);
    }

    #[test]
    fn test_unknown_texture_is_none() {
        let library = TextureLibrary::new().with(texture("a"));
        assert_eq!(library.len(), 1);
        assert!(library.load(&TextureRef::named("b")).is_none());
    }
}
