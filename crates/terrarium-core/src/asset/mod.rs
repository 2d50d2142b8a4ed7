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

//! Provides the foundational traits and primitive types for textures and materials.
//!
//! This module only describes assets. It has no knowledge of how image files are
//! decoded or where they live; that is the job of a [`TextureSource`]
//! implementation supplied by the host application.
//!
//! The key components are:
//! - The [`Asset`] trait: a marker for all types that can be shared as assets.
//! - [`AssetHandle`] and [`AssetUUID`]: shared ownership and stable identity.
//! - [`TextureRef`] and [`Texture`]: what a material points at, and what it resolves to.
//! - The material descriptors in [`materials`].

mod handle;
pub mod materials;
mod texture;
mod id;

pub use handle::*;
pub use materials::*;
pub use texture::*;
pub use id::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits guarantee the asset can be shared with a render thread.
///
/// # Examples
///
/// ```
/// use terrarium_core::asset::Asset;
///
/// struct Mesh {
///     // ... fields
/// }
///
/// impl Asset for Mesh {}
/// ```
pub trait Asset: Send + Sync + 'static {}
