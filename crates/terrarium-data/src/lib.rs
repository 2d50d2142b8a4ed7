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

//! # Terrarium Data
//!
//! Data layouts for the overlay: the immutable configuration, the
//! reference-image catalog, an in-memory scene graph and texture storage.

#![warn(missing_docs)]

pub mod assets;
pub mod catalog;
pub mod config;
pub mod scene;

pub use catalog::{ReferenceImage, ReferenceImageCatalog};
pub use config::{ConfigError, TerrariumConfig};
