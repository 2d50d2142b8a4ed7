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

//! # Terrarium Core
//!
//! Foundational crate containing the value types, math primitives and
//! collaborator contracts of the terrarium window overlay.
//!
//! Nothing in this crate talks to a camera or a renderer. The AR runtime and
//! the scene graph are modelled as traits ([`session::ArSession`],
//! [`scene::SceneSink`], [`asset::TextureSource`]) implemented elsewhere.

#![warn(missing_docs)]

pub mod asset;
pub mod error;
pub mod event;
pub mod lane;
pub mod marker;
pub mod math;
pub mod scene;
pub mod session;
pub mod tracking;

pub use error::TerrariumError;
pub use marker::{MarkerDescriptor, WindowSize};
pub use tracking::LockState;
