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

//! # Terrarium Lanes
//!
//! The pure computations behind the overlay. Nothing here holds mutable
//! state, so every lane can be shared freely between threads.
//!
//! - [`layout_lane`]: where the window, its mirrors and the debug overlay go.
//! - [`material_lane`]: which window image a marker gets, and how it resolves.

#![warn(missing_docs)]

pub mod layout_lane;
pub mod material_lane;

pub use layout_lane::{PlaneSet, WindowLayoutLane};
pub use material_lane::{MaterialSelector, ResolvedMaterials, WindowVariant};
