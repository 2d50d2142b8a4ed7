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

//! Groups the value types and contracts used to place planes in the external scene graph.
//!
//! The overlay never owns rendering nodes. It computes [`PlaneTransform`]s and
//! materials, bundles them as [`PlaneAttachment`] requests, and hands those to a
//! [`SceneSink`], which owns the long-lived nodes from then on.

mod plane;
mod sink;

pub use plane::*;
pub use sink::*;
