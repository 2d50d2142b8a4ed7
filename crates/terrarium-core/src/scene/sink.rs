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

use super::PlaneAttachment;

/// An opaque handle to a node in the external scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Wraps a raw node index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw node index.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// The rendering collaborator's side of plane attachment.
///
/// Implementations own the created nodes. A fake sink recording requests is
/// enough to test everything upstream of rendering.
pub trait SceneSink {
    /// Adds `plane` as a child of `parent` and returns the new node.
    fn add_child(&mut self, parent: NodeId, plane: PlaneAttachment) -> NodeId;
}
