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

//! Anchor events delivered by the AR runtime, and the per-session lock state.

use serde::{Deserialize, Serialize};

use crate::marker::MarkerDescriptor;
use crate::scene::NodeId;

/// Whether the current tracking session has already placed the overlay.
///
/// The only transition inside a session is `Searching -> Found`. A session
/// restart puts it back to `Searching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum LockState {
    /// No marker has been admitted yet.
    #[default]
    Searching = 0,
    /// A marker was admitted; every later detection is ignored.
    Found = 1,
}

impl LockState {
    /// Returns the raw discriminant, for storage in an atomic.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a discriminant produced by [`as_u8`](Self::as_u8).
    ///
    /// Any non-zero value decodes to `Found`.
    #[inline]
    pub const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => LockState::Searching,
            _ => LockState::Found,
        }
    }
}

/// The kind of anchor the runtime just added to its scene.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorKind {
    /// A recognized reference image.
    Image(MarkerDescriptor),
    /// A detected horizontal or vertical surface.
    Plane,
    /// Any other anchor type (faces, objects, user anchors...).
    Other,
}

/// Notification that the runtime added a node for a new anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorEvent {
    /// The scene node the runtime created for the anchor. Planes are attached to it.
    pub node: NodeId,
    /// What was recognized.
    pub kind: AnchorKind,
}

impl AnchorEvent {
    /// Convenience constructor for an image anchor.
    pub fn image(node: NodeId, marker: MarkerDescriptor) -> Self {
        Self {
            node,
            kind: AnchorKind::Image(marker),
        }
    }

    /// Returns the marker if this is an image anchor.
    pub fn marker(&self) -> Option<&MarkerDescriptor> {
        match &self.kind {
            AnchorKind::Image(marker) => Some(marker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_state_round_trips_through_u8() {
        assert_eq!(LockState::from_u8(LockState::Searching.as_u8()), LockState::Searching);
        assert_eq!(LockState::from_u8(LockState::Found.as_u8()), LockState::Found);
        assert_eq!(LockState::default(), LockState::Searching);
    }

    #[test]
    fn test_only_image_anchors_expose_a_marker() {
        let node = NodeId::new(3);
        let image = AnchorEvent::image(node, MarkerDescriptor::new("logo", 0.1, 0.1));
        assert_eq!(image.marker().map(|m| m.identifier.as_str()), Some("logo"));

        let plane = AnchorEvent {
            node,
            kind: AnchorKind::Plane,
        };
        assert!(plane.marker().is_none());
    }
}
