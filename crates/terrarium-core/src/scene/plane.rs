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

use crate::asset::{AssetHandle, HighlightMaterial, MaterialDescriptor, Texture};
use crate::math::{Quaternion, Vec3, FRAC_PI_2};

/// Placement of a flat rectangle relative to its anchor.
///
/// Planes are authored upright in their local XY plane. The fixed tilt lays
/// them into the anchor's XZ plane, which is where an image anchor's picture
/// lies. After the tilt, local +Y points along anchor -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneTransform {
    /// Center of the plane in anchor space, in meters.
    pub position: Vec3,
    /// Orientation relative to the anchor.
    pub rotation: Quaternion,
    /// Extent along the plane's local X axis.
    pub width: f32,
    /// Extent along the plane's local Y axis.
    pub height: f32,
}

impl PlaneTransform {
    /// The tilt about the X axis applied to every overlay plane: -90 degrees.
    pub const TILT_X: f32 = -FRAC_PI_2;

    /// Creates a plane lying flat in the anchor plane, centered on `position`.
    pub fn flat(position: Vec3, width: f32, height: f32) -> Self {
        Self {
            position,
            rotation: Quaternion::from_rotation_x(Self::TILT_X),
            width,
            height,
        }
    }

    /// Returns the same plane moved along the anchor's lateral (X) axis.
    #[must_use]
    pub fn shifted_x(&self, dx: f32) -> Self {
        Self {
            position: self.position.with_x(self.position.x + dx),
            ..*self
        }
    }

    /// Maps a point from the plane's local space into anchor space.
    pub fn to_anchor_space(&self, local: Vec3) -> Vec3 {
        self.rotation.rotate_vec3(local) + self.position
    }

    /// The four corners in anchor space, counter-clockwise from the local
    /// bottom-left (`-w/2, -h/2`).
    pub fn corners(&self) -> [Vec3; 4] {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        [
            self.to_anchor_space(Vec3::new(-hw, -hh, 0.0)),
            self.to_anchor_space(Vec3::new(hw, -hh, 0.0)),
            self.to_anchor_space(Vec3::new(hw, hh, 0.0)),
            self.to_anchor_space(Vec3::new(-hw, hh, 0.0)),
        ]
    }

    /// The lateral extent `(min_x, max_x)` in anchor space.
    pub fn x_extent(&self) -> (f32, f32) {
        self.corners()
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), c| {
                (lo.min(c.x), hi.max(c.x))
            })
    }
}

/// Which overlay plane an attachment request represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneRole {
    /// The window itself, adjacent to the marker.
    Window,
    /// The mirrored panel one window-width to the left.
    LeftMirror,
    /// The mirrored panel one window-width to the right.
    RightMirror,
    /// The marker-sized highlight shown only in debug mode.
    DebugOverlay,
}

/// What a plane is painted with.
#[derive(Debug, Clone)]
pub enum PlaneMaterial {
    /// A window image, with the resolved texture when one was found.
    Surface {
        /// The material description.
        descriptor: MaterialDescriptor,
        /// The loaded texture; `None` for the placeholder.
        texture: Option<AssetHandle<Texture>>,
    },
    /// A translucent, untextured fill.
    Highlight(HighlightMaterial),
}

impl PlaneMaterial {
    /// Returns the surface descriptor, if this is a surface material.
    pub fn descriptor(&self) -> Option<&MaterialDescriptor> {
        match self {
            PlaneMaterial::Surface { descriptor, .. } => Some(descriptor),
            PlaneMaterial::Highlight(_) => None,
        }
    }
}

/// A request to add one plane as a child of an anchor node.
#[derive(Debug, Clone)]
pub struct PlaneAttachment {
    /// Which plane this is.
    pub role: PlaneRole,
    /// Where it goes, relative to the anchor.
    pub transform: PlaneTransform,
    /// How it is painted.
    pub material: PlaneMaterial,
}
