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

//! Layout Lane
//!
//! Places the window and its two mirror panels next to a detected marker.

pub mod geometry;

use terrarium_core::lane::{Lane, LaneKind};
use terrarium_core::scene::PlaneTransform;
use terrarium_core::{MarkerDescriptor, TerrariumError, WindowSize};

/// The three planes making up the terrarium, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSet {
    /// The mirror panel left of the window.
    pub left: PlaneTransform,
    /// The window itself.
    pub primary: PlaneTransform,
    /// The mirror panel right of the window.
    pub right: PlaneTransform,
}

/// The layout strategy for a square window with mirrored side panels.
///
/// Holds only the window size, fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLayoutLane {
    window_size: WindowSize,
}

impl WindowLayoutLane {
    /// Creates a lane laying out windows of the given size.
    pub fn new(window_size: WindowSize) -> Self {
        Self { window_size }
    }

    /// The window size this lane was built with.
    pub fn window_size(&self) -> WindowSize {
        self.window_size
    }

    /// See [`geometry::primary_plane`].
    pub fn primary_plane(&self, marker: &MarkerDescriptor) -> Result<PlaneTransform, TerrariumError> {
        geometry::primary_plane(marker, self.window_size)
    }

    /// See [`geometry::left_plane`].
    pub fn left_plane(&self, marker: &MarkerDescriptor) -> Result<PlaneTransform, TerrariumError> {
        geometry::left_plane(marker, self.window_size)
    }

    /// See [`geometry::right_plane`].
    pub fn right_plane(&self, marker: &MarkerDescriptor) -> Result<PlaneTransform, TerrariumError> {
        geometry::right_plane(marker, self.window_size)
    }

    /// See [`geometry::debug_overlay`].
    pub fn debug_overlay(&self, marker: &MarkerDescriptor) -> Result<PlaneTransform, TerrariumError> {
        geometry::debug_overlay(marker)
    }

    /// Computes all three planes at once, validating the marker a single time.
    pub fn layout(&self, marker: &MarkerDescriptor) -> Result<PlaneSet, TerrariumError> {
        let primary = self.primary_plane(marker)?;
        let step = self.window_size.get();
        Ok(PlaneSet {
            left: primary.shifted_x(-step),
            primary,
            right: primary.shifted_x(step),
        })
    }
}

impl Lane for WindowLayoutLane {
    fn strategy_name(&self) -> &'static str {
        "WindowLayout"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_individual_planes() {
        let lane = WindowLayoutLane::new(WindowSize::new(0.3).unwrap());
        let marker = MarkerDescriptor::new("logo", 0.12, 0.09);

        let set = lane.layout(&marker).unwrap();
        assert_eq!(set.primary, lane.primary_plane(&marker).unwrap());
        assert_eq!(set.left, lane.left_plane(&marker).unwrap());
        assert_eq!(set.right, lane.right_plane(&marker).unwrap());
    }

    #[test]
    fn test_lane_identity() {
        let lane = WindowLayoutLane::default();
        assert_eq!(lane.strategy_name(), "WindowLayout");
        assert_eq!(lane.lane_kind(), LaneKind::Layout);
        assert_eq!(lane.window_size(), WindowSize::DEFAULT);
    }
}
