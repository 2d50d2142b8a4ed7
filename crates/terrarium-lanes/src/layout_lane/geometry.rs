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

//! Free functions computing each overlay plane from a marker and a window size.
//!
//! All positions are in anchor space, where the marker is centered on the
//! origin and lies in the XZ plane. X is the lateral axis; -Z points towards
//! the marker's top edge.

use terrarium_core::math::Vec3;
use terrarium_core::scene::PlaneTransform;
use terrarium_core::{MarkerDescriptor, TerrariumError, WindowSize};

/// The window plane, flush against the marker's right edge.
///
/// Its center sits `w/2 + s/2` to the side of the marker center and
/// `(h + s)/2` towards the marker's top, where `w`/`h` are the marker's
/// physical size and `s` the window size.
pub fn primary_plane(
    marker: &MarkerDescriptor,
    window_size: WindowSize,
) -> Result<PlaneTransform, TerrariumError> {
    marker.validate()?;
    let size = window_size.get();

    let lateral = 0.5 * marker.physical_width + 0.5 * size;
    let depth = -0.5 * (marker.physical_height + size);

    Ok(PlaneTransform::flat(Vec3::new(lateral, 0.0, depth), size, size))
}

/// The mirror panel one window width to the left of the window.
pub fn left_plane(
    marker: &MarkerDescriptor,
    window_size: WindowSize,
) -> Result<PlaneTransform, TerrariumError> {
    Ok(primary_plane(marker, window_size)?.shifted_x(-window_size.get()))
}

/// The mirror panel one window width to the right of the window.
pub fn right_plane(
    marker: &MarkerDescriptor,
    window_size: WindowSize,
) -> Result<PlaneTransform, TerrariumError> {
    Ok(primary_plane(marker, window_size)?.shifted_x(window_size.get()))
}

/// A marker-sized plane over the marker itself.
pub fn debug_overlay(marker: &MarkerDescriptor) -> Result<PlaneTransform, TerrariumError> {
    marker.validate()?;
    Ok(PlaneTransform::flat(
        Vec3::ZERO,
        marker.physical_width,
        marker.physical_height,
    ))
}
