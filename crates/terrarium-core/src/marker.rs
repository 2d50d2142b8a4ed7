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

//! Physical descriptions of a detected marker and of the overlay window.

use serde::{Deserialize, Serialize};

use crate::error::TerrariumError;

/// The identity and physical size of a recognized reference image.
///
/// Supplied by the AR runtime with every image-anchor event. Sizes are in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    /// The stable name of the reference image (e.g. `city-science-logo-dark`).
    pub identifier: String,
    /// Physical width of the printed marker.
    pub physical_width: f32,
    /// Physical height of the printed marker.
    pub physical_height: f32,
}

impl MarkerDescriptor {
    /// Creates a new descriptor. Call [`validate`](Self::validate) before using it for layout.
    pub fn new(identifier: impl Into<String>, physical_width: f32, physical_height: f32) -> Self {
        Self {
            identifier: identifier.into(),
            physical_width,
            physical_height,
        }
    }

    /// Fails with `InvalidConfiguration` unless both dimensions are strictly positive.
    pub fn validate(&self) -> Result<(), TerrariumError> {
        TerrariumError::require_positive("physical_width", self.physical_width)?;
        TerrariumError::require_positive("physical_height", self.physical_height)?;
        Ok(())
    }
}

/// The edge length of the square terrarium window, in meters.
///
/// Always strictly positive: the only way to build one is through
/// [`WindowSize::new`], which also guards deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct WindowSize(f32);

impl WindowSize {
    /// The physical window the overlay was designed for: 12 inches.
    pub const DEFAULT: WindowSize = WindowSize(0.3);

    /// Creates a window size, rejecting zero, negative or non-finite values.
    pub fn new(meters: f32) -> Result<Self, TerrariumError> {
        TerrariumError::require_positive("window_size", meters).map(Self)
    }

    /// Returns the edge length in meters.
    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for WindowSize {
    type Error = TerrariumError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WindowSize> for f32 {
    fn from(size: WindowSize) -> Self {
        size.0
    }
}
