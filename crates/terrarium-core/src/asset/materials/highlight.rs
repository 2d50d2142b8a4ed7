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

use crate::math::LinearRgba;

/// A translucent, untextured fill used to visualize where a marker was detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightMaterial {
    /// Fill color.
    pub color: LinearRgba,
    /// Node opacity, in `[0, 1]`.
    pub opacity: f32,
}

impl HighlightMaterial {
    /// The debug overlay: plain white at a quarter opacity.
    pub const DEBUG: Self = Self {
        color: LinearRgba::WHITE,
        opacity: 0.25,
    };
}

impl Default for HighlightMaterial {
    fn default() -> Self {
        Self::DEBUG
    }
}
