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

//! Defines the error type shared by every terrarium crate.
//!
//! Anchors detected after the first one are *not* errors: they are silently
//! ignored by the anchor lock and never surface here.

use std::fmt;

/// An error raised by the overlay's configuration, geometry or asset handling.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrariumError {
    /// The reference-image catalog could not be found, so no session can start.
    ConfigurationMissing {
        /// The name of the reference-image group that was looked up.
        group: String,
    },
    /// A size that must be strictly positive was zero, negative or not finite.
    InvalidConfiguration {
        /// The name of the offending field (e.g. `window_size`).
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A texture asset required by a material could not be located.
    AssetMissing {
        /// The asset name that was requested.
        name: String,
    },
}

impl TerrariumError {
    /// Checks that `value` is finite and strictly positive.
    ///
    /// No clamping is performed: anything else is an `InvalidConfiguration`.
    pub fn require_positive(field: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(TerrariumError::InvalidConfiguration { field, value })
        }
    }
}

impl fmt::Display for TerrariumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrariumError::ConfigurationMissing { group } => {
                write!(f, "Reference image group '{group}' is missing")
            }
            TerrariumError::InvalidConfiguration { field, value } => {
                write!(f, "Invalid configuration: '{field}' must be > 0, got {value}")
            }
            TerrariumError::AssetMissing { name } => {
                write!(f, "Texture asset '{name}' could not be located")
            }
        }
    }
}

impl std::error::Error for TerrariumError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(TerrariumError::require_positive("window_size", 0.3), Ok(0.3));
        assert_eq!(
            TerrariumError::require_positive("window_size", 0.0),
            Err(TerrariumError::InvalidConfiguration {
                field: "window_size",
                value: 0.0
            })
        );
        assert!(TerrariumError::require_positive("width", -0.1).is_err());
        assert!(TerrariumError::require_positive("width", f32::NAN).is_err());
        assert!(TerrariumError::require_positive("width", f32::INFINITY).is_err());
    }

    #[test]
    fn test_display_names_the_field() {
        let err = TerrariumError::InvalidConfiguration {
            field: "physical_height",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: 'physical_height' must be > 0, got -1"
        );
    }
}
