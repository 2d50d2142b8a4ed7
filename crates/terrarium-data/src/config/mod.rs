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

//! Overlay configuration.
//!
//! The configuration is an immutable value built once at startup and handed to
//! the layout and material lanes by value. There is no global mutable state.
//!
//! ```ron
//! (
//!     window_size: 0.3,
//!     debug: false,
//!     reference_group: "AR Resources",
//! )
//! ```

mod error;

pub use error::ConfigError;

use std::path::Path;

use serde::{Deserialize, Serialize};
use terrarium_core::session::{EnvironmentTexturing, LightingConfig};
use terrarium_core::{TerrariumError, WindowSize};

/// The name of the reference-image group the overlay looks for by default.
pub const DEFAULT_REFERENCE_GROUP: &str = "AR Resources";

/// Process-wide overlay settings.
///
/// Deserializing goes through the same validation as [`from_ron_str`](Self::from_ron_str).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct TerrariumConfig {
    /// Edge length of the square window, in meters.
    pub window_size: WindowSize,
    /// Attach a translucent highlight over the detected marker.
    pub debug: bool,
    /// Lighting hints forwarded to the renderer.
    pub lighting: LightingConfig,
    /// The reference-image group to detect.
    pub reference_group: String,
    /// Environment texturing requested from the runtime.
    pub environment_texturing: EnvironmentTexturing,
}

impl Default for TerrariumConfig {
    fn default() -> Self {
        Self {
            window_size: WindowSize::DEFAULT,
            debug: false,
            lighting: LightingConfig::default(),
            reference_group: DEFAULT_REFERENCE_GROUP.to_string(),
            environment_texturing: EnvironmentTexturing::Automatic,
        }
    }
}

impl TerrariumConfig {
    /// Returns a copy with a different window size, rejecting non-positive values.
    pub fn with_window_size(self, meters: f32) -> Result<Self, TerrariumError> {
        Ok(Self {
            window_size: WindowSize::new(meters)?,
            ..self
        })
    }

    /// Returns a copy with the debug overlay switched on or off.
    #[must_use]
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Parses a configuration from RON text. Missing fields take their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = ron::from_str(text)?;
        Ok(Self::try_from(file)?)
    }

    /// Reads and parses a RON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        log::info!(
            "Loaded configuration from '{}' (window {} m, debug {}).",
            path.display(),
            config.window_size.get(),
            config.debug
        );
        Ok(config)
    }
}

/// On-disk shape of the configuration, validated into [`TerrariumConfig`].
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    window_size: f32,
    debug: bool,
    lighting: LightingConfig,
    reference_group: String,
    environment_texturing: EnvironmentTexturing,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = TerrariumConfig::default();
        Self {
            window_size: defaults.window_size.get(),
            debug: defaults.debug,
            lighting: defaults.lighting,
            reference_group: defaults.reference_group,
            environment_texturing: defaults.environment_texturing,
        }
    }
}

impl TryFrom<ConfigFile> for TerrariumConfig {
    type Error = TerrariumError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        Ok(Self {
            window_size: WindowSize::new(file.window_size)?,
            debug: file.debug,
            lighting: file.lighting,
            reference_group: file.reference_group,
            environment_texturing: file.environment_texturing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_physical_window() {
        let config = TerrariumConfig::default();
        assert_eq!(config.window_size.get(), 0.3);
        assert!(!config.debug);
        assert_eq!(config.reference_group, "AR Resources");
        assert_eq!(config.environment_texturing, EnvironmentTexturing::Automatic);
        assert!(config.lighting.auto_default_lighting);
        assert!(config.lighting.auto_update_lighting);
    }

    #[test]
    fn test_parse_partial_ron() {
        let config = TerrariumConfig::from_ron_str("(window_size: 0.5, debug: true)").unwrap();
        assert_eq!(config.window_size.get(), 0.5);
        assert!(config.debug);
        assert_eq!(config.reference_group, DEFAULT_REFERENCE_GROUP);
    }

    #[test]
    fn test_parse_environment_texturing() {
        let config = TerrariumConfig::from_ron_str("(environment_texturing: Manual)").unwrap();
        assert_eq!(config.environment_texturing, EnvironmentTexturing::Manual);
    }

    #[test]
    fn test_non_positive_window_size_is_invalid_configuration() {
        let err = TerrariumConfig::from_ron_str("(window_size: 0.0)").unwrap_err();
        assert_eq!(
            err.as_terrarium_error(),
            Some(&TerrariumError::InvalidConfiguration {
                field: "window_size",
                value: 0.0
            })
        );

        assert!(TerrariumConfig::default().with_window_size(-1.0).is_err());
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        let err = TerrariumConfig::from_ron_str("(window_size: \"big\")").unwrap_err();
        assert!(matches!(err, ConfigError::Ron(_)));
    }

    #[test]
    fn test_serde_round_trip_keeps_validation() {
        let text = ron::to_string(&TerrariumConfig::default().with_debug(true)).unwrap();
        let parsed: TerrariumConfig = ron::from_str(&text).unwrap();
        assert!(parsed.debug);

        assert!(ron::from_str::<TerrariumConfig>("(window_size: -2.0)").is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = TerrariumConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terrarium.ron");
        std::fs::write(&path, "(window_size: 0.25, reference_group: \"Lobby\")").unwrap();

        let config = TerrariumConfig::load(&path).unwrap();
        assert_eq!(config.window_size.get(), 0.25);
        assert_eq!(config.reference_group, "Lobby");
    }
}
