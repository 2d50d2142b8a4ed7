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

use terrarium_core::asset::TextureRef;

/// The captured window images shipped with the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowVariant {
    /// Night-time capture, paired with the dark-toned marker.
    Dark,
    /// Warm daylight capture, used for every other marker.
    LightUnnaturalWarm,
}

impl WindowVariant {
    /// The identifier of the dark-toned marker.
    pub const DARK_MARKER: &'static str = "city-science-logo-dark";

    /// Picks the variant for a marker. Never fails: unknown markers get the light variant.
    pub fn for_marker(identifier: &str) -> Self {
        match identifier {
            Self::DARK_MARKER => WindowVariant::Dark,
            _ => WindowVariant::LightUnnaturalWarm,
        }
    }

    /// The bundle name of the variant's image.
    pub const fn texture_name(self) -> &'static str {
        match self {
            WindowVariant::Dark => "terrarium-window-dark",
            WindowVariant::LightUnnaturalWarm => "terrarium-window-light-unnatural-warm",
        }
    }

    /// A reference to the variant's image.
    pub fn texture(self) -> TextureRef {
        TextureRef::named(self.texture_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_marker_gets_dark_window() {
        let variant = WindowVariant::for_marker("city-science-logo-dark");
        assert_eq!(variant, WindowVariant::Dark);
        assert_eq!(variant.texture_name(), "terrarium-window-dark");
    }

    #[test]
    fn test_everything_else_gets_light_window() {
        for id in ["anything-else", "", "city-science-logo-light", "CITY-SCIENCE-LOGO-DARK"] {
            let variant = WindowVariant::for_marker(id);
            assert_eq!(variant, WindowVariant::LightUnnaturalWarm, "identifier {id:?}");
            assert_eq!(variant.texture().name, "terrarium-window-light-unnatural-warm");
        }
    }
}
