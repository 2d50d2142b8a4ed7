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

//! The set of reference images the runtime is asked to detect.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use terrarium_core::MarkerDescriptor;

use crate::config::ConfigError;

/// One printed marker the runtime should recognize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// Stable name, reported back as the marker identifier on detection.
    pub name: String,
    /// Physical width in meters.
    pub physical_width: f32,
    /// Physical height in meters.
    pub physical_height: f32,
}

impl ReferenceImage {
    /// Creates a new reference image entry.
    pub fn new(name: impl Into<String>, physical_width: f32, physical_height: f32) -> Self {
        Self {
            name: name.into(),
            physical_width,
            physical_height,
        }
    }

    /// The descriptor the runtime reports when this image is detected.
    pub fn descriptor(&self) -> MarkerDescriptor {
        MarkerDescriptor::new(self.name.clone(), self.physical_width, self.physical_height)
    }
}

/// A named group of reference images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImageCatalog {
    /// The group name, matched against the configured reference group.
    pub group: String,
    /// The images in the group.
    pub images: Vec<ReferenceImage>,
}

impl ReferenceImageCatalog {
    /// Builds a catalog and validates every image size.
    pub fn new(group: impl Into<String>, images: Vec<ReferenceImage>) -> Result<Self, ConfigError> {
        let catalog = Self {
            group: group.into(),
            images,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog written in RON.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let catalog: Self = ron::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog written in JSON.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file. `.json` files are parsed as JSON, anything else as RON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_ron_str(&text)?,
        };
        log::info!(
            "Loaded reference group '{}' with {} image(s) from '{}'.",
            catalog.group,
            catalog.images.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Looks for `<dir>/<group>.ron`, then `<dir>/<group>.json`.
    ///
    /// Returns `Ok(None)` when neither file exists. That is a normal outcome:
    /// the overlay then refuses to start tracking instead of failing.
    pub fn find_group(dir: impl AsRef<Path>, group: &str) -> Result<Option<Self>, ConfigError> {
        let dir = dir.as_ref();
        let candidate = ["ron", "json"]
            .iter()
            .map(|ext| dir.join(format!("{group}.{ext}")))
            .find(|path: &PathBuf| path.is_file());

        match candidate {
            Some(path) => Self::load(path).map(Some),
            None => {
                log::debug!("No catalog file for group '{}' in '{}'.", group, dir.display());
                Ok(None)
            }
        }
    }

    /// Checks that every image has a strictly positive physical size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for image in &self.images {
            image.descriptor().validate()?;
        }
        if self.images.is_empty() {
            log::warn!("Reference group '{}' contains no images.", self.group);
        }
        Ok(())
    }

    /// Finds an image by name.
    pub fn get(&self, name: &str) -> Option<&ReferenceImage> {
        self.images.iter().find(|image| image.name == name)
    }

    /// The descriptors handed to the runtime as detection targets.
    pub fn descriptors(&self) -> Vec<MarkerDescriptor> {
        self.images.iter().map(ReferenceImage::descriptor).collect()
    }

    /// Number of images in the group.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the group holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
