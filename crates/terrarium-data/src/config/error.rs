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

use std::path::PathBuf;

use terrarium_core::TerrariumError;
use thiserror::Error;

/// An error raised while loading configuration or catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid RON for the expected type.
    #[error("failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// The text is not valid JSON for the expected type.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed but holds values the overlay cannot use.
    #[error(transparent)]
    Invalid(#[from] TerrariumError),
}

impl ConfigError {
    /// Returns the underlying overlay error, if this is a validation failure.
    pub fn as_terrarium_error(&self) -> Option<&TerrariumError> {
        match self {
            ConfigError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
