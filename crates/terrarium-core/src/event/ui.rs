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

/// A change to the "searching" indicator shown while no marker is locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorRequest {
    /// Show the indicator with the given text. Sent on every session (re)start.
    Show {
        /// The label text.
        text: String,
    },
    /// Hide the indicator. Sent once per admitted detection.
    Hide,
}

impl IndicatorRequest {
    /// The label shown while looking for the marker.
    pub const SEARCHING_TEXT: &'static str = "searching...";

    /// The request sent when a session (re)starts.
    pub fn searching() -> Self {
        IndicatorRequest::Show {
            text: Self::SEARCHING_TEXT.to_string(),
        }
    }
}
