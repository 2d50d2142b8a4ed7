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

//! Provides the channel used to marshal UI effects to the presentation context.
//!
//! Anchor callbacks may run on a worker thread. UI changes are published on an
//! [`EventBus`] and drained by whoever owns the presentation context, so the
//! detection path never touches UI state directly.

mod bus;
mod ui;

pub use self::bus::EventBus;
pub use self::ui::IndicatorRequest;
