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

//! # Terrarium Agents
//!
//! The stateful side of the overlay. The [`anchor_agent`] owns the per-session
//! lock and talks to the AR runtime; the [`attachment`] adapter drives the
//! lanes and hands their output to the scene graph.

#![warn(missing_docs)]

pub mod anchor_agent;
pub mod attachment;

pub use anchor_agent::{AnchorLock, SessionStart, TerrariumAgent};
pub use attachment::{AttachmentReport, RenderAttachmentAdapter};
