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

//! # Lane Abstraction
//!
//! A **Lane** is a stateless processing strategy an agent delegates to. Lanes
//! hold only immutable configuration, so one instance can serve concurrent
//! callers without locking.
//!
//! Domain traits extend nothing here; a lane is any type with an identity
//! and a [`LaneKind`].

/// Classification of lanes, used for logging and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Plane geometry relative to an anchor.
    Layout,
    /// Material selection and texture resolution.
    Material,
}

/// The base trait shared by every lane.
pub trait Lane: Send + Sync {
    /// A short, human-readable name for the strategy (e.g. `"WindowLayout"`).
    fn strategy_name(&self) -> &'static str;

    /// What kind of work this lane does.
    fn lane_kind(&self) -> LaneKind;
}
