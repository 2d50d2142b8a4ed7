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

use std::sync::atomic::{AtomicU8, Ordering};

use terrarium_core::{LockState, MarkerDescriptor};

/// The "first detection wins" gate of a tracking session.
///
/// The admit decision and the `Searching -> Found` transition are one
/// compare-and-set, so exactly one caller per `Searching` period gets `true`,
/// whichever thread it runs on.
#[derive(Debug, Default)]
pub struct AnchorLock {
    state: AtomicU8,
}

impl AnchorLock {
    /// Creates a lock in the `Searching` state.
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(LockState::Searching.as_u8()),
        }
    }

    /// Admits the first caller since the last reset; rejects everyone else.
    pub fn try_admit(&self) -> bool {
        self.state
            .compare_exchange(
                LockState::Searching.as_u8(),
                LockState::Found.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Admission for a detected marker. The marker's identity plays no part.
    pub fn on_marker_detected(&self, marker: &MarkerDescriptor) -> bool {
        let admitted = self.try_admit();
        if !admitted {
            log::trace!("Marker '{}' ignored: already locked.", marker.identifier);
        }
        admitted
    }

    /// Returns to `Searching`.
    pub fn reset(&self) {
        self.state.store(LockState::Searching.as_u8(), Ordering::Release);
    }

    /// The current state.
    pub fn state(&self) -> LockState {
        LockState::from_u8(self.state.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_admission_wins() {
        let lock = AnchorLock::new();
        let marker = MarkerDescriptor::new("a", 0.1, 0.1);

        assert_eq!(lock.state(), LockState::Searching);
        assert!(lock.on_marker_detected(&marker));
        assert_eq!(lock.state(), LockState::Found);
        assert!(!lock.on_marker_detected(&MarkerDescriptor::new("b", 0.2, 0.2)));
        assert!(!lock.try_admit());
    }

    #[test]
    fn test_reset_reopens_the_gate() {
        let lock = AnchorLock::default();
        assert!(lock.try_admit());

        lock.reset();
        assert_eq!(lock.state(), LockState::Searching);
        assert!(lock.try_admit());
    }

    #[test]
    fn test_reset_while_searching_is_harmless() {
        let lock = AnchorLock::new();
        lock.reset();
        lock.reset();
        assert!(lock.try_admit());
    }
}
