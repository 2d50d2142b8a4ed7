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

use std::sync::Arc;

use terrarium_core::asset::TextureSource;
use terrarium_core::event::{EventBus, IndicatorRequest};
use terrarium_core::scene::SceneSink;
use terrarium_core::session::{ArSession, RunOptions, TrackingConfiguration};
use terrarium_core::tracking::{AnchorEvent, AnchorKind};
use terrarium_core::{LockState, TerrariumError};
use terrarium_data::{ReferenceImageCatalog, TerrariumConfig};

use super::AnchorLock;
use crate::attachment::{AttachmentReport, RenderAttachmentAdapter};

/// The outcome of a (re)start request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStart {
    /// Tracking was (re)started with a fresh lock.
    Running,
    /// The reference-image group is unavailable; nothing was changed.
    ConfigurationMissing {
        /// The group that was looked for.
        group: String,
    },
}

impl SessionStart {
    /// Converts into a `Result`, mapping a missing group to [`TerrariumError::ConfigurationMissing`].
    pub fn into_result(self) -> Result<(), TerrariumError> {
        match self {
            SessionStart::Running => Ok(()),
            SessionStart::ConfigurationMissing { group } => {
                Err(TerrariumError::ConfigurationMissing { group })
            }
        }
    }
}

/// Owns one tracking session's overlay state.
///
/// Anchor callbacks take `&self`, so the agent can sit behind an `Arc` and be
/// fed from the runtime's worker threads. Indicator changes are queued on an
/// [`EventBus`] for the presentation context to drain.
pub struct TerrariumAgent {
    config: TerrariumConfig,
    catalog: Option<ReferenceImageCatalog>,
    textures: Arc<dyn TextureSource>,
    adapter: RenderAttachmentAdapter,
    lock: AnchorLock,
    indicator: EventBus<IndicatorRequest>,
}

impl TerrariumAgent {
    /// Creates an agent. A `None` catalog keeps every start request a no-op.
    pub fn new(
        config: TerrariumConfig,
        catalog: Option<ReferenceImageCatalog>,
        textures: Arc<dyn TextureSource>,
    ) -> Self {
        let adapter = RenderAttachmentAdapter::new(&config);
        Self {
            config,
            catalog,
            textures,
            adapter,
            lock: AnchorLock::new(),
            indicator: EventBus::new(),
        }
    }

    /// The configuration the agent was built with.
    pub fn config(&self) -> &TerrariumConfig {
        &self.config
    }

    /// The current lock state.
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    /// The queue of indicator changes for the presentation context.
    pub fn indicator(&self) -> &EventBus<IndicatorRequest> {
        &self.indicator
    }

    /// Takes every queued indicator change.
    pub fn drain_indicator_requests(&self) -> Vec<IndicatorRequest> {
        self.indicator.drain()
    }

    /// Starts tracking when the view becomes active.
    pub fn start(&self, session: &mut dyn ArSession) -> SessionStart {
        self.reset_tracking(session)
    }

    /// Restarts tracking on an explicit user request.
    pub fn restart(&self, session: &mut dyn ArSession) -> SessionStart {
        self.reset_tracking(session)
    }

    /// Runs a fresh session: drops old anchors, reopens the lock and shows the indicator.
    ///
    /// The indicator is shown and the lock is back to `Searching` before the
    /// runtime is asked to run. A detection delivered while `run` is still on
    /// the stack is admitted against the fresh lock and its `Hide` comes last.
    pub fn reset_tracking(&self, session: &mut dyn ArSession) -> SessionStart {
        let group = &self.config.reference_group;
        let Some(catalog) = self.catalog.as_ref().filter(|c| &c.group == group) else {
            log::warn!("Reference image group '{group}' is missing; tracking not started.");
            return SessionStart::ConfigurationMissing {
                group: group.clone(),
            };
        };

        let configuration = TrackingConfiguration {
            detection_images: catalog.descriptors(),
            environment_texturing: self.config.environment_texturing,
            lighting: self.config.lighting,
        };

        self.indicator.publish(IndicatorRequest::searching());
        self.lock.reset();
        session.run(&configuration, RunOptions::FRESH);

        log::info!(
            "Tracking started with {} reference image(s) from '{}'.",
            configuration.detection_images.len(),
            group
        );
        SessionStart::Running
    }

    /// Pauses tracking when the view goes away.
    pub fn pause(&self, session: &mut dyn ArSession) {
        session.pause();
        log::info!("Tracking paused.");
    }

    /// Relocalization after an interruption is always allowed.
    pub fn should_attempt_relocalization(&self) -> bool {
        true
    }

    /// Handles a new anchor reported by the runtime.
    ///
    /// Returns `Ok(None)` for anchors that are not images and for every image
    /// after the first of the session. A marker with a non-positive size is
    /// rejected before the lock is consulted, so it never uses up the session.
    pub fn on_anchor_added(
        &self,
        event: &AnchorEvent,
        sink: &mut dyn SceneSink,
    ) -> Result<Option<AttachmentReport>, TerrariumError> {
        let AnchorKind::Image(marker) = &event.kind else {
            log::trace!("Ignoring non-image anchor on node {}.", event.node.index());
            return Ok(None);
        };

        marker.validate()?;

        if !self.lock.on_marker_detected(marker) {
            return Ok(None);
        }

        log::info!(
            "Marker '{}' ({} x {} m) locked.",
            marker.identifier,
            marker.physical_width,
            marker.physical_height
        );
        self.indicator.publish(IndicatorRequest::Hide);

        let report = self
            .adapter
            .attach(event.node, marker, self.textures.as_ref(), sink)?;
        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrarium_data::assets::TextureLibrary;
    use terrarium_data::ReferenceImage;

    #[derive(Default)]
    struct CountingSession {
        runs: usize,
        pauses: usize,
    }

    impl ArSession for CountingSession {
        fn run(&mut self, _configuration: &TrackingConfiguration, _options: RunOptions) {
            self.runs += 1;
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    fn catalog(group: &str) -> ReferenceImageCatalog {
        ReferenceImageCatalog::new(group, vec![ReferenceImage::new("logo", 0.1, 0.08)]).unwrap()
    }

    #[test]
    fn test_catalog_for_another_group_counts_as_missing() {
        let agent = TerrariumAgent::new(
            TerrariumConfig::default(),
            Some(catalog("Some Other Group")),
            Arc::new(TextureLibrary::new()),
        );
        let mut session = CountingSession::default();

        let outcome = agent.start(&mut session);

        assert_eq!(
            outcome.into_result(),
            Err(TerrariumError::ConfigurationMissing {
                group: "AR Resources".into()
            })
        );
        assert_eq!(session.runs, 0);
    }

    #[test]
    fn test_pause_and_relocalization() {
        let agent = TerrariumAgent::new(
            TerrariumConfig::default(),
            Some(catalog("AR Resources")),
            Arc::new(TextureLibrary::new()),
        );
        let mut session = CountingSession::default();

        assert_eq!(agent.start(&mut session), SessionStart::Running);
        agent.pause(&mut session);

        assert_eq!((session.runs, session.pauses), (1, 1));
        assert!(agent.should_attempt_relocalization());
    }
}
