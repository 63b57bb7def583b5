//! One-shot intro camera sequence: hold and rotate, zoom to the target, then
//! request the handoff.

use crate::config::SequenceConfig;
use crate::surfaces::GlobeRenderer;
use crate::timeline::{Action, Timeline};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequencerError {
    #[error("camera sequence already started")]
    AlreadyStarted,
}

#[derive(Debug, Default)]
pub struct CameraSequencer {
    config: Option<SequenceConfig>,
    handoff_fired: bool,
}

impl CameraSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.config.is_some()
    }

    /// Place the globe at the start pose and schedule both phases relative to
    /// `now_ms`. A second call is rejected and schedules nothing.
    pub fn start(
        &mut self,
        config: SequenceConfig,
        now_ms: u64,
        timeline: &mut Timeline,
        globe: &mut dyn GlobeRenderer,
    ) -> Result<(), SequencerError> {
        if self.is_started() {
            log::warn!("[sequencer] start already triggered; ignoring");
            return Err(SequencerError::AlreadyStarted);
        }
        if !config.handoff_follows_zoom() {
            log::warn!(
                "[sequencer] handoff at {}ms precedes zoom end at {}ms",
                config.transition_delay_ms,
                config.intro_delay_ms + config.zoom_duration_ms
            );
        }
        globe.set_point_of_view(config.start_pose, 0);
        globe.set_auto_rotate(true);
        timeline.schedule(now_ms + config.intro_delay_ms, Action::BeginZoom);
        timeline.schedule(now_ms + config.transition_delay_ms, Action::RequestHandoff);
        log::info!(
            "[sequencer] intro at +{}ms, handoff at +{}ms",
            config.intro_delay_ms,
            config.transition_delay_ms
        );
        self.config = Some(config);
        Ok(())
    }

    /// Phase two: stop rotating and fly from the start pose to the target.
    pub fn begin_zoom(&self, globe: &mut dyn GlobeRenderer) {
        let Some(config) = &self.config else {
            return;
        };
        globe.set_auto_rotate(false);
        globe.set_point_of_view(config.target_pose, config.zoom_duration_ms);
        log::info!(
            "[sequencer] zooming to ({:.4}, {:.4}) alt {:.2} over {}ms",
            config.target_pose.latitude,
            config.target_pose.longitude,
            config.target_pose.altitude,
            config.zoom_duration_ms
        );
    }

    /// Returns `true` exactly once, when the handoff should be requested.
    pub fn take_handoff(&mut self) -> bool {
        if self.config.is_none() || self.handoff_fired {
            return false;
        }
        self.handoff_fired = true;
        true
    }
}
