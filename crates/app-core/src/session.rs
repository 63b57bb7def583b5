//! Per-session owner of every component.
//!
//! Front-ends feed it a millisecond clock and raw input; it owns the timeline
//! and is the only place where state is mutated, so handlers never overlap.

use crate::audio::{AmbientAudio, AmbientAudioController, AudioState, PlaybackBlocked};
use crate::config::SessionConfig;
use crate::constants::CANCEL_KEY;
use crate::gallery::Gallery;
use crate::markers::{MarkerContext, MarkerEvent, MarkerInteractionController};
use crate::panels::{InteractionState, PanelManager, PanelVisibility};
use crate::poi::PointRepository;
use crate::readout::CoordinateReadout;
use crate::sequencer::{CameraSequencer, SequencerError};
use crate::surfaces::Surfaces;
use crate::timeline::{Action, Timeline};
use crate::view::{ViewCoordinator, ViewState};

pub struct Session {
    config: SessionConfig,
    points: PointRepository,
    timeline: Timeline,
    sequencer: CameraSequencer,
    view: ViewCoordinator,
    markers: MarkerInteractionController,
    panels: PanelManager,
    readout: CoordinateReadout,
    audio: AmbientAudioController,
    ambient: Option<Box<dyn AmbientAudio>>,
    surfaces: Surfaces,
}

impl Session {
    pub fn new(
        config: SessionConfig,
        points: PointRepository,
        surfaces: Surfaces,
        gallery: Box<dyn Gallery>,
    ) -> Self {
        let view = ViewCoordinator::new(config.view.clone());
        Self {
            config,
            points,
            timeline: Timeline::new(),
            sequencer: CameraSequencer::new(),
            view,
            markers: MarkerInteractionController,
            panels: PanelManager::new(gallery),
            readout: CoordinateReadout::new(),
            audio: AmbientAudioController::new(),
            ambient: None,
            surfaces,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn points(&self) -> &PointRepository {
        &self.points
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn interaction(&self) -> InteractionState {
        self.panels.state()
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.panels.visibility()
    }

    pub fn readout(&self) -> Option<(&str, &str)> {
        self.readout.current()
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio.state()
    }

    /// Kick off the intro camera sequence. Rejected after the first call.
    pub fn start(&mut self, now_ms: u64) -> Result<(), SequencerError> {
        self.sequencer.start(
            self.config.sequence.clone(),
            now_ms,
            &mut self.timeline,
            self.surfaces.globe.as_mut(),
        )
    }

    /// Begin ambient playback; a blocked start is retried on the first input.
    pub fn start_audio(&mut self, mut audio: Box<dyn AmbientAudio>) {
        self.audio.start(audio.as_mut());
        self.ambient = Some(audio);
    }

    /// Late refusal from a platform whose `play()` resolves asynchronously.
    pub fn audio_blocked(&mut self, reason: PlaybackBlocked) {
        self.audio.on_blocked(reason);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_deadline()
    }

    /// Run every action due at or before `now_ms`. Follow-ups are scheduled
    /// from each action's own deadline, so late wakeups keep exact spacing.
    /// Returns how many actions ran.
    pub fn advance(&mut self, now_ms: u64) -> usize {
        let mut ran = 0usize;
        while let Some(due) = self.timeline.pop_due(now_ms) {
            self.dispatch(due.action, due.deadline_ms);
            ran += 1;
        }
        ran
    }

    fn dispatch(&mut self, action: Action, at_ms: u64) {
        log::debug!("[session] {:?} at {}ms", action, at_ms);
        match action {
            Action::BeginZoom => self.sequencer.begin_zoom(self.surfaces.globe.as_mut()),
            Action::RequestHandoff => {
                if self.sequencer.take_handoff() {
                    self.view.on_handoff_requested(
                        at_ms,
                        &mut self.timeline,
                        self.surfaces.globe.as_mut(),
                        self.surfaces.map.as_mut(),
                    );
                }
            }
            Action::SettleSurface => {
                self.view.on_surface_settled(self.surfaces.map.as_mut());
                self.map_moved();
            }
            Action::CleanupGlobe => self.view.on_globe_cleanup(self.surfaces.globe.as_mut()),
        }
    }

    pub fn marker_event(&mut self, event: MarkerEvent) -> bool {
        self.markers.handle(
            event,
            MarkerContext {
                view: &self.view,
                points: &self.points,
                panels: &mut self.panels,
                panel_view: self.surfaces.panels.as_mut(),
                map: self.surfaces.map.as_mut(),
                map_config: &self.config.map,
            },
        )
    }

    /// Map `move`/`moveend` notification.
    pub fn map_moved(&mut self) -> bool {
        self.readout.on_map_moved(
            &self.view,
            self.surfaces.map.as_ref(),
            self.surfaces.readout.as_mut(),
        )
    }

    /// Explicit close action on the detail panel.
    pub fn close_detail(&mut self) {
        self.panels.deselect(
            self.surfaces.panels.as_mut(),
            self.surfaces.map.as_mut(),
            &self.config.map,
        );
    }

    /// Any key press: counts as a gesture for audio, and the cancel key
    /// closes the detail panel.
    pub fn key_down(&mut self, key: &str) {
        self.user_gesture();
        if key == CANCEL_KEY {
            self.close_detail();
        }
    }

    /// Pointer click anywhere on the page.
    pub fn pointer_down(&mut self) {
        self.user_gesture();
    }

    fn user_gesture(&mut self) {
        if let Some(audio) = self.ambient.as_mut() {
            self.audio.on_user_gesture(audio.as_mut());
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surfaces.globe.resize(width, height);
        self.surfaces.map.invalidate_size();
    }
}
