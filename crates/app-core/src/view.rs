//! Which surface is interactive, and the one-way handoff between them.

use crate::config::ViewTimings;
use crate::surfaces::{GlobeRenderer, MapRenderer};
use crate::timeline::{Action, Timeline};

/// Session-wide view lifecycle. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViewState {
    #[default]
    Intro3D,
    Transitioning,
    Map2D,
}

/// Interactive surfaces a caller can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Intro3D,
    Map2D,
}

#[derive(Debug, Default)]
pub struct ViewCoordinator {
    state: ViewState,
    timings: ViewTimings,
}

impl ViewCoordinator {
    pub fn new(timings: ViewTimings) -> Self {
        Self {
            state: ViewState::Intro3D,
            timings,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// True only for the 2D map once the handoff has fully settled. Events
    /// delivered mid-transition are dropped by callers, never queued.
    pub fn is_interactive(&self, surface: Surface) -> bool {
        surface == Surface::Map2D && self.state == ViewState::Map2D
    }

    /// Start the handoff. Returns `false` (and does nothing) unless the view
    /// is still in `Intro3D`.
    pub fn on_handoff_requested(
        &mut self,
        now_ms: u64,
        timeline: &mut Timeline,
        globe: &mut dyn GlobeRenderer,
        map: &mut dyn MapRenderer,
    ) -> bool {
        if self.state != ViewState::Intro3D {
            log::warn!("[view] handoff requested in {:?}; ignoring", self.state);
            return false;
        }
        self.state = ViewState::Transitioning;
        globe.set_faded_out(true);
        map.set_visible(true);
        timeline.schedule(now_ms + self.timings.settle_delay_ms, Action::SettleSurface);
        timeline.schedule(now_ms + self.timings.cleanup_delay_ms, Action::CleanupGlobe);
        log::info!("[view] handoff started at {}ms", now_ms);
        true
    }

    /// Settle timer: correct the map size and make it interactive.
    pub fn on_surface_settled(&mut self, map: &mut dyn MapRenderer) {
        if self.state != ViewState::Transitioning {
            return;
        }
        map.invalidate_size();
        self.state = ViewState::Map2D;
        log::info!("[view] map is interactive");
    }

    /// Cleanup timer: make sure the hidden globe is no longer spinning.
    pub fn on_globe_cleanup(&mut self, globe: &mut dyn GlobeRenderer) {
        if self.state == ViewState::Intro3D {
            return;
        }
        globe.set_auto_rotate(false);
        log::debug!("[view] globe auto-rotate cleared");
    }
}
