//! Session configuration grouped per component, with defaults taken from
//! `constants`.

use crate::constants::*;
use crate::geo::{CameraPose, GeoPoint, MapView};

/// Intro camera timeline. Delays are measured from `CameraSequencer::start`.
///
/// `transition_delay_ms` is independent of the zoom; callers keep it at or
/// after `intro_delay_ms + zoom_duration_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceConfig {
    pub intro_delay_ms: u64,
    pub zoom_duration_ms: u64,
    pub transition_delay_ms: u64,
    pub start_pose: CameraPose,
    pub target_pose: CameraPose,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            intro_delay_ms: INTRO_DELAY_MS,
            zoom_duration_ms: ZOOM_DURATION_MS,
            transition_delay_ms: TRANSITION_DELAY_MS,
            start_pose: CameraPose::new(START_LAT, START_LNG, START_ALTITUDE),
            target_pose: CameraPose::new(CENTER_LAT, CENTER_LNG, ZOOM_ALTITUDE),
        }
    }
}

impl SequenceConfig {
    /// Whether the handoff lands after the zoom animation has finished.
    pub fn handoff_follows_zoom(&self) -> bool {
        self.transition_delay_ms >= self.intro_delay_ms + self.zoom_duration_ms
    }
}

/// Delays applied by `ViewCoordinator` after a handoff request.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTimings {
    pub settle_delay_ms: u64,
    pub cleanup_delay_ms: u64,
}

impl Default for ViewTimings {
    fn default() -> Self {
        Self {
            settle_delay_ms: SURFACE_SETTLE_DELAY_MS,
            cleanup_delay_ms: GLOBE_CLEANUP_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub center: GeoPoint,
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub marker_zoom: f64,
    pub fly_duration_secs: f64,
    pub tile_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(CENTER_LAT, CENTER_LNG),
            initial_zoom: MAP_INITIAL_ZOOM,
            min_zoom: MAP_MIN_ZOOM,
            max_zoom: MAP_MAX_ZOOM,
            marker_zoom: MARKER_FOCUS_ZOOM,
            fly_duration_secs: FLY_DURATION_SECS,
            tile_url: TILE_URL.to_string(),
        }
    }
}

impl MapConfig {
    /// The view the map returns to when the detail panel closes.
    pub fn home_view(&self) -> MapView {
        MapView {
            center: self.center,
            zoom: self.initial_zoom,
            duration_secs: self.fly_duration_secs,
        }
    }

    pub fn focus_view(&self, target: GeoPoint) -> MapView {
        MapView {
            center: target,
            zoom: self.marker_zoom,
            duration_secs: self.fly_duration_secs,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub sequence: SequenceConfig,
    pub view: ViewTimings,
    pub map: MapConfig,
}
