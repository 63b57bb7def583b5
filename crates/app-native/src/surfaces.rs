//! Renderers that narrate what a browser front-end would draw.

use app_core::{
    format_readout, AmbientAudio, CameraPose, DetailContent, GeoPoint, GlobeRenderer, MapRenderer,
    MapView, PanelView, PlaybackBlocked, PreviewContent, ReadoutView,
};

/// Fractions of a camera move logged for animated transitions.
const SAMPLES: [f64; 3] = [0.25, 0.5, 0.75];

#[derive(Default)]
pub struct LogGlobe {
    pose: Option<CameraPose>,
}

impl GlobeRenderer for LogGlobe {
    fn set_point_of_view(&mut self, pose: CameraPose, duration_ms: u64) {
        if let Some(from) = self.pose.filter(|_| duration_ms > 0) {
            for t in SAMPLES {
                let p = from.lerp(&pose, t);
                log::info!(
                    "[globe]   t+{:>4}ms lat {:>8.3} lng {:>8.3} alt {:.2}",
                    (duration_ms as f64 * t) as u64,
                    p.latitude,
                    p.longitude,
                    p.altitude
                );
            }
        }
        log::info!(
            "[globe] point of view -> lat {:.4} lng {:.4} alt {:.2} over {}ms",
            pose.latitude,
            pose.longitude,
            pose.altitude,
            duration_ms
        );
        self.pose = Some(pose);
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        log::info!("[globe] auto-rotate {}", if enabled { "on" } else { "off" });
    }

    fn set_faded_out(&mut self, faded: bool) {
        log::info!("[globe] {}", if faded { "fading out" } else { "visible" });
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::info!("[globe] resized to {}x{}", width, height);
    }
}

pub struct LogMap {
    center: GeoPoint,
    visible: bool,
}

impl LogMap {
    pub fn new(center: GeoPoint) -> Self {
        Self {
            center,
            visible: false,
        }
    }
}

impl MapRenderer for LogMap {
    fn fly_to(&mut self, view: MapView) {
        let (lat, lng) = format_readout(&view.center);
        log::info!(
            "[map] fly to {} {} zoom {} over {}s",
            lat,
            lng,
            view.zoom,
            view.duration_secs
        );
        self.center = view.center;
    }

    fn current_center(&self) -> GeoPoint {
        self.center
    }

    fn invalidate_size(&mut self) {
        log::debug!("[map] size recomputed");
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            log::info!("[map] {}", if visible { "shown" } else { "hidden" });
        }
        self.visible = visible;
    }
}

pub struct LogPanels;

impl PanelView for LogPanels {
    fn show_preview(&mut self, content: &PreviewContent) {
        log::info!(
            "[panels] preview: {} ({}) image {}",
            content.name,
            content.coords,
            content.image
        );
    }

    fn hide_preview(&mut self) {
        log::info!("[panels] preview hidden");
    }

    fn show_detail(&mut self, content: &DetailContent) {
        log::info!("[panels] detail: {} {}", content.name, content.coords);
        log::info!("[panels]   {}", content.description);
        for image in &content.gallery {
            log::info!("[panels]   {} <{}>", image.alt, image.src);
        }
    }

    fn hide_detail(&mut self) {
        log::info!("[panels] detail hidden");
    }
}

pub struct LogReadout;

impl ReadoutView for LogReadout {
    fn set_readout(&mut self, latitude: &str, longitude: &str) {
        log::info!("[readout] {} {}", latitude, longitude);
    }
}

/// Refuses the first `refusals` attempts, like a browser autoplay policy.
pub struct LogAudio {
    refusals: u32,
}

impl LogAudio {
    pub fn new(refusals: u32) -> Self {
        Self { refusals }
    }
}

impl AmbientAudio for LogAudio {
    fn play(&mut self) -> Result<(), PlaybackBlocked> {
        if self.refusals > 0 {
            self.refusals -= 1;
            return Err(PlaybackBlocked("autoplay requires a user gesture".into()));
        }
        log::info!("[audio] playing {}", app_core::AMBIENT_TRACK);
        Ok(())
    }
}
