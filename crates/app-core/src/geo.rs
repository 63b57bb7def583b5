//! Geographic value types and the text formats shown to the user.
//!
//! Everything here is plain data: the renderers consume `CameraPose` and
//! `MapView` commands, while the panels and the readout consume the strings
//! produced by the `format_*` helpers.

use glam::DVec3;

/// Latitude/longitude pair in signed decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and inside [-90,90]×[-180,180].
    pub fn is_well_formed(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Camera placement over the globe. `altitude` is measured in globe radii,
/// lower is closer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl CameraPose {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Eased interpolation between two poses, `t` clamped to [0, 1].
    ///
    /// Used by renderers that cannot animate a camera move on their own and
    /// need to sample intermediate poses.
    pub fn lerp(&self, to: &CameraPose, t: f64) -> CameraPose {
        let t = t.clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        let a = DVec3::new(self.latitude, self.longitude, self.altitude);
        let b = DVec3::new(to.latitude, to.longitude, to.altitude);
        let p = a * (1.0 - eased) + b * eased;
        CameraPose::new(p.x, p.y, p.z)
    }
}

/// Recenter/zoom command for the 2D map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: f64,
    pub duration_secs: f64,
}

/// Preview coordinates, e.g. `-34.4493° / -58.7428°`.
pub fn format_preview_coords(p: &GeoPoint) -> String {
    format!("{:.4}° / {:.4}°", p.latitude, p.longitude)
}

/// Detail coordinates, e.g. `LAT -34.4493° // LNG -58.7428°`.
pub fn format_detail_coords(p: &GeoPoint) -> String {
    format!("LAT {:.4}° // LNG {:.4}°", p.latitude, p.longitude)
}

/// Camera readout pair, e.g. (`LAT: -34.55°`, `LNG: -58.48°`).
pub fn format_readout(center: &GeoPoint) -> (String, String) {
    (
        format!("LAT: {:.2}°", center.latitude),
        format!("LNG: {:.2}°", center.longitude),
    )
}
