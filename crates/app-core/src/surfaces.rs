//! Collaborator seams. The core only issues commands through these traits;
//! renderers, DOM panels and audio live in the front-ends.

use crate::geo::{CameraPose, GeoPoint, MapView};

/// 3D globe used for the intro.
pub trait GlobeRenderer {
    /// Move the camera; `duration_ms == 0` means jump immediately.
    fn set_point_of_view(&mut self, pose: CameraPose, duration_ms: u64);
    fn set_auto_rotate(&mut self, enabled: bool);
    /// Cross-fade the globe surface out (or back in).
    fn set_faded_out(&mut self, faded: bool);
    fn resize(&mut self, width: u32, height: u32);
}

/// 2D tiled map shown after the handoff.
pub trait MapRenderer {
    /// Fire-and-forget recenter/zoom.
    fn fly_to(&mut self, view: MapView);
    fn current_center(&self) -> GeoPoint;
    fn invalidate_size(&mut self);
    fn set_visible(&mut self, visible: bool);
}

/// Text and image content of the hover preview.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewContent {
    pub name: String,
    pub coords: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Full content of the detail panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailContent {
    pub name: String,
    pub coords: String,
    pub description: String,
    pub gallery: Vec<GalleryImage>,
}

pub trait PanelView {
    fn show_preview(&mut self, content: &PreviewContent);
    fn hide_preview(&mut self);
    fn show_detail(&mut self, content: &DetailContent);
    fn hide_detail(&mut self);
}

pub trait ReadoutView {
    fn set_readout(&mut self, latitude: &str, longitude: &str);
}

/// Everything the session drives, boxed so front-ends can mix concrete types.
pub struct Surfaces {
    pub globe: Box<dyn GlobeRenderer>,
    pub map: Box<dyn MapRenderer>,
    pub panels: Box<dyn PanelView>,
    pub readout: Box<dyn ReadoutView>,
}
