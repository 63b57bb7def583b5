//! Preview/Detail panel precedence.
//!
//! A selection always wins: while a point is selected the preview stays
//! hidden whatever the pointer does. None of the operations can fail; the
//! panel view and the gallery absorb their own rendering problems.

use crate::config::MapConfig;
use crate::gallery::Gallery;
use crate::geo::{format_detail_coords, format_preview_coords};
use crate::poi::{PointId, PointOfInterest};
use crate::surfaces::{DetailContent, GalleryImage, MapRenderer, PanelView, PreviewContent};

/// Hovered/selected points. `hovered` only matters while nothing is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: Option<PointId>,
    pub selected: Option<PointId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub preview: bool,
    pub detail: bool,
}

pub struct PanelManager {
    state: InteractionState,
    visible: PanelVisibility,
    gallery: Box<dyn Gallery>,
}

impl PanelManager {
    pub fn new(gallery: Box<dyn Gallery>) -> Self {
        Self {
            state: InteractionState::default(),
            visible: PanelVisibility::default(),
            gallery,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visible
    }

    pub fn request_preview(&mut self, point: &PointOfInterest, view: &mut dyn PanelView) {
        if self.state.selected.is_some() {
            return;
        }
        self.state.hovered = Some(point.id);
        let image = self
            .gallery
            .images_for(point)
            .into_iter()
            .next()
            .unwrap_or_default();
        view.show_preview(&PreviewContent {
            name: point.name.clone(),
            coords: format_preview_coords(&point.position),
            image,
        });
        self.visible.preview = true;
    }

    pub fn release_preview(&mut self, point: &PointOfInterest, view: &mut dyn PanelView) {
        if self.state.selected.is_some() || self.state.hovered != Some(point.id) {
            return;
        }
        self.state.hovered = None;
        view.hide_preview();
        self.visible.preview = false;
    }

    pub fn select(&mut self, point: &PointOfInterest, view: &mut dyn PanelView) {
        self.state.selected = Some(point.id);
        self.state.hovered = None;
        view.hide_preview();
        self.visible.preview = false;

        let gallery = self
            .gallery
            .images_for(point)
            .into_iter()
            .enumerate()
            .map(|(i, src)| GalleryImage {
                src,
                alt: format!("{} - Image {}", point.name, i + 1),
            })
            .collect();
        view.show_detail(&DetailContent {
            name: point.name.clone(),
            coords: format_detail_coords(&point.position),
            description: point.description.clone(),
            gallery,
        });
        self.visible.detail = true;
        log::info!("[panels] selected point {} ({})", point.id, point.name);
    }

    /// Close the detail panel and fly the map home. Does nothing when no
    /// point is selected.
    pub fn deselect(
        &mut self,
        view: &mut dyn PanelView,
        map: &mut dyn MapRenderer,
        map_config: &MapConfig,
    ) {
        let Some(id) = self.state.selected.take() else {
            return;
        };
        self.state.hovered = None;
        view.hide_detail();
        self.visible.detail = false;
        map.fly_to(map_config.home_view());
        log::info!("[panels] deselected point {}", id);
    }
}
