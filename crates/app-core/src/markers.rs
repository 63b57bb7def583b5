use crate::config::MapConfig;
use crate::panels::PanelManager;
use crate::poi::{PointId, PointRepository};
use crate::surfaces::{MapRenderer, PanelView};
use crate::view::{Surface, ViewCoordinator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerEventKind {
    Hover,
    Unhover,
    Click,
}

/// Pointer event on a single marker, as emitted by the map renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerEvent {
    pub kind: MarkerEventKind,
    pub point: PointId,
}

impl MarkerEvent {
    pub fn hover(point: PointId) -> Self {
        Self {
            kind: MarkerEventKind::Hover,
            point,
        }
    }

    pub fn unhover(point: PointId) -> Self {
        Self {
            kind: MarkerEventKind::Unhover,
            point,
        }
    }

    pub fn click(point: PointId) -> Self {
        Self {
            kind: MarkerEventKind::Click,
            point,
        }
    }
}

/// Borrowed context a marker event is handled against.
pub struct MarkerContext<'a> {
    pub view: &'a ViewCoordinator,
    pub points: &'a PointRepository,
    pub panels: &'a mut PanelManager,
    pub panel_view: &'a mut dyn PanelView,
    pub map: &'a mut dyn MapRenderer,
    pub map_config: &'a MapConfig,
}

/// Stateless translation of marker events into panel calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkerInteractionController;

impl MarkerInteractionController {
    /// Returns `true` when the event was acted on.
    pub fn handle(&self, event: MarkerEvent, ctx: MarkerContext<'_>) -> bool {
        if !ctx.view.is_interactive(Surface::Map2D) {
            log::debug!(
                "[markers] dropped {:?} on {} in {:?}",
                event.kind,
                event.point,
                ctx.view.state()
            );
            return false;
        }
        let Some(point) = ctx.points.get(event.point) else {
            log::debug!("[markers] unknown point {}", event.point);
            return false;
        };
        match event.kind {
            MarkerEventKind::Hover => ctx.panels.request_preview(point, ctx.panel_view),
            MarkerEventKind::Unhover => ctx.panels.release_preview(point, ctx.panel_view),
            MarkerEventKind::Click => {
                ctx.panels.select(point, ctx.panel_view);
                ctx.map.fly_to(ctx.map_config.focus_view(point.position));
            }
        }
        true
    }
}
