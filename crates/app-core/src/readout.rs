use crate::geo::format_readout;
use crate::surfaces::{MapRenderer, ReadoutView};
use crate::view::{Surface, ViewCoordinator};

/// Passive LAT/LNG display of the map center.
#[derive(Debug, Default)]
pub struct CoordinateReadout {
    last: Option<(String, String)>,
}

impl CoordinateReadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published pair, if any.
    pub fn current(&self) -> Option<(&str, &str)> {
        self.last.as_ref().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Handle a map movement event. Returns `true` when new text was pushed
    /// to the view.
    pub fn on_map_moved(
        &mut self,
        view: &ViewCoordinator,
        map: &dyn MapRenderer,
        sink: &mut dyn ReadoutView,
    ) -> bool {
        if !view.is_interactive(Surface::Map2D) {
            return false;
        }
        let text = format_readout(&map.current_center());
        if self.last.as_ref() == Some(&text) {
            return false;
        }
        sink.set_readout(&text.0, &text.1);
        self.last = Some(text);
        true
    }
}
