//! Leaflet 2D map surface and its marker/movement event sources.

use crate::dom;
use crate::events::with_session;
use crate::js::{self, call, js_err, object, pair};
use crate::SharedSession;
use app_core::{GeoPoint, MapConfig, MapRenderer, MapView, MarkerEvent, PointRepository};
use wasm_bindgen::prelude::*;
use web_sys as web;

const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

pub struct LeafletMap {
    map: JsValue,
    container: web::Element,
    home: GeoPoint,
}

impl LeafletMap {
    /// Create the (initially hidden) map and its dark tile layer. The returned
    /// handle is a second reference to the same Leaflet object, used to attach
    /// listeners.
    pub fn mount(
        document: &web::Document,
        container_id: &str,
        config: &MapConfig,
    ) -> anyhow::Result<(Self, JsValue)> {
        let container = dom::element(document, container_id)?;
        let leaflet = js::global("L")?;
        let options = object(&[
            ("center", pair(config.center.latitude, config.center.longitude)),
            ("zoom", JsValue::from_f64(config.initial_zoom)),
            ("minZoom", JsValue::from_f64(config.min_zoom)),
            ("maxZoom", JsValue::from_f64(config.max_zoom)),
            ("zoomControl", JsValue::TRUE),
            ("attributionControl", JsValue::FALSE),
        ]);
        let map = call(&leaflet, "map", &[container_id.into(), options]).map_err(js_err)?;

        let tile_options = object(&[
            ("attribution", TILE_ATTRIBUTION.into()),
            ("subdomains", app_core::TILE_SUBDOMAINS.into()),
            ("maxZoom", JsValue::from_f64(app_core::TILE_MAX_ZOOM)),
        ]);
        let tiles = call(
            &leaflet,
            "tileLayer",
            &[config.tile_url.as_str().into(), tile_options],
        )
        .map_err(js_err)?;
        call(&tiles, "addTo", &[map.clone()]).map_err(js_err)?;

        let handle = map.clone();
        Ok((
            Self {
                map,
                container,
                home: config.center,
            },
            handle,
        ))
    }
}

impl MapRenderer for LeafletMap {
    fn fly_to(&mut self, view: MapView) {
        let options = object(&[("duration", JsValue::from_f64(view.duration_secs))]);
        let args = [
            pair(view.center.latitude, view.center.longitude),
            JsValue::from_f64(view.zoom),
            options,
        ];
        if let Err(e) = call(&self.map, "flyTo", &args) {
            log::warn!("[map] flyTo failed: {:?}", e);
        }
    }

    fn current_center(&self) -> GeoPoint {
        call(&self.map, "getCenter", &[])
            .ok()
            .and_then(|c| Some(GeoPoint::new(js::get_f64(&c, "lat")?, js::get_f64(&c, "lng")?)))
            .unwrap_or(self.home)
    }

    fn invalidate_size(&mut self) {
        _ = call(&self.map, "invalidateSize", &[]);
    }

    fn set_visible(&mut self, visible: bool) {
        dom::set_class(&self.container, "visible", visible);
    }
}

fn on(target: &JsValue, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Err(e) = call(target, "on", &[event.into(), closure.as_ref().clone()]) {
        log::warn!("[map] listen {} failed: {:?}", event, e);
    }
    closure.forget();
}

/// One divIcon marker per point; hover/unhover/click are forwarded to the
/// session as marker events.
pub fn wire_markers(map: &JsValue, points: &PointRepository, session: &SharedSession) {
    let leaflet = match js::global("L") {
        Ok(l) => l,
        Err(e) => {
            log::error!("[map] {}", e);
            return;
        }
    };
    for p in points.all() {
        let icon = object(&[
            ("className", "custom-marker".into()),
            (
                "html",
                format!("<div class=\"marker-pin\" data-id=\"{}\"></div>", p.id).into(),
            ),
            ("iconSize", pair(20.0, 20.0)),
            ("iconAnchor", pair(10.0, 10.0)),
        ]);
        let marker = call(&leaflet, "divIcon", &[icon])
            .and_then(|icon| {
                call(
                    &leaflet,
                    "marker",
                    &[
                        pair(p.position.latitude, p.position.longitude),
                        object(&[("icon", icon)]),
                    ],
                )
            })
            .and_then(|marker| call(&marker, "addTo", &[map.clone()]));
        let marker = match marker {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[map] marker {} failed: {:?}", p.id, e);
                continue;
            }
        };

        let id = p.id;
        for (event, make) in [
            ("mouseover", MarkerEvent::hover as fn(u32) -> MarkerEvent),
            ("mouseout", MarkerEvent::unhover),
            ("click", MarkerEvent::click),
        ] {
            let s = session.clone();
            on(&marker, event, move || {
                with_session(&s, event, |s| {
                    s.marker_event(make(id));
                });
            });
        }
    }
    log::info!("[map] {} markers placed", points.len());
}

/// Keep the coordinate readout in sync while the map pans or zooms.
pub fn wire_movement(map: &JsValue, session: &SharedSession) {
    for event in ["move", "moveend"] {
        let s = session.clone();
        on(map, event, move || {
            with_session(&s, event, |s| {
                s.map_moved();
            });
        });
    }
}
