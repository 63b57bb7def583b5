//! Globe.gl intro surface.

use crate::dom;
use crate::js::{self, call, js_err, object};
use app_core::{CameraPose, GlobeRenderer, PointRepository, PIN_COLOR};
use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const GLOBE_IMAGE: &str = "//unpkg.com/three-globe/example/img/earth-night.jpg";
const BUMP_IMAGE: &str = "//unpkg.com/three-globe/example/img/earth-topology.png";
const BACKGROUND_IMAGE: &str = "//unpkg.com/three-globe/example/img/night-sky.png";

pub struct GlobeGl {
    globe: JsValue,
    container: web::Element,
}

impl GlobeGl {
    /// Mount the globe into `container_id` with one pin and pulsing ring per
    /// point.
    pub fn mount(
        document: &web::Document,
        container_id: &str,
        points: &PointRepository,
    ) -> anyhow::Result<Self> {
        let container = dom::element(document, container_id)?;
        let factory: Function = js::global("Globe")?.dyn_into().map_err(js_err)?;
        let builder: Function = factory
            .call0(&JsValue::UNDEFINED)
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        let globe = builder.call1(&JsValue::UNDEFINED, &container).map_err(js_err)?;

        let data: Array = points
            .all()
            .iter()
            .map(|p| {
                object(&[
                    ("id", JsValue::from(p.id)),
                    ("lat", JsValue::from_f64(p.position.latitude)),
                    ("lng", JsValue::from_f64(p.position.longitude)),
                ])
            })
            .collect();

        let pin_color =
            Closure::wrap(Box::new(|| JsValue::from_str(PIN_COLOR)) as Box<dyn Fn() -> JsValue>)
                .into_js_value();
        let ring_fade = Closure::wrap(Box::new(|t: f64| {
            JsValue::from_str(&format!("rgba(0, 255, 136, {})", 1.0 - t))
        }) as Box<dyn Fn(f64) -> JsValue>)
        .into_js_value();
        let ring_color =
            Closure::wrap(Box::new(move || ring_fade.clone()) as Box<dyn Fn() -> JsValue>)
                .into_js_value();

        let steps: [(&str, JsValue); 20] = [
            ("globeImageUrl", GLOBE_IMAGE.into()),
            ("bumpImageUrl", BUMP_IMAGE.into()),
            ("backgroundImageUrl", BACKGROUND_IMAGE.into()),
            ("showAtmosphere", true.into()),
            ("atmosphereColor", "#8b5cf6".into()),
            ("atmosphereAltitude", JsValue::from_f64(0.25)),
            ("pointsData", data.clone().into()),
            ("pointLat", "lat".into()),
            ("pointLng", "lng".into()),
            ("pointColor", pin_color),
            ("pointAltitude", JsValue::from_f64(0.1)),
            ("pointRadius", JsValue::from_f64(0.8)),
            ("pointResolution", JsValue::from_f64(32.0)),
            ("ringsData", data.into()),
            ("ringLat", "lat".into()),
            ("ringLng", "lng".into()),
            ("ringColor", ring_color),
            ("ringMaxRadius", JsValue::from_f64(3.0)),
            ("ringPropagationSpeed", JsValue::from_f64(3.0)),
            ("ringRepeatPeriod", JsValue::from_f64(1500.0)),
        ];
        for (method, arg) in steps {
            if let Err(e) = call(&globe, method, &[arg]) {
                log::warn!("[globe] {} failed: {:?}", method, e);
            }
        }

        if let Ok(controls) = call(&globe, "controls", &[]) {
            js::set(&controls, "enableDamping", true);
            js::set(&controls, "dampingFactor", 0.05);
            js::set(&controls, "autoRotateSpeed", 0.5);
        }
        if let Ok(material) = call(&globe, "globeMaterial", &[]) {
            js::set(&material, "bumpScale", 10);
        }
        log::info!("[globe] mounted with {} points", points.len());
        Ok(Self { globe, container })
    }
}

impl GlobeRenderer for GlobeGl {
    fn set_point_of_view(&mut self, pose: CameraPose, duration_ms: u64) {
        let pov = object(&[
            ("lat", pose.latitude.into()),
            ("lng", pose.longitude.into()),
            ("altitude", pose.altitude.into()),
        ]);
        if let Err(e) = call(&self.globe, "pointOfView", &[pov, (duration_ms as f64).into()]) {
            log::error!("[globe] pointOfView failed: {:?}", e);
        }
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        match call(&self.globe, "controls", &[]) {
            Ok(controls) => js::set(&controls, "autoRotate", enabled),
            Err(e) => log::error!("[globe] controls unavailable: {:?}", e),
        }
    }

    fn set_faded_out(&mut self, faded: bool) {
        dom::set_class(&self.container, "fade-out", faded);
    }

    fn resize(&mut self, width: u32, height: u32) {
        _ = call(&self.globe, "width", &[width.into()]);
        _ = call(&self.globe, "height", &[height.into()]);
    }
}
