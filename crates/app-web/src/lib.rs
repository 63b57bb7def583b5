#![cfg(target_arch = "wasm32")]
use app_core::dataset::driftmap_locations;
use app_core::{PointRepository, Session, SessionConfig, StreetLevelGallery, Surfaces};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod globe;
mod js;
mod map;
mod panels;
mod timers;

pub(crate) type SharedSession = Rc<RefCell<Session>>;

const GLOBE_CONTAINER: &str = "globe-container";
const MAP_CONTAINER: &str = "map-container";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("driftmap starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SessionConfig::default();
    let points = PointRepository::new(driftmap_locations())?;

    let globe = globe::GlobeGl::mount(&document, GLOBE_CONTAINER, &points)?;
    let (map, map_handle) = map::LeafletMap::mount(&document, MAP_CONTAINER, &config.map)?;
    let surfaces = Surfaces {
        globe: Box::new(globe),
        map: Box::new(map),
        panels: Box::new(panels::DomPanels::new(&document)?),
        readout: Box::new(panels::DomReadout::new(&document)?),
    };

    let session: SharedSession = Rc::new(RefCell::new(Session::new(
        config,
        points,
        surfaces,
        Box::new(StreetLevelGallery::default()),
    )));

    {
        let s = session.borrow();
        map::wire_markers(&map_handle, s.points(), &session);
    }
    map::wire_movement(&map_handle, &session);
    events::wire_global_keydown(&window, &session);
    events::wire_pointer_handlers(&document, &session);
    events::wire_resize(&window, &session);

    let clock = timers::Clock::default();
    {
        let mut s = session.borrow_mut();
        match audio::HtmlAmbientAudio::new(&session) {
            Ok(a) => s.start_audio(Box::new(a)),
            Err(e) => log::warn!("[audio] unavailable: {}", e),
        }
        s.start(clock.now_ms())?;
    }
    timers::pump(session, clock);
    Ok(())
}
