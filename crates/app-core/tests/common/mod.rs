// Recording fakes for the collaborator traits, shared by the host-side tests.

#![allow(dead_code)]

use app_core::*;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    PointOfView(CameraPose, u64),
    AutoRotate(bool),
    GlobeFaded(bool),
    GlobeResize(u32, u32),
    FlyTo(MapView),
    InvalidateSize,
    MapVisible(bool),
    ShowPreview(PreviewContent),
    HidePreview,
    ShowDetail(DetailContent),
    HideDetail,
    Readout(String, String),
}

pub type Log = Rc<RefCell<Vec<Call>>>;

pub struct FakeGlobe(pub Log);

impl GlobeRenderer for FakeGlobe {
    fn set_point_of_view(&mut self, pose: CameraPose, duration_ms: u64) {
        self.0.borrow_mut().push(Call::PointOfView(pose, duration_ms));
    }
    fn set_auto_rotate(&mut self, enabled: bool) {
        self.0.borrow_mut().push(Call::AutoRotate(enabled));
    }
    fn set_faded_out(&mut self, faded: bool) {
        self.0.borrow_mut().push(Call::GlobeFaded(faded));
    }
    fn resize(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().push(Call::GlobeResize(width, height));
    }
}

/// Map whose center jumps straight to any `fly_to` target.
pub struct FakeMap {
    pub log: Log,
    pub center: Rc<Cell<GeoPoint>>,
}

impl MapRenderer for FakeMap {
    fn fly_to(&mut self, view: MapView) {
        self.center.set(view.center);
        self.log.borrow_mut().push(Call::FlyTo(view));
    }
    fn current_center(&self) -> GeoPoint {
        self.center.get()
    }
    fn invalidate_size(&mut self) {
        self.log.borrow_mut().push(Call::InvalidateSize);
    }
    fn set_visible(&mut self, visible: bool) {
        self.log.borrow_mut().push(Call::MapVisible(visible));
    }
}

pub struct FakePanels(pub Log);

impl PanelView for FakePanels {
    fn show_preview(&mut self, content: &PreviewContent) {
        self.0.borrow_mut().push(Call::ShowPreview(content.clone()));
    }
    fn hide_preview(&mut self) {
        self.0.borrow_mut().push(Call::HidePreview);
    }
    fn show_detail(&mut self, content: &DetailContent) {
        self.0.borrow_mut().push(Call::ShowDetail(content.clone()));
    }
    fn hide_detail(&mut self) {
        self.0.borrow_mut().push(Call::HideDetail);
    }
}

pub struct FakeReadout(pub Log);

impl ReadoutView for FakeReadout {
    fn set_readout(&mut self, latitude: &str, longitude: &str) {
        self.0
            .borrow_mut()
            .push(Call::Readout(latitude.to_string(), longitude.to_string()));
    }
}

/// Audio that answers `play()` from a scripted queue; `Ok` once it runs dry.
pub struct FakeAudio {
    pub attempts: Rc<Cell<usize>>,
    pub outcomes: VecDeque<Result<(), PlaybackBlocked>>,
}

impl AmbientAudio for FakeAudio {
    fn play(&mut self) -> Result<(), PlaybackBlocked> {
        self.attempts.set(self.attempts.get() + 1);
        self.outcomes.pop_front().unwrap_or(Ok(()))
    }
}

pub fn point(
    id: PointId,
    name: &str,
    lat: f64,
    lng: f64,
    images: Option<Vec<&str>>,
) -> PointOfInterest {
    PointOfInterest {
        id,
        name: name.to_string(),
        position: GeoPoint::new(lat, lng),
        description: format!("{name} description"),
        images: images.map(|v| v.into_iter().map(String::from).collect()),
        tags: vec!["underground".to_string()],
    }
}

/// Three points: two with local images, one relying on the fallback.
pub fn three_points() -> PointRepository {
    PointRepository::new(vec![
        point(
            1,
            "Rotondita",
            -34.4493333,
            -58.74275,
            Some(vec!["/imgs/locations/rotondita.jpeg", "/imgs/locations/rotondita.jpeg"]),
        ),
        point(
            2,
            "Tecnopolis",
            -34.5615668,
            -58.5076549,
            Some(vec![
                "/imgs/locations/tecnopolis.jpeg",
                "/imgs/locations/tecnopolis-2.jpeg",
                "/imgs/locations/tecnopolis-3.jpeg",
            ]),
        ),
        point(4, "Location 4", -34.2033057, -58.9592798, None),
    ])
    .unwrap()
}

pub struct Harness {
    pub session: Session,
    pub log: Log,
    pub center: Rc<Cell<GeoPoint>>,
}

impl Harness {
    pub fn new(points: PointRepository) -> Self {
        Self::with_config(points, SessionConfig::default())
    }

    pub fn with_config(points: PointRepository, config: SessionConfig) -> Self {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let center = Rc::new(Cell::new(config.map.center));
        let surfaces = Surfaces {
            globe: Box::new(FakeGlobe(log.clone())),
            map: Box::new(FakeMap {
                log: log.clone(),
                center: center.clone(),
            }),
            panels: Box::new(FakePanels(log.clone())),
            readout: Box::new(FakeReadout(log.clone())),
        };
        let session = Session::new(
            config,
            points,
            surfaces,
            Box::new(StreetLevelGallery::default()),
        );
        Self {
            session,
            log,
            center,
        }
    }

    /// Start at t=0 and run the whole intro and handoff.
    pub fn into_map(mut self) -> Self {
        self.session.start(0).unwrap();
        self.session.advance(u64::MAX);
        assert_eq!(self.session.view_state(), ViewState::Map2D);
        self.log.borrow_mut().clear();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}
