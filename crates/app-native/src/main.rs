//! Headless driftmap session: the intro timeline runs against logging
//! renderers, then a scripted visitor hovers, opens and dismisses a point.
//!
//! Flags: `--fast` skips the real-time waits, `--no-interaction` skips the
//! scripted visitor.

mod surfaces;

use app_core::dataset::driftmap_locations;
use app_core::{
    MarkerEvent, PointRepository, Session, SessionConfig, StreetLevelGallery, Surfaces, ViewState,
    CANCEL_KEY,
};
use instant::Instant;
use std::time::Duration;
use surfaces::{LogAudio, LogGlobe, LogMap, LogPanels, LogReadout};

/// Point the scripted visitor inspects.
const SCRIPTED_POINT: u32 = 2;

#[derive(Clone, Copy, Debug, Default)]
struct Options {
    fast: bool,
    no_interaction: bool,
}

impl Options {
    fn from_args() -> anyhow::Result<Self> {
        let mut opts = Self::default();
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--fast" => opts.fast = true,
                "--no-interaction" => opts.no_interaction = true,
                other => anyhow::bail!(
                    "unknown argument `{}` (expected --fast or --no-interaction)",
                    other
                ),
            }
        }
        Ok(opts)
    }
}

/// Wall clock, or a virtual one that jumps straight to each deadline.
struct Clock {
    origin: Instant,
    virtual_ms: Option<u64>,
}

impl Clock {
    fn new(fast: bool) -> Self {
        Self {
            origin: Instant::now(),
            virtual_ms: fast.then_some(0),
        }
    }

    fn now_ms(&self) -> u64 {
        self.virtual_ms
            .unwrap_or_else(|| self.origin.elapsed().as_millis() as u64)
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        if let Some(now) = self.virtual_ms.as_mut() {
            *now = (*now).max(deadline_ms);
            return;
        }
        let now = self.now_ms();
        if deadline_ms > now {
            std::thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

fn visit(session: &mut Session) {
    log::info!("[visitor] hovering point {}", SCRIPTED_POINT);
    session.marker_event(MarkerEvent::hover(SCRIPTED_POINT));
    log::info!("[visitor] clicking point {}", SCRIPTED_POINT);
    session.marker_event(MarkerEvent::click(SCRIPTED_POINT));
    // Logging map flies instantly but raises no movement events of its own.
    session.map_moved();
    session.marker_event(MarkerEvent::unhover(SCRIPTED_POINT));
    log::info!("[visitor] pressing {}", CANCEL_KEY);
    session.key_down(CANCEL_KEY);
    session.map_moved();
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Options::from_args()?;

    let config = SessionConfig::default();
    let points = PointRepository::new(driftmap_locations())?;
    let surfaces = Surfaces {
        globe: Box::new(LogGlobe::default()),
        map: Box::new(LogMap::new(config.map.center)),
        panels: Box::new(LogPanels),
        readout: Box::new(LogReadout),
    };
    let mut session = Session::new(
        config,
        points,
        surfaces,
        Box::new(StreetLevelGallery::default()),
    );

    let mut clock = Clock::new(opts.fast);
    session.start_audio(Box::new(LogAudio::new(1)));
    session.start(clock.now_ms())?;

    let mut visited = opts.no_interaction;
    while let Some(deadline) = session.next_deadline() {
        clock.wait_until(deadline);
        session.advance(clock.now_ms());
        if !visited && session.view_state() == ViewState::Map2D {
            visit(&mut session);
            visited = true;
        }
    }

    log::info!(
        "[session] finished in {:?}; audio {:?}",
        session.view_state(),
        session.audio_state()
    );
    Ok(())
}
