//! Drives the session timeline from `setTimeout`.

use crate::SharedSession;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since page start, the session's logical clock.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock {
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Run every due action, then arm one timer for the next deadline. The chain
/// ends once the timeline is empty.
pub fn pump(session: SharedSession, clock: Clock) {
    let now = clock.now_ms();
    let next = match session.try_borrow_mut() {
        Ok(mut s) => {
            let ran = s.advance(now);
            if ran > 0 {
                log::debug!("[timers] ran {} actions at {}ms", ran, now);
            }
            s.next_deadline()
        }
        // An input handler holds the session; come back on the next tick.
        Err(_) => Some(now),
    };
    if let Some(deadline) = next {
        arm(session, clock, deadline.saturating_sub(now));
    }
}

fn arm(session: SharedSession, clock: Clock, delay_ms: u64) {
    let Some(window) = web::window() else {
        log::error!("[timers] no window; timeline stalled");
        return;
    };
    let callback = Closure::once_into_js(move || pump(session, clock));
    let delay = delay_ms.min(i32::MAX as u64) as i32;
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::error!("[timers] setTimeout failed: {:?}", e);
    }
}
