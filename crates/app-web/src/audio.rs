//! `<audio>`-backed ambient track.

use crate::events::with_session;
use crate::SharedSession;
use app_core::{AmbientAudio, PlaybackBlocked, Session, AMBIENT_TRACK, AMBIENT_VOLUME};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct HtmlAmbientAudio {
    element: web::HtmlAudioElement,
    session: Weak<RefCell<Session>>,
}

impl HtmlAmbientAudio {
    pub fn new(session: &SharedSession) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(AMBIENT_TRACK)
            .map_err(crate::js::js_err)?;
        element.set_loop(true);
        element.set_volume(AMBIENT_VOLUME);
        Ok(Self {
            element,
            session: Rc::downgrade(session),
        })
    }
}

impl AmbientAudio for HtmlAmbientAudio {
    /// `play()` settles later; a rejection is reported back to the session.
    fn play(&mut self) -> Result<(), PlaybackBlocked> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackBlocked(format!("{:?}", e)))?;
        let session = self.session.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let Some(session) = session.upgrade() else {
                    return;
                };
                with_session(&session, "audio rejection", |s| {
                    s.audio_blocked(PlaybackBlocked(format!("{:?}", e)));
                });
            }
        });
        Ok(())
    }
}
