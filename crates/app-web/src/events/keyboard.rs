use super::with_session;
use crate::SharedSession;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(window: &web::Window, session: &SharedSession) {
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        with_session(&session, "keydown", |s| s.key_down(&key));
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Err(e) =
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] keydown listener failed: {:?}", e);
    }
    closure.forget();
}
