use super::with_session;
use crate::dom;
use crate::SharedSession;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page clicks count as the audio gesture; the close button dismisses the
/// detail panel.
pub fn wire_pointer_handlers(document: &web::Document, session: &SharedSession) {
    {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            with_session(&session, "click", |s| s.pointer_down());
        }) as Box<dyn FnMut(web::MouseEvent)>);
        if let Err(e) =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] click listener failed: {:?}", e);
        }
        closure.forget();
    }

    let session = session.clone();
    dom::add_click_listener(document, "detail-close", move || {
        with_session(&session, "detail-close", |s| s.close_detail());
    });
}

pub fn wire_resize(window: &web::Window, session: &SharedSession) {
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some((w, h)) = dom::viewport_size() {
            with_session(&session, "resize", |s| s.resize(w, h));
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] resize listener failed: {:?}", e);
    }
    closure.forget();
}
