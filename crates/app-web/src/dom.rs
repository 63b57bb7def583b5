use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Swap the `hidden`/`visible` classes the stylesheet animates on.
#[inline]
pub fn set_shown(el: &web::Element, shown: bool) {
    let cl = el.class_list();
    if shown {
        _ = cl.remove_1("hidden");
        _ = cl.add_1("visible");
    } else {
        _ = cl.remove_1("visible");
        _ = cl.add_1("hidden");
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Window inner size in CSS pixels.
pub fn viewport_size() -> Option<(u32, u32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width.max(1.0) as u32, height.max(1.0) as u32))
}
