//! DOM-backed preview/detail panels and the coordinate readout.

use crate::dom;
use app_core::{DetailContent, PanelView, PreviewContent, ReadoutView, PLACEHOLDER_IMAGE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lazy loading with a placeholder swapped in when `src` fails.
fn load_image(img: &web::HtmlImageElement, src: &str, alt: &str) {
    img.set_src(src);
    img.set_alt(alt);
    _ = img.set_attribute("loading", "lazy");
    _ = img.set_attribute(
        "onerror",
        &format!("this.onerror=null;this.src='{}'", PLACEHOLDER_IMAGE),
    );
}

pub struct DomPanels {
    document: web::Document,
    preview: web::Element,
    preview_image: web::HtmlImageElement,
    detail: web::Element,
}

impl DomPanels {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            preview: dom::element(document, "preview-panel")?,
            preview_image: dom::element(document, "preview-image")?
                .dyn_into::<web::HtmlImageElement>()
                .map_err(|_| anyhow::anyhow!("#preview-image is not an <img>"))?,
            detail: dom::element(document, "detail-panel")?,
        })
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::warn!("[panels] missing #{}", id),
        }
    }

    fn image(&self, src: &str, alt: &str) -> Option<web::HtmlImageElement> {
        let img = self
            .document
            .create_element("img")
            .ok()?
            .dyn_into::<web::HtmlImageElement>()
            .ok()?;
        load_image(&img, src, alt);
        Some(img)
    }
}

impl PanelView for DomPanels {
    fn show_preview(&mut self, content: &PreviewContent) {
        self.set_text("preview-title", &content.name);
        self.set_text("preview-coords", &content.coords);
        load_image(&self.preview_image, &content.image, &content.name);
        dom::set_shown(&self.preview, true);
    }

    fn hide_preview(&mut self) {
        dom::set_shown(&self.preview, false);
    }

    fn show_detail(&mut self, content: &DetailContent) {
        self.set_text("detail-title", &content.name);
        self.set_text("detail-coords", &content.coords);
        self.set_text("detail-desc", &content.description);
        if let Some(gallery) = self.document.get_element_by_id("detail-gallery") {
            gallery.set_inner_html("");
            for image in &content.gallery {
                if let Some(img) = self.image(&image.src, &image.alt) {
                    _ = gallery.append_child(&img);
                }
            }
        }
        dom::set_shown(&self.detail, true);
    }

    fn hide_detail(&mut self) {
        dom::set_shown(&self.detail, false);
    }
}

pub struct DomReadout {
    lat: web::Element,
    lng: web::Element,
}

impl DomReadout {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            lat: dom::element(document, "camera-lat")?,
            lng: dom::element(document, "camera-lng")?,
        })
    }
}

impl ReadoutView for DomReadout {
    fn set_readout(&mut self, latitude: &str, longitude: &str) {
        self.lat.set_text_content(Some(latitude));
        self.lng.set_text_content(Some(longitude));
    }
}
