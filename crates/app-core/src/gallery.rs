use crate::constants::{STREET_LEVEL_HEADINGS, STREET_LEVEL_URL_TEMPLATE};
use crate::poi::PointOfInterest;

/// Image collaborator: turns a point into the ordered, non-empty list of
/// image references to display.
pub trait Gallery {
    fn images_for(&self, point: &PointOfInterest) -> Vec<String>;
}

/// Uses the point's own images when they are served locally, otherwise
/// synthesizes street-level imagery at four headings around the point.
#[derive(Clone, Debug)]
pub struct StreetLevelGallery {
    url_template: String,
}

impl Default for StreetLevelGallery {
    fn default() -> Self {
        Self::new(STREET_LEVEL_URL_TEMPLATE)
    }
}

impl StreetLevelGallery {
    /// `url_template` may contain `{lat}`, `{lng}` and `{heading}`.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    fn street_level_url(&self, point: &PointOfInterest, heading: u16) -> String {
        self.url_template
            .replace("{lat}", &point.position.latitude.to_string())
            .replace("{lng}", &point.position.longitude.to_string())
            .replace("{heading}", &heading.to_string())
    }
}

#[inline]
pub fn is_locally_addressable(src: &str) -> bool {
    src.starts_with('/') || src.starts_with("./") || src.starts_with("../")
}

impl Gallery for StreetLevelGallery {
    fn images_for(&self, point: &PointOfInterest) -> Vec<String> {
        match &point.images {
            Some(images) if images.first().is_some_and(|s| is_locally_addressable(s)) => {
                images.clone()
            }
            _ => STREET_LEVEL_HEADINGS
                .iter()
                .map(|&h| self.street_level_url(point, h))
                .collect(),
        }
    }
}
