//! Built-in Buenos Aires dataset.
//!
//! Only the first three entries ship local photos; the rest rely on the
//! gallery fallback.

use crate::geo::GeoPoint;
use crate::poi::{PointId, PointOfInterest};

const HIDDEN_SPACE: &str =
    "A hidden underground space in Buenos Aires. Explore the depths beneath the city streets.";
const URBAN_MAZE: &str = "Another underground discovery in the urban maze of Buenos Aires. Where the city's secrets lie hidden.";

struct Entry {
    id: PointId,
    name: &'static str,
    lat: f64,
    lng: f64,
    description: &'static str,
    images: &'static [&'static str],
}

const LOCATIONS: &[Entry] = &[
    Entry {
        id: 1,
        name: "Rotondita",
        lat: -34.4493333,
        lng: -58.74275,
        description: HIDDEN_SPACE,
        images: &["/imgs/locations/rotondita.jpeg", "/imgs/locations/rotondita.jpeg"],
    },
    Entry {
        id: 2,
        name: "Tecnopolis",
        lat: -34.5615668,
        lng: -58.5076549,
        description: URBAN_MAZE,
        images: &["/imgs/locations/tecnopolis.jpeg", "/imgs/locations/tecnopolis.jpeg"],
    },
    Entry {
        id: 3,
        name: "Rotonda Grande",
        lat: -34.5333179,
        lng: -58.4649936,
        description: "A third underground location waiting to be explored. The city's hidden network continues to reveal itself.",
        images: &["/imgs/locations/rotonda-grande.jpeg", "/imgs/locations/rotonda-grande.jpeg"],
    },
    Entry {
        id: 4,
        name: "Location 4",
        lat: -34.2033057,
        lng: -58.9592798,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 5,
        name: "Location 5",
        lat: -34.1214029,
        lng: -59.0177208,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 6,
        name: "Location 6",
        lat: -34.3894907,
        lng: -59.0357579,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 7,
        name: "Location 7",
        lat: -34.6058728,
        lng: -59.1733605,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 8,
        name: "Location 8",
        lat: -34.4876945,
        lng: -59.0834426,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 9,
        name: "Location 9",
        lat: -34.4638477,
        lng: -59.3981664,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 10,
        name: "Location 10",
        lat: -34.4639519,
        lng: -59.3959591,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 11,
        name: "Location 11",
        lat: -34.5668079,
        lng: -58.8488137,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 12,
        name: "Location 12",
        lat: -34.0918472,
        lng: -59.0726274,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 13,
        name: "Location 13",
        lat: -34.0757125,
        lng: -59.0449121,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 14,
        name: "Location 14",
        lat: -34.0608571,
        lng: -59.0936217,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 15,
        name: "Location 15",
        lat: -34.1056972,
        lng: -59.098743,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 16,
        name: "Location 16",
        lat: -34.0988031,
        lng: -59.0857007,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 17,
        name: "Location 17",
        lat: -34.0978795,
        lng: -59.0840006,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 18,
        name: "Location 18",
        lat: -34.4526839,
        lng: -58.7231058,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 19,
        name: "Location 19",
        lat: -34.431898,
        lng: -58.7199396,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 20,
        name: "Location 20",
        lat: -34.4613248,
        lng: -58.7285883,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 21,
        name: "Location 21",
        lat: -34.4299297,
        lng: -58.7171589,
        description: URBAN_MAZE,
        images: &[],
    },
    Entry {
        id: 22,
        name: "Location 22",
        lat: -34.4356772,
        lng: -58.719171,
        description: HIDDEN_SPACE,
        images: &[],
    },
    Entry {
        id: 23,
        name: "Location 23",
        lat: -34.4277127,
        lng: -58.7251006,
        description: URBAN_MAZE,
        images: &[],
    },
];

const TAGS: [&str; 2] = ["underground", "urban"];

/// The 23 locations of the driftmap tour, in display order.
pub fn driftmap_locations() -> Vec<PointOfInterest> {
    LOCATIONS
        .iter()
        .map(|e| PointOfInterest {
            id: e.id,
            name: e.name.to_string(),
            position: GeoPoint::new(e.lat, e.lng),
            description: e.description.to_string(),
            images: (!e.images.is_empty())
                .then(|| e.images.iter().map(|s| s.to_string()).collect()),
            tags: TAGS.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}
