// Shared intro/map tuning constants used by both web and native frontends.

// Default map center (Buenos Aires)
pub const CENTER_LAT: f64 = -34.6118;
pub const CENTER_LNG: f64 = -58.4173;

// Globe intro poses
pub const START_LAT: f64 = 10.0;
pub const START_LNG: f64 = -60.0;
pub const START_ALTITUDE: f64 = 3.5; // globe radii above the surface
pub const ZOOM_ALTITUDE: f64 = 0.8;

// Intro timeline (milliseconds from session start)
pub const INTRO_DELAY_MS: u64 = 2000;
pub const ZOOM_DURATION_MS: u64 = 2500;
pub const TRANSITION_DELAY_MS: u64 = 5000; // handoff to the 2D map

// Handoff settle timers (milliseconds after the handoff request)
pub const SURFACE_SETTLE_DELAY_MS: u64 = 100; // map resize correction
pub const GLOBE_CLEANUP_DELAY_MS: u64 = 1500; // final auto-rotate cleanup

// 2D map
pub const MAP_INITIAL_ZOOM: f64 = 13.0;
pub const MAP_MIN_ZOOM: f64 = 11.0;
pub const MAP_MAX_ZOOM: f64 = 18.0;
pub const MARKER_FOCUS_ZOOM: f64 = 16.0;
pub const FLY_DURATION_SECS: f64 = 1.0;
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const TILE_SUBDOMAINS: &str = "abcd";
pub const TILE_MAX_ZOOM: f64 = 19.0;

// Markers
pub const PIN_COLOR: &str = "#00ff88";

// Gallery fallback
pub const STREET_LEVEL_HEADINGS: [u16; 4] = [0, 90, 180, 270];
pub const STREET_LEVEL_URL_TEMPLATE: &str =
    "https://maps.googleapis.com/maps/api/streetview?size=640x400&location={lat},{lng}&heading={heading}&fov=90";
pub const PLACEHOLDER_IMAGE: &str = "/imgs/placeholder.jpeg";

// Ambient audio
pub const AMBIENT_TRACK: &str = "getlow.mp3";
pub const AMBIENT_VOLUME: f64 = 0.4;

// Dismiss key for the detail panel
pub const CANCEL_KEY: &str = "Escape";
