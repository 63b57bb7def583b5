//! Platform-free core of driftmap: the intro camera sequence, the globe to
//! map handoff, and marker-driven preview/detail panels.
//!
//! Front-ends implement the traits in [`surfaces`] and feed a [`Session`]
//! with a millisecond clock and raw input.

pub mod audio;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod gallery;
pub mod geo;
pub mod markers;
pub mod panels;
pub mod poi;
pub mod readout;
pub mod sequencer;
pub mod session;
pub mod surfaces;
pub mod timeline;
pub mod view;

pub use audio::*;
pub use config::*;
pub use constants::*;
pub use gallery::*;
pub use geo::*;
pub use markers::*;
pub use panels::*;
pub use poi::*;
pub use readout::*;
pub use sequencer::*;
pub use session::*;
pub use surfaces::*;
pub use timeline::*;
pub use view::*;
