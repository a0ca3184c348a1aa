//! Core board types: zones, image references, steps, configuration, errors.
//!
//! Everything here is plain data. The store, the zone mutator and the
//! session build on these types without adding new invariants to them.

pub mod zone;
pub mod image;
pub mod step;
pub mod config;
pub mod rng;
pub mod error;

pub use zone::{Zone, ZoneMap};
pub use image::ImageRef;
pub use step::{Step, StepId, ZoneImages};
pub use config::{BoardConfig, ExportHeight, ExportLayout, CARD_MARGIN, CARD_WIDTH, DEFAULT_FILE_PREFIX};
pub use rng::SessionRng;
pub use error::{BoardError, BoardResult};
