//! Zone contents: pure mutations and drag relocation.
//!
//! ## Key Types
//!
//! - `append_images`, `remove_image_at`, `remove_image_by_value`: Timeline
//!   in, timeline out; only the addressed zone of the addressed step changes
//! - `DragTracker`: At most one in-flight drag between zones
//! - `ZoneSlot`: A zone of a specific step

pub mod mutator;
pub mod drag;

pub use mutator::{append_images, remove_image_at, remove_image_by_value};
pub use drag::{DragState, DragTracker, ZoneSlot};

// Re-export zone types from core for convenience
pub use crate::core::zone::{Zone, ZoneMap};
