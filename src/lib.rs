//! # solo-board
//!
//! Board-state timeline for solo card-game play sessions.
//!
//! A session is a sequence of **steps**. Each step is a snapshot of the
//! board: five zones (hand, field, graveyard, banished, extra), each an
//! ordered list of card images. Cards are nothing but image URLs.
//!
//! ## Design Principles
//!
//! 1. **Snapshots are independent**: A step copied from another starts with
//!    the same images, and from then on neither sees the other's changes.
//!
//! 2. **Ids are forever**: Step ids are allocated monotonically and never
//!    reused, so removing a step never renumbers the others.
//!
//! 3. **Mutations are pure**: Zone changes take a timeline and return the
//!    next one; requests aimed at unknown steps return the input unchanged.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) timeline and step cloning via
//!   `im-rs`; untouched steps share storage across versions.
//!
//! ## Modules
//!
//! - `core`: Zones, image references, steps, configuration, errors
//! - `timeline`: The ordered step sequence and the store that owns it
//! - `zones`: Zone mutations and drag relocation between zones
//! - `export`: Image export sizing, naming and the renderer seam
//! - `session`: Event-facing session tying everything together

pub mod core;
pub mod timeline;
pub mod zones;
pub mod export;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Zone, ZoneMap, ImageRef, Step, StepId, ZoneImages,
    BoardConfig, ExportHeight, ExportLayout, SessionRng,
    BoardError, BoardResult,
};

pub use crate::timeline::{GameStateStore, Timeline};

pub use crate::zones::{
    append_images, remove_image_at, remove_image_by_value,
    DragState, DragTracker, ZoneSlot,
};

pub use crate::export::{ExportArtifact, ExportPlan, ExportRenderer, StepColumn};

pub use crate::session::{BoardSession, ImageBatch};
