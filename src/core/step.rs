//! Steps: one board snapshot each.
//!
//! ## StepId
//!
//! Session-unique identifier handed out by the store's allocator.
//! Allocation starts at 1, only ever increases, and an id is never reused,
//! not even after its step has been removed.
//!
//! ## Step
//!
//! The contents of every zone at one point of play. Zone lists are
//! persistent vectors: a step copied from another shares its storage until
//! either side changes, and a change to one is never visible in the other.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::image::ImageRef;
use super::zone::{Zone, ZoneMap};

/// Unique identifier for a step within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub u32);

impl StepId {
    /// The first id a fresh session allocates.
    pub const FIRST: StepId = StepId(1);

    /// Create a new step ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for StepId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step({})", self.0)
    }
}

/// Ordered image list held by one zone.
pub type ZoneImages = Vector<ImageRef>;

/// One snapshot of the board across all zones.
///
/// ```
/// use solo_board::core::{ImageRef, Step, StepId, Zone};
///
/// let mut first = Step::empty(StepId::new(1));
/// first.zone_mut(Zone::Hand).push_back(ImageRef::new("a.png"));
///
/// let mut second = Step::copied_from(StepId::new(2), &first);
/// second.zone_mut(Zone::Hand).clear();
///
/// // The source keeps its own contents.
/// assert_eq!(first.zone(Zone::Hand).len(), 1);
/// assert!(second.zone(Zone::Hand).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Session-unique id.
    pub id: StepId,

    /// Images per zone, in placement order.
    pub zones: ZoneMap<ZoneImages>,
}

impl Step {
    /// Create a step with every zone empty.
    #[must_use]
    pub fn empty(id: StepId) -> Self {
        Self {
            id,
            zones: ZoneMap::with_default(),
        }
    }

    /// Create a step holding the same zone contents as `source` under a new id.
    #[must_use]
    pub fn copied_from(id: StepId, source: &Step) -> Self {
        Self {
            id,
            zones: source.zones.clone(),
        }
    }

    /// Images in a zone.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &ZoneImages {
        &self.zones[zone]
    }

    /// Mutable images in a zone.
    pub fn zone_mut(&mut self, zone: Zone) -> &mut ZoneImages {
        &mut self.zones[zone]
    }

    /// Total images across all zones.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.zones.iter().map(|(_, images)| images.len()).sum()
    }

    /// True when no zone holds an image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_count() == 0
    }

    /// Zones and their contents have the same images, ignoring the id.
    #[must_use]
    pub fn same_contents(&self, other: &Step) -> bool {
        self.zones == other.zones
    }
}
