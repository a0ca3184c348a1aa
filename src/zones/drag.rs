//! Cross-zone relocation by drag and drop.
//!
//! A drag is tracked outside the timeline as a small state machine:
//!
//! ```text
//!   Idle     --begin-->          Dragging
//!   Dragging --begin-->          Dragging   (last drag wins)
//!   Dragging --leave(origin)-->  Idle       (origin stripped)
//!   Dragging --drop_at(dest)-->  Idle       (image moved to dest)
//!   Idle     --drop_at(dest)-->  Idle       (carried image appended)
//! ```
//!
//! Leaving the origin zone strips the image from it and releases the
//! tracked reference; the released image is what the drop event carries to
//! its destination. A drop that arrives while the tracker is still
//! dragging (the pointer never left the origin's area) moves the image
//! directly, or does nothing when dropped back onto the origin. A direct
//! move takes out only the picked-up copy, and a drop aimed at a step that
//! is not on the timeline changes nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::mutator::{append_images, remove_image_at, remove_image_by_value};
use crate::core::{ImageRef, StepId, Zone};
use crate::timeline::Timeline;

/// One zone of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneSlot {
    pub step: StepId,
    pub zone: Zone,
}

impl ZoneSlot {
    #[must_use]
    pub const fn new(step: StepId, zone: Zone) -> Self {
        Self { step, zone }
    }
}

impl std::fmt::Display for ZoneSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.step, self.zone)
    }
}

/// Drag state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No image is being dragged.
    #[default]
    Idle,
    /// `image` was picked up from position `index` of `origin` and has not
    /// been dropped yet.
    Dragging {
        image: ImageRef,
        origin: ZoneSlot,
        index: usize,
    },
}

/// Tracks at most one in-flight drag.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// True while an image is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The image being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&ImageRef> {
        match &self.state {
            DragState::Dragging { image, .. } => Some(image),
            DragState::Idle => None,
        }
    }

    /// Start dragging `image` from position `index` of `origin`, replacing
    /// any tracked drag.
    pub fn begin(&mut self, image: ImageRef, origin: ZoneSlot, index: usize) {
        if let DragState::Dragging { image: previous, .. } = &self.state {
            trace!(%previous, "drag replaced before drop");
        }
        debug!(%image, %origin, index, "drag started");
        self.state = DragState::Dragging { image, origin, index };
    }

    /// Forget any tracked drag without touching the timeline.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// The pointer left the drop area of `slot`.
    ///
    /// When `slot` is the origin of the tracked drag, the image is stripped
    /// from it, the tracker returns to idle and the image is returned for
    /// the drop to carry. Leaving any other area changes nothing.
    pub fn leave(&mut self, timeline: &Timeline, slot: ZoneSlot) -> (Timeline, Option<ImageRef>) {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { image, origin, .. } if origin == slot => {
                debug!(%image, %origin, "drag left origin");
                let next = remove_image_by_value(timeline, origin.step, origin.zone, &image);
                (next, Some(image))
            }
            other => {
                self.state = other;
                (timeline.clone(), None)
            }
        }
    }

    /// An image was dropped onto `dest`.
    ///
    /// `carried` is the image the drop event brings along (released by an
    /// earlier `leave`). The tracker always ends idle. A move either lands
    /// in `dest` or leaves the timeline unchanged.
    pub fn drop_at(
        &mut self,
        timeline: &Timeline,
        dest: ZoneSlot,
        carried: Option<ImageRef>,
    ) -> Timeline {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { origin, .. } if origin == dest => {
                debug!(%dest, "dropped back onto origin");
                timeline.clone()
            }
            DragState::Dragging { image, origin, index } => {
                if timeline.step(dest.step).is_none() {
                    warn!(%image, %origin, %dest, "drop aimed at unknown step");
                    return timeline.clone();
                }
                let Some(position) = picked_position(timeline, origin, index, &image) else {
                    warn!(%image, %origin, "dragged image no longer in origin");
                    return timeline.clone();
                };
                debug!(%image, %origin, %dest, "moved image");
                let stripped = remove_image_at(timeline, origin.step, origin.zone, position);
                append_images(&stripped, dest.step, dest.zone, [image])
            }
            DragState::Idle => match carried {
                Some(image) => {
                    debug!(%image, %dest, "dropped carried image");
                    append_images(timeline, dest.step, dest.zone, [image])
                }
                None => timeline.clone(),
            },
        }
    }
}

/// Where the dragged copy sits now: the recorded index if it still holds
/// the image, otherwise the first occurrence.
fn picked_position(timeline: &Timeline, origin: ZoneSlot, index: usize, image: &ImageRef) -> Option<usize> {
    let images = timeline.step(origin.step)?.zone(origin.zone);
    if images.get(index) == Some(image) {
        Some(index)
    } else {
        images.index_of(image)
    }
}
