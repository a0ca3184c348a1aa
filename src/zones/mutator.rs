//! Zone mutator: pure timeline transformations.
//!
//! Each function takes the current timeline and returns the next one. The
//! input is never modified, and every step other than the targeted one is
//! carried over as-is (sharing storage with the input).
//!
//! Requests naming a step that is not on the timeline return the input
//! unchanged. Callers that need to know about the miss can use
//! `Timeline::try_update_zone` directly.

use tracing::{trace, warn};

use crate::core::{ImageRef, StepId, Zone};
use crate::timeline::Timeline;

/// Append `images`, in order, to the end of a zone.
///
/// ```
/// use solo_board::core::{ImageRef, Step, StepId, Zone};
/// use solo_board::timeline::Timeline;
/// use solo_board::zones::append_images;
///
/// let timeline: Timeline = std::iter::once(Step::empty(StepId::new(1))).collect();
/// let next = append_images(&timeline, StepId::new(1), Zone::Hand, [ImageRef::new("a.png")]);
///
/// assert_eq!(next.step(StepId::new(1)).unwrap().zone(Zone::Hand).len(), 1);
/// assert!(timeline.step(StepId::new(1)).unwrap().is_empty());
/// ```
#[must_use]
pub fn append_images(
    timeline: &Timeline,
    step: StepId,
    zone: Zone,
    images: impl IntoIterator<Item = ImageRef>,
) -> Timeline {
    let result = timeline.try_update_zone(step, zone, |list| {
        let before = list.len();
        list.extend(images);
        trace!(step = step.raw(), %zone, added = list.len() - before, "appended images");
    });
    unwrap_or_unchanged(timeline, result)
}

/// Remove the image at `index` of a zone, shifting later images down.
///
/// An out-of-range index leaves the zone alone.
#[must_use]
pub fn remove_image_at(timeline: &Timeline, step: StepId, zone: Zone, index: usize) -> Timeline {
    let len = match timeline.step(step) {
        Some(target) => target.zone(zone).len(),
        None => {
            warn!(step = step.raw(), %zone, "mutation aimed at unknown step");
            return timeline.clone();
        }
    };
    if index >= len {
        warn!(step = step.raw(), %zone, index, len, "image index out of range");
        return timeline.clone();
    }

    let result = timeline.try_update_zone(step, zone, |list| {
        list.remove(index);
        trace!(step = step.raw(), %zone, index, "removed image");
    });
    unwrap_or_unchanged(timeline, result)
}

/// Remove every occurrence of `image` from a zone.
///
/// A zone without the image is left alone, so repeating the call is
/// harmless.
#[must_use]
pub fn remove_image_by_value(
    timeline: &Timeline,
    step: StepId,
    zone: Zone,
    image: &ImageRef,
) -> Timeline {
    let present = timeline
        .step(step)
        .is_some_and(|target| target.zone(zone).contains(image));
    if !present {
        return timeline.clone();
    }

    let result = timeline.try_update_zone(step, zone, |list| {
        list.retain(|candidate| candidate != image);
        trace!(step = step.raw(), %zone, %image, "stripped image");
    });
    unwrap_or_unchanged(timeline, result)
}

fn unwrap_or_unchanged(
    timeline: &Timeline,
    result: crate::core::BoardResult<Timeline>,
) -> Timeline {
    result.unwrap_or_else(|err| {
        warn!(%err, "ignoring zone mutation");
        timeline.clone()
    })
}
