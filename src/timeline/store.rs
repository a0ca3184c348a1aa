//! Game-state store: the timeline plus its id allocator.
//!
//! The store is the single owner of session state. Steps enter only through
//! `add_step` and `reset_timeline`, which are also the only places ids are
//! allocated, so ids stay unique for the life of the store no matter how
//! many steps are removed in between.

use tracing::{debug, warn};

use super::sequence::Timeline;
use crate::core::{BoardError, BoardResult, Step, StepId};

/// Owns the timeline and the next id to hand out.
///
/// ## Usage
///
/// ```
/// use solo_board::timeline::GameStateStore;
/// use solo_board::core::StepId;
///
/// let mut store = GameStateStore::new();
///
/// let first = store.add_step(None).unwrap();
/// let second = store.add_step(Some(0)).unwrap();
/// assert_eq!((first, second), (StepId::new(1), StepId::new(2)));
///
/// store.remove_step(first);
/// let third = store.add_step(None).unwrap();
///
/// // Removed ids are never handed out again.
/// assert_eq!(third, StepId::new(3));
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameStateStore {
    timeline: Timeline,
    next_id: StepId,
}

impl Default for GameStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateStore {
    /// Create a store with an empty timeline; the first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            next_id: StepId::FIRST,
        }
    }

    /// The current timeline.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The id the next new step will receive.
    #[must_use]
    pub fn next_id(&self) -> StepId {
        self.next_id
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// True when the timeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Step with the given id.
    #[must_use]
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.timeline.step(id)
    }

    /// Position of the step with the given id.
    #[must_use]
    pub fn position(&self, id: StepId) -> Option<usize> {
        self.timeline.position(id)
    }

    fn allocate(&mut self) -> StepId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Append a new step and return its id.
    ///
    /// With `copy_from = None` the step is empty. With `Some(index)` it
    /// starts with the zone contents of the step currently at `index`.
    ///
    /// An out-of-range `index` is rejected before anything changes: the
    /// timeline and the allocator are left as they were.
    pub fn add_step(&mut self, copy_from: Option<usize>) -> BoardResult<StepId> {
        let source = match copy_from {
            Some(index) => Some(self.timeline.get(index).cloned().ok_or(
                BoardError::StepIndexOutOfRange {
                    index,
                    len: self.timeline.len(),
                },
            )?),
            None => None,
        };

        let id = self.allocate();
        let step = match &source {
            Some(source) => Step::copied_from(id, source),
            None => Step::empty(id),
        };

        debug!(
            step = id.raw(),
            copied_from = source.as_ref().map(|s| s.id.raw()),
            "added step"
        );
        self.timeline.push(step);
        Ok(id)
    }

    /// Remove the step with the given id, returning it.
    ///
    /// Unknown ids are ignored. Other steps keep their ids and the
    /// allocator is not touched.
    pub fn remove_step(&mut self, id: StepId) -> Option<Step> {
        let removed = self.timeline.remove(id);
        match &removed {
            Some(_) => debug!(step = id.raw(), remaining = self.timeline.len(), "removed step"),
            None => warn!(step = id.raw(), "remove requested for unknown step"),
        }
        removed
    }

    /// Replace the whole history with a single fresh empty step.
    pub fn reset_timeline(&mut self) -> StepId {
        let id = self.allocate();
        self.timeline = std::iter::once(Step::empty(id)).collect();
        debug!(step = id.raw(), "reset timeline");
        id
    }

    /// Replace the timeline wholesale.
    ///
    /// Callers must keep the id invariants: ids strictly increasing in
    /// timeline order, all previously allocated by this store. Debug
    /// builds assert this.
    pub fn set_timeline(&mut self, timeline: Timeline) {
        debug_assert!(
            timeline.validate(self.next_id).is_ok(),
            "set_timeline would break id invariants: {:?}",
            timeline.validate(self.next_id)
        );
        self.timeline = timeline;
    }

    /// Like `set_timeline`, but reports a broken invariant instead of
    /// asserting. The current timeline is kept on error.
    pub fn try_set_timeline(&mut self, timeline: Timeline) -> BoardResult<()> {
        timeline.validate(self.next_id)?;
        self.timeline = timeline;
        Ok(())
    }

    /// Compute a new timeline from the current one and commit it.
    pub fn update(&mut self, f: impl FnOnce(&Timeline) -> Timeline) {
        let next = f(&self.timeline);
        self.set_timeline(next);
    }
}
