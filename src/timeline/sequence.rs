//! The ordered sequence of steps.
//!
//! `Timeline` is a thin wrapper over a persistent vector of steps. Cloning
//! a timeline is O(1) and updating one step leaves every other step's
//! storage shared with the previous version, so callers can keep old
//! timelines around (for rendering, export, comparison) at no cost.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BoardError, BoardResult, Step, StepId, Zone, ZoneImages};

/// Ordered play history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    steps: Vector<Step>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there are no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate steps in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Step at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Last step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Position of the step with the given id.
    #[must_use]
    pub fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    /// Step with the given id.
    #[must_use]
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Ids in play order.
    pub fn ids(&self) -> impl Iterator<Item = StepId> + '_ {
        self.steps.iter().map(|step| step.id)
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push_back(step);
    }

    /// Remove and return the step with the given id.
    pub fn remove(&mut self, id: StepId) -> Option<Step> {
        let index = self.position(id)?;
        Some(self.steps.remove(index))
    }

    /// Borrow the underlying persistent vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector<Step> {
        &self.steps
    }

    /// Return a timeline where one zone of one step has been rewritten by `f`.
    ///
    /// Fails with `StepNotFound` when no step has `id`; `self` is never
    /// modified. Every other step is shared with `self`.
    pub fn try_update_zone(
        &self,
        id: StepId,
        zone: Zone,
        f: impl FnOnce(&mut ZoneImages),
    ) -> BoardResult<Timeline> {
        let index = self.position(id).ok_or(BoardError::StepNotFound(id))?;
        let mut steps = self.steps.clone();
        if let Some(step) = steps.get_mut(index) {
            f(step.zone_mut(zone));
        }
        Ok(Timeline { steps })
    }

    /// Check the id invariants against an allocator position.
    ///
    /// Ids must strictly increase along the timeline and stay below
    /// `next_id`.
    pub fn validate(&self, next_id: StepId) -> BoardResult<()> {
        let mut previous: Option<StepId> = None;
        for id in self.ids() {
            if let Some(prev) = previous {
                if id <= prev {
                    return Err(BoardError::InvalidTimeline(format!(
                        "{id} follows {prev}; ids must strictly increase"
                    )));
                }
            }
            if id >= next_id {
                return Err(BoardError::InvalidTimeline(format!(
                    "{id} has not been allocated yet (next is {next_id})"
                )));
            }
            previous = Some(id);
        }
        Ok(())
    }
}

impl From<Vector<Step>> for Timeline {
    fn from(steps: Vector<Step>) -> Self {
        Self { steps }
    }
}

impl FromIterator<Step> for Timeline {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Step;
    type IntoIter = im::vector::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
