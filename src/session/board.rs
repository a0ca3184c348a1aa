//! Board session: the surface UI event handlers call into.
//!
//! A session wires the store, the zone mutator and the drag tracker
//! together. Every handler runs to completion and commits at most one new
//! timeline, so the UI can re-render from `timeline()` after each call.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{BoardConfig, BoardResult, ImageRef, SessionRng, Step, StepId, Zone};
use crate::export::{render_export, ExportArtifact, ExportPlan, ExportRenderer};
use crate::timeline::{GameStateStore, Timeline};
use crate::zones::{append_images, remove_image_at, DragState, DragTracker, ZoneSlot};

/// Image references minted from one file drop.
pub type ImageBatch = SmallVec<[ImageRef; 4]>;

/// One play session's board.
///
/// ## Example
///
/// ```
/// use solo_board::core::{BoardConfig, ImageRef, StepId, Zone};
/// use solo_board::session::BoardSession;
///
/// let mut session = BoardSession::new(BoardConfig::new().seed(1));
/// let first = StepId::new(1);
///
/// let files = ["a.png", "b.png"];
/// session.drop_files(first, Zone::Hand, Some(&files[..]), |name| ImageRef::new(*name));
///
/// let second = session.add_step_from(0).unwrap();
/// session.remove_image(second, Zone::Hand, 0);
///
/// assert_eq!(session.step(first).unwrap().zone(Zone::Hand).len(), 2);
/// assert_eq!(session.step(second).unwrap().zone(Zone::Hand).len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BoardSession {
    config: BoardConfig,
    store: GameStateStore,
    drag: DragTracker,
    rng: SessionRng,
}

impl BoardSession {
    /// Open a session with a single empty step.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let rng = SessionRng::from_seed(config.seed);
        let mut store = GameStateStore::new();
        let first = store.reset_timeline();
        info!(step = first.raw(), copy_forward = config.copy_forward, "session opened");
        Self {
            config,
            store,
            drag: DragTracker::new(),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &GameStateStore {
        &self.store
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        self.store.timeline()
    }

    #[must_use]
    pub fn step(&self, id: StepId) -> Option<&Step> {
        self.store.step(id)
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    // === Images ===

    /// Files were dropped onto a zone.
    ///
    /// `mint` turns each file handle into an image reference (an object URL
    /// or similar); the session never reads file contents. A missing payload
    /// is ignored. Returns how many images were added.
    pub fn drop_files<F>(
        &mut self,
        step: StepId,
        zone: Zone,
        files: Option<&[F]>,
        mint: impl FnMut(&F) -> ImageRef,
    ) -> usize {
        let Some(files) = files else {
            return 0;
        };
        let batch: ImageBatch = files.iter().map(mint).collect();
        let count = batch.len();
        self.add_images(step, zone, batch);
        count
    }

    /// Append already minted image references to a zone.
    pub fn add_images(&mut self, step: StepId, zone: Zone, images: impl IntoIterator<Item = ImageRef>) {
        self.store.update(|timeline| append_images(timeline, step, zone, images));
    }

    /// The delete button on an image was pressed.
    pub fn remove_image(&mut self, step: StepId, zone: Zone, index: usize) {
        self.store.update(|timeline| remove_image_at(timeline, step, zone, index));
    }

    // === Steps ===

    /// The add-step button was pressed.
    ///
    /// Appends an empty step, or a copy of the last step when the session is
    /// configured to copy forward.
    pub fn add_step(&mut self) -> BoardResult<StepId> {
        let copy_from = if self.config.copy_forward {
            self.store.len().checked_sub(1)
        } else {
            None
        };
        self.store.add_step(copy_from)
    }

    /// Append a copy of the step at `index`.
    pub fn add_step_from(&mut self, index: usize) -> BoardResult<StepId> {
        self.store.add_step(Some(index))
    }

    /// Remove a step. A drag that started in it is dropped as well.
    pub fn remove_step(&mut self, id: StepId) -> Option<Step> {
        let removed = self.store.remove_step(id)?;
        if matches!(self.drag.state(), DragState::Dragging { origin, .. } if origin.step == id) {
            debug!(step = id.raw(), "cancelled drag from removed step");
            self.drag.cancel();
        }
        Some(removed)
    }

    /// The reset button was pressed: start over from one empty step.
    pub fn reset(&mut self) -> StepId {
        self.drag.cancel();
        self.store.reset_timeline()
    }

    // === Drag and drop ===

    /// Start dragging the image at `index` of `origin`.
    ///
    /// Returns the dragged image, or `None` (leaving any current drag in
    /// place) when there is no image at that position.
    pub fn begin_drag(&mut self, origin: ZoneSlot, index: usize) -> Option<ImageRef> {
        let image = self.store.step(origin.step)?.zone(origin.zone).get(index)?.clone();
        self.drag.begin(image.clone(), origin, index);
        Some(image)
    }

    /// The pointer left a zone's drop area.
    ///
    /// Returns the image released from its origin, which the eventual drop
    /// should carry.
    pub fn drag_leave(&mut self, slot: ZoneSlot) -> Option<ImageRef> {
        let (timeline, released) = self.drag.leave(self.store.timeline(), slot);
        if released.is_some() {
            self.store.set_timeline(timeline);
        }
        released
    }

    /// Something was dropped onto a zone.
    pub fn drop_image(&mut self, dest: ZoneSlot, carried: Option<ImageRef>) {
        let timeline = self.drag.drop_at(self.store.timeline(), dest, carried);
        self.store.set_timeline(timeline);
    }

    /// Forget the in-flight drag.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // === Export ===

    /// Plan an export of the current timeline.
    pub fn plan_export(&mut self, measured_height: u32) -> ExportPlan {
        ExportPlan::new(
            &self.config.layout,
            self.store.timeline(),
            measured_height,
            &self.config.file_prefix,
            &mut self.rng,
        )
    }

    /// The save button was pressed: render the timeline to an image.
    pub fn save<R: ExportRenderer>(
        &mut self,
        renderer: &mut R,
        measured_height: u32,
    ) -> BoardResult<ExportArtifact> {
        let plan = self.plan_export(measured_height);
        render_export(renderer, plan, self.store.timeline())
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
