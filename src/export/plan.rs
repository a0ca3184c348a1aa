//! Export planning: image size, file name and column contents.
//!
//! The rasterizer is outside this crate. It is handed an `ExportPlan` and
//! the timeline laid out as `StepColumn`s, and returns encoded image bytes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoardError, BoardResult, ExportHeight, ExportLayout, ImageRef, SessionRng, StepId, Zone};
use crate::timeline::Timeline;

/// Target size and file name for one export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPlan {
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

/// Export width for `step_count` steps under `layout`.
///
/// ```
/// use solo_board::core::ExportLayout;
/// use solo_board::export::export_width;
///
/// assert_eq!(export_width(&ExportLayout::default(), 3), (370 + 16) * 3);
/// assert_eq!(export_width(&ExportLayout::default().with_control_width(60), 3), 386 * 3 + 60);
/// ```
#[must_use]
pub fn export_width(layout: &ExportLayout, step_count: usize) -> u32 {
    let columns = u32::try_from(step_count).unwrap_or(u32::MAX);
    let width = layout.column_width().saturating_mul(columns);
    match layout.control_width {
        Some(control) => width.saturating_add(control),
        None => width,
    }
}

/// Export height: the fixed height, or the measured one for dynamic layouts.
#[must_use]
pub fn export_height(layout: &ExportLayout, measured: u32) -> u32 {
    match layout.height {
        ExportHeight::Fixed(height) => height,
        ExportHeight::Dynamic => measured,
    }
}

/// File name of the form `{prefix}-{uuid}.png`.
pub fn export_file_name(prefix: &str, rng: &mut SessionRng) -> String {
    format!("{prefix}-{}.png", rng.next_uuid())
}

impl ExportPlan {
    /// Plan an export of `timeline`.
    ///
    /// `measured_height` is the rendered height of the timeline view; it is
    /// ignored when the layout has a fixed height.
    pub fn new(
        layout: &ExportLayout,
        timeline: &Timeline,
        measured_height: u32,
        prefix: &str,
        rng: &mut SessionRng,
    ) -> Self {
        let plan = Self {
            width: export_width(layout, timeline.len()),
            height: export_height(layout, measured_height),
            file_name: export_file_name(prefix, rng),
        };
        debug!(width = plan.width, height = plan.height, file = %plan.file_name, "planned export");
        plan
    }
}

/// One step as it appears in the export, left to right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepColumn {
    pub id: StepId,

    /// `Step #n`, numbered by position starting at 1.
    pub label: String,

    /// Zone contents in `Zone::ALL` order.
    pub zones: Vec<(Zone, Vec<ImageRef>)>,
}

/// Heading shown above the step at `index`.
#[must_use]
pub fn step_label(index: usize) -> String {
    format!("Step #{}", index + 1)
}

/// Lay the timeline out in display order.
#[must_use]
pub fn columns(timeline: &Timeline) -> Vec<StepColumn> {
    timeline
        .iter()
        .enumerate()
        .map(|(index, step)| StepColumn {
            id: step.id,
            label: step_label(index),
            zones: step
                .zones
                .iter()
                .map(|(zone, images)| (zone, images.iter().cloned().collect()))
                .collect(),
        })
        .collect()
}

/// The image rasterizer.
///
/// Implementations serialize the rendered timeline into an image of exactly
/// `plan.width` by `plan.height` pixels.
pub trait ExportRenderer {
    type Error: std::fmt::Display;

    fn render(&mut self, plan: &ExportPlan, columns: &[StepColumn]) -> Result<Vec<u8>, Self::Error>;
}

/// A finished export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub plan: ExportPlan,
    pub bytes: Vec<u8>,
}

/// Run `renderer` over `timeline` according to `plan`.
pub fn render_export<R: ExportRenderer>(
    renderer: &mut R,
    plan: ExportPlan,
    timeline: &Timeline,
) -> BoardResult<ExportArtifact> {
    let columns = columns(timeline);
    let bytes = renderer
        .render(&plan, &columns)
        .map_err(|err| BoardError::Export(err.to_string()))?;
    debug!(file = %plan.file_name, bytes = bytes.len(), "rendered export");
    Ok(ExportArtifact { plan, bytes })
}
