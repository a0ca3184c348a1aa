//! Timeline export.
//!
//! ## Key Types
//!
//! - `ExportPlan`: Target width, height and file name
//! - `StepColumn`: One step's zone contents in display order
//! - `ExportRenderer`: The external rasterizer

pub mod plan;

pub use plan::{
    columns, export_file_name, export_height, export_width, render_export, step_label,
    ExportArtifact, ExportPlan, ExportRenderer, StepColumn,
};
