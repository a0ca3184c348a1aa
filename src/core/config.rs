//! Session configuration types.
//!
//! A session is configured at startup by providing:
//! - `ExportLayout`: Card geometry used to size exported images
//! - `BoardConfig`: Combines the layout with naming and step behaviour
//!
//! All types deserialize from the same shape they serialize to, so a host
//! page can hand the configuration over as JSON.

use serde::{Deserialize, Serialize};

/// Rendered width of one step card, in pixels.
pub const CARD_WIDTH: u32 = 370;

/// Horizontal gap between step cards, in pixels.
pub const CARD_MARGIN: u32 = 16;

/// Default export file name prefix.
pub const DEFAULT_FILE_PREFIX: &str = "yspt";

/// How the export height is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportHeight {
    /// Use the measured height of the rendered timeline.
    Dynamic,
    /// Always export at this height.
    Fixed(u32),
}

/// Geometry of the exported timeline image.
///
/// The export width is `(card_width + card_margin) * step_count`, plus
/// `control_width` when the add-step control is part of the capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLayout {
    /// Width of one step card.
    pub card_width: u32,

    /// Gap after each step card.
    pub card_margin: u32,

    /// Extra width for the trailing control column. `None` leaves it out.
    pub control_width: Option<u32>,

    /// Height policy.
    pub height: ExportHeight,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_margin: CARD_MARGIN,
            control_width: None,
            height: ExportHeight::Dynamic,
        }
    }
}

impl ExportLayout {
    /// Include a trailing control column of the given width.
    #[must_use]
    pub fn with_control_width(mut self, width: u32) -> Self {
        self.control_width = Some(width);
        self
    }

    /// Export at a fixed height.
    #[must_use]
    pub fn fixed_height(mut self, height: u32) -> Self {
        self.height = ExportHeight::Fixed(height);
        self
    }

    /// Width of one step column including its margin.
    #[must_use]
    pub fn column_width(&self) -> u32 {
        self.card_width + self.card_margin
    }
}

/// Complete session configuration.
///
/// ## Example
///
/// ```
/// use solo_board::core::{BoardConfig, ExportHeight};
///
/// let config = BoardConfig::new()
///     .copy_forward(true)
///     .seed(7)
///     .file_prefix("board");
///
/// assert!(config.copy_forward);
/// assert_eq!(config.layout.height, ExportHeight::Dynamic);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Export geometry.
    pub layout: ExportLayout,

    /// Prefix of exported file names.
    pub file_prefix: String,

    /// When true, the add-step action copies the last step instead of
    /// appending an empty one.
    pub copy_forward: bool,

    /// Seed for the session RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            layout: ExportLayout::default(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            copy_forward: false,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the export layout.
    #[must_use]
    pub fn layout(mut self, layout: ExportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the export file prefix.
    #[must_use]
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Choose between copy-forward and empty new steps.
    #[must_use]
    pub fn copy_forward(mut self, enabled: bool) -> Self {
        self.copy_forward = enabled;
        self
    }

    /// Seed the session RNG.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
