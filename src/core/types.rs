use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GanttError, GanttResult};

/// Default width in pixels of one secondary grid cell.
pub const DEFAULT_TIME_UNIT_WIDTH: f64 = 20.0;

/// Default rendered height in pixels of one resource row.
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 40.0;

/// Host-provided scroll geometry for the timeline element.
///
/// This is the injected capability replacing direct DOM lookups: the host owns
/// the real scrollable element and mirrors its geometry here. The engine reads
/// `left_edge_px`/`scroll_left_px` when translating pointer coordinates and
/// writes `scroll_left_px` when re-centering; that write is
/// eventually-consistent with the host's own layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Visible width of the scrollable area.
    pub width_px: f64,
    /// Screen-space x of the element's left edge.
    pub left_edge_px: f64,
    /// Current horizontal scroll offset.
    pub scroll_left_px: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width_px: f64) -> Self {
        Self {
            width_px,
            left_edge_px: 0.0,
            scroll_left_px: 0.0,
        }
    }

    #[must_use]
    pub fn with_left_edge(mut self, left_edge_px: f64) -> Self {
        self.left_edge_px = left_edge_px;
        self
    }

    #[must_use]
    pub fn with_scroll_left(mut self, scroll_left_px: f64) -> Self {
        self.scroll_left_px = scroll_left_px;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width_px.is_finite()
            && self.width_px > 0.0
            && self.left_edge_px.is_finite()
            && self.scroll_left_px.is_finite()
    }

    pub fn validate(self) -> GanttResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GanttError::InvalidViewport {
                width_px: self.width_px,
            })
        }
    }
}

/// Pixel constants of the grid: secondary cell width and nominal row height.
///
/// `row_height_px` is the conversion constant for vertical drag deltas; actual
/// rendered rows may override their height per resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub time_unit_width: f64,
    pub row_height_px: f64,
}

impl GridMetrics {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.time_unit_width.is_finite()
            && self.time_unit_width > 0.0
            && self.row_height_px.is_finite()
            && self.row_height_px > 0.0
    }

    pub fn validate(self) -> GanttResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GanttError::InvalidData(format!(
                "grid metrics must be finite and positive (time_unit_width={}, row_height_px={})",
                self.time_unit_width, self.row_height_px
            )))
        }
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            time_unit_width: DEFAULT_TIME_UNIT_WIDTH,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
        }
    }
}

/// Behavioral toggles of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Quantize drag gestures to whole grid units and rows.
    #[serde(default = "default_snap_to_grid")]
    pub snap_to_grid: bool,
    /// Emit warnings for locally rejected inputs (bad setter values,
    /// conflicting gestures). Off by default; rejections stay silent.
    #[serde(default)]
    pub verbose: bool,
}

impl ChartSettings {
    #[must_use]
    pub fn with_snap_to_grid(mut self, snap_to_grid: bool) -> Self {
        self.snap_to_grid = snap_to_grid;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: default_snap_to_grid(),
            verbose: false,
        }
    }
}

fn default_snap_to_grid() -> bool {
    true
}

/// One horizontal lane tasks are scheduled into, with its rendered height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    id: Uuid,
    name: String,
    #[serde(default = "default_resource_height")]
    height_px: f64,
}

impl Resource {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            height_px: DEFAULT_ROW_HEIGHT_PX,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height_px: f64) -> Self {
        self.height_px = height_px;
        self
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    pub(crate) fn set_height(&mut self, height_px: f64) {
        self.height_px = height_px;
    }

    pub fn validate(&self) -> GanttResult<()> {
        if self.height_px.is_finite() && self.height_px > 0.0 {
            Ok(())
        } else {
            Err(GanttError::InvalidData(format!(
                "resource height must be finite and positive (height_px={})",
                self.height_px
            )))
        }
    }
}

fn default_resource_height() -> f64 {
    DEFAULT_ROW_HEIGHT_PX
}
