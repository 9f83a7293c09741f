use serde::{Deserialize, Serialize};

use crate::core::TaskId;

use super::GanttEngine;

/// Pixel placement of one task bar on the current layout snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskGeometry {
    /// Content-space x of the bar's left edge.
    pub left: f64,
    /// Bar width, clipped so the bar never overhangs the content width.
    pub width: f64,
    /// Content-space y of the bar's top edge.
    pub top: f64,
    /// Whether any part of the bar lies within the content width.
    pub visible: bool,
}

impl GanttEngine {
    /// Derived geometry for a task; `None` for an unknown task or when the
    /// current window has no extent.
    #[must_use]
    pub fn task_geometry(&self, id: TaskId) -> Option<TaskGeometry> {
        let task = self.tasks.get(&id)?;
        let pps = self.layout.pixels_per_second();
        if pps <= 0.0 {
            return None;
        }
        let total_width = self.layout.total_width();

        let left = self
            .layout
            .pixel_from_unix_seconds(task.start_seconds())
            .ok()?;
        let width = (task.duration_seconds() * pps)
            .min(total_width - left)
            .max(0.0);
        let visible = left + width >= 0.0 && left <= total_width;
        let top = self.row_top(task.row());

        Some(TaskGeometry {
            left,
            width,
            top,
            visible,
        })
    }

    /// Cumulative height of the rows above a (possibly fractional) row
    /// index. Rows beyond the resource list, and rows dragged above the
    /// first one, fall back to the nominal row height.
    fn row_top(&self, row: f64) -> f64 {
        let nominal = self.timeline.metrics().row_height_px;
        if row < 0.0 {
            return row * nominal;
        }

        let whole = row.floor();
        let fraction = row - whole;

        // Rows past the resource list are all nominal height, so only the
        // listed rows need summing; the rest is a single multiply. Keeps the
        // cost bounded by the list even for arbitrarily large row indexes.
        let in_list = (whole as usize).min(self.resources.len());
        let mut top = 0.0;
        for resource in &self.resources[..in_list] {
            top += resource.height_px();
        }
        top += (whole - in_list as f64) * nominal;
        top + fraction * self.row_height_at(whole as usize, nominal)
    }

    fn row_height_at(&self, index: usize, nominal: f64) -> f64 {
        self.resources
            .get(index)
            .map_or(nominal, |resource| resource.height_px())
    }
}
