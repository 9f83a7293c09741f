use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{GridMetrics, PeriodSelector, Viewport};
use crate::error::GanttResult;

use super::GanttEngine;

/// Width reserved for one scrollbar arrow button on each side of the track.
pub const SCROLLBAR_ARROW_WIDTH_PX: f64 = 20.0;

impl GanttEngine {
    /// Switches the active period and rebuilds the layout.
    ///
    /// A name the registry does not know, or a preset that fails validation,
    /// leaves the current period installed and returns `false`.
    pub fn set_time_period(&mut self, selector: impl Into<PeriodSelector>) -> bool {
        let verbose = self.verbose();
        let resolved = match selector.into() {
            PeriodSelector::Named(name) => match self.registry.get(&name) {
                Some(period) => period.clone(),
                None => {
                    if verbose {
                        warn!(period = %name, "unknown time period, keeping current");
                    }
                    return false;
                }
            },
            PeriodSelector::Preset(period) => period,
        };

        match self.timeline.set_period(resolved) {
            Ok(()) => {
                self.rebuild_layout();
                true
            }
            Err(error) => {
                if verbose {
                    warn!(error = %error, "rejected time period preset");
                }
                false
            }
        }
    }

    /// Steps through the registry in its declared order, e.g. `-1` zooms one
    /// preset finer, `1` one coarser. Landing outside the registry (or
    /// starting from an unregistered preset) is a no-op returning `false`.
    pub fn set_time_period_offset(&mut self, offset: i64) -> bool {
        let current = self.timeline.period().name.clone();
        let Some(next) = self.registry.by_offset(&current, offset) else {
            if self.verbose() {
                warn!(period = %current, offset, "period offset out of range");
            }
            return false;
        };
        let next = next.clone();

        match self.timeline.set_period(next) {
            Ok(()) => {
                self.rebuild_layout();
                true
            }
            Err(_) => false,
        }
    }

    /// Re-anchors the window around a new reference instant.
    pub fn set_reference_instant(&mut self, reference: DateTime<Utc>) {
        self.timeline.set_reference(reference);
        self.rebuild_layout();
        debug!(reference = %reference, "reference instant changed");
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> GanttResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        self.rebuild_layout();
        Ok(())
    }

    pub fn set_grid_metrics(&mut self, metrics: GridMetrics) -> GanttResult<()> {
        self.timeline.set_metrics(metrics)?;
        self.rebuild_layout();
        Ok(())
    }

    /// Total scrollable content width in pixels.
    #[must_use]
    pub fn scroll_width(&self) -> f64 {
        self.layout.total_width()
    }

    #[must_use]
    pub fn pixels_per_second(&self) -> f64 {
        self.layout.pixels_per_second()
    }

    /// Proportional scrollbar thumb width: the track (viewport minus two
    /// arrow buttons) scaled by how much of the content is visible. `0.0`
    /// when there is no scrollable content.
    #[must_use]
    pub fn scrollbar_thumb_width(&self) -> f64 {
        let scroll_width = self.scroll_width();
        if scroll_width <= 0.0 {
            return 0.0;
        }
        let track = (self.viewport.width_px - 2.0 * SCROLLBAR_ARROW_WIDTH_PX).max(0.0);
        track * (self.viewport.width_px / scroll_width)
    }

    /// Scrolls so the reference instant sits one thumb width into view,
    /// returning the new offset.
    ///
    /// The write lands in the engine's viewport mirror; the host applies it
    /// to the real scroll element on its next layout pass, so readers of the
    /// element itself may briefly observe the old offset.
    pub fn scroll_to_reference(&mut self) -> GanttResult<f64> {
        let position = self.layout.pixel_from_date(self.timeline.reference())?;
        let offset = position - self.scrollbar_thumb_width();
        self.viewport.scroll_left_px = offset;
        debug!(offset, "scrolled to reference");
        Ok(offset)
    }

    /// Instant under a pointer x coordinate, through the current viewport.
    pub fn date_from_pixel(&self, x: f64) -> GanttResult<DateTime<Utc>> {
        self.layout.date_from_pixel(x, self.viewport)
    }

    /// Content offset of an instant on the current layout.
    pub fn pixel_from_date(&self, date: DateTime<Utc>) -> GanttResult<f64> {
        self.layout.pixel_from_date(date)
    }
}
