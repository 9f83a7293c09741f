use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::date_math::{datetime_to_unix_seconds, seconds_between};
use crate::core::types::Viewport;
use crate::error::{GanttError, GanttResult};

/// One primary band column: a labeled span `secondary_per_unit` cells wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryCell {
    pub label: String,
    pub width: f64,
    pub left: f64,
}

/// One secondary band cell. Secondary cells carry no independent `left`;
/// they tile contiguously under the primary row in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryCell {
    pub label: String,
    pub width: f64,
}

/// Vertical grid line at a pixel offset along the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalDivider {
    pub left: f64,
    pub emphasize: bool,
}

/// Horizontal grid line under a resource row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalDivider {
    pub top: f64,
    pub emphasize: bool,
}

/// Fully derived pixel grid for one timeline window.
///
/// A layout is an immutable snapshot: it remembers the window it was computed
/// from, so pixel↔date conversion cannot drift from the cells and dividers it
/// carries. Conversions on one snapshot invert each other to millisecond
/// precision; recomputing the layout (period switch, reference change,
/// viewport resize) replaces the snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    primary: Vec<PrimaryCell>,
    secondary: Vec<SecondaryCell>,
    total_width: f64,
    primary_unit_width: f64,
    dividers_v: Vec<VerticalDivider>,
    dividers_h: Vec<HorizontalDivider>,
}

impl TimelineLayout {
    pub(crate) fn assemble(
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        primary: Vec<PrimaryCell>,
        secondary: Vec<SecondaryCell>,
        total_width: f64,
        primary_unit_width: f64,
        dividers_v: Vec<VerticalDivider>,
        dividers_h: Vec<HorizontalDivider>,
    ) -> Self {
        Self {
            window_start,
            window_end,
            primary,
            secondary,
            total_width,
            primary_unit_width,
            dividers_v,
            dividers_h,
        }
    }

    /// Snapshot for a degenerate window: zero columns, zero width.
    #[must_use]
    pub(crate) fn empty(window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> Self {
        Self::assemble(
            window_start,
            window_end,
            Vec::new(),
            Vec::new(),
            0.0,
            0.0,
            Vec::new(),
            Vec::new(),
        )
    }

    #[must_use]
    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.window_start, self.window_end)
    }

    #[must_use]
    pub fn primary(&self) -> &[PrimaryCell] {
        &self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &[SecondaryCell] {
        &self.secondary
    }

    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    #[must_use]
    pub fn primary_unit_width(&self) -> f64 {
        self.primary_unit_width
    }

    #[must_use]
    pub fn dividers_v(&self) -> &[VerticalDivider] {
        &self.dividers_v
    }

    #[must_use]
    pub fn dividers_h(&self) -> &[HorizontalDivider] {
        &self.dividers_h
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Conversion rate of this snapshot: total width over the window span.
    ///
    /// `0.0` for a degenerate window; conversions then fail with `EmptyWindow`
    /// instead of producing non-finite values.
    #[must_use]
    pub fn pixels_per_second(&self) -> f64 {
        let span_seconds = seconds_between(self.window_start, self.window_end);
        if span_seconds <= 0.0 || self.total_width <= 0.0 {
            return 0.0;
        }
        self.total_width / span_seconds
    }

    /// Instant under a screen-space x coordinate.
    ///
    /// `x` is measured in the host's pointer coordinate space; the viewport's
    /// left edge and scroll offset translate it into content space first.
    pub fn date_from_pixel(&self, x: f64, viewport: Viewport) -> GanttResult<DateTime<Utc>> {
        if !x.is_finite() {
            return Err(GanttError::InvalidData(
                "pixel coordinate must be finite".to_owned(),
            ));
        }
        let pps = self.pixels_per_second();
        if pps <= 0.0 {
            return Err(GanttError::EmptyWindow);
        }

        let content_x = x - viewport.left_edge_px + viewport.scroll_left_px;
        let offset_seconds = content_x / pps;
        Ok(self.window_start + Duration::microseconds((offset_seconds * 1e6).round() as i64))
    }

    /// Content-space x offset of an instant, measured from the window start.
    pub fn pixel_from_date(&self, date: DateTime<Utc>) -> GanttResult<f64> {
        let pps = self.pixels_per_second();
        if pps <= 0.0 {
            return Err(GanttError::EmptyWindow);
        }
        Ok(seconds_between(self.window_start, date) * pps)
    }

    /// Same conversion for a raw unix-seconds value, as tasks store them.
    pub fn pixel_from_unix_seconds(&self, seconds: f64) -> GanttResult<f64> {
        if !seconds.is_finite() {
            return Err(GanttError::InvalidData(
                "unix seconds value must be finite".to_owned(),
            ));
        }
        let pps = self.pixels_per_second();
        if pps <= 0.0 {
            return Err(GanttError::EmptyWindow);
        }
        Ok((seconds - datetime_to_unix_seconds(self.window_start)) * pps)
    }
}
