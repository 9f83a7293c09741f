use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::date_math::{
    TimeRange, add_units, ceil_to, floor_to, format_instant, subtract_units,
};
use crate::core::layout::{
    HorizontalDivider, PrimaryCell, SecondaryCell, TimelineLayout, VerticalDivider,
};
use crate::core::period::TimePeriod;
use crate::core::types::GridMetrics;
use crate::error::GanttResult;

/// Half-open instant range `[start, end)` covered by a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }
}

/// Time axis of the chart: an active period, a reference instant, and the
/// grid metrics that turn calendar units into pixels.
///
/// The timeline itself is cheap state; [`Timeline::build_layout`] derives the
/// pixel grid on demand and the caller decides how long to keep the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    period: TimePeriod,
    reference: DateTime<Utc>,
    metrics: GridMetrics,
}

impl Timeline {
    pub fn new(
        period: TimePeriod,
        reference: DateTime<Utc>,
        metrics: GridMetrics,
    ) -> GanttResult<Self> {
        period.validate()?;
        metrics.validate()?;
        Ok(Self {
            period,
            reference,
            metrics,
        })
    }

    #[must_use]
    pub fn period(&self) -> &TimePeriod {
        &self.period
    }

    #[must_use]
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    #[must_use]
    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    pub fn set_period(&mut self, period: TimePeriod) -> GanttResult<()> {
        period.validate()?;
        debug!(period = %period.name, "timeline period changed");
        self.period = period;
        Ok(())
    }

    pub fn set_reference(&mut self, reference: DateTime<Utc>) {
        self.reference = reference;
    }

    pub fn set_metrics(&mut self, metrics: GridMetrics) -> GanttResult<()> {
        metrics.validate()?;
        self.metrics = metrics;
        Ok(())
    }

    /// Window spanned by the active period around the reference instant.
    ///
    /// Margins extend the reference on both sides, then both edges round
    /// outward to whole `round_to` units so the window opens on clean
    /// calendar boundaries.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        let p = &self.period;
        let raw_start = subtract_units(self.reference, p.start_margin.term, p.start_margin.unit);
        let raw_end = add_units(self.reference, p.end_margin.term, p.end_margin.unit);
        TimeWindow {
            start: floor_to(raw_start, p.round_to),
            end: ceil_to(raw_end, p.round_to),
        }
    }

    /// Derives the full pixel grid for the current window.
    ///
    /// `row_heights` are the per-resource row heights, top to bottom; they
    /// only feed the horizontal dividers and never affect the time axis.
    #[must_use]
    pub fn build_layout(&self, row_heights: &[f64]) -> TimelineLayout {
        let window = self.window();
        if window.is_degenerate() {
            debug!(period = %self.period.name, "degenerate window, emitting empty layout");
            return TimelineLayout::empty(window.start, window.end);
        }

        let p = &self.period;
        let secondary_per_unit = p.primary.secondary_per_unit as usize;
        let primary_unit_width = self.metrics.time_unit_width * secondary_per_unit as f64;

        let mut primary = Vec::new();
        let mut total_width = 0.0;
        for instant in TimeRange::between(window.start, window.end, p.primary.unit) {
            primary.push(PrimaryCell {
                label: format_instant(instant, &p.primary.format),
                width: primary_unit_width,
                left: total_width,
            });
            total_width += primary_unit_width;
        }

        // The secondary band never outruns the primary one: a coarse-unit
        // range can produce more fine cells than the primary row has room
        // for, so surplus cells are dropped, and a short run stays short.
        let secondary_len = primary.len() * secondary_per_unit;
        let secondary: Vec<SecondaryCell> =
            TimeRange::between_stepped(window.start, window.end, p.secondary.unit, p.secondary.step)
                .take(secondary_len)
                .map(|instant| SecondaryCell {
                    label: format_instant(instant, &p.secondary.format),
                    width: self.metrics.time_unit_width,
                })
                .collect();

        let dividers_v =
            vertical_dividers(total_width, primary_unit_width, self.metrics.time_unit_width);
        let dividers_h = horizontal_dividers(row_heights);

        debug!(
            period = %p.name,
            columns = primary.len(),
            total_width,
            "timeline layout rebuilt"
        );

        TimelineLayout::assemble(
            window.start,
            window.end,
            primary,
            secondary,
            total_width,
            primary_unit_width,
            dividers_v,
            dividers_h,
        )
    }
}

/// Merges primary and secondary grid lines into one ordered run.
///
/// Offsets are keyed by exact pixel value; when a secondary line lands on a
/// primary boundary only the emphasized primary line survives.
fn vertical_dividers(
    total_width: f64,
    primary_unit_width: f64,
    time_unit_width: f64,
) -> Vec<VerticalDivider> {
    let mut by_left: BTreeMap<OrderedFloat<f64>, VerticalDivider> = BTreeMap::new();

    if primary_unit_width > 0.0 {
        let count = (total_width / primary_unit_width).floor() as usize;
        for i in 0..count {
            let left = i as f64 * primary_unit_width;
            by_left.insert(OrderedFloat(left), VerticalDivider {
                left,
                emphasize: true,
            });
        }
    }

    if time_unit_width > 0.0 {
        let count = (total_width / time_unit_width).floor() as usize;
        for i in 0..count {
            let left = i as f64 * time_unit_width;
            by_left
                .entry(OrderedFloat(left))
                .or_insert(VerticalDivider {
                    left,
                    emphasize: false,
                });
        }
    }

    by_left.into_values().collect()
}

/// One emphasized line under each resource row, at the cumulative height.
fn horizontal_dividers(row_heights: &[f64]) -> Vec<HorizontalDivider> {
    let mut top = 0.0;
    row_heights
        .iter()
        .map(|height| {
            top += height;
            HorizontalDivider {
                top,
                emphasize: true,
            }
        })
        .collect()
}
