use serde::{Deserialize, Serialize};

/// Which edge of a task bar a resize gesture grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeSide {
    Left,
    Right,
}

/// Gesture family of an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    Move,
    Resize(ResizeSide),
}

/// Pointer location in the host's client coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// State captured when a drag gesture opens on a task.
///
/// Every pointer-move recomputes the task's position from these originals and
/// the total pointer delta, so intermediate events never accumulate error and
/// cancellation is a plain restore. The snap setting is latched here: toggling
/// it mid-gesture does not change a session already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionSession {
    pub(crate) kind: DragKind,
    pub(crate) origin: PointerPosition,
    pub(crate) snap_to_grid: bool,
    pub(crate) original_start: f64,
    pub(crate) original_end: f64,
    pub(crate) original_row: f64,
}

impl InteractionSession {
    pub(crate) fn new(
        kind: DragKind,
        origin: PointerPosition,
        snap_to_grid: bool,
        original_start: f64,
        original_end: f64,
        original_row: f64,
    ) -> Self {
        Self {
            kind,
            origin,
            snap_to_grid,
            original_start,
            original_end,
            original_row,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DragKind {
        self.kind
    }

    #[must_use]
    pub fn origin(&self) -> PointerPosition {
        self.origin
    }

    #[must_use]
    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    #[must_use]
    pub fn original_start(&self) -> f64 {
        self.original_start
    }

    #[must_use]
    pub fn original_end(&self) -> f64 {
        self.original_end
    }

    #[must_use]
    pub fn original_row(&self) -> f64 {
        self.original_row
    }
}

/// Rounds to the nearest multiple of `step`; identity when `step` is not
/// positive.
pub(crate) fn round_to_nearest(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Snapped delta for a resize gesture, in seconds.
///
/// With snapping off the raw delta passes through. With snapping on, a drag
/// shorter than one grid unit reports `None` (the event leaves the task where
/// the previous one put it); a longer drag snaps toward zero to a whole
/// number of grid units.
pub(crate) fn resize_delta_seconds(
    raw_seconds: f64,
    grid_seconds: f64,
    snap_to_grid: bool,
) -> Option<f64> {
    if !snap_to_grid {
        return Some(raw_seconds);
    }
    if grid_seconds <= 0.0 || raw_seconds.abs() < grid_seconds {
        return None;
    }
    Some((raw_seconds / grid_seconds).trunc() * grid_seconds)
}

/// Snapped delta for one axis of a move gesture, in pixels.
///
/// With snapping off the raw delta passes through. With snapping on, a drag
/// shorter than one full step reports `None` (the caller applies a zero
/// delta, putting the axis back at its captured origin); a longer drag
/// rounds to the nearest whole step.
pub(crate) fn move_axis_delta(raw_px: f64, step_px: f64, snap_to_grid: bool) -> Option<f64> {
    if !snap_to_grid {
        return Some(raw_px);
    }
    if step_px <= 0.0 || raw_px.abs() < step_px {
        return None;
    }
    Some(round_to_nearest(raw_px, step_px))
}
