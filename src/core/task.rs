use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::date_math::humanize_seconds;
use crate::error::{GanttError, GanttResult};
use crate::interaction::{DragKind, InteractionSession};

/// Stable task identifier, minted once at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Interaction mode a task is currently engaged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskInteraction {
    None,
    Move,
    Resize,
}

/// One schedulable bar on the chart.
///
/// `start`/`end` are unix seconds; at rest `start <= end`, though a live
/// resize may invert them until the pointer is released. `row` indexes the
/// resource lane, fractionally if the host wants a bar between lanes; an
/// unsnapped move holds fractional rows in flight and settles on a whole
/// row at release.
///
/// Tasks carry no reference back to the chart: all pixel math goes through
/// the owning engine's layout snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    name: String,
    start_seconds: f64,
    end_seconds: f64,
    row: f64,
    style: IndexMap<String, String>,
    session: Option<InteractionSession>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        start_seconds: f64,
        end_seconds: f64,
        row: f64,
    ) -> GanttResult<Self> {
        Self::restore(TaskId::new(), name, start_seconds, end_seconds, row)
    }

    /// Rebuilds a task under an existing identifier, e.g. from a serialized
    /// record.
    pub fn restore(
        id: TaskId,
        name: impl Into<String>,
        start_seconds: f64,
        end_seconds: f64,
        row: f64,
    ) -> GanttResult<Self> {
        if !start_seconds.is_finite()
            || !end_seconds.is_finite()
            || start_seconds < 0.0
            || end_seconds < start_seconds
        {
            return Err(GanttError::InvalidData(format!(
                "task bounds must be finite with 0 <= start <= end (start={start_seconds}, end={end_seconds})"
            )));
        }
        if !row.is_finite() || row < 0.0 {
            return Err(GanttError::InvalidData(format!(
                "task row must be finite and non-negative (row={row})"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            start_seconds,
            end_seconds,
            row,
            style: IndexMap::new(),
            session: None,
        })
    }

    #[must_use]
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn start_seconds(&self) -> f64 {
        self.start_seconds
    }

    #[must_use]
    pub fn end_seconds(&self) -> f64 {
        self.end_seconds
    }

    #[must_use]
    pub fn row(&self) -> f64 {
        self.row
    }

    #[must_use]
    pub fn style(&self) -> &IndexMap<String, String> {
        &self.style
    }

    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }

    /// Human-readable duration in the largest non-zero calendar unit.
    #[must_use]
    pub fn duration_label(&self) -> String {
        humanize_seconds(self.duration_seconds())
    }

    #[must_use]
    pub fn interaction(&self) -> TaskInteraction {
        match self.session.as_ref().map(InteractionSession::kind) {
            None => TaskInteraction::None,
            Some(DragKind::Move) => TaskInteraction::Move,
            Some(DragKind::Resize(_)) => TaskInteraction::Resize,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Moves the start edge; rejected (returning `false`) unless the value is
    /// finite, non-negative, and does not pass the end.
    pub(crate) fn try_set_start(&mut self, start_seconds: f64) -> bool {
        if !start_seconds.is_finite() || start_seconds < 0.0 || start_seconds > self.end_seconds {
            return false;
        }
        self.start_seconds = start_seconds;
        true
    }

    /// Moves the end edge; rejected unless the value is finite and does not
    /// precede the start.
    pub(crate) fn try_set_end(&mut self, end_seconds: f64) -> bool {
        if !end_seconds.is_finite() || end_seconds < self.start_seconds {
            return false;
        }
        self.end_seconds = end_seconds;
        true
    }

    pub(crate) fn try_set_row(&mut self, row: f64) -> bool {
        if !row.is_finite() || row < 0.0 {
            return false;
        }
        self.row = row;
        true
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_style_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.style.insert(key.into(), value.into());
    }

    /// Opens a gesture session; `false` (and no capture) when one is already
    /// active on this task.
    pub(crate) fn begin_session(&mut self, session: InteractionSession) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(session);
        true
    }

    pub(crate) fn take_session(&mut self) -> Option<InteractionSession> {
        self.session.take()
    }

    // Drag appliers bypass the setter guards: gesture math owns its bounds,
    // including transiently inverted ones during a resize.
    pub(crate) fn apply_drag_start(&mut self, start_seconds: f64) {
        self.start_seconds = start_seconds;
    }

    pub(crate) fn apply_drag_end(&mut self, end_seconds: f64) {
        self.end_seconds = end_seconds;
    }

    pub(crate) fn apply_drag_row(&mut self, row: f64) {
        self.row = row;
    }

    /// Swaps inverted bounds back into `start <= end` order.
    pub(crate) fn normalize_bounds(&mut self) {
        if self.end_seconds < self.start_seconds {
            std::mem::swap(&mut self.start_seconds, &mut self.end_seconds);
        }
    }
}
