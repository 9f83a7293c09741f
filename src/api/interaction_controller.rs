use tracing::{debug, warn};

use crate::core::TaskId;
use crate::interaction::{
    DragKind, InteractionSession, PointerPosition, ResizeSide, move_axis_delta,
    resize_delta_seconds,
};

use super::GanttEngine;

impl GanttEngine {
    /// Opens a move session on a task, capturing its current position and
    /// the pointer origin.
    ///
    /// Returns `false` without capturing anything when the task is unknown
    /// or already engaged in a gesture.
    pub fn begin_task_move(&mut self, id: TaskId, pointer: PointerPosition) -> bool {
        self.begin_session(id, DragKind::Move, pointer)
    }

    /// Opens a resize session on one edge of a task. Same rejection contract
    /// as [`GanttEngine::begin_task_move`].
    pub fn begin_task_resize(
        &mut self,
        id: TaskId,
        side: ResizeSide,
        pointer: PointerPosition,
    ) -> bool {
        self.begin_session(id, DragKind::Resize(side), pointer)
    }

    fn begin_session(&mut self, id: TaskId, kind: DragKind, pointer: PointerPosition) -> bool {
        let snap_to_grid = self.settings.snap_to_grid;
        let verbose = self.verbose();

        let Some(task) = self.tasks.get_mut(&id) else {
            if verbose {
                warn!(task = %id, "gesture on unknown task");
            }
            return false;
        };

        let session = InteractionSession::new(
            kind,
            pointer,
            snap_to_grid,
            task.start_seconds(),
            task.end_seconds(),
            task.row(),
        );
        if !task.begin_session(session) {
            if verbose {
                warn!(
                    task = %id,
                    active = ?task.interaction(),
                    "gesture rejected, task already engaged"
                );
            }
            return false;
        }

        debug!(task = %id, kind = ?kind, snap_to_grid, "gesture started");
        true
    }

    /// Applies a pointer position to every open session.
    ///
    /// Sessions live per task, so independently engaged tasks all follow the
    /// same pointer stream. Each event recomputes from the session's captured
    /// originals. A resize below the snap threshold is dropped, keeping the
    /// last applied edge; a snapped move below it applies a zero delta and
    /// the task sits back at its origin.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) {
        let pps = self.layout.pixels_per_second();
        let metrics = self.timeline.metrics();

        for task in self.tasks.values_mut() {
            let Some(session) = task.session().copied() else {
                continue;
            };

            match session.kind() {
                DragKind::Resize(side) => {
                    // No conversion rate means no drag: a degenerate window
                    // has nothing to resize against.
                    if pps <= 0.0 {
                        continue;
                    }
                    let raw_seconds = (pointer.x - session.origin().x) / pps;
                    let grid_seconds = metrics.time_unit_width / pps;
                    let Some(delta) =
                        resize_delta_seconds(raw_seconds, grid_seconds, session.snap_to_grid())
                    else {
                        continue;
                    };
                    match side {
                        ResizeSide::Left => {
                            task.apply_drag_start(session.original_start() + delta);
                        }
                        ResizeSide::Right => {
                            task.apply_drag_end(session.original_end() + delta);
                        }
                    }
                }
                DragKind::Move => {
                    // A sub-threshold axis carries a zero delta, so the task
                    // returns to its captured origin rather than holding the
                    // last snapped position.
                    if pps > 0.0 {
                        let dx = pointer.x - session.origin().x;
                        let px =
                            move_axis_delta(dx, metrics.time_unit_width, session.snap_to_grid())
                                .unwrap_or(0.0);
                        let delta_seconds = px / pps;
                        task.apply_drag_start(session.original_start() + delta_seconds);
                        task.apply_drag_end(session.original_end() + delta_seconds);
                    }

                    let dy = pointer.y - session.origin().y;
                    let py = move_axis_delta(dy, metrics.row_height_px, session.snap_to_grid())
                        .unwrap_or(0.0);
                    let delta_rows = py / metrics.row_height_px;
                    task.apply_drag_row(session.original_row() + delta_rows);
                }
            }
        }
    }

    /// Ends every open session.
    ///
    /// An unsnapped move settles onto the nearest whole row; a resize that
    /// crossed its own other edge comes out with the bounds swapped back
    /// into order.
    pub fn pointer_released(&mut self) {
        for task in self.tasks.values_mut() {
            let Some(session) = task.take_session() else {
                continue;
            };
            match session.kind() {
                DragKind::Move => {
                    if !session.snap_to_grid() {
                        task.apply_drag_row(task.row().round());
                    }
                }
                DragKind::Resize(_) => {
                    task.normalize_bounds();
                }
            }
            debug!(task = %task.id(), kind = ?session.kind(), "gesture finished");
        }
    }

    /// Aborts a task's open session, restoring the position captured when
    /// the gesture began. Returns `false` when no session was open.
    pub fn cancel_task_interaction(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.get_mut(&id) else {
            return false;
        };
        let Some(session) = task.take_session() else {
            return false;
        };
        task.apply_drag_start(session.original_start());
        task.apply_drag_end(session.original_end());
        task.apply_drag_row(session.original_row());
        debug!(task = %id, kind = ?session.kind(), "gesture cancelled");
        true
    }
}
