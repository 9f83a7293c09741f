use tracing::warn;

use crate::core::TaskId;

use super::GanttEngine;

impl GanttEngine {
    /// Sets a task's start edge, in unix seconds.
    ///
    /// Out-of-bound values (negative, past the end, non-finite) are dropped
    /// without mutating; with `verbose` on, the rejection is logged.
    pub fn set_task_start(&mut self, id: TaskId, start_seconds: f64) {
        let verbose = self.verbose();
        let Some(task) = self.tasks.get_mut(&id) else {
            if verbose {
                warn!(task = %id, "set_task_start on unknown task");
            }
            return;
        };
        if !task.try_set_start(start_seconds) && verbose {
            warn!(task = %id, start_seconds, "rejected out-of-bound task start");
        }
    }

    /// Sets a task's end edge, in unix seconds. Same rejection contract as
    /// [`GanttEngine::set_task_start`].
    pub fn set_task_end(&mut self, id: TaskId, end_seconds: f64) {
        let verbose = self.verbose();
        let Some(task) = self.tasks.get_mut(&id) else {
            if verbose {
                warn!(task = %id, "set_task_end on unknown task");
            }
            return;
        };
        if !task.try_set_end(end_seconds) && verbose {
            warn!(task = %id, end_seconds, "rejected out-of-bound task end");
        }
    }

    /// Sets a task's resource row. Non-finite or negative rows are dropped.
    pub fn set_task_row(&mut self, id: TaskId, row: f64) {
        let verbose = self.verbose();
        let Some(task) = self.tasks.get_mut(&id) else {
            if verbose {
                warn!(task = %id, "set_task_row on unknown task");
            }
            return;
        };
        if !task.try_set_row(row) && verbose {
            warn!(task = %id, row, "rejected out-of-bound task row");
        }
    }

    pub fn set_task_name(&mut self, id: TaskId, name: impl Into<String>) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.set_name(name);
                true
            }
            None => false,
        }
    }

    pub fn set_task_style_property(
        &mut self,
        id: TaskId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.set_style_property(key, value);
                true
            }
            None => false,
        }
    }

    /// Human-readable duration of a task, e.g. `"3 days"`.
    #[must_use]
    pub fn task_duration_label(&self, id: TaskId) -> Option<String> {
        self.tasks.get(&id).map(|task| task.duration_label())
    }
}
