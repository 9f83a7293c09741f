use tracing::debug;

use crate::core::{Task, TaskId};

use super::GanttEngine;

impl GanttEngine {
    /// Inserts a task, keyed by its id. Re-adding an existing id replaces
    /// the stored task.
    pub fn add_task(&mut self, task: Task) -> TaskId {
        let id = task.id();
        let replaced = self.tasks.insert(id, task).is_some();
        debug!(task = %id, replaced, count = self.tasks.len(), "task added");
        id
    }

    /// Removes a task, preserving the insertion order of the rest.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.shift_remove(&id);
        if removed.is_some() {
            debug!(task = %id, count = self.tasks.len(), "task removed");
        }
        removed
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    #[must_use]
    pub fn contains_task(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.keys().copied()
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
    }
}
