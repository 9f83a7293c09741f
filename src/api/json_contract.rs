use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Task, TaskId};
use crate::error::{GanttError, GanttResult};

use super::GanttEngine;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Wire form of one task: identity and bounds only. Row, style, and any
/// in-flight interaction state deliberately stay out of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_owned(),
            start: task.start_seconds(),
            end: task.end_seconds(),
        }
    }
}

impl TaskRecord {
    /// Rebuilds a live task from the record. Restored tasks start on row 0
    /// with no style and no open session.
    pub fn to_task(&self) -> GanttResult<Task> {
        Task::restore(self.id, &self.name, self.start, self.end, 0.0)
    }
}

/// Persistable chart state: the active period by name, the reference
/// instant, and the task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub period: String,
    pub reference: DateTime<Utc>,
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GanttResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GanttError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> GanttResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GanttError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GanttError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl GanttEngine {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            period: self.timeline.period().name.clone(),
            reference: self.timeline.reference(),
            tasks: self.tasks.values().map(TaskRecord::from).collect(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> GanttResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    /// Replaces period, reference, and tasks from a snapshot in one step.
    ///
    /// All-or-nothing: an unknown period name or an invalid task record
    /// leaves the engine untouched.
    pub fn apply_snapshot(&mut self, snapshot: &ChartSnapshot) -> GanttResult<()> {
        let period = self
            .registry
            .get(&snapshot.period)
            .cloned()
            .ok_or_else(|| {
                GanttError::InvalidData(format!(
                    "snapshot names unknown time period: {}",
                    snapshot.period
                ))
            })?;

        let mut tasks: IndexMap<TaskId, Task> = IndexMap::with_capacity(snapshot.tasks.len());
        for record in &snapshot.tasks {
            let task = record.to_task()?;
            tasks.insert(task.id(), task);
        }

        self.timeline.set_period(period)?;
        self.timeline.set_reference(snapshot.reference);
        self.tasks = tasks;
        self.rebuild_layout();

        debug!(
            period = %snapshot.period,
            tasks = self.tasks.len(),
            "snapshot applied"
        );
        Ok(())
    }
}
