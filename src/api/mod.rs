mod engine;
mod engine_config;
mod gantt_model;
mod interaction_controller;
mod json_contract;
mod resource_controller;
mod task_controller;
mod task_geometry;
mod timeline_controller;
mod validation;

pub use engine::GanttEngine;
pub use engine_config::GanttEngineConfig;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, TaskRecord,
};
pub use task_geometry::TaskGeometry;
pub use timeline_controller::SCROLLBAR_ARROW_WIDTH_PX;
