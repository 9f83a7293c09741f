use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    ChartSettings, GridMetrics, PeriodRegistry, Resource, Task, TaskId, TimePeriod, Timeline,
    TimelineLayout, Viewport,
};
use crate::error::GanttResult;

use super::GanttEngineConfig;
use super::validation::validate_engine_config;

/// Main orchestration facade consumed by host applications.
///
/// `GanttEngine` owns the timeline, the task and resource collections, and
/// the interaction state; it hands out derived pixel geometry and keeps one
/// cached layout snapshot that is rebuilt wholesale whenever a
/// layout-affecting command runs.
pub struct GanttEngine {
    pub(super) timeline: Timeline,
    pub(super) layout: TimelineLayout,
    pub(super) registry: PeriodRegistry,
    pub(super) tasks: IndexMap<TaskId, Task>,
    pub(super) resources: Vec<Resource>,
    pub(super) settings: ChartSettings,
    pub(super) viewport: Viewport,
}

impl GanttEngine {
    pub fn new(config: GanttEngineConfig) -> GanttResult<Self> {
        validate_engine_config(&config)?;
        let period = config.resolve_period()?;
        let timeline = Timeline::new(period, config.reference, config.metrics)?;
        let layout = timeline.build_layout(&[]);

        debug!(
            period = %timeline.period().name,
            viewport_width = config.viewport.width_px,
            "engine created"
        );

        Ok(Self {
            timeline,
            layout,
            registry: config.registry,
            tasks: IndexMap::new(),
            resources: Vec::new(),
            settings: config.settings,
            viewport: config.viewport,
        })
    }

    /// Current layout snapshot. Recomputed only by layout-affecting commands,
    /// never inside pointer handling, so references read a stable grid.
    #[must_use]
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> ChartSettings {
        self.settings
    }

    pub fn set_snap_to_grid(&mut self, snap_to_grid: bool) {
        self.settings.snap_to_grid = snap_to_grid;
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.settings.verbose = verbose;
    }

    #[must_use]
    pub fn registry(&self) -> &PeriodRegistry {
        &self.registry
    }

    #[must_use]
    pub fn period(&self) -> &TimePeriod {
        self.timeline.period()
    }

    #[must_use]
    pub fn reference(&self) -> DateTime<Utc> {
        self.timeline.reference()
    }

    #[must_use]
    pub fn grid_metrics(&self) -> GridMetrics {
        self.timeline.metrics()
    }

    pub(super) fn rebuild_layout(&mut self) {
        let heights: SmallVec<[f64; 16]> =
            self.resources.iter().map(Resource::height_px).collect();
        self.layout = self.timeline.build_layout(&heights);
    }

    pub(super) fn verbose(&self) -> bool {
        self.settings.verbose
    }
}
