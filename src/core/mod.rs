pub mod date_math;
pub mod layout;
pub mod period;
pub mod task;
pub mod timeline;
pub mod types;

pub use date_math::{TimeRange, TimeUnit};
pub use layout::{HorizontalDivider, PrimaryCell, SecondaryCell, TimelineLayout, VerticalDivider};
pub use period::{
    DEFAULT_PERIOD_NAME, PeriodRegistry, PeriodSelector, PrimaryBand, SecondaryBand, TimePeriod,
    WindowMargin,
};
pub use task::{Task, TaskId, TaskInteraction};
pub use timeline::{TimeWindow, Timeline};
pub use types::{
    ChartSettings, DEFAULT_ROW_HEIGHT_PX, DEFAULT_TIME_UNIT_WIDTH, GridMetrics, Resource, Viewport,
};
