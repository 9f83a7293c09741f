use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("invalid viewport width: {width_px}px")]
    InvalidViewport { width_px: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("timeline window is empty; pixel/date conversion is undefined")]
    EmptyWindow,
}
