use crate::error::{GanttError, GanttResult};

use super::GanttEngineConfig;

pub(super) fn validate_engine_config(config: &GanttEngineConfig) -> GanttResult<()> {
    config.viewport.validate()?;
    config.metrics.validate()?;
    Ok(())
}

pub(super) fn ensure_positive(value: f64, what: &str) -> GanttResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GanttError::InvalidData(format!(
            "{what} must be finite and > 0 (got {value})"
        )))
    }
}
