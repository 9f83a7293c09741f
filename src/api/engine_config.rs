use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{ChartSettings, GridMetrics, PeriodRegistry, PeriodSelector, TimePeriod, Viewport};
use crate::error::{GanttError, GanttResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Every field has a
/// default; `GanttEngineConfig::default()` yields a working days-grid chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttEngineConfig {
    /// Active period at startup, by registry name or as an inline preset.
    #[serde(default = "default_period_selector")]
    pub period: PeriodSelector,
    /// Instant the window is anchored around. There is no implicit "now";
    /// hosts inject wall-clock time here when they want it.
    #[serde(default = "default_reference_instant")]
    pub reference: DateTime<Utc>,
    #[serde(default)]
    pub metrics: GridMetrics,
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub settings: ChartSettings,
    #[serde(default)]
    pub registry: PeriodRegistry,
}

impl GanttEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_period(mut self, period: impl Into<PeriodSelector>) -> Self {
        self.period = period.into();
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = reference;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: GridMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ChartSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: PeriodRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_snap_to_grid(mut self, snap_to_grid: bool) -> Self {
        self.settings.snap_to_grid = snap_to_grid;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.settings.verbose = verbose;
        self
    }

    /// Resolves the configured selector into a concrete period. Unknown
    /// names are a construction error, unlike the forgiving runtime switch.
    pub(super) fn resolve_period(&self) -> GanttResult<TimePeriod> {
        match &self.period {
            PeriodSelector::Named(name) => self.registry.get(name).cloned().ok_or_else(|| {
                GanttError::InvalidData(format!("unknown time period: {name}"))
            }),
            PeriodSelector::Preset(period) => {
                period.validate()?;
                Ok(period.clone())
            }
        }
    }
}

impl Default for GanttEngineConfig {
    fn default() -> Self {
        Self {
            period: default_period_selector(),
            reference: default_reference_instant(),
            metrics: GridMetrics::default(),
            viewport: default_viewport(),
            settings: ChartSettings::default(),
            registry: PeriodRegistry::default(),
        }
    }
}

fn default_period_selector() -> PeriodSelector {
    PeriodSelector::from(crate::core::DEFAULT_PERIOD_NAME)
}

fn default_reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, 13, 10, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn default_viewport() -> Viewport {
    Viewport::new(960.0)
}
