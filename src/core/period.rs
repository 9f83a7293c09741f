use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::date_math::{TimeUnit, try_format_instant};
use crate::error::{GanttError, GanttResult};

/// Primary band of the grid: one column per `unit`, `secondary_per_unit`
/// secondary cells wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryBand {
    pub unit: TimeUnit,
    /// `strftime` pattern for column labels.
    pub format: String,
    pub secondary_per_unit: u32,
}

/// Secondary band of the grid: fixed-width cells every `step` units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryBand {
    pub unit: TimeUnit,
    /// `strftime` pattern for cell labels.
    pub format: String,
    pub step: i64,
}

/// Distance from the reference instant to one edge of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMargin {
    pub term: i64,
    pub unit: TimeUnit,
}

/// Immutable named preset describing one zoom level of the timeline.
///
/// The window spans `reference - start_margin .. reference + end_margin`,
/// floored/ceiled to `round_to` boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub name: String,
    pub primary: PrimaryBand,
    pub secondary: SecondaryBand,
    pub start_margin: WindowMargin,
    pub end_margin: WindowMargin,
    pub round_to: TimeUnit,
}

impl TimePeriod {
    /// Validates structural requirements shared by built-in and custom presets.
    pub fn validate(&self) -> GanttResult<()> {
        if self.name.is_empty() {
            return Err(GanttError::InvalidData(
                "time period name must not be empty".to_owned(),
            ));
        }
        if self.primary.secondary_per_unit == 0 {
            return Err(GanttError::InvalidData(
                "primary band must hold at least one secondary cell".to_owned(),
            ));
        }
        if self.secondary.step < 1 {
            return Err(GanttError::InvalidData(
                "secondary band step must be >= 1".to_owned(),
            ));
        }
        if self.start_margin.term < 0 || self.end_margin.term < 0 {
            return Err(GanttError::InvalidData(
                "window margin terms must be >= 0".to_owned(),
            ));
        }

        let probe = DateTime::<Utc>::UNIX_EPOCH;
        for (band, pattern) in [
            ("primary", self.primary.format.as_str()),
            ("secondary", self.secondary.format.as_str()),
        ] {
            if try_format_instant(probe, pattern).is_none() {
                return Err(GanttError::InvalidData(format!(
                    "{band} band label pattern {pattern:?} is malformed"
                )));
            }
        }
        Ok(())
    }
}

/// How a caller names the period to switch to.
///
/// Resolution happens once at the engine boundary: `Named` is looked up in the
/// registry, `Preset` is validated and installed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodSelector {
    Named(String),
    Preset(TimePeriod),
}

impl From<&str> for PeriodSelector {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<TimePeriod> for PeriodSelector {
    fn from(period: TimePeriod) -> Self {
        Self::Preset(period)
    }
}

/// Ordered preset registry; declared order is the zoom order, finest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRegistry {
    periods: IndexMap<String, TimePeriod>,
}

impl PeriodRegistry {
    /// Registry with the standard `hours`/`days`/`weeks`/`months` presets.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self {
            periods: IndexMap::new(),
        };
        for period in standard_periods() {
            registry.periods.insert(period.name.clone(), period);
        }
        registry
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            periods: IndexMap::new(),
        }
    }

    /// Registers a preset at the end of the zoom order, replacing any preset
    /// with the same name in place.
    pub fn register(&mut self, period: TimePeriod) -> GanttResult<()> {
        period.validate()?;
        self.periods.insert(period.name.clone(), period);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TimePeriod> {
        self.periods.get(name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.periods.get_index_of(name)
    }

    /// Preset `offset` steps away from `from` in declared order.
    ///
    /// Returns `None` when `from` is unregistered or the target index falls
    /// outside the registry (no wraparound).
    #[must_use]
    pub fn by_offset(&self, from: &str, offset: i64) -> Option<&TimePeriod> {
        let position = self.position(from)? as i64;
        let target = position.checked_add(offset)?;
        if target < 0 {
            return None;
        }
        self.periods
            .get_index(usize::try_from(target).ok()?)
            .map(|(_, period)| period)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.periods.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl Default for PeriodRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Name of the preset engines start on.
pub const DEFAULT_PERIOD_NAME: &str = "days";

fn standard_periods() -> [TimePeriod; 4] {
    [
        TimePeriod {
            name: "hours".to_owned(),
            primary: PrimaryBand {
                unit: TimeUnit::Hours,
                format: "%H:%M".to_owned(),
                secondary_per_unit: 4,
            },
            secondary: SecondaryBand {
                unit: TimeUnit::Minutes,
                format: "%M".to_owned(),
                step: 15,
            },
            start_margin: WindowMargin {
                term: 1,
                unit: TimeUnit::Days,
            },
            end_margin: WindowMargin {
                term: 1,
                unit: TimeUnit::Days,
            },
            round_to: TimeUnit::Days,
        },
        TimePeriod {
            name: "days".to_owned(),
            primary: PrimaryBand {
                unit: TimeUnit::Days,
                format: "%m/%Y %d".to_owned(),
                secondary_per_unit: 24,
            },
            secondary: SecondaryBand {
                unit: TimeUnit::Hours,
                format: "%H:%M".to_owned(),
                step: 1,
            },
            start_margin: WindowMargin {
                term: 7,
                unit: TimeUnit::Days,
            },
            end_margin: WindowMargin {
                term: 7,
                unit: TimeUnit::Days,
            },
            round_to: TimeUnit::Days,
        },
        TimePeriod {
            name: "weeks".to_owned(),
            primary: PrimaryBand {
                unit: TimeUnit::Weeks,
                format: "W%V %G".to_owned(),
                secondary_per_unit: 7,
            },
            secondary: SecondaryBand {
                unit: TimeUnit::Days,
                format: "%d".to_owned(),
                step: 1,
            },
            start_margin: WindowMargin {
                term: 1,
                unit: TimeUnit::Months,
            },
            end_margin: WindowMargin {
                term: 1,
                unit: TimeUnit::Months,
            },
            round_to: TimeUnit::Weeks,
        },
        TimePeriod {
            name: "months".to_owned(),
            primary: PrimaryBand {
                unit: TimeUnit::Months,
                format: "%m/%Y".to_owned(),
                secondary_per_unit: 30,
            },
            secondary: SecondaryBand {
                unit: TimeUnit::Days,
                format: "%d".to_owned(),
                step: 1,
            },
            start_margin: WindowMargin {
                term: 3,
                unit: TimeUnit::Months,
            },
            end_margin: WindowMargin {
                term: 3,
                unit: TimeUnit::Months,
            },
            round_to: TimeUnit::Months,
        },
    ]
}
