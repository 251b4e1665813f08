//! Engine configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::grid::{DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR, DEFAULT_GRANULARITY_MINUTES};
use crate::periods::MIN_AVAILABLE_PERIOD_MINUTES;

/// Default upper bound on days x slots/day x members for one query.
pub const DEFAULT_MAX_SLOTS: usize = 500_000;

/// Lattice shape, local timezone and resource bound for availability queries.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    pub granularity_minutes: u32,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    /// Floor for individual available periods. Independent of any meeting duration.
    pub min_period_minutes: i64,
    /// IANA timezone the lattice and scoring are aligned to.
    pub timezone: String,
    pub max_slots: usize,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
            min_period_minutes: MIN_AVAILABLE_PERIOD_MINUTES,
            timezone: "UTC".to_string(),
            max_slots: DEFAULT_MAX_SLOTS,
        }
    }
}

impl AvailabilityConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: AvailabilityConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured timezone.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTimezone` if it is not a valid IANA identifier.
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| ScheduleError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.granularity_minutes == 0 {
            return Err(ScheduleError::InvalidConfig(
                "granularity_minutes must be positive".to_string(),
            ));
        }
        if self.day_end_hour > 24 {
            return Err(ScheduleError::InvalidConfig(format!(
                "day_end_hour {} is past midnight",
                self.day_end_hour
            )));
        }
        if self.day_start_hour >= self.day_end_hour {
            return Err(ScheduleError::InvalidConfig(format!(
                "day_start_hour {} must be before day_end_hour {}",
                self.day_start_hour, self.day_end_hour
            )));
        }
        if self.min_period_minutes < 0 {
            return Err(ScheduleError::InvalidConfig(
                "min_period_minutes must not be negative".to_string(),
            ));
        }
        self.timezone()?;
        Ok(())
    }
}
