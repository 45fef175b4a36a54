//! Algorithm settings, fixed at initialization.

use crate::domain::selection::UniverseFilter;
use crate::domain::startup_check::MIN_HISTORY_RECORDS;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SOURCE: &str = "quiver-wallstreetbets";
pub const DEFAULT_CASH: f64 = 100_000.0;
pub const DEFAULT_HISTORY_DAYS: i64 = 1;
pub const MAX_HISTORY_DAYS: i64 = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Daily,
    Hour,
    Minute,
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Resolution::Daily),
            "hour" | "hourly" => Ok(Resolution::Hour),
            "minute" => Ok(Resolution::Minute),
            other => Err(format!("unknown resolution '{other}'")),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resolution::Daily => "daily",
            Resolution::Hour => "hour",
            Resolution::Minute => "minute",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct AlgorithmSettings {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cash: f64,
    pub resolution: Resolution,
    /// Universe data source identifier.
    pub source: String,
    pub filter: UniverseFilter,
    pub history_days: i64,
    pub min_history_records: usize,
}

impl Default for AlgorithmSettings {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2022, 2, 14).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2022, 2, 18).unwrap_or_default(),
            cash: DEFAULT_CASH,
            resolution: Resolution::Daily,
            source: DEFAULT_SOURCE.to_string(),
            filter: UniverseFilter::default(),
            history_days: DEFAULT_HISTORY_DAYS,
            min_history_records: MIN_HISTORY_RECORDS,
        }
    }
}
