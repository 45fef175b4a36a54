//! Historical universe data port trait.

use crate::domain::error::SentimentError;
use crate::domain::sentiment::DailyBatch;
use chrono::{NaiveDate, TimeDelta};

pub trait UniverseDataPort {
    /// Batches dated within `[start_date, end_date]`, ascending by date.
    fn fetch_batches(
        &self,
        source: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyBatch>, SentimentError>;

    /// Batches dated within `[end - lookback_days, end)`.
    fn history(
        &self,
        source: &str,
        end: NaiveDate,
        lookback_days: i64,
    ) -> Result<Vec<DailyBatch>, SentimentError> {
        if lookback_days <= 0 {
            return Ok(Vec::new());
        }
        let start = TimeDelta::try_days(lookback_days)
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or_else(|| {
                SentimentError::data(format!(
                    "history window of {lookback_days} days before {end} is out of range"
                ))
            })?;
        let last = end
            .pred_opt()
            .ok_or_else(|| SentimentError::data(format!("no dates before {end}")))?;
        self.fetch_batches(source, start, last)
    }
}
