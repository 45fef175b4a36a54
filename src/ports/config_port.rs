//! Configuration access port trait.

use crate::domain::error::SentimentError;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// `Ok(None)` when the key is absent, an error when it is not `YYYY-MM-DD`.
    fn get_date(&self, section: &str, key: &str) -> Result<Option<NaiveDate>, SentimentError> {
        match self.get_string(section, key) {
            None => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map(Some)
                .map_err(|_| SentimentError::ConfigInvalid {
                    section: section.to_string(),
                    key: key.to_string(),
                    reason: "invalid date format (expected YYYY-MM-DD)".to_string(),
                }),
        }
    }
}
