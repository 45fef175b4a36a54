//! Ranked social-sentiment records and their daily grouping.

use chrono::NaiveDate;
use std::fmt;

/// One symbol's social-media signal for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    pub symbol: String,
    pub mentions: u64,
    /// Popularity rank, lower is more popular.
    pub rank: u32,
    pub sentiment: f64,
}

impl SentimentRecord {
    pub fn new(symbol: impl Into<String>, mentions: u64, rank: u32, sentiment: f64) -> Self {
        Self {
            symbol: symbol.into(),
            mentions,
            rank,
            sentiment,
        }
    }
}

/// `symbol,mentions,rank,sentiment`, the per-record log line.
impl fmt::Display for SentimentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.symbol, self.mentions, self.rank, self.sentiment
        )
    }
}

/// All records published for a single trading date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBatch {
    pub date: NaiveDate,
    pub records: Vec<SentimentRecord>,
}

impl DailyBatch {
    pub fn new(date: NaiveDate, records: Vec<SentimentRecord>) -> Self {
        Self { date, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.symbol.as_str())
    }
}
