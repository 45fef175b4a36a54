#![allow(dead_code)]

use chrono::NaiveDate;
use sentiment_universe::domain::error::SentimentError;
pub use sentiment_universe::domain::sentiment::{DailyBatch, SentimentRecord};
use sentiment_universe::ports::data_port::UniverseDataPort;
use std::cell::Cell;
use std::collections::HashMap;

pub struct MockDataPort {
    pub batches: HashMap<String, Vec<DailyBatch>>,
    pub errors: HashMap<String, String>,
    pub calls: Cell<usize>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            batches: HashMap::new(),
            errors: HashMap::new(),
            calls: Cell::new(0),
        }
    }

    pub fn with_batch(mut self, source: &str, batch: DailyBatch) -> Self {
        let entry = self.batches.entry(source.to_string()).or_default();
        entry.push(batch);
        entry.sort_by_key(|b| b.date);
        self
    }

    pub fn with_error(mut self, source: &str, reason: &str) -> Self {
        self.errors.insert(source.to_string(), reason.to_string());
        self
    }
}

impl UniverseDataPort for MockDataPort {
    fn fetch_batches(
        &self,
        source: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyBatch>, SentimentError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(reason) = self.errors.get(source) {
            return Err(SentimentError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .batches
            .get(source)
            .map(|all| {
                all.iter()
                    .filter(|b| b.date >= start_date && b.date <= end_date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn rec(symbol: &str, mentions: u64, rank: u32) -> SentimentRecord {
    SentimentRecord::new(symbol, mentions, rank, 0.0)
}

/// `count` records, none of which pass the default filter.
pub fn filler_batch(day: NaiveDate, count: usize) -> DailyBatch {
    let records = (0..count)
        .map(|i| SentimentRecord::new(format!("F{i:03}"), 5, 500 + i as u32, -0.1))
        .collect();
    DailyBatch::new(day, records)
}

/// A filler batch with `picks` prepended.
pub fn batch_with(day: NaiveDate, picks: &[(&str, u64, u32)], filler: usize) -> DailyBatch {
    let mut batch = filler_batch(day, filler);
    let mut records: Vec<SentimentRecord> =
        picks.iter().map(|(s, m, r)| rec(s, *m, *r)).collect();
    records.append(&mut batch.records);
    DailyBatch::new(day, records)
}

pub fn csv_header() -> &'static str {
    "date,symbol,mentions,rank,sentiment\n"
}

pub fn csv_rows(batch: &DailyBatch) -> String {
    batch
        .records
        .iter()
        .map(|r| format!("{},{}\n", batch.date, r))
        .collect()
}
