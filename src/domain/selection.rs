//! Universe filter: picks the heavily-discussed, highly-ranked symbols of a day.
//!
//! A symbol is selected when its mention count is strictly above
//! `min_mentions` and its rank is strictly below `max_rank`. Every record is
//! logged as `symbol,mentions,rank,sentiment` whether or not it qualifies.

use crate::domain::sentiment::{DailyBatch, SentimentRecord};
use std::collections::HashSet;
use tracing::info;

pub const DEFAULT_MIN_MENTIONS: u64 = 100;
pub const DEFAULT_MAX_RANK: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseFilter {
    pub min_mentions: u64,
    pub max_rank: u32,
}

impl Default for UniverseFilter {
    fn default() -> Self {
        Self {
            min_mentions: DEFAULT_MIN_MENTIONS,
            max_rank: DEFAULT_MAX_RANK,
        }
    }
}

impl UniverseFilter {
    pub fn new(min_mentions: u64, max_rank: u32) -> Self {
        Self {
            min_mentions,
            max_rank,
        }
    }

    pub fn accepts(&self, record: &SentimentRecord) -> bool {
        record.mentions > self.min_mentions && record.rank < self.max_rank
    }

    /// Symbols passing the filter, in input order. A symbol repeated within
    /// the batch is returned once, at its first qualifying position.
    pub fn select(&self, batch: &DailyBatch) -> Vec<String> {
        let mut selected = Vec::new();
        let mut seen = HashSet::new();

        for record in &batch.records {
            info!("{record}");

            if self.accepts(record) && seen.insert(record.symbol.as_str()) {
                selected.push(record.symbol.clone());
            }
        }

        selected
    }
}

/// Selection with the default 100 mentions / rank 100 thresholds.
pub fn select(batch: &DailyBatch) -> Vec<String> {
    UniverseFilter::default().select(batch)
}
