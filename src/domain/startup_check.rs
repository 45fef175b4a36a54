//! Sanity check on the history the data provider hands back at startup.
//!
//! One day of history must come back as exactly one batch, and that batch
//! must carry a realistically sized universe.

use crate::domain::error::SentimentError;
use crate::domain::sentiment::DailyBatch;
use tracing::debug;

pub const EXPECTED_HISTORY_BATCHES: usize = 1;
pub const MIN_HISTORY_RECORDS: usize = 100;

pub fn validate_history(batches: &[DailyBatch], min_records: usize) -> Result<(), SentimentError> {
    if batches.len() != EXPECTED_HISTORY_BATCHES {
        return Err(SentimentError::UnexpectedHistoryCount {
            count: batches.len(),
            expected: EXPECTED_HISTORY_BATCHES,
        });
    }

    for batch in batches {
        if batch.len() < min_records {
            return Err(SentimentError::InsufficientHistory {
                date: batch.date,
                records: batch.len(),
                minimum: min_records,
            });
        }
        debug!("history {}: {} records [OK]", batch.date, batch.len());
    }

    Ok(())
}
