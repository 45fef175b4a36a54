//! CSV file universe data adapter.
//!
//! One file per data source, `<base>/<source>.csv`, with the header
//! `date,symbol,mentions,rank,sentiment`.

use crate::domain::error::SentimentError;
use crate::domain::sentiment::{DailyBatch, SentimentRecord};
use crate::ports::data_port::UniverseDataPort;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    symbol: String,
    mentions: u64,
    rank: u32,
    sentiment: f64,
}

impl From<CsvRow> for SentimentRecord {
    fn from(row: CsvRow) -> Self {
        SentimentRecord::new(row.symbol, row.mentions, row.rank, row.sentiment)
    }
}

pub struct CsvUniverseAdapter {
    base_path: PathBuf,
}

impl CsvUniverseAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, source: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", source))
    }

    /// Data sources available under the base directory, sorted.
    pub fn list_sources(&self) -> Result<Vec<String>, SentimentError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| {
            SentimentError::data(format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let mut sources = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| SentimentError::data(format!("directory entry error: {}", e)))?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(stem) = name_str.strip_suffix(".csv") {
                sources.push(stem.to_string());
            }
        }

        sources.sort();
        Ok(sources)
    }
}

impl UniverseDataPort for CsvUniverseAdapter {
    fn fetch_batches(
        &self,
        source: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyBatch>, SentimentError> {
        let path = self.csv_path(source);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let available = self.list_sources().unwrap_or_default();
                return Err(SentimentError::data(format!(
                    "no data for source '{}' in {} (available: {})",
                    source,
                    self.base_path.display(),
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                )));
            }
            Err(e) => {
                return Err(SentimentError::data(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut by_date: BTreeMap<NaiveDate, Vec<SentimentRecord>> = BTreeMap::new();

        for result in rdr.deserialize::<CsvRow>() {
            let row = result.map_err(|e| {
                SentimentError::data(format!("CSV parse error in {}: {}", path.display(), e))
            })?;

            if row.date < start_date || row.date > end_date {
                continue;
            }
            by_date.entry(row.date).or_default().push(row.into());
        }

        Ok(by_date
            .into_iter()
            .map(|(date, records)| DailyBatch::new(date, records))
            .collect())
    }
}
