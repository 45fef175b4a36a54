//! Minimal host-side driver: replays stored daily batches through an algorithm.
//!
//! No orders, fills or portfolio accounting happen here. The driver only
//! sequences the hooks the way a host would on a daily universe schedule.

use crate::domain::algorithm::UniverseAlgorithm;
use crate::domain::changes::SecurityChanges;
use crate::domain::error::SentimentError;
use crate::ports::data_port::UniverseDataPort;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct DailySelection {
    pub date: NaiveDate,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub selections: Vec<DailySelection>,
    pub changes: Vec<(NaiveDate, SecurityChanges)>,
}

impl ReplayReport {
    /// The set that was active after the last replayed day.
    pub fn final_selection(&self) -> &[String] {
        self.selections
            .last()
            .map(|s| s.symbols.as_slice())
            .unwrap_or(&[])
    }
}

pub fn run(
    algorithm: &mut dyn UniverseAlgorithm,
    data: &dyn UniverseDataPort,
) -> Result<ReplayReport, SentimentError> {
    algorithm.initialize(data)?;

    let (source, start, end) = {
        let s = algorithm.settings();
        (s.source.clone(), s.start_date, s.end_date)
    };

    let batches = data.fetch_batches(&source, start, end)?;
    if batches.is_empty() {
        warn!("no universe data for {} between {} and {}", source, start, end);
    }
    info!("replaying {} day(s) of {}", batches.len(), source);

    let mut report = ReplayReport::default();
    let mut active: Vec<String> = Vec::new();

    for batch in &batches {
        debug!("{}: {} records", batch.date, batch.len());
        let selected = algorithm.universe_selection(batch);

        let changes = SecurityChanges::between(&active, &selected);
        if !changes.is_empty() {
            algorithm.on_securities_changed(&changes);
            report.changes.push((batch.date, changes));
        }

        active = selected.clone();
        report.selections.push(DailySelection {
            date: batch.date,
            symbols: selected,
        });
    }

    Ok(report)
}
