//! Host-facing algorithm hooks.
//!
//! The host owns the clock, the data feed and the security manager. It calls
//! [`UniverseAlgorithm::initialize`] once, [`UniverseAlgorithm::universe_selection`]
//! on every universe refresh, and [`UniverseAlgorithm::on_securities_changed`]
//! whenever the tracked set moves.

use crate::domain::changes::SecurityChanges;
use crate::domain::error::SentimentError;
use crate::domain::sentiment::DailyBatch;
use crate::domain::settings::AlgorithmSettings;
use crate::domain::startup_check::validate_history;
use crate::ports::data_port::UniverseDataPort;
use tracing::info;

pub trait UniverseAlgorithm {
    fn settings(&self) -> &AlgorithmSettings;

    fn initialize(&mut self, data: &dyn UniverseDataPort) -> Result<(), SentimentError>;

    fn universe_selection(&self, batch: &DailyBatch) -> Vec<String>;

    fn on_securities_changed(&self, changes: &SecurityChanges);
}

/// Selects symbols with many mentions and a high popularity rank.
#[derive(Debug, Clone)]
pub struct SentimentUniverseAlgorithm {
    settings: AlgorithmSettings,
}

impl SentimentUniverseAlgorithm {
    pub fn new(settings: AlgorithmSettings) -> Self {
        Self { settings }
    }
}

impl UniverseAlgorithm for SentimentUniverseAlgorithm {
    fn settings(&self) -> &AlgorithmSettings {
        &self.settings
    }

    fn initialize(&mut self, data: &dyn UniverseDataPort) -> Result<(), SentimentError> {
        let s = &self.settings;
        info!(
            "initializing {} to {}, cash {:.2}, {} resolution, universe {}",
            s.start_date, s.end_date, s.cash, s.resolution, s.source
        );

        let history = data.history(&s.source, s.start_date, s.history_days)?;
        validate_history(&history, s.min_history_records)?;

        info!("history check passed: {} batch(es)", history.len());
        Ok(())
    }

    fn universe_selection(&self, batch: &DailyBatch) -> Vec<String> {
        self.settings.filter.select(batch)
    }

    fn on_securities_changed(&self, changes: &SecurityChanges) {
        info!("{changes}");
    }
}
