//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for sentiment-universe.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("unexpected history count {count}, expected {expected}")]
    UnexpectedHistoryCount { count: usize, expected: usize },

    #[error("unexpected historical universe data for {date}: {records} records, need at least {minimum}")]
    InsufficientHistory {
        date: NaiveDate,
        records: usize,
        minimum: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SentimentError {
    pub(crate) fn data(reason: impl Into<String>) -> Self {
        SentimentError::Data {
            reason: reason.into(),
        }
    }
}

impl From<&SentimentError> for std::process::ExitCode {
    fn from(err: &SentimentError) -> Self {
        let code: u8 = match err {
            SentimentError::Io(_) => 1,
            SentimentError::ConfigParse { .. }
            | SentimentError::ConfigMissing { .. }
            | SentimentError::ConfigInvalid { .. } => 2,
            SentimentError::Data { .. } => 3,
            SentimentError::UnexpectedHistoryCount { .. }
            | SentimentError::InsufficientHistory { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_count_message_names_both_counts() {
        let err = SentimentError::UnexpectedHistoryCount {
            count: 2,
            expected: 1,
        };
        assert_eq!(err.to_string(), "unexpected history count 2, expected 1");
    }

    #[test]
    fn insufficient_history_message() {
        let err = SentimentError::InsufficientHistory {
            date: NaiveDate::from_ymd_opt(2022, 2, 11).unwrap(),
            records: 12,
            minimum: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("2022-02-11"));
        assert!(msg.contains("12 records"));
        assert!(msg.contains("at least 100"));
    }

    #[test]
    fn config_missing_message() {
        let err = SentimentError::ConfigMissing {
            section: "algorithm".into(),
            key: "start_date".into(),
        };
        assert_eq!(err.to_string(), "missing config key [algorithm] start_date");
    }
}
