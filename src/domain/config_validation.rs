//! Configuration validation.
//!
//! Validates every config field before the algorithm is initialized.

use crate::domain::error::SentimentError;
use crate::domain::settings::{DEFAULT_CASH, MAX_HISTORY_DAYS, Resolution};
use crate::ports::config_port::ConfigPort;

pub fn validate_algorithm_config(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    validate_dates(config)?;
    validate_cash(config)?;
    validate_resolution(config)?;
    validate_universe(config)?;
    Ok(())
}

pub fn validate_selection_config(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    validate_non_negative(config, "selection", "min_mentions")?;
    validate_max_rank(config)?;
    Ok(())
}

pub fn validate_startup_config(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    let days = config.get_int("startup", "history_days", 1);
    if !(1..=MAX_HISTORY_DAYS).contains(&days) {
        return Err(invalid(
            "startup",
            "history_days",
            &format!("history_days must be between 1 and {MAX_HISTORY_DAYS}"),
        ));
    }
    validate_non_negative(config, "startup", "min_records")?;
    Ok(())
}

pub fn validate_all(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    validate_algorithm_config(config)?;
    validate_selection_config(config)?;
    validate_startup_config(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> SentimentError {
    SentimentError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn missing(section: &str, key: &str) -> SentimentError {
    SentimentError::ConfigMissing {
        section: section.to_string(),
        key: key.to_string(),
    }
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    let start = config
        .get_date("algorithm", "start_date")?
        .ok_or_else(|| missing("algorithm", "start_date"))?;
    let end = config
        .get_date("algorithm", "end_date")?
        .ok_or_else(|| missing("algorithm", "end_date"))?;

    if start > end {
        return Err(invalid(
            "algorithm",
            "start_date",
            "start_date must not be after end_date",
        ));
    }
    Ok(())
}

fn validate_cash(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    parse_cash(config).map(|_| ())
}

/// Starting cash; the default when absent, otherwise a finite positive number.
pub fn parse_cash(config: &dyn ConfigPort) -> Result<f64, SentimentError> {
    let Some(raw) = config.get_string("algorithm", "cash") else {
        return Ok(DEFAULT_CASH);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(invalid(
            "algorithm",
            "cash",
            "cash must be a finite positive number",
        )),
    }
}

fn validate_resolution(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    let Some(raw) = config.get_string("algorithm", "resolution") else {
        return Ok(());
    };
    match raw.parse::<Resolution>() {
        Ok(Resolution::Daily) => Ok(()),
        Ok(other) => Err(invalid(
            "algorithm",
            "resolution",
            &format!("universe data is published daily, {other} is not supported"),
        )),
        Err(reason) => Err(invalid("algorithm", "resolution", &reason)),
    }
}

fn validate_universe(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    match config.get_string("algorithm", "universe") {
        Some(s) if s.trim().is_empty() => Err(invalid(
            "algorithm",
            "universe",
            "universe must not be empty",
        )),
        _ => Ok(()),
    }
}

fn validate_non_negative(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), SentimentError> {
    if config.get_string(section, key).is_none() {
        return Ok(());
    }
    let value = config.get_int(section, key, -1);
    if value < 0 {
        return Err(invalid(
            section,
            key,
            &format!("{key} must be a non-negative integer"),
        ));
    }
    Ok(())
}

fn validate_max_rank(config: &dyn ConfigPort) -> Result<(), SentimentError> {
    if config.get_string("selection", "max_rank").is_none() {
        return Ok(());
    }
    let value = config.get_int("selection", "max_rank", 0);
    if value < 1 || value > u32::MAX as i64 {
        return Err(invalid(
            "selection",
            "max_rank",
            "max_rank must be a positive integer",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    const VALID: &str = r#"
[algorithm]
start_date = 2022-02-14
end_date = 2022-02-18
cash = 100000
resolution = daily
universe = quiver-wallstreetbets

[selection]
min_mentions = 100
max_rank = 100

[startup]
history_days = 1
min_records = 100
"#;

    fn cfg(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate_all(&cfg(VALID)).is_ok());
    }

    #[test]
    fn minimal_config_passes() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-14\nend_date = 2022-02-14\n");
        assert!(validate_all(&c).is_ok());
    }

    #[test]
    fn missing_start_date() {
        let c = cfg("[algorithm]\nend_date = 2022-02-18\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigMissing { key, .. } if key == "start_date"));
    }

    #[test]
    fn missing_end_date() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-14\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigMissing { key, .. } if key == "end_date"));
    }

    #[test]
    fn bad_date_format() {
        let c = cfg("[algorithm]\nstart_date = 2022/02/14\nend_date = 2022-02-18\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn start_after_end() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-19\nend_date = 2022-02-18\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn non_positive_cash() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-14\nend_date = 2022-02-18\ncash = 0\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "cash"));
    }

    #[test]
    fn non_numeric_cash_rejected() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-14\nend_date = 2022-02-18\ncash = lots\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "cash"));
    }

    #[test]
    fn non_finite_cash_rejected() {
        for value in ["nan", "inf", "-inf"] {
            let c = cfg(&format!(
                "[algorithm]\nstart_date = 2022-02-14\nend_date = 2022-02-18\ncash = {value}\n"
            ));
            assert!(validate_algorithm_config(&c).is_err(), "cash = {value}");
        }
    }

    #[test]
    fn parse_cash_defaults_when_absent() {
        let c = cfg("[algorithm]\n");
        assert_eq!(parse_cash(&c).unwrap(), 100_000.0);
        let c = cfg("[algorithm]\ncash = 2500.5\n");
        assert_eq!(parse_cash(&c).unwrap(), 2500.5);
    }

    #[test]
    fn intraday_resolution_rejected() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-14\nend_date = 2022-02-18\nresolution = minute\n");
        let err = validate_algorithm_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "resolution"));
    }

    #[test]
    fn unknown_resolution_rejected() {
        let c = cfg("[algorithm]\nstart_date = 2022-02-14\nend_date = 2022-02-18\nresolution = weekly\n");
        assert!(validate_algorithm_config(&c).is_err());
    }

    #[test]
    fn negative_min_mentions_rejected() {
        let c = cfg("[selection]\nmin_mentions = -5\n");
        let err = validate_selection_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "min_mentions"));
    }

    #[test]
    fn non_numeric_min_mentions_rejected() {
        let c = cfg("[selection]\nmin_mentions = lots\n");
        assert!(validate_selection_config(&c).is_err());
    }

    #[test]
    fn zero_max_rank_rejected() {
        let c = cfg("[selection]\nmax_rank = 0\n");
        let err = validate_selection_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "max_rank"));
    }

    #[test]
    fn huge_history_days_rejected() {
        let c = cfg("[startup]\nhistory_days = 100000000\n");
        let err = validate_startup_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "history_days"));
        assert!(validate_startup_config(&cfg("[startup]\nhistory_days = 366\n")).is_ok());
    }

    #[test]
    fn zero_history_days_rejected() {
        let c = cfg("[startup]\nhistory_days = 0\n");
        let err = validate_startup_config(&c).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigInvalid { key, .. } if key == "history_days"));
    }
}
