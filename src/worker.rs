use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;
use crate::config::{Config, EntryParameters};
use crate::errors::RangeError;
use crate::models::ScheduleEntry;

/// Builds a schedule entry from configuration and reports it
///
/// # Arguments
///
/// * 'config' - configuration
/// * 'observed' - time to record as actual when none is configured, instead of Utc now
pub fn run(config: &Config, observed: Option<DateTime<Utc>>) -> Result<ScheduleEntry, WorkerError> {

    // If an observed time is given, use that. Otherwise, use the current time.
    let observed = observed.unwrap_or_else(Utc::now);

    let entry = build_entry(&config.entry, observed)?;

    // Out of range values are kept, the entry stores whatever it is given
    if let Err(e) = check_time_of_day(entry.hours(), entry.minutes()) {
        warn!("Entry time of day is not valid: {}", e);
    }

    info!("{}", entry);
    info!("Drift: {} seconds", drift(&entry));

    Ok(entry)
}

/// Creates an entry and applies each configured value
///
/// # Arguments
///
/// * 'params' - entry configuration
/// * 'observed' - time to use as actual if the configuration has none
fn build_entry(params: &EntryParameters, observed: DateTime<Utc>) -> Result<ScheduleEntry, WorkerError> {
    let actual_tstamp = match params.actual_tstamp {
        Some(actual) => actual,
        None => u32::try_from(observed.timestamp())
            .map_err(|_| WorkerError::ObservedTime(observed.to_rfc3339()))?,
    };

    let mut entry = ScheduleEntry::new();
    entry.set_scheduled_tstamp(params.scheduled_tstamp);
    entry.set_actual_tstamp(actual_tstamp);
    entry.set_hours(params.hours);
    entry.set_minutes(params.minutes);
    entry.set_city_index(params.city_index);

    Ok(entry)
}

/// Returns seconds between scheduled and actual time, negative if actual came first
///
fn drift(entry: &ScheduleEntry) -> i64 {
    entry.actual_tstamp() as i64 - entry.scheduled_tstamp() as i64
}

/// Checks that hours and minutes form a valid time of day
///
/// # Arguments
///
/// * 'hours' - hour of day, expected 0 - 23
/// * 'minutes' - minute of hour, expected 0 - 59
fn check_time_of_day(hours: u8, minutes: u8) -> Result<(), RangeError> {
    if hours > 23 {
        return Err(RangeError::Hours(hours));
    }
    if minutes > 59 {
        return Err(RangeError::Minutes(minutes));
    }

    Ok(())
}

/// Error depicting errors that occur while building an entry
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("observed time does not fit a 32 bit timestamp: {0}")]
    ObservedTime(String),
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use log::LevelFilter;
    use crate::config::General;
    use super::*;

    fn config(actual_tstamp: Option<u32>, hours: u8, minutes: u8) -> Config {
        Config {
            entry: EntryParameters {
                scheduled_tstamp: 1_700_000_000,
                actual_tstamp,
                hours,
                minutes,
                city_index: 7,
            },
            general: General {
                log_path: String::new(),
                log_level: LevelFilter::Off,
                log_to_stdout: false,
            },
        }
    }

    #[test]
    fn configured_actual_wins_over_observed() {
        let observed = Utc.timestamp_opt(1_800_000_000, 0).unwrap();
        let entry = run(&config(Some(1_700_000_005), 14, 30), Some(observed)).unwrap();

        assert_eq!(entry.scheduled_tstamp(), 1_700_000_000);
        assert_eq!(entry.actual_tstamp(), 1_700_000_005);
        assert_eq!(entry.hours(), 14);
        assert_eq!(entry.minutes(), 30);
        assert_eq!(entry.city_index(), 7);
    }

    #[test]
    fn observed_time_fills_missing_actual() {
        let observed = Utc.timestamp_opt(1_700_000_042, 0).unwrap();
        let entry = run(&config(None, 14, 30), Some(observed)).unwrap();

        assert_eq!(entry.actual_tstamp(), 1_700_000_042);
    }

    #[test]
    fn out_of_range_time_of_day_is_kept() {
        let observed = Utc.timestamp_opt(1_700_000_042, 0).unwrap();
        let entry = run(&config(None, 30, 75), Some(observed)).unwrap();

        assert_eq!(entry.hours(), 30);
        assert_eq!(entry.minutes(), 75);
    }

    #[test]
    fn observed_time_beyond_u32_fails() {
        let observed = Utc.timestamp_opt(u32::MAX as i64 + 1, 0).unwrap();
        let res = run(&config(None, 0, 0), Some(observed));

        assert!(matches!(res, Err(WorkerError::ObservedTime(_))));
    }

    #[test]
    fn observed_time_before_epoch_fails() {
        let observed = Utc.timestamp_opt(-1, 0).unwrap();
        let res = run(&config(None, 0, 0), Some(observed));

        assert!(matches!(res, Err(WorkerError::ObservedTime(_))));
    }

    #[test]
    fn time_of_day_accepts_day_bounds() {
        assert_eq!(check_time_of_day(0, 0), Ok(()));
        assert_eq!(check_time_of_day(23, 59), Ok(()));
    }

    #[test]
    fn time_of_day_reports_hours_first() {
        assert_eq!(check_time_of_day(24, 0), Err(RangeError::Hours(24)));
        assert_eq!(check_time_of_day(255, 255), Err(RangeError::Hours(255)));
        assert_eq!(check_time_of_day(12, 60), Err(RangeError::Minutes(60)));
    }

    #[test]
    fn drift_is_signed() {
        let mut entry = ScheduleEntry::new();
        entry.set_scheduled_tstamp(100);
        entry.set_actual_tstamp(40);

        assert_eq!(drift(&entry), -60);
    }
}
