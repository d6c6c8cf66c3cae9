use thiserror::Error;

/// Errors raised while parsing schedule configuration.
///
/// Both variants are startup-fatal: a schedule that cannot be parsed never
/// reaches the runner.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid time of day {value:?}: expected HH:MM:SS")]
    InvalidTime { value: String },

    #[error("unknown timezone: {value}")]
    UnknownTimezone { value: String },
}
