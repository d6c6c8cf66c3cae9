use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ScheduleError;

/// A wall-clock fire time bound to an IANA timezone.
///
/// Parsed once at startup; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    time: NaiveTime,
    tz: Tz,
}

impl DailySchedule {
    /// Parse and validate configuration strings.
    ///
    /// Rejecting bad values here keeps the runner free of failure modes:
    /// once a `DailySchedule` exists, every later computation is total.
    pub fn parse(time: &str, timezone: &str) -> Result<Self, ScheduleError> {
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S").map_err(|_| {
            ScheduleError::InvalidTime {
                value: time.to_string(),
            }
        })?;
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimezone {
                value: timezone.to_string(),
            })?;
        Ok(Self { time, tz })
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Next occurrence of the configured wall-clock time strictly after
    /// `from`.
    ///
    /// A candidate local time swallowed by a DST spring-forward gap is
    /// skipped to the next day; an ambiguous fall-back time resolves to
    /// the earlier of its two instants. `None` only on calendar overflow,
    /// which real clocks never reach.
    pub fn next_fire(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let local_now = from.with_timezone(&self.tz);
        let mut date = local_now.date_naive();

        // Two iterations cover "today or tomorrow"; a third absorbs a
        // candidate erased by a spring-forward gap.
        for _ in 0..3 {
            if let Some(candidate) = self
                .tz
                .from_local_datetime(&date.and_time(self.time))
                .earliest()
            {
                if candidate > local_now {
                    return Some(candidate.with_timezone(&Utc));
                }
            }
            date = date.succ_opt()?;
        }
        None
    }

    /// Sleep duration until the next fire.
    ///
    /// A clock anomaly that yields a non-positive interval maps to zero:
    /// fire immediately rather than block or error.
    pub fn delay_until_next(&self, from: DateTime<Utc>) -> Option<Duration> {
        let next = self.next_fire(from)?;
        Some((next - from).to_std().unwrap_or(Duration::ZERO))
    }
}

impl fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time.format("%H:%M:%S"), self.tz)
    }
}
