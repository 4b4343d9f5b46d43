//! Best-effort DateTime handling for parsing feed timestamps and persisting
//! checkpoints.

use super::*;

use chrono::Timelike;

/// Datetime generalization over chrono, always held in UTC.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    /// Get the current DateTime.
    pub fn now() -> Self {
        DateTime(chrono::Utc::now())
    }

    /// Generate a DateTime at the unix epoch.
    pub fn epoch() -> Self {
        DateTime(chrono::DateTime::UNIX_EPOCH)
    }

    /// Convert to chrono::DateTime.
    pub fn to_chrono(&self) -> chrono::DateTime<chrono::Utc> {
        self.0
    }

    /// Convert from chrono::DateTime.
    pub fn from_chrono(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Interpret a naive (offset-less) timestamp as UTC.
    pub fn from_naive_utc(naive: chrono::NaiveDateTime) -> Self {
        Self(chrono::DateTime::from_naive_utc_and_offset(naive, chrono::Utc))
    }

    /// Get the UTC wall clock without an offset.
    pub fn to_naive_utc(&self) -> chrono::NaiveDateTime {
        self.0.naive_utc()
    }

    /// Drop any sub-second component.
    pub fn truncate_to_seconds(&self) -> Self {
        match self.0.with_nanosecond(0) {
            Some(dt) => Self(dt),
            None => *self,
        }
    }

    /// Convert to ISO-8601 string.
    pub fn to_iso8601(&self) -> String {
        return self.0.format("%+").to_string();
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    }
}

impl TryFrom<&str> for DateTime {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let date = value.trim();

        // rfc2822:
        if let Ok(parsed) =
            chrono::DateTime::<chrono::FixedOffset>::parse_from_rfc2822(date)
        {
            return Ok(DateTime(parsed.to_utc()));
        }

        // rfc3339:
        if let Ok(parsed) =
            chrono::DateTime::<chrono::FixedOffset>::parse_from_rfc3339(date)
        {
            return Ok(DateTime(parsed.to_utc()));
        }

        // iso8601 and variants:
        for format in ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%MZ"] {
            if let Ok(parsed) =
                chrono::NaiveDateTime::parse_from_str(date, format)
            {
                return Ok(DateTime::from_naive_utc(parsed));
            }
        }

        if let Ok(parsed) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        {
            if let Some(parsed) = parsed.and_hms_opt(0, 0, 0) {
                return Ok(DateTime::from_naive_utc(parsed));
            }
        }

        Err(())
    }
}

impl TryFrom<&String> for DateTime {
    type Error = ();

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        DateTime::try_from(value.as_str())
    }
}

impl std::ops::Sub<Duration> for DateTime {
    type Output = DateTime;
    fn sub(self, rhs: Duration) -> Self::Output {
        DateTime(self.0 - rhs.0)
    }
}

impl std::ops::Sub<DateTime> for DateTime {
    type Output = Duration;
    fn sub(self, rhs: DateTime) -> Self::Output {
        Duration(self.0 - rhs.0)
    }
}

impl std::ops::Add<Duration> for DateTime {
    type Output = DateTime;
    fn add(self, rhs: Duration) -> Self::Output {
        DateTime(self.0 + rhs.0)
    }
}

/// Duration generalization for conversion between libraries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(chrono::Duration);

impl Duration {
    /// Create a duration from seconds.
    pub fn from_seconds(sec: u64) -> Self {
        Self(chrono::Duration::seconds(sec as i64))
    }

    /// Create a duration from hours.
    pub fn from_hours(hours: u64) -> Self {
        Self(chrono::Duration::hours(hours as i64))
    }

    /// Create a duration from days.
    pub fn from_days(days: u64) -> Self {
        Self(chrono::Duration::days(days as i64))
    }

    /// Convert duration to std.
    /// Negative durations become zero.
    pub fn to_std(&self) -> std::time::Duration {
        match self.0.to_std() {
            Ok(dur) => dur,
            Err(_) => std::time::Duration::ZERO,
        }
    }

    /// Convert duration to chrono.
    pub fn to_chrono(&self) -> chrono::Duration {
        self.0
    }

    /// Create duration from std.
    pub fn from_std(dur: std::time::Duration) -> Self {
        Self(match chrono::Duration::from_std(dur) {
            Ok(dur) => dur,
            Err(_) => chrono::Duration::zero(),
        })
    }

    /// Create duration from chrono.
    pub fn from_chrono(dur: chrono::Duration) -> Self {
        Self(dur)
    }

    /// Get the absolute length of the duration.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}
