use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fmt::{self, Display};

use crate::error::LookupError;

const PASS_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// The caller's externally visible network address, as reported by the IP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// True when there is nothing to look up, e.g. an empty `ip` field.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// One visibility window: when the station rises and how long it stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FlyoverWindow {
    /// Unix timestamp, seconds.
    pub risetime: i64,
    /// Seconds.
    pub duration: u64,
}

impl FlyoverWindow {
    pub fn rise_at(&self) -> Result<DateTime<Utc>, LookupError> {
        DateTime::<Utc>::from_timestamp(self.risetime, 0)
            .ok_or(LookupError::InvalidTimestamp(self.risetime))
    }

    /// Renders the window as a single report line (without trailing newline),
    /// with the rise time shown in `tz`.
    pub fn describe<Tz>(&self, tz: &Tz) -> Result<String, LookupError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let rise = self.rise_at()?.with_timezone(tz);
        Ok(format!(
            "Next pass at {} for {} seconds!",
            rise.format(PASS_TIME_FORMAT),
            self.duration
        ))
    }
}
