use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, Time, UtcOffset};

use crate::ValidationError;

const DAY_SECS: i64 = 86_400;

/// Symbolic lookback selector accepted by the market endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "all")]
    All,
}

/// Upstream bar granularity requested for a timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingInterval {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
}

impl SamplingInterval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinutes => "5m",
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::OneWeek => "1wk",
        }
    }
}

impl Display for SamplingInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete `[period1, period2]` window in epoch seconds plus sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub period1: i64,
    pub period2: i64,
    pub interval: SamplingInterval,
}

impl Timeframe {
    pub const ALL: [Self; 8] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::YearToDate,
        Self::All,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::YearToDate => "ytd",
            Self::All => "all",
        }
    }

    /// Fixed lookback in seconds; `None` for the calendar-anchored tokens.
    pub const fn window_seconds(self) -> Option<i64> {
        match self {
            Self::OneDay => Some(DAY_SECS),
            Self::OneWeek => Some(7 * DAY_SECS),
            Self::OneMonth => Some(30 * DAY_SECS),
            Self::ThreeMonths => Some(90 * DAY_SECS),
            Self::SixMonths => Some(180 * DAY_SECS),
            Self::OneYear => Some(365 * DAY_SECS),
            Self::YearToDate | Self::All => None,
        }
    }

    pub const fn sampling_interval(self) -> SamplingInterval {
        match self {
            Self::OneDay => SamplingInterval::FiveMinutes,
            Self::OneWeek => SamplingInterval::OneHour,
            Self::All => SamplingInterval::OneWeek,
            _ => SamplingInterval::OneDay,
        }
    }

    /// Resolve against the current wall clock.
    pub fn resolve(self) -> TimeWindow {
        self.resolve_at(OffsetDateTime::now_utc())
    }

    /// Resolve against an explicit "now". `ytd` anchors on January 1 in UTC.
    pub fn resolve_at(self, now: OffsetDateTime) -> TimeWindow {
        let now = now.to_offset(UtcOffset::UTC);
        let period2 = now.unix_timestamp();
        let period1 = match self {
            Self::All => 0,
            Self::YearToDate => {
                let jan_first = now.date() - Duration::days(i64::from(now.ordinal()) - 1);
                jan_first.with_time(Time::MIDNIGHT).assume_utc().unix_timestamp()
            }
            fixed => period2 - fixed.window_seconds().unwrap_or(0),
        };

        TimeWindow {
            period1,
            period2,
            interval: self.sampling_interval(),
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "6m" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "ytd" => Ok(Self::YearToDate),
            "all" => Ok(Self::All),
            _ => Err(ValidationError::UnsupportedTimeframe {
                value: value.to_owned(),
            }),
        }
    }
}
