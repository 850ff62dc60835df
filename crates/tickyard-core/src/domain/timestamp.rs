use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// Second-precision UTC instant, serialized as RFC 3339 (`2024-01-01T00:00:00Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    /// Convert an upstream epoch-seconds value. Years outside 0..=9999 are
    /// rejected so every value stays RFC 3339 formattable.
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self, ValidationError> {
        let value = OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|_| ValidationError::InvalidTimestamp { value: seconds })?;
        if !(0..=9999).contains(&value.year()) {
            return Err(ValidationError::InvalidTimestamp { value: seconds });
        }
        Ok(Self(value))
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339).map_err(|_| {
            ValidationError::TimestampNotRfc3339 {
                value: input.to_owned(),
            }
        })?;
        if parsed.offset() != UtcOffset::UTC {
            return Err(ValidationError::TimestampNotUtc {
                value: input.to_owned(),
            });
        }
        Ok(Self(truncate(parsed)))
    }

    pub fn unix_timestamp(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.unix_timestamp().to_string())
    }
}

fn truncate(value: OffsetDateTime) -> OffsetDateTime {
    value.replace_nanosecond(0).unwrap_or(value)
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
