use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Format used when sending dates: seven fractional digits and an explicit UTC marker.
const WIRE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:7]Z"
);

/// Zone-less form; Alpaca servers (and FITS timestamps) often omit the `Z`.
const LOCAL_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// ISO-8601 timestamp as exchanged with Alpaca devices, always in UTC.
///
/// Accepts `YYYY-MM-DDThh:mm:ss[.fffffff][Z]` as well as full RFC 3339
/// strings with an offset. Displays as `YYYY-MM-DDThh:mm:ss.fffffffZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlpacaTime(OffsetDateTime);

impl AlpacaTime {
    /// Underlying date and time, normalised to UTC.
    pub const fn date_time(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for AlpacaTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.to_offset(time::UtcOffset::UTC))
    }
}

impl From<SystemTime> for AlpacaTime {
    fn from(value: SystemTime) -> Self {
        Self(OffsetDateTime::from(value))
    }
}

impl From<AlpacaTime> for SystemTime {
    fn from(value: AlpacaTime) -> Self {
        value.0.into()
    }
}

impl FromStr for AlpacaTime {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        if let Ok(value) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(value.into());
        }
        let local = s.strip_suffix(['Z', 'z']).unwrap_or(s);
        let value = PrimitiveDateTime::parse(local, LOCAL_FORMAT)
            .map_err(|err| eyre::eyre!("Invalid date {s:?}: {err}"))?;
        Ok(value.assume_utc().into())
    }
}

impl fmt::Display for AlpacaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(WIRE_FORMAT).map_err(|err| {
            tracing::error!(%err, "Could not format date");
            fmt::Error
        })?;
        f.write_str(&formatted)
    }
}

impl Serialize for AlpacaTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AlpacaTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = AlpacaTime;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an ISO-8601 date string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn sample() -> AlpacaTime {
        "2016-03-04T17:45:31.1234567Z"
            .parse()
            .expect("sample date should parse")
    }

    #[test]
    fn parses_components() {
        let date_time = sample().date_time();
        assert_eq!(date_time.year(), 2016);
        assert_eq!(date_time.month(), Month::March);
        assert_eq!(date_time.day(), 4);
        assert_eq!(date_time.hour(), 17);
        assert_eq!(date_time.minute(), 45);
        assert_eq!(date_time.second(), 31);
        assert_eq!(date_time.nanosecond(), 123_456_700);
    }

    #[test]
    fn parses_short_fraction_without_zone() {
        let value: AlpacaTime = "2019-06-12T06:12:52.452".parse().expect("should parse");
        let date_time = value.date_time();
        assert_eq!(date_time.year(), 2019);
        assert_eq!(date_time.second(), 52);
        assert_eq!(date_time.millisecond(), 452);
        assert_eq!(date_time.offset(), time::UtcOffset::UTC);
    }

    #[test]
    fn parses_without_fraction() {
        let value: AlpacaTime = "2021-01-02T03:04:05".parse().expect("should parse");
        assert_eq!(value.date_time().nanosecond(), 0);
    }

    #[test]
    fn normalises_offsets_to_utc() {
        let value: AlpacaTime = "2020-05-06T10:00:00+02:00".parse().expect("should parse");
        assert_eq!(value.date_time().hour(), 8);
        assert_eq!(value.to_string(), "2020-05-06T08:00:00.0000000Z");
    }

    #[test]
    fn displays_seven_fraction_digits() {
        assert_eq!(sample().to_string(), "2016-03-04T17:45:31.1234567Z");
    }

    #[test]
    fn converts_through_system_time() {
        let system_time = SystemTime::from(sample());
        assert_eq!(AlpacaTime::from(system_time), sample());
    }

    #[test]
    fn rejects_garbage() {
        assert!("yesterday".parse::<AlpacaTime>().is_err());
        assert!("2016-13-04T17:45:31Z".parse::<AlpacaTime>().is_err());
    }

    #[test]
    fn deserializes_from_json_string() {
        let value: AlpacaTime =
            serde_json::from_str(r#""2016-03-04T17:45:31.1234567Z""#).expect("should decode");
        assert_eq!(value, sample());
        assert_eq!(
            serde_json::to_string(&value).expect("should encode"),
            r#""2016-03-04T17:45:31.1234567Z""#
        );
    }
}
