use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

// Tried in order after RFC 3339 fails.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected 2 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("cookie identifier is empty")]
    EmptyCookie,

    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// One `cookie,timestamp` row of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub cookie: String,
    pub occurred_at: DateTime<FixedOffset>,
}

impl Record {
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        let [cookie, timestamp] = fields.as_slice() else {
            return Err(RecordError::FieldCount(fields.len()));
        };

        if cookie.is_empty() {
            return Err(RecordError::EmptyCookie);
        }

        let occurred_at = parse_timestamp(timestamp).map_err(|source| RecordError::Timestamp {
            value: timestamp.to_string(),
            source,
        })?;

        Ok(Record {
            cookie: cookie.to_string(),
            occurred_at,
        })
    }

    /// Calendar date in the record's own offset; time of day is dropped.
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }
}

/// Parses an ISO 8601 date, optionally followed by a time of day and an
/// offset. Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts);
    }

    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_reference_row() {
        let record = Record::parse("AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00").unwrap();
        assert_eq!(record.cookie, "AtY0laUfhglK3lC7");
        assert_eq!(record.date(), date("2018-12-09"));
        assert_eq!(record.occurred_at.to_rfc3339(), "2018-12-09T14:19:00+00:00");
    }

    #[test]
    fn strips_surrounding_whitespace() {
        let record = Record::parse("  abc,2018-12-09T14:19:00+00:00\r\n").unwrap();
        assert_eq!(record.cookie, "abc");
    }

    #[test]
    fn date_uses_the_records_own_offset() {
        let record = Record::parse("abc,2018-12-09T23:30:00-05:00").unwrap();
        assert_eq!(record.date(), date("2018-12-09"));
    }

    #[test]
    fn accepts_other_iso_forms() {
        for ts in [
            "2018-12-09T14:19:00Z",
            "2018-12-09T14:19:00.250+02:00",
            "2018-12-09T14:19+00:00",
            "2018-12-09 14:19:00+00:00",
            "2018-12-09T14:19:00",
            "2018-12-09T14:19",
            "2018-12-09 14:19:00",
            "2018-12-09",
        ] {
            let record = Record::parse(&format!("abc,{ts}"))
                .unwrap_or_else(|e| panic!("{ts} should parse: {e}"));
            assert_eq!(record.date(), date("2018-12-09"), "{ts}");
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            Record::parse("AtY0laUfhglK3lC7"),
            Err(RecordError::FieldCount(1))
        ));
        assert!(matches!(
            Record::parse("a,2018-12-09T14:19:00+00:00,extra"),
            Err(RecordError::FieldCount(3))
        ));
        assert!(matches!(Record::parse(""), Err(RecordError::FieldCount(1))));
    }

    #[test]
    fn rejects_empty_cookie() {
        assert!(matches!(
            Record::parse(",2018-12-09T14:19:00+00:00"),
            Err(RecordError::EmptyCookie)
        ));
    }

    #[test]
    fn rejects_bad_timestamps() {
        for ts in ["yesterday", "2018-13-09T14:19:00+00:00", "2018-02-30", ""] {
            match Record::parse(&format!("abc,{ts}")) {
                Err(RecordError::Timestamp { value, .. }) => assert_eq!(value, ts),
                other => panic!("{ts:?} gave {other:?}"),
            }
        }
    }
}
