use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use tracing::error;

use crate::error::{CookieError, Result};

const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// An untyped target date, as it may arrive from a caller that is not the CLI.
#[derive(Debug, Clone, PartialEq)]
pub enum DateArg {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl DateArg {
    fn type_name(&self) -> &'static str {
        match self {
            DateArg::Text(_) => "string",
            DateArg::Integer(_) => "integer",
            DateArg::Float(_) => "float",
            DateArg::Bool(_) => "bool",
        }
    }
}

impl From<&str> for DateArg {
    fn from(value: &str) -> Self {
        DateArg::Text(value.to_string())
    }
}

impl From<String> for DateArg {
    fn from(value: String) -> Self {
        DateArg::Text(value)
    }
}

impl From<i64> for DateArg {
    fn from(value: i64) -> Self {
        DateArg::Integer(value)
    }
}

impl From<f64> for DateArg {
    fn from(value: f64) -> Self {
        DateArg::Float(value)
    }
}

impl From<bool> for DateArg {
    fn from(value: bool) -> Self {
        DateArg::Bool(value)
    }
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_PATTERN).expect("date pattern is valid"))
}

/// Validates the target date: it must be text of the form `YYYY-MM-DD`
/// naming a real calendar day.
pub fn parse_target_date(arg: &DateArg) -> Result<NaiveDate> {
    let DateArg::Text(text) = arg else {
        error!(
            action = "validate",
            component = "target_date",
            found = arg.type_name(),
            "Target date is not a string"
        );
        return Err(CookieError::DateNotText(arg.type_name()));
    };

    let parsed = date_regex()
        .is_match(text)
        .then(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
        .flatten();

    match parsed {
        Some(date) => Ok(date),
        None => {
            error!(
                action = "validate",
                component = "target_date",
                date = %text,
                "Invalid date format, expected YYYY-MM-DD"
            );
            Err(CookieError::InvalidDate(text.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn accepts_calendar_dates() {
        let date = parse_target_date(&"2018-12-09".into()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2018, 12, 9).unwrap());
        assert!(parse_target_date(&"2020-02-29".into()).is_ok());
    }

    #[test]
    fn rejects_incomplete_or_impossible_dates() {
        for text in [
            "",
            "2018-12-",
            "2018--09",
            "-12-09",
            "2018-1-9",
            "2019-02-29",
            "2018-12-09T10:00:00",
            " 2018-12-09",
        ] {
            let err = parse_target_date(&text.into()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{text:?}");
        }
    }

    #[test]
    fn rejects_non_text_arguments() {
        for arg in [DateArg::from(11_i64), DateArg::from(2018.12_f64), DateArg::from(true)] {
            let err = parse_target_date(&arg).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "{arg:?}");
        }
    }
}
