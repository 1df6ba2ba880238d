use std::borrow::Cow;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The collections the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    Department,
    Document,
    Equipment,
    CalibrationProgram,
    User,
    Audit,
}

impl DomainKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainKind::Department => "department",
            DomainKind::Document => "document",
            DomainKind::Equipment => "equipment",
            DomainKind::CalibrationProgram => "calibration_program",
            DomainKind::User => "user",
            DomainKind::Audit => "audit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DomainKind::Department => "Departments",
            DomainKind::Document => "Documents",
            DomainKind::Equipment => "Equipment",
            DomainKind::CalibrationProgram => "Calibration",
            DomainKind::User => "Users",
            DomainKind::Audit => "Audits",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed view of one named field, used for filtering and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Instant(NaiveDateTime),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    /// Dates are compared as instants at midnight.
    pub fn date(value: NaiveDate) -> Self {
        FieldValue::Instant(value.and_time(NaiveTime::MIN))
    }

    /// Exact match against a filter value coming from a UI control.
    ///
    /// Numbers and instants parse the expected value first; anything that
    /// does not parse is a non-match.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.as_ref() == expected,
            FieldValue::Number(number) => expected
                .trim()
                .parse::<f64>()
                .map(|parsed| parsed == *number)
                .unwrap_or(false),
            FieldValue::Instant(instant) => {
                parse_instant(expected).is_some_and(|parsed| parsed == *instant)
            }
        }
    }
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(instant) = value.parse::<NaiveDateTime>() {
        return Some(instant);
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// One item of a domain collection.
pub trait Record {
    const KIND: DomainKind;

    fn id(&self) -> &str;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Named field lookup; `None` when the type has no such field or the
    /// value is absent for this record.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Column projection shared by the table view and CSV export.
pub trait TableRow {
    fn columns() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

pub(crate) fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub(crate) fn format_instant(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_matches_exactly() {
        let value = FieldValue::text("draft");
        assert!(value.matches("draft"));
        assert!(!value.matches("Draft"));
        assert!(!value.matches("dra"));
    }

    #[test]
    fn number_matches_parsed_value() {
        let value = FieldValue::Number(512.0);
        assert!(value.matches("512"));
        assert!(value.matches(" 512.0 "));
        assert!(!value.matches("abc"));
    }

    #[test]
    fn instant_accepts_date_or_datetime() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let value = FieldValue::date(date);
        assert!(value.matches("2024-03-01"));
        assert!(value.matches("2024-03-01T00:00:00"));
        assert!(!value.matches("2024-03-02"));
        assert!(!value.matches("yesterday"));
    }

    #[test]
    fn parse_instant_rejects_garbage() {
        assert!(parse_instant("").is_none());
        assert!(parse_instant("2024-13-01").is_none());
        assert!(parse_instant("2024-01-05T08:30:00").is_some());
    }
}
