//! Table cells and their coercions

use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// A single value of a [`super::PacketTable`] column.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Missing,
}

impl Cell {
    /// Reads a raw text field the way a loader sees it: empty fields and NA
    /// markers are missing, anything that parses as a float is a number.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_na_marker(trimmed) {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Cell::from(n),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    /// Numeric view of the cell. `Ok(None)` is a missing value; `Err` carries
    /// the text of a cell that is not a number.
    pub fn as_number(&self) -> Result<Option<f64>, String> {
        match self {
            Cell::Number(n) if n.is_nan() => Ok(None),
            Cell::Number(n) => Ok(Some(*n)),
            Cell::Missing => Ok(None),
            Cell::Text(s) if is_na_marker(s.trim()) => Ok(None),
            Cell::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_nan() => Ok(None),
                Ok(n) => Ok(Some(n)),
                Err(_) => Err(s.clone()),
            },
            Cell::Timestamp(ts) => Err(ts.to_rfc3339()),
        }
    }

    /// Interprets the cell as epoch seconds. `None` means the row is dropped.
    pub fn to_epoch_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Cell::Number(secs) => epoch_seconds_to_datetime(*secs),
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(epoch_seconds_to_datetime),
            Cell::Timestamp(ts) => Some(*ts),
            Cell::Missing => None,
        }
    }

    /// Categorical view used for protocol and source labels.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            Cell::Number(n) if n.is_nan() => None,
            Cell::Text(s) if is_na_marker(s.trim()) => None,
            other => Some(other.to_string()),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f")),
            Cell::Missing => write!(f, ""),
        }
    }
}

/// NaN is a missing value.
impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        if n.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(n)
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<Option<&str>> for Cell {
    fn from(s: Option<&str>) -> Self {
        s.map(Cell::from).unwrap_or(Cell::Missing)
    }
}

/// Field contents read as a missing value.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_na_marker(field: &str) -> bool {
    NA_MARKERS.contains(&field)
}

/// Converts fractional epoch seconds, keeping sub-second precision.
pub fn epoch_seconds_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_fields() {
        assert_eq!(Cell::parse(""), Cell::Missing);
        assert_eq!(Cell::parse("  "), Cell::Missing);
        assert_eq!(Cell::parse("1.5"), Cell::Number(1.5));
        assert_eq!(Cell::parse("TCP"), Cell::Text("TCP".to_string()));
        assert_eq!(
            Cell::parse("10.0.0.1"),
            Cell::Text("10.0.0.1".to_string())
        );
    }

    #[test]
    fn test_nan_and_na_markers_are_missing() {
        for raw in ["NaN", "nan", " NA ", "N/A", "null", "<NA>"] {
            assert_eq!(Cell::parse(raw), Cell::Missing, "{raw:?}");
        }
        assert_eq!(Cell::from(f64::NAN), Cell::Missing);
        assert_eq!(Cell::Number(f64::NAN).as_label(), None);
        assert_eq!(Cell::Text("NaN".into()).as_label(), None);
        assert_eq!(Cell::Number(f64::NAN).as_number(), Ok(None));
        assert_eq!(Cell::Text("nan".into()).as_number(), Ok(None));
        // Infinity stays a number
        assert_eq!(Cell::parse("inf"), Cell::Number(f64::INFINITY));
    }

    #[test]
    fn test_as_number_reports_text() {
        assert_eq!(Cell::Text(" 42 ".into()).as_number(), Ok(Some(42.0)));
        assert_eq!(Cell::Text("big".into()).as_number(), Err("big".to_string()));
        assert_eq!(Cell::Missing.as_number(), Ok(None));
    }

    #[test]
    fn test_epoch_conversion_keeps_fraction() {
        let ts = Cell::Number(1.25).to_epoch_datetime().unwrap();
        assert_eq!(ts.timestamp(), 1);
        assert_eq!(ts.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_epoch_conversion_rejects_garbage() {
        assert_eq!(Cell::Text("yesterday".into()).to_epoch_datetime(), None);
        assert_eq!(Cell::Missing.to_epoch_datetime(), None);
        assert_eq!(Cell::Number(f64::NAN).to_epoch_datetime(), None);
        assert_eq!(Cell::Number(f64::INFINITY).to_epoch_datetime(), None);
        assert_eq!(Cell::Number(1e300).to_epoch_datetime(), None);
    }

    #[test]
    fn test_numeric_text_timestamp_converts() {
        let ts = Cell::Text(" 60 ".into()).to_epoch_datetime().unwrap();
        assert_eq!(ts.timestamp(), 60);
    }

    #[test]
    fn test_negative_epoch_floors() {
        let ts = epoch_seconds_to_datetime(-0.5).unwrap();
        assert_eq!(ts.timestamp(), -1);
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Cell::Number(6.0).as_label().as_deref(), Some("6"));
        assert_eq!(Cell::Text("UDP".into()).as_label().as_deref(), Some("UDP"));
        assert_eq!(Cell::Missing.as_label(), None);
    }
}
