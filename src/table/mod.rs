//! Packet table
//!
//! Column-oriented view of captured packet summaries, as handed over by the
//! ingestion side. Only timestamp normalization mutates it.

pub mod cell;
pub mod error;
pub mod load;

pub use cell::Cell;
pub use error::{LoadError, TableError};
pub use load::{InputFormat, load_table};

use chrono::{DateTime, Utc};
use log::debug;

pub const TIMESTAMP: &str = "timestamp";
pub const PROTOCOL: &str = "protocol";
pub const SIZE: &str = "size";
pub const SOURCE: &str = "source";

/// One captured packet summary. The loaders build columns directly; records
/// are the row-wise way to assemble a table in tests.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PacketRecord {
    /// Epoch seconds.
    pub timestamp: f64,
    pub protocol: String,
    /// Byte count.
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// Ordered set of equally long named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PacketTable {
    columns: Vec<Column>,
}

impl PacketTable {
    /// Builds a table from columns, padding short ones with missing cells so
    /// every column has the same length.
    pub fn from_columns(mut columns: Vec<Column>) -> Self {
        let len = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        for column in &mut columns {
            column.cells.resize(len, Cell::Missing);
        }
        Self { columns }
    }

    /// The `source` column exists when at least one record carries a source.
    #[cfg(test)]
    pub fn from_records(records: &[PacketRecord]) -> Self {
        let mut columns = vec![
            Column::new(
                TIMESTAMP,
                records.iter().map(|r| Cell::Number(r.timestamp)).collect(),
            ),
            Column::new(
                PROTOCOL,
                records.iter().map(|r| Cell::from(r.protocol.as_str())).collect(),
            ),
            Column::new(SIZE, records.iter().map(|r| Cell::Number(r.size)).collect()),
        ];
        if records.iter().any(|r| r.source.is_some()) {
            columns.push(Column::new(
                SOURCE,
                records.iter().map(|r| Cell::from(r.source.as_deref())).collect(),
            ));
        }
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Converts the `timestamp` column from epoch seconds to date-times in
    /// place and drops every row whose timestamp does not convert.
    ///
    /// Returns the number of dropped rows. Fails when the column is absent or
    /// when no row of a non-empty table survives.
    pub fn normalize_timestamps(&mut self) -> Result<usize, TableError> {
        let converted: Vec<Option<DateTime<Utc>>> = self
            .column(TIMESTAMP)?
            .cells
            .iter()
            .map(Cell::to_epoch_datetime)
            .collect();

        let total = converted.len();
        let keep: Vec<bool> = converted.iter().map(Option::is_some).collect();
        let dropped = keep.iter().filter(|k| !**k).count();
        if total > 0 && dropped == total {
            return Err(TableError::NoValidTimestamps(total));
        }

        for column in &mut self.columns {
            if column.name == TIMESTAMP {
                column.cells = converted.iter().flatten().map(|ts| Cell::Timestamp(*ts)).collect();
            } else {
                let mut flags = keep.iter();
                column.cells.retain(|_| flags.next().copied().unwrap_or(false));
            }
        }

        if dropped > 0 {
            debug!("Dropped {} of {} rows with unconvertible timestamps", dropped, total);
        }
        Ok(dropped)
    }

    /// Timestamps of a normalized table. Cells that are not date-times yet are
    /// converted on the fly and skipped when they do not convert.
    pub fn timestamps(&self) -> Result<Vec<DateTime<Utc>>, TableError> {
        Ok(self
            .column(TIMESTAMP)?
            .cells
            .iter()
            .filter_map(Cell::to_epoch_datetime)
            .collect())
    }

    /// Categorical view of a column, one entry per row.
    pub fn labels(&self, name: &str) -> Result<Vec<Option<String>>, TableError> {
        Ok(self.column(name)?.cells.iter().map(Cell::as_label).collect())
    }

    /// Numeric view of a column, one entry per row. Missing and NaN cells are
    /// `None`; text that does not parse is an error.
    pub fn numbers(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        self.column(name)?
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                cell.as_number().map_err(|value| TableError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: f64, protocol: &str, size: f64, source: Option<&str>) -> PacketRecord {
        PacketRecord {
            timestamp,
            protocol: protocol.to_string(),
            size,
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn test_source_column_only_when_present() {
        let without = PacketTable::from_records(&[record(0.0, "TCP", 10.0, None)]);
        assert!(!without.has_column(SOURCE));

        let with = PacketTable::from_records(&[
            record(0.0, "TCP", 10.0, None),
            record(1.0, "UDP", 20.0, Some("10.0.0.1")),
        ]);
        assert!(with.has_column(SOURCE));
        assert_eq!(
            with.labels(SOURCE).unwrap(),
            vec![None, Some("10.0.0.1".to_string())]
        );
    }

    #[test]
    fn test_from_columns_pads_short_columns() {
        let table = PacketTable::from_columns(vec![
            Column::new(TIMESTAMP, vec![Cell::Number(0.0), Cell::Number(1.0)]),
            Column::new(PROTOCOL, vec![Cell::from("TCP")]),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.labels(PROTOCOL).unwrap(), vec![Some("TCP".into()), None]);
    }

    #[test]
    fn test_normalize_drops_bad_rows_from_every_column() {
        let mut table = PacketTable::from_columns(vec![
            Column::new(
                TIMESTAMP,
                vec![Cell::Number(0.0), Cell::from("later"), Cell::Number(2.5)],
            ),
            Column::new(
                PROTOCOL,
                vec![Cell::from("TCP"), Cell::from("UDP"), Cell::from("ICMP")],
            ),
        ]);

        let dropped = table.normalize_timestamps().unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.labels(PROTOCOL).unwrap(),
            vec![Some("TCP".into()), Some("ICMP".into())]
        );
        assert!(
            table
                .column(TIMESTAMP)
                .unwrap()
                .cells
                .iter()
                .all(|c| matches!(c, Cell::Timestamp(_)))
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut table = PacketTable::from_records(&[record(3.0, "TCP", 1.0, None)]);
        table.normalize_timestamps().unwrap();
        let once = table.clone();
        assert_eq!(table.normalize_timestamps().unwrap(), 0);
        assert_eq!(table, once);
    }

    #[test]
    fn test_normalize_requires_timestamp_column() {
        let mut table =
            PacketTable::from_columns(vec![Column::new(PROTOCOL, vec![Cell::from("TCP")])]);
        assert!(matches!(
            table.normalize_timestamps(),
            Err(TableError::MissingColumn(name)) if name == TIMESTAMP
        ));
    }

    #[test]
    fn test_normalize_fails_when_every_row_fails() {
        let mut table = PacketTable::from_columns(vec![
            Column::new(TIMESTAMP, vec![Cell::from("a"), Cell::Missing]),
            Column::new(PROTOCOL, vec![Cell::from("TCP"), Cell::from("UDP")]),
        ]);
        assert!(matches!(
            table.normalize_timestamps(),
            Err(TableError::NoValidTimestamps(2))
        ));
        // The table is left untouched on failure.
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_numbers_reports_non_numeric_cells() {
        let table = PacketTable::from_columns(vec![Column::new(
            SIZE,
            vec![Cell::Number(1.0), Cell::from("42"), Cell::Missing, Cell::from("big")],
        )]);
        match table.numbers(SIZE) {
            Err(TableError::NonNumeric { row, value, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "big");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_numbers_parses_numeric_text() {
        let table = PacketTable::from_columns(vec![Column::new(
            SIZE,
            vec![Cell::from("42"), Cell::Missing],
        )]);
        assert_eq!(table.numbers(SIZE).unwrap(), vec![Some(42.0), None]);
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{"timestamp": 1.5, "protocol": "TCP", "size": 60}"#;
        let parsed: PacketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, record(1.5, "TCP", 60.0, None));
    }
}
