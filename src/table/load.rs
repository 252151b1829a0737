//! Table ingestion from CSV and JSON files.

use super::{Cell, Column, LoadError, PacketTable};
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, clap::ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON, everything else is treated as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Loads a table from `path`, guessing the format from the extension when
/// `format` is not given.
pub fn load_table(path: &Path, format: Option<InputFormat>) -> Result<PacketTable, LoadError> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let file = File::open(path)?;
    let table = match format {
        InputFormat::Csv => read_csv(file)?,
        InputFormat::Json => read_json(file)?,
    };
    info!(
        "Loaded {} rows from {} ({})",
        table.len(),
        path.display(),
        format
    );
    debug!("Columns: {}", table.column_names().collect::<Vec<_>>().join(", "));
    Ok(table)
}

/// Reads CSV with a header row. Empty fields are missing values.
pub fn read_csv<R: Read>(reader: R) -> Result<PacketTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut columns: Vec<Column> = reader
        .headers()?
        .iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record?;
        for (i, column) in columns.iter_mut().enumerate() {
            column.cells.push(record.get(i).map(Cell::parse).unwrap_or(Cell::Missing));
        }
    }

    Ok(PacketTable::from_columns(columns))
}

/// Reads a JSON array of row objects. Columns are the union of keys in the
/// order they are first seen.
pub fn read_json<R: Read>(reader: R) -> Result<PacketTable, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    let rows = match value {
        Value::Array(rows) => rows,
        other => return Err(LoadError::NotRowArray(json_kind(&other).to_string())),
    };

    let mut columns: Vec<Column> = Vec::new();
    for (row, item) in rows.iter().enumerate() {
        let object = item
            .as_object()
            .ok_or_else(|| LoadError::NotRowArray(format!("{} at row {}", json_kind(item), row)))?;

        for (key, value) in object {
            let index = match columns.iter().position(|c| &c.name == key) {
                Some(index) => index,
                None => {
                    columns.push(Column::new(key.as_str(), vec![Cell::Missing; row]));
                    columns.len() - 1
                }
            };
            columns[index].cells.push(json_cell(value));
        }

        for column in &mut columns {
            if column.cells.len() < row + 1 {
                column.cells.push(Cell::Missing);
            }
        }
    }

    Ok(PacketTable::from_columns(columns))
}

fn json_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Missing,
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Missing),
        Value::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
