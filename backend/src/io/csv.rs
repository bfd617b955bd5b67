//! CSV input adapter.
//!
//! Reads `Departure`/`Return` rows out of a CSV source. This is the whole
//! extent of the adapter: date parsing and interval validation belong to
//! the normalizer, which also decides what to do with bad rows.

use csv::Reader;
use log::info;
use shared::TripRow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::errors::InputError;

pub const DEPARTURE_COLUMN: &str = "Departure";
pub const RETURN_COLUMN: &str = "Return";

/// Read all trip rows from a CSV source. Both required columns must be
/// present in the header and the source must contain at least one data row;
/// anything else is a fatal input-shape error.
pub fn read_trip_rows<R: Read>(reader: R) -> Result<Vec<TripRow>, InputError> {
    let mut csv_reader = Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let departure_index = column_index(&headers, DEPARTURE_COLUMN)?;
    let return_index = column_index(&headers, RETURN_COLUMN)?;

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(TripRow {
            departure: record.get(departure_index).unwrap_or("").to_string(),
            return_date: record.get(return_index).unwrap_or("").to_string(),
        });
    }

    if rows.is_empty() {
        return Err(InputError::EmptySource);
    }

    info!("Read {} trip rows from CSV source", rows.len());
    Ok(rows)
}

/// Read all trip rows from a CSV file on disk.
pub fn read_trip_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TripRow>, InputError> {
    let file = File::open(path)?;
    read_trip_rows(BufReader::new(file))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| InputError::MissingColumn {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_trip_rows() {
        let data = "Departure,Return\n21/04/2024,25/04/2024\n01/01/2024,11/01/2024\n";
        let rows = read_trip_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].departure, "21/04/2024");
        assert_eq!(rows[0].return_date, "25/04/2024");
        assert_eq!(rows[1].departure, "01/01/2024");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "Notes,Departure,Return\nski trip,21/04/2024,25/04/2024\n";
        let rows = read_trip_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].departure, "21/04/2024");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let data = "Departure,Back\n21/04/2024,25/04/2024\n";
        let error = read_trip_rows(data.as_bytes()).unwrap_err();
        match error {
            InputError::MissingColumn { name } => assert_eq!(name, RETURN_COLUMN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_source_is_fatal() {
        let data = "Departure,Return\n";
        assert!(matches!(
            read_trip_rows(data.as_bytes()),
            Err(InputError::EmptySource)
        ));
    }

    #[test]
    fn test_read_trip_rows_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "Departure,Return\n21/04/2024,25/04/2024\n").unwrap();

        let rows = read_trip_rows_from_path(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].return_date, "25/04/2024");
    }
}
