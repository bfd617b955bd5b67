//! Trip normalization for the absence tracker.
//!
//! Turns raw (departure, return) rows from any source into a canonical
//! trip sequence sorted ascending by departure. Rows that fail validation
//! are excluded one by one and reported back to the caller; shape problems
//! with the input as a whole are fatal.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{RejectedRow, RejectionReason, TripRow};

use crate::domain::commands::trips::{AddPlannedTripCommand, TripImportResult};
use crate::domain::errors::InputError;
use crate::domain::models::Trip;

/// How unparseable dates are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParsing {
    /// Any unparseable date aborts the run.
    Strict,
    /// Rows with unparseable dates are excluded and reported.
    Lenient,
}

/// Accepted date formats, day-first convention. Unambiguous ISO dates are
/// also accepted.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Service responsible for validating and ordering raw trip input
#[derive(Clone)]
pub struct TripService;

impl TripService {
    pub fn new() -> Self {
        Self
    }

    /// Parse and validate raw rows into a sorted trip sequence.
    ///
    /// An empty input is a shape error: the caller supplied no data, which
    /// is different from a set that becomes empty after row filtering.
    pub fn import_rows(
        &self,
        rows: &[TripRow],
        parsing: DateParsing,
    ) -> Result<TripImportResult, InputError> {
        if rows.is_empty() {
            return Err(InputError::EmptySource);
        }

        let mut trips = Vec::with_capacity(rows.len());
        let mut rejected = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let departure = match Self::parse_day_first(&row.departure) {
                Some(date) => date,
                None => match parsing {
                    DateParsing::Strict => {
                        return Err(InputError::UnparseableDate {
                            row: index,
                            value: row.departure.clone(),
                        })
                    }
                    DateParsing::Lenient => {
                        rejected.push(RejectedRow {
                            index,
                            reason: RejectionReason::UnparseableDeparture(row.departure.clone()),
                        });
                        continue;
                    }
                },
            };
            let return_date = match Self::parse_day_first(&row.return_date) {
                Some(date) => date,
                None => match parsing {
                    DateParsing::Strict => {
                        return Err(InputError::UnparseableDate {
                            row: index,
                            value: row.return_date.clone(),
                        })
                    }
                    DateParsing::Lenient => {
                        rejected.push(RejectedRow {
                            index,
                            reason: RejectionReason::UnparseableReturn(row.return_date.clone()),
                        });
                        continue;
                    }
                },
            };

            if !Trip::is_valid_interval(departure, return_date) {
                warn!(
                    "Rejecting row {}: return {} is not after departure {}",
                    index, return_date, departure
                );
                rejected.push(RejectedRow {
                    index,
                    reason: RejectionReason::ReturnNotAfterDeparture,
                });
                continue;
            }

            trips.push(Trip::new(departure, return_date));
        }

        let trips = self.normalize(trips);
        info!(
            "Normalized {} trips ({} rows rejected)",
            trips.len(),
            rejected.len()
        );

        Ok(TripImportResult { trips, rejected })
    }

    /// Sort trips ascending by departure. The sort is stable: same-day
    /// departures keep their input order.
    pub fn normalize(&self, mut trips: Vec<Trip>) -> Vec<Trip> {
        trips.sort_by(|a, b| a.departure.cmp(&b.departure));
        trips
    }

    /// Layer a hypothetical trip onto the set. The trip is appended only if
    /// its departure strictly precedes its return; an inverted or zero-width
    /// pair leaves the set unchanged.
    pub fn with_planned_trip(
        &self,
        trips: Vec<Trip>,
        command: &AddPlannedTripCommand,
    ) -> Vec<Trip> {
        if !Trip::is_valid_interval(command.departure, command.return_date) {
            info!(
                "Dropping planned trip: departure {} does not precede return {}",
                command.departure, command.return_date
            );
            return trips;
        }
        let mut trips = trips;
        trips.push(Trip::planned(command.departure, command.return_date));
        self.normalize(trips)
    }

    /// Parse a date string in day-first convention.
    pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    }
}

impl Default for TripService {
    fn default() -> Self {
        Self::new()
    }
}
