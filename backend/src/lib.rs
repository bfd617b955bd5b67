//! # Absence Tracker Backend
//!
//! Computation core for tracking compliance with the rolling-window
//! absence rule: a fixed allowance of 180 absence days, each trip's spent
//! days returning to the balance 365 days after that trip's return.
//!
//! The backend is a stateless pipeline. Collaborating presentation layers
//! hand it raw (departure, return) rows, optionally layer one hypothetical
//! trip on top, and read back the ordered trip history, the restoration
//! schedule, and the daily remaining-allowance series as `shared` DTOs.
//! Every run recomputes everything from the supplied inputs; the reference
//! date is injected so identical inputs always produce identical outputs.

pub mod domain;
pub mod io;

use anyhow::Context;
use log::info;
use shared::{AbsenceReport, TripRow};
use std::path::Path;

use crate::domain::commands::report::AbsenceReportQuery;
use crate::domain::errors::InputError;
use crate::domain::ledger_service::LedgerService;
use crate::domain::projection_service::{ProjectionRange, ProjectionService};
use crate::domain::restoration_service::RestorationService;
use crate::domain::trip_service::TripService;
use crate::domain::trip_table::TripTableService;
use crate::io::mappers::TripMapper;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub trip_service: TripService,
    pub ledger_service: LedgerService,
    pub restoration_service: RestorationService,
    pub projection_service: ProjectionService,
    pub trip_table_service: TripTableService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new() -> Self {
        Self {
            trip_service: TripService::new(),
            ledger_service: LedgerService::new(),
            restoration_service: RestorationService::new(),
            projection_service: ProjectionService::new(),
            trip_table_service: TripTableService::new(),
        }
    }

    /// Run one full computation pass over the supplied rows.
    ///
    /// Row-level problems (invalid intervals, lenient-mode date failures)
    /// are reported in the result; shape problems with the input as a whole
    /// abort the run with a typed error and no partial output.
    pub fn compute_report(
        &self,
        rows: &[TripRow],
        query: &AbsenceReportQuery,
    ) -> Result<AbsenceReport, InputError> {
        let import = self.trip_service.import_rows(rows, query.parsing)?;

        let trips = match &query.planned_trip {
            Some(command) => self.trip_service.with_planned_trip(import.trips, command),
            None => import.trips,
        };

        let entries = self.ledger_service.build(&trips);
        let restorations = self.restoration_service.build_schedule(&entries);

        let range = ProjectionRange::for_trips(&trips, query.projection, query.reference_date);
        let daily_series = self.projection_service.project(&trips, range);

        info!(
            "Computed report: {} trips, {} restorations, {} daily points",
            entries.len(),
            restorations.len(),
            daily_series.len()
        );

        Ok(AbsenceReport {
            trips: entries.iter().map(TripMapper::to_record).collect(),
            restorations,
            daily_series,
            rejected_rows: import.rejected,
        })
    }

    /// Convenience entry point: read the rows from a CSV file on disk and
    /// run the full pipeline over them.
    pub fn compute_report_from_csv_path<P: AsRef<Path>>(
        &self,
        path: P,
        query: &AbsenceReportQuery,
    ) -> anyhow::Result<AbsenceReport> {
        let path = path.as_ref();
        let rows = io::csv::read_trip_rows_from_path(path)
            .with_context(|| format!("failed to read trip rows from {}", path.display()))?;
        self.compute_report(&rows, query)
            .with_context(|| format!("failed to compute report from {}", path.display()))
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::trips::AddPlannedTripCommand;
    use crate::domain::projection_service::ProjectionMode;
    use crate::domain::trip_service::DateParsing;
    use chrono::NaiveDate;
    use shared::{RejectionReason, FULL_ALLOWANCE};
    use std::io::Write;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn row(departure: &str, return_date: &str) -> TripRow {
        TripRow {
            departure: departure.to_string(),
            return_date: return_date.to_string(),
        }
    }

    fn query() -> AbsenceReportQuery {
        AbsenceReportQuery {
            parsing: DateParsing::Strict,
            planned_trip: None,
            reference_date: date("2024-02-01"),
            projection: ProjectionMode::LookAhead,
        }
    }

    #[test]
    fn test_full_pipeline() {
        let backend = Backend::new();
        let rows = [
            row("20/01/2024", "30/01/2024"),
            row("01/01/2024", "11/01/2024"),
        ];
        let report = backend.compute_report(&rows, &query()).unwrap();

        // Trip history, re-sorted by departure with running balances.
        assert_eq!(report.trips.len(), 2);
        assert_eq!(report.trips[0].departure, date("2024-01-01"));
        assert_eq!(report.trips[0].length, 9);
        assert_eq!(report.trips[0].balance_after, 171);
        assert_eq!(report.trips[1].length, 9);
        assert_eq!(report.trips[1].balance_after, 162);
        assert_eq!(report.final_balance(), 162);

        // Restoration schedule, 365 days after each return.
        assert_eq!(report.restorations.len(), 2);
        assert_eq!(report.restorations[0].date, date("2025-01-10"));
        assert_eq!(report.restorations[0].new_balance, 171);
        assert_eq!(report.restorations[1].date, date("2025-01-29"));
        assert_eq!(report.restorations[1].new_balance, 180);
        assert_eq!(report.restorations[0].reason, "2024-01-01 – 2024-01-11");

        // Daily series runs out to the reference date plus a year.
        let last = report.daily_series.last().unwrap();
        assert_eq!(last.date, date("2025-01-31"));
        assert_eq!(last.remaining, 162);
        assert!(report.rejected_rows.is_empty());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let backend = Backend::new();
        let rows = [
            row("21/04/2024", "25/04/2024"),
            row("01/01/2024", "11/01/2024"),
        ];

        let first = backend.compute_report(&rows, &query()).unwrap();
        let second = backend.compute_report(&rows, &query()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_planned_trip_is_layered_onto_history() {
        let backend = Backend::new();
        let mut q = query();
        q.planned_trip = Some(AddPlannedTripCommand {
            departure: date("2024-06-01"),
            return_date: date("2024-06-06"),
        });

        let report = backend
            .compute_report(&[row("21/04/2024", "25/04/2024")], &q)
            .unwrap();
        assert_eq!(report.trips.len(), 2);
        assert!(!report.trips[0].planned);
        assert!(report.trips[1].planned);
        assert_eq!(report.trips[1].length, 4);
        assert_eq!(report.final_balance(), 173);
        assert_eq!(report.restorations.len(), 2);
    }

    #[test]
    fn test_invalid_planned_trip_leaves_history_unchanged() {
        let backend = Backend::new();
        let mut q = query();
        q.planned_trip = Some(AddPlannedTripCommand {
            departure: date("2024-06-06"),
            return_date: date("2024-06-01"),
        });

        let report = backend
            .compute_report(&[row("21/04/2024", "25/04/2024")], &q)
            .unwrap();
        assert_eq!(report.trips.len(), 1);
        assert_eq!(report.final_balance(), 177);
    }

    #[test]
    fn test_rejected_rows_are_reported() {
        let backend = Backend::new();
        let rows = [
            row("21/04/2024", "25/04/2024"),
            row("25/04/2024", "21/04/2024"),
        ];
        let report = backend.compute_report(&rows, &query()).unwrap();

        assert_eq!(report.trips.len(), 1);
        assert_eq!(report.rejected_rows.len(), 1);
        assert_eq!(report.rejected_rows[0].index, 1);
        assert_eq!(
            report.rejected_rows[0].reason,
            RejectionReason::ReturnNotAfterDeparture
        );
    }

    #[test]
    fn test_empty_rows_are_a_fatal_shape_error() {
        let backend = Backend::new();
        assert!(matches!(
            backend.compute_report(&[], &query()),
            Err(InputError::EmptySource)
        ));
    }

    #[test]
    fn test_all_rows_rejected_yields_full_allowance_outputs() {
        let backend = Backend::new();
        let report = backend
            .compute_report(&[row("25/04/2024", "21/04/2024")], &query())
            .unwrap();

        assert!(report.trips.is_empty());
        assert!(report.restorations.is_empty());
        assert_eq!(report.final_balance(), FULL_ALLOWANCE);
        assert!(report
            .daily_series
            .iter()
            .all(|p| p.remaining == FULL_ALLOWANCE));
        assert_eq!(report.rejected_rows.len(), 1);
    }

    #[test]
    fn test_csv_file_feeds_the_pipeline() {
        let backend = Backend::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "Departure,Return\n01/01/2024,11/01/2024\n20/01/2024,30/01/2024\n"
        )
        .unwrap();

        let report = backend.compute_report_from_csv_path(&path, &query()).unwrap();
        assert_eq!(report.trips.len(), 2);
        assert_eq!(report.final_balance(), 162);

        let table = backend.trip_table_service.format_trips_for_table(&report.trips);
        assert_eq!(table[0].formatted_departure, "01/01/2024");
        assert_eq!(table[0].formatted_length, "9 days");
        assert_eq!(table[1].formatted_balance, "162");
    }

    #[test]
    fn test_report_serializes_for_collaborators() {
        let backend = Backend::new();
        let report = backend
            .compute_report(&[row("21/04/2024", "25/04/2024")], &query())
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["trips"][0]["balance_after"], 177);
        assert_eq!(json["restorations"][0]["restored"], 3);
        assert_eq!(json["daily_series"][0]["remaining"], 180);
    }
}
