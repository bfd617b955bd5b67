//! Domain-level command and query types.
//! These structs are used by services inside the domain layer. Presentation
//! collaborators exchange the public DTOs defined in the `shared` crate; the
//! orchestrator maps between the two.

pub mod trips {
    use chrono::NaiveDate;
    use shared::RejectedRow;

    use crate::domain::models::Trip;

    /// A hypothetical trip from the what-if form. Appended to the working
    /// set only when `departure` strictly precedes `return_date`; silently
    /// dropped otherwise.
    #[derive(Debug, Clone, Copy)]
    pub struct AddPlannedTripCommand {
        pub departure: NaiveDate,
        pub return_date: NaiveDate,
    }

    /// Result of normalizing raw input rows.
    #[derive(Debug, Clone)]
    pub struct TripImportResult {
        /// Accepted trips, sorted ascending by departure (stable among
        /// same-day departures).
        pub trips: Vec<Trip>,
        /// Rows excluded during normalization, in input order.
        pub rejected: Vec<RejectedRow>,
    }
}

pub mod report {
    use chrono::NaiveDate;

    use super::trips::AddPlannedTripCommand;
    use crate::domain::projection_service::ProjectionMode;
    use crate::domain::trip_service::DateParsing;

    /// Knobs for one full computation pass; the rows themselves travel
    /// alongside the query.
    #[derive(Debug, Clone)]
    pub struct AbsenceReportQuery {
        pub parsing: DateParsing,
        pub planned_trip: Option<AddPlannedTripCommand>,
        /// Injected "today"; the core never reads the wall clock.
        pub reference_date: NaiveDate,
        pub projection: ProjectionMode,
    }
}
