//! Domain model for a trip.
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days after a trip's return at which its consumed days re-enter the
/// allowance.
pub const RESTORATION_WINDOW_DAYS: i64 = 365;

/// One continuous interval spent outside the home jurisdiction. Both
/// boundary days count as domestic presence: `departure` is the last day at
/// home, `return_date` the first day back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub departure: NaiveDate,
    pub return_date: NaiveDate,
    /// Hypothetical trip layered onto the history; affects presentation
    /// only, never the computation.
    pub planned: bool,
}

impl Trip {
    /// A historical trip. Callers must have validated
    /// `return_date > departure`; the normalizer rejects rows that do not.
    pub fn new(departure: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            departure,
            return_date,
            planned: false,
        }
    }

    /// A hypothetical what-if trip.
    pub fn planned(departure: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            departure,
            return_date,
            planned: true,
        }
    }

    /// Whether the pair forms a valid interval (`return` strictly after
    /// `departure`).
    pub fn is_valid_interval(departure: NaiveDate, return_date: NaiveDate) -> bool {
        return_date > departure
    }

    /// Count of full days strictly between departure and return. Zero for a
    /// next-day turnaround; never negative for a valid trip.
    pub fn length(&self) -> i64 {
        (self.return_date - self.departure).num_days() - 1
    }

    /// The date this trip's consumed days roll back onto the allowance.
    pub fn restore_date(&self) -> NaiveDate {
        self.return_date + Duration::days(RESTORATION_WINDOW_DAYS)
    }

    /// First and last occupied day (the closed form of the open interval
    /// strictly between the boundaries), or `None` for a zero-length trip.
    pub fn occupied_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.length() == 0 {
            return None;
        }
        Some((
            self.departure + Duration::days(1),
            self.return_date - Duration::days(1),
        ))
    }
}
