use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of absence days available within the rolling window.
pub const FULL_ALLOWANCE: i64 = 180;

/// A raw input row as supplied by a collaborator (CSV upload, imported
/// sheet rows). Date fields are unparsed strings in day-first convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRow {
    /// Last day present domestically, e.g. "21/04/2024"
    #[serde(rename = "Departure")]
    pub departure: String,
    /// First day back domestically, e.g. "25/04/2024"
    #[serde(rename = "Return")]
    pub return_date: String,
}

/// One trip of the ordered history, with its length and the running
/// allowance balance attached. This is the tabular display contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Last day present domestically (inclusive boundary)
    pub departure: NaiveDate,
    /// First day back domestically (inclusive boundary)
    pub return_date: NaiveDate,
    /// Hypothetical trip added through the what-if form
    pub planned: bool,
    /// Full days strictly between departure and return
    pub length: i64,
    /// Allowance remaining immediately after this trip is deducted.
    /// May be negative (over-allowance).
    pub balance_after: i64,
}

/// A future point at which a past trip's consumed days re-enter the
/// allowance (365 days after that trip's return).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorationEvent {
    /// Date the days are restored
    pub date: NaiveDate,
    /// Number of days restored (the trip's length)
    pub restored: i64,
    /// Cumulative balance, accumulated in trip order and re-sorted by date
    /// for display. When restore order differs from trip order this is not
    /// the causal balance as of `date`; treat it as a derived display value.
    pub new_balance: i64,
    /// Human-readable origin of the restoration, "<departure> – <return>"
    pub reason: String,
}

/// One calendar day of the remaining-allowance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Occupied trip-days with date ≤ this point
    pub days_consumed: i64,
    /// `FULL_ALLOWANCE − days_consumed`, floored at zero
    pub remaining: i64,
}

/// Why an input row was excluded from the trip set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// `return ≤ departure`
    ReturnNotAfterDeparture,
    /// Departure date failed to parse (lenient mode only)
    UnparseableDeparture(String),
    /// Return date failed to parse (lenient mode only)
    UnparseableReturn(String),
}

/// A row excluded during normalization, reported rather than silently
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// Zero-based index of the row in the input sequence
    pub index: usize,
    pub reason: RejectionReason,
}

/// The full output of one computation pass: ordered trip history,
/// restoration schedule, daily remaining-allowance series, and the rows
/// excluded on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceReport {
    pub trips: Vec<TripRecord>,
    pub restorations: Vec<RestorationEvent>,
    pub daily_series: Vec<DailyPoint>,
    pub rejected_rows: Vec<RejectedRow>,
}

/// Balance classification for styling and display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// Balance is positive
    Within,
    /// Balance is exactly zero
    Exhausted,
    /// Balance is negative (over-allowance)
    Overspent,
}

/// A trip formatted for table display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTrip {
    pub formatted_departure: String,
    pub formatted_return: String,
    pub formatted_length: String,
    pub formatted_balance: String,
    pub balance_status: BalanceStatus,
    pub planned_label: String,
    pub raw_length: i64,
    pub raw_balance: i64,
}

impl TripRecord {
    /// Classify the running balance for display purposes.
    pub fn balance_status(&self) -> BalanceStatus {
        match self.balance_after {
            b if b > 0 => BalanceStatus::Within,
            0 => BalanceStatus::Exhausted,
            _ => BalanceStatus::Overspent,
        }
    }
}

impl AbsenceReport {
    /// Allowance remaining after the last trip, or the full allowance when
    /// the trip set is empty.
    pub fn final_balance(&self) -> i64 {
        self.trips
            .last()
            .map(|t| t.balance_after)
            .unwrap_or(FULL_ALLOWANCE)
    }

    /// Total absence days consumed across all trips.
    pub fn total_days_consumed(&self) -> i64 {
        self.trips.iter().map(|t| t.length).sum()
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::ReturnNotAfterDeparture => {
                write!(f, "return date is not after departure date")
            }
            RejectionReason::UnparseableDeparture(value) => {
                write!(f, "unparseable departure date '{}'", value)
            }
            RejectionReason::UnparseableReturn(value) => {
                write!(f, "unparseable return date '{}'", value)
            }
        }
    }
}
