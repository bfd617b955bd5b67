//! Trip table formatting for the absence tracker.
//!
//! Converts computed trip records into formatted, user-friendly table rows.
//! Pure presentation logic, independent of any UI framework; consumers pick
//! a configuration and render the strings as they see fit.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{BalanceStatus, FormattedTrip, TripRecord};

/// Configuration for trip table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripTableConfig {
    pub date_format: DateFormat,
    pub show_day_suffix: bool,
}

/// Date formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    /// "21/04/2024" (day-first, matching the input convention)
    DayMonthYear,
    /// "21 April 2024"
    LongDate,
    /// "2024-04-21"
    Iso,
}

/// Trip table service that handles all table-related formatting logic
#[derive(Clone)]
pub struct TripTableService {
    config: TripTableConfig,
}

impl TripTableService {
    /// Create a new TripTableService with default configuration
    pub fn new() -> Self {
        Self {
            config: TripTableConfig::default(),
        }
    }

    /// Create a new TripTableService with custom configuration
    pub fn with_config(config: TripTableConfig) -> Self {
        Self { config }
    }

    /// Format a list of trip records for table display
    pub fn format_trips_for_table(&self, trips: &[TripRecord]) -> Vec<FormattedTrip> {
        trips.iter().map(|trip| self.format_single_trip(trip)).collect()
    }

    /// Format a single trip record for display
    pub fn format_single_trip(&self, trip: &TripRecord) -> FormattedTrip {
        FormattedTrip {
            formatted_departure: self.format_date(trip.departure),
            formatted_return: self.format_date(trip.return_date),
            formatted_length: self.format_length(trip.length),
            formatted_balance: trip.balance_after.to_string(),
            balance_status: trip.balance_status(),
            planned_label: if trip.planned { "Planned" } else { "Abroad" }.to_string(),
            raw_length: trip.length,
            raw_balance: trip.balance_after,
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.config.date_format {
            DateFormat::DayMonthYear => {
                format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
            }
            DateFormat::LongDate => {
                format!("{} {} {}", date.day(), self.month_name(date.month()), date.year())
            }
            DateFormat::Iso => date.to_string(),
        }
    }

    /// Format a trip length for display
    pub fn format_length(&self, length: i64) -> String {
        if !self.config.show_day_suffix {
            return length.to_string();
        }
        match length {
            1 => "1 day".to_string(),
            n => format!("{} days", n),
        }
    }

    /// Get CSS class name for balance styling
    pub fn balance_css_class(&self, trip: &TripRecord) -> &'static str {
        match trip.balance_status() {
            BalanceStatus::Within => "balance within",
            BalanceStatus::Exhausted => "balance exhausted",
            BalanceStatus::Overspent => "balance overspent",
        }
    }

    /// Get human-readable month name
    fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }
}

impl Default for TripTableService {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TripTableConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::DayMonthYear,
            show_day_suffix: true,
        }
    }
}
