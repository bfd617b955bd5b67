//! Daily remaining-allowance series for the absence tracker.
//!
//! Expands the trip set into one point per calendar day over a projection
//! window. A day's consumption counts every occupied trip-day (strictly
//! between a trip's departure and return, with multiplicity across
//! overlapping trips) up to and including that day, wherever it falls;
//! restorations are never added back into this series.

use chrono::{Duration, NaiveDate};
use log::info;
use shared::{DailyPoint, FULL_ALLOWANCE};
use std::collections::BTreeMap;

use crate::domain::models::{Trip, RESTORATION_WINDOW_DAYS};

/// How the default projection window ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Through the latest trip return.
    History,
    /// Through the reference date plus the restoration window.
    LookAhead,
}

/// A closed calendar-day range to project over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProjectionRange {
    /// Default window for a trip set: earliest departure through either the
    /// latest return or the reference date plus 365 days. With no trips the
    /// window runs from the reference date over one restoration window.
    pub fn for_trips(trips: &[Trip], mode: ProjectionMode, reference_date: NaiveDate) -> Self {
        let look_ahead_end = reference_date + Duration::days(RESTORATION_WINDOW_DAYS);
        let earliest_departure = trips.iter().map(|t| t.departure).min();
        let latest_return = trips.iter().map(|t| t.return_date).max();
        match (earliest_departure, latest_return) {
            (Some(start), Some(latest_return)) => {
                let end = match mode {
                    ProjectionMode::History => latest_return,
                    ProjectionMode::LookAhead => look_ahead_end,
                };
                Self {
                    start,
                    end: end.max(start),
                }
            }
            _ => Self {
                start: reference_date,
                end: look_ahead_end,
            },
        }
    }
}

/// Service responsible for the day-granular allowance series
#[derive(Clone)]
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Produce one point per calendar day in the range. Occupied days are
    /// merged into a delta map so the walk is a prefix sum over the window
    /// rather than a per-day scan of every trip.
    pub fn project(&self, trips: &[Trip], range: ProjectionRange) -> Vec<DailyPoint> {
        let mut deltas: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        let mut consumed_before_window = 0i64;

        for trip in trips {
            let Some((first, last)) = trip.occupied_bounds() else {
                continue;
            };
            if last < range.start {
                consumed_before_window += trip.length();
                continue;
            }
            let clipped_first = first.max(range.start);
            consumed_before_window += (clipped_first - first).num_days();
            *deltas.entry(clipped_first).or_insert(0) += 1;
            *deltas.entry(last + Duration::days(1)).or_insert(0) -= 1;
        }

        let mut points = Vec::new();
        let mut active = 0i64;
        let mut consumed = consumed_before_window;
        let mut day = range.start;
        while day <= range.end {
            if let Some(delta) = deltas.get(&day) {
                active += delta;
            }
            consumed += active;
            points.push(DailyPoint {
                date: day,
                days_consumed: consumed,
                remaining: (FULL_ALLOWANCE - consumed).max(0),
            });
            day += Duration::days(1);
        }

        info!(
            "Projected {} daily points from {} to {}",
            points.len(),
            range.start,
            range.end
        );
        points
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
