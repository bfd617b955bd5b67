//! Restoration schedule for the absence tracker.
//!
//! Each trip's consumed days roll back onto the allowance 365 days after
//! that trip's return. The cumulative balance attached to each event is
//! accumulated in ledger (departure) order, seeded from the final ledger
//! balance, and the finished list is then re-sorted by restore date for
//! presentation. When restore order differs from departure order the
//! attached balance is therefore not the causal balance as of the event
//! date; it is a derived display value and callers must treat it as such.

use log::info;
use shared::{RestorationEvent, FULL_ALLOWANCE};

use crate::domain::models::LedgerEntry;

/// Display budget for "upcoming changes" views.
pub const UPCOMING_EVENTS_LIMIT: usize = 10;

/// Service responsible for the balance-restoration schedule
#[derive(Clone)]
pub struct RestorationService;

impl RestorationService {
    pub fn new() -> Self {
        Self
    }

    /// Build the full restoration schedule, sorted ascending by restore
    /// date. Two trips may legitimately restore on the same date; both are
    /// kept, in ledger order.
    pub fn build_schedule(&self, entries: &[LedgerEntry]) -> Vec<RestorationEvent> {
        let mut current_balance = entries
            .last()
            .map(|entry| entry.balance_after)
            .unwrap_or(FULL_ALLOWANCE);

        let mut events = Vec::with_capacity(entries.len());
        for entry in entries {
            current_balance += entry.trip.length();
            events.push(RestorationEvent {
                date: entry.trip.restore_date(),
                restored: entry.trip.length(),
                new_balance: current_balance,
                reason: format!("{} – {}", entry.trip.departure, entry.trip.return_date),
            });
        }

        events.sort_by(|a, b| a.date.cmp(&b.date));
        info!("Built restoration schedule with {} events", events.len());
        events
    }

    /// The first `UPCOMING_EVENTS_LIMIT` events of the schedule.
    pub fn upcoming(&self, schedule: &[RestorationEvent]) -> Vec<RestorationEvent> {
        schedule
            .iter()
            .take(UPCOMING_EVENTS_LIMIT)
            .cloned()
            .collect()
    }
}

impl Default for RestorationService {
    fn default() -> Self {
        Self::new()
    }
}
