//! Allowance ledger for the absence tracker.
//!
//! Consumes the normalized trip sequence chronologically, deducting each
//! trip's length from the fixed allowance and recording the balance after
//! every deduction. Restorations are computed separately and never feed
//! back into this running total.

use log::info;
use shared::FULL_ALLOWANCE;

use crate::domain::models::{LedgerEntry, Trip};

/// Service responsible for the running allowance balance
#[derive(Clone)]
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Build one ledger entry per trip by folding left to right over the
    /// departure-sorted sequence, seeded from the full allowance. No trip's
    /// balance depends on any trip after it.
    pub fn build(&self, trips: &[Trip]) -> Vec<LedgerEntry> {
        let mut running_balance = FULL_ALLOWANCE;
        let mut entries = Vec::with_capacity(trips.len());

        for trip in trips {
            running_balance -= trip.length();
            entries.push(LedgerEntry {
                trip: *trip,
                balance_after: running_balance,
            });
        }

        info!(
            "Built ledger for {} trips, final balance {}",
            entries.len(),
            running_balance
        );
        entries
    }

    /// Balance after the last trip; the full allowance when no trips exist.
    pub fn final_balance(&self, entries: &[LedgerEntry]) -> i64 {
        entries
            .last()
            .map(|entry| entry.balance_after)
            .unwrap_or(FULL_ALLOWANCE)
    }

    /// Diagnostic check that every stored balance matches a fresh fold.
    /// Returns one message per mismatch.
    pub fn validate_balances(&self, entries: &[LedgerEntry]) -> Vec<String> {
        let mut errors = Vec::new();
        let mut expected_balance = FULL_ALLOWANCE;

        for entry in entries {
            expected_balance -= entry.trip.length();
            if entry.balance_after != expected_balance {
                errors.push(format!(
                    "Trip departing {} has incorrect balance: expected {}, actual {}",
                    entry.trip.departure, expected_balance, entry.balance_after
                ));
            }
        }

        errors
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
