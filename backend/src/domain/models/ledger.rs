//! Domain model for a ledger entry.
use serde::{Deserialize, Serialize};

use super::trip::Trip;

/// One trip of the chronological ledger together with the allowance
/// remaining immediately after it was deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub trip: Trip,
    /// Running balance after this trip. Negative values are a valid
    /// over-allowance state, not an error.
    pub balance_after: i64,
}
