pub mod ledger;
pub mod trip;

pub use ledger::LedgerEntry;
pub use trip::{Trip, RESTORATION_WINDOW_DAYS};
