//! # Domain Module
//!
//! Contains all business logic for the absence tracker.
//!
//! The pipeline runs leaves-first: raw rows are normalized into an ordered
//! trip sequence, the ledger folds the sequence into running balances, the
//! restoration scheduler derives when spent days roll back onto the
//! allowance, and the projector expands everything into a day-granular
//! remaining-allowance series. Every pass is a pure, one-shot transform;
//! nothing is retained between runs and the wall clock is never read here.
//!
//! ## Module Organization
//!
//! - **trip_service**: input row validation, day-first date parsing, and
//!   trip ordering, including the what-if planned trip
//! - **ledger_service**: the running allowance balance fold
//! - **restoration_service**: the 365-day balance-restoration schedule
//! - **projection_service**: the daily remaining-allowance series
//! - **trip_table**: trip table formatting for tabular consumers

pub mod commands;
pub mod errors;
pub mod ledger_service;
pub mod models;
pub mod projection_service;
pub mod restoration_service;
pub mod trip_service;
pub mod trip_table;

pub use errors::InputError;
pub use ledger_service::LedgerService;
pub use projection_service::{ProjectionMode, ProjectionRange, ProjectionService};
pub use restoration_service::{RestorationService, UPCOMING_EVENTS_LIMIT};
pub use trip_service::{DateParsing, TripService};
pub use trip_table::{TripTableConfig, TripTableService};
