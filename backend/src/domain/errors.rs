use thiserror::Error;

/// Fatal input failures surfaced whole to the caller. Row-level exclusions
/// (invalid intervals, lenient-mode date failures) are reported through
/// `shared::RejectedRow` instead and never abort a run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("required column '{name}' is missing from the input")]
    MissingColumn { name: String },
    #[error("input contains no rows")]
    EmptySource,
    #[error("row {row}: unparseable date '{value}'")]
    UnparseableDate { row: usize, value: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
