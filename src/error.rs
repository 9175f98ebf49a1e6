//! Error types for the ledger, CSV codec, storage backends and tracker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid round index {index} (ledger has {len} rounds)")]
    InvalidIndex { index: usize, len: usize },
    #[error("invalid score value: {value:?}")]
    InvalidScore { value: String },
    #[error("running total overflows at round index {index}")]
    TotalOverflow { index: usize },
    #[error("round index {index} has no valid session")]
    InvalidSession { index: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvError {
    #[error("invalid data at line {line}")]
    InvalidLine { line: usize },
    #[error("no data found in CSV")]
    NoData,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("csv error: {0}")]
    Csv(#[from] CsvError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
