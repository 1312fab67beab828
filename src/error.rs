use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single input line did not produce a clean record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("line is not a JSON object")]
    Malformed,

    #[error("amount missing or unparseable")]
    UnparseableAmount,

    #[error("no order or payment id")]
    MissingIdentifiers,

    #[error("test or sandbox record")]
    TestRecord,
}
