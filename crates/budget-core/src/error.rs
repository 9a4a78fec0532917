use budget_domain::PeriodParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid amount: {0}; amounts must be finite")]
    InvalidAmount(f64),
    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] PeriodParseError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}
