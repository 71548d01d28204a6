use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WevolorError>;

#[derive(Error, Debug)]
pub enum WevolorError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("device rejected request with status {status}")]
    Rejected { status: StatusCode },
    #[error("status payload is not a json object")]
    UnexpectedStatusPayload,
    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl WevolorError {
    /// True when the device was reached and answered with a non 200 status
    pub fn is_rejected(&self) -> bool {
        matches!(self, WevolorError::Rejected { .. })
    }
}
