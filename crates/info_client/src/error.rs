use thiserror::Error;

/// Terminal outcome of a failed info fetch. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid info endpoint: {0}")]
    Endpoint(String),
    #[error("failed to reach info endpoint: {0}")]
    Transport(String),
    #[error("info endpoint returned status {status}")]
    HttpStatus { status: u16 },
    #[error("invalid info response payload: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}
