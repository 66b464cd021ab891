use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrationError>;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("final submission is only allowed from the last step")]
    NotOnFinalStep,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("list is full ({limit} entries)")]
    ListFull { limit: usize },
}
