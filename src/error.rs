//! Crate-wide error taxonomy
//!
//! Only recoverable failures live here. An out-of-range index handed to the
//! animator is a caller bug and panics instead (see `sim::animator`).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Empty or malformed sector list at draw time
    #[error("invalid wheel configuration: {0}")]
    InvalidConfiguration(String),

    #[error("participant not found: {0}")]
    UnknownParticipant(String),

    #[error("participant has already played: {0}")]
    AlreadyPlayed(String),

    #[error("a spin is already in flight")]
    SpinInProgress,

    #[error("generated configuration rejected: {0}")]
    RejectedCandidate(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
