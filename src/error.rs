//! Error types for change identifier construction.

use thiserror::Error;

/// Raised when a change identifier is built from invalid parts.
///
/// Only construction can fail; every transition on an existing
/// [`ChangeId`](crate::ChangeId) is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("actor id must not be empty")]
    EmptyActor,

    #[error("client sequence must not be negative: {0}")]
    NegativeClientSeq(i64),

    #[error("client sequence out of range: {0}")]
    ClientSeqOutOfRange(i64),

    #[error("lamport must be a non-negative decimal integer: {0:?}")]
    InvalidLamport(String),

    #[error("server sequence must be empty or a non-negative decimal integer: {0:?}")]
    InvalidServerSeq(String),
}
