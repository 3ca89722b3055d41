//! Error types for the crate.

use thiserror::Error;

/// Errors produced while configuring agents or driving games.
///
/// Learning itself never fails: enumeration and TD updates are total over
/// well-formed inputs. What remains is configuration and human I/O.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no empty cell left to move to")]
    NoValidMoves,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
