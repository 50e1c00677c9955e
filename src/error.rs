//! Error types for the state store.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("action creator `{name}` is defined by both `{first}` and `{second}`")]
    DuplicateActionCreator {
        name: String,
        first: String,
        second: String,
    },

    #[error("unknown action creator `{0}`")]
    UnknownActionCreator(String),

    #[error("action creator `{creator}` takes {expected} argument(s), got {got}")]
    Arity {
        creator: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid argument for `{creator}`: {message}")]
    InvalidArgument {
        creator: &'static str,
        message: String,
    },
}
