// bandeira/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid character '{ch}' at position {index}: expected a decimal digit")]
    InvalidCharacter { ch: char, index: usize },

    #[error("input too long: maximum {max} digits, got {actual}")]
    TooLong { max: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
