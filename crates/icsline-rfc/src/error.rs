use thiserror::Error;

use crate::parse::ParseError;

/// Crate-level errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Content-line parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
