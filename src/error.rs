use thiserror::Error;

use crate::Symbol;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `peek_min` or `extract_min` on a heap holding no elements.
    #[error("heap is empty")]
    EmptyStructure,
    #[error("invalid input: symbol sequence is empty")]
    InvalidInput,
    /// The code table is not total over the input it was derived from.
    #[error("no code for symbol {symbol:?} (code table inconsistent with frequency table)")]
    MissingCode { symbol: Symbol },
    #[error("usage: {0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
