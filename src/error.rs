use std::num::ParseIntError;
use thiserror::Error;

/// Errors produced while decoding digit-strings or answering queries.
#[derive(Debug, Error)]
pub enum DecibinaryError {
    #[error("Index must be at least 1 (indices are 1-based)")]
    ZeroIndex,
    #[error("Empty digit-string")]
    Empty,
    #[error("Invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
    #[error("Leading zero in multi-digit string {0:?}")]
    LeadingZero(String),
    #[error("Decoded value of {0:?} overflows u64")]
    Overflow(String),
    #[error("Index {0} exceeds the addressable range on this platform")]
    IndexTooLarge(u64),
    #[error("Digit-string {0:?} is not in the enumeration")]
    NotFound(String),
    #[error("Malformed integer on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("Input is missing the query count")]
    MissingCount,
    #[error("Input ended after {found} of {expected} queries")]
    UnexpectedEof { expected: u64, found: u64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
