use std::collections::TryReserveError;

/// Alias for results of fallible [`BigInt`](crate::BigInt) operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by construction, addition and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Digit storage could not be grown. The operation that needed the room
    /// is abandoned as a whole and the value is left in its last valid
    /// state, never with a half-grown buffer.
    #[error("could not grow digit storage to {digits} digits")]
    AllocationFailure {
        digits: usize,
        #[source]
        source: TryReserveError,
    },

    /// The decimal literal was empty after the sign, or held a non-digit
    /// character. No value is produced.
    #[error("invalid decimal numeral {literal:?}: {reason}")]
    InvalidFormat {
        literal: String,
        reason: &'static str,
    },

    /// The request falls outside what this type implements.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl Error {
    pub(crate) fn invalid_format(literal: &str, reason: &'static str) -> Error {
        Error::InvalidFormat {
            literal: literal.to_owned(),
            reason,
        }
    }
}
