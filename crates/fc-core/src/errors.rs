//! Error types for fiscal-calendar.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  Preconditions are checked with the
//! [`ensure!`](crate::ensure) macro.
//!
//! Very little here can actually fail: an undefined Easter is `None`, an empty
//! query is an empty `Vec`, and a full cache evicts.  What remains are dates
//! that cannot be represented and invalid settings.

use thiserror::Error;

/// The top-level error type used throughout fiscal-calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid month/day, arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// A year outside the range a calendar or catalog can be built for.
    #[error("year {year} out of range [{min}, {max}]")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout fiscal-calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fc_core::{ensure, errors::Error};
/// fn positive(days: i64) -> fc_core::errors::Result<i64> {
///     ensure!(days > 0, "days must be positive, got {days}");
///     Ok(days)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_out_of_range_message() {
        let err = Error::YearOutOfRange {
            year: 12000,
            min: -9998,
            max: 9998,
        };
        assert_eq!(err.to_string(), "year 12000 out of range [-9998, 9998]");
    }

    #[test]
    fn ensure_macro_returns_precondition() {
        fn check(n: usize) -> Result<usize> {
            ensure!(n < 3, "n = {n} too large");
            Ok(n)
        }
        assert_eq!(check(2), Ok(2));
        assert_eq!(
            check(3),
            Err(Error::Precondition("n = 3 too large".to_string()))
        );
    }
}
