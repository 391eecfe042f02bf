//! Error types for prazo-rs.
//!
//! The whole workspace funnels failures through a single `thiserror`-derived
//! enum. The two failure kinds a caller must tell apart are [`Error::InvalidInput`]
//! (bad user input, routinely produced by half-filled forms and reported back
//! as prose) and [`Error::Overflow`] (the iteration ceiling of a deadline
//! computation was hit, which points at a malformed holiday registry rather
//! than at the user).

use thiserror::Error;

/// The top-level error type used throughout prazo-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (maps to the `fail!` macro).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (maps to the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic out of the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// User-supplied input that cannot enter a computation (missing or
    /// unparseable start date, day count that is not a non-negative integer).
    /// Recoverable: callers turn this into an explanatory result, not a crash.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A deadline computation exceeded its iteration ceiling. Indicates a
    /// pathological holiday registry, not bad form input.
    #[error("computation overflow: {0}")]
    Overflow(String),
}

/// Shorthand `Result` type used throughout prazo-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pz_core::{ensure, errors::Error};
/// fn non_negative(x: i32) -> pz_core::errors::Result<i32> {
///     ensure!(x >= 0, "x must be non-negative, got {x}");
///     Ok(x)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(non_negative(-1).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pz_core::{fail, errors::Error};
/// fn always_err() -> pz_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
