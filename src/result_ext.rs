//! Extension traits that raise [`Failure`]s from `Result` and `Option`.
//!
//! [`ResultExt::or_raise`] is the explicit form of "raise while handling":
//! the error being replaced becomes the cause of the new failure.
//!
//! ```
//! use faultline::prelude::*;
//!
//! fn parse_limit(text: &str) -> Result<u32, Failure> {
//!     text.trim().parse::<u32>().or_raise(Kind::InvalidArgument, build_message!("bad limit", text))
//! }
//!
//! let failure = parse_limit("ten").unwrap_err();
//! assert_eq!(failure.message(), "bad limit ten");
//! assert_eq!(failure.trace().lines().nth(1), Some("  → invalid digit found in string"));
//! ```

use crate::{
    config::RaiseConfig,
    failure::{Cause, Failure, Kind, raise_with_location},
    location::SourceLocation,
    render::{Render, render},
};

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}

    impl<T> Sealed for Option<T> {}
}

/// Extension trait for `Result` that raises a [`Failure`] caused by the
/// error.
///
/// This trait is sealed.
pub trait ResultExt<T, E>: sealed::Sealed {
    /// Replaces the error with a failure of `kind` raised at the caller's
    /// location, keeping the error as its cause.
    ///
    /// The message is only rendered when `self` is an error.
    ///
    /// # Errors
    ///
    /// Returns the new failure if `self` is `Err`.
    #[track_caller]
    fn or_raise<M>(self, kind: Kind, message: M) -> Result<T, Failure>
    where
        M: Render,
        E: Into<Cause>;

    /// Like [`or_raise`](ResultExt::or_raise), but builds the message from
    /// the error.
    ///
    /// # Errors
    ///
    /// Returns the new failure if `self` is `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultline::prelude::*;
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::other("EACCES"));
    /// let failure = result
    ///     .or_raise_with(Kind::Runtime, |error| build_message!("open failed:", error))
    ///     .unwrap_err();
    /// assert_eq!(failure.message(), "open failed: EACCES");
    /// ```
    #[track_caller]
    fn or_raise_with<M, F>(self, kind: Kind, message: F) -> Result<T, Failure>
    where
        M: Render,
        F: FnOnce(&E) -> M,
        E: Into<Cause>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn or_raise<M>(self, kind: Kind, message: M) -> Result<T, Failure>
    where
        M: Render,
        E: Into<Cause>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(raise_with_location(
                RaiseConfig::current(),
                kind,
                SourceLocation::caller(),
                render(&message),
                Some(error.into()),
            )),
        }
    }

    #[track_caller]
    fn or_raise_with<M, F>(self, kind: Kind, message: F) -> Result<T, Failure>
    where
        M: Render,
        F: FnOnce(&E) -> M,
        E: Into<Cause>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let message = render(&message(&error));
                Err(raise_with_location(
                    RaiseConfig::current(),
                    kind,
                    SourceLocation::caller(),
                    message,
                    Some(error.into()),
                ))
            }
        }
    }
}

/// Extension trait for `Option` that raises a [`Failure`] for `None`.
///
/// This trait is sealed.
pub trait OptionExt<T>: sealed::Sealed {
    /// Converts `None` into a failure of `kind` raised at the caller's
    /// location.
    ///
    /// # Errors
    ///
    /// Returns the new failure if `self` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultline::prelude::*;
    ///
    /// let ports = [80, 443];
    /// let failure = ports.get(5).ok_or_raise(Kind::OutOfRange, "no such port").unwrap_err();
    /// assert_eq!(failure.kind(), Kind::OutOfRange);
    /// assert_eq!(ports.first().ok_or_raise(Kind::OutOfRange, "empty").unwrap(), &80);
    /// ```
    #[track_caller]
    fn ok_or_raise<M: Render>(self, kind: Kind, message: M) -> Result<T, Failure>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_raise<M: Render>(self, kind: Kind, message: M) -> Result<T, Failure> {
        match self {
            Some(value) => Ok(value),
            None => Err(raise_with_location(
                RaiseConfig::current(),
                kind,
                SourceLocation::caller(),
                render(&message),
                None,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("backend unavailable")]
    struct Unavailable;

    #[test]
    fn test_or_raise_records_cause_and_caller() {
        let result: Result<(), Unavailable> = Err(Unavailable);
        let line = line!() + 1;
        let failure = result.or_raise(Kind::Runtime, "query failed").unwrap_err();
        assert_eq!(failure.location().line, line);
        assert_eq!(failure.location().file, file!());
        let cause = failure.cause().and_then(Cause::as_error).unwrap();
        assert!(cause.downcast_ref::<Unavailable>().is_some());
    }

    #[test]
    fn test_success_passes_through() {
        let result: Result<u8, Unavailable> = Ok(3);
        assert_eq!(result.or_raise(Kind::Logic, "unused").unwrap(), 3);
        assert_eq!(Some(4).ok_or_raise(Kind::Logic, "unused").unwrap(), 4);
    }

    #[test]
    fn test_none_has_no_cause() {
        let failure = None::<u8>.ok_or_raise(Kind::Length, "missing").unwrap_err();
        assert_eq!(failure.message(), "missing");
        assert!(failure.cause().is_none());
    }
}
