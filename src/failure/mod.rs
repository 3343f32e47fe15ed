//! Failures, their kinds and their causes.
//!
//! # Overview
//!
//! A [`Failure`] is a categorised error with a message, the source location
//! where it was raised, and optionally the [`Cause`] that was being handled
//! at the time. Its text is fixed when it is raised: the configured location
//! prefix, one space, then the message.
//!
//! ```
//! use faultline::{Failure, SourceLocation, failure::Kind};
//!
//! let failure = Failure::new(Kind::OutOfRange, SourceLocation::new("queue.rs", 17), "slot 9 is empty");
//! assert_eq!(failure.to_string(), "[queue.rs:17] slot 9 is empty");
//! assert_eq!(failure.message(), "slot 9 is empty");
//! assert_eq!(failure.kind(), Kind::OutOfRange);
//! ```
//!
//! Causes form a chain that [`flatten_trace`] walks from the outermost
//! failure inwards.

use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
};
use core::{any::Any, error::Error, fmt};

use crate::location::{LocationFormat, SourceLocation};

mod raise;
mod trace;

#[cfg(feature = "std")]
pub use self::raise::catch_panic;
pub use self::{
    raise::raise_with_location,
    trace::{flatten_trace, print_trace},
};

/// The category of a [`Failure`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// A condition only detectable at run time.
    #[default]
    Runtime,
    /// A violated precondition or invariant.
    Logic,
    /// An argument outside the accepted set.
    InvalidArgument,
    /// A value outside its permitted range.
    OutOfRange,
    /// A size exceeding a limit.
    Length,
    /// An input outside the domain of an operation.
    Domain,
}

impl Kind {
    /// A short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Runtime => "runtime error",
            Kind::Logic => "logic error",
            Kind::InvalidArgument => "invalid argument",
            Kind::OutOfRange => "out of range",
            Kind::Length => "length error",
            Kind::Domain => "domain error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The failure that was being handled when another one was raised.
///
/// # Examples
///
/// ```
/// use faultline::Cause;
///
/// let io = std::io::Error::other("disk on fire");
/// let cause = Cause::from(io);
/// assert_eq!(cause.to_string(), "disk on fire");
/// assert!(cause.as_error().is_some());
///
/// let opaque = Cause::from_panic(Box::new(17u8));
/// assert_eq!(opaque.to_string(), "[unknown nested cause]");
/// ```
#[derive(Debug)]
pub enum Cause {
    /// An error value.
    Error(Box<dyn Error + Send + Sync + 'static>),
    /// Something that is not an error, with a description if one could be
    /// recovered.
    Opaque(Option<String>),
}

impl Cause {
    /// Wraps an error value.
    pub fn error<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Cause::Error(Box::new(error))
    }

    /// Converts a panic payload, keeping its message if it has one.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let description = match payload.downcast::<String>() {
            Ok(message) => Some(*message),
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .map(|message| (*message).to_string()),
        };
        Cause::Opaque(description)
    }

    /// The cause as an error, if it is one.
    pub fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Cause::Error(error) => Some(&**error),
            Cause::Opaque(_) => None,
        }
    }

    /// The cause as a [`Failure`], if it is one.
    pub fn as_failure(&self) -> Option<&Failure> {
        self.as_error()?.downcast_ref::<Failure>()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Error(error) => fmt::Display::fmt(error, f),
            Cause::Opaque(Some(description)) => f.write_str(description),
            Cause::Opaque(None) => f.write_str("[unknown nested cause]"),
        }
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for Cause {
    fn from(error: E) -> Self {
        Cause::error(error)
    }
}

/// A raised, categorised error.
///
/// `Failure` is `Send + Sync + 'static` and implements [`Error`], so it
/// composes with `?` and with other error handling crates. Its
/// [`source`](Error::source) is the cause, when the cause is an error.
pub struct Failure {
    kind: Kind,
    location: SourceLocation,
    text: String,
    message_start: usize,
    cause: Option<Cause>,
}

impl Failure {
    /// Creates a failure whose text uses the default location format.
    pub fn new(kind: Kind, location: SourceLocation, message: impl Into<String>) -> Self {
        Self::with_format(kind, location, LocationFormat::DEFAULT, message)
    }

    /// Creates a failure whose text uses `format` for the location prefix.
    pub fn with_format(
        kind: Kind,
        location: SourceLocation,
        format: LocationFormat,
        message: impl Into<String>,
    ) -> Self {
        let prefix = format!("{} ", location.formatted(format));
        let message_start = prefix.len();
        let mut text = prefix;
        text.push_str(&message.into());
        Self {
            kind,
            location,
            text,
            message_start,
            cause: None,
        }
    }

    /// Records the failure that was being handled.
    #[must_use]
    pub fn caused_by(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub(crate) fn with_cause(mut self, cause: Option<Cause>) -> Self {
        self.cause = cause;
        self
    }

    /// The category.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Where the failure was raised.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// The message, without the location prefix.
    pub fn message(&self) -> &str {
        &self.text[self.message_start..]
    }

    /// The full text, including the location prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The failure that was being handled when this one was raised.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Takes the cause out of this failure.
    pub fn take_cause(&mut self) -> Option<Cause> {
        self.cause.take()
    }

    /// Shorthand for [`flatten_trace`] on this failure.
    pub fn trace(&self) -> String {
        flatten_trace(self)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.kind)
            .field("location", &self.location)
            .field("message", &self.message())
            .field("cause", &self.cause)
            .finish()
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().and_then(Cause::as_error)
    }
}

macro_rules! kind_constructors {
    ($($(#[$attr:meta])* $name:ident => $kind:ident),* $(,)?) => {
        impl Failure {
            $(
                $(#[$attr])*
                #[track_caller]
                pub fn $name(message: impl Into<String>) -> Self {
                    Self::new(Kind::$kind, SourceLocation::caller(), message)
                }
            )*
        }
    };
}

kind_constructors!(
    /// A [`Kind::Runtime`] failure at the caller's location.
    runtime => Runtime,
    /// A [`Kind::Logic`] failure at the caller's location.
    logic => Logic,
    /// A [`Kind::InvalidArgument`] failure at the caller's location.
    invalid_argument => InvalidArgument,
    /// A [`Kind::OutOfRange`] failure at the caller's location.
    out_of_range => OutOfRange,
    /// A [`Kind::Length`] failure at the caller's location.
    length => Length,
    /// A [`Kind::Domain`] failure at the caller's location.
    domain => Domain,
);
