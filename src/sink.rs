//! Destinations for diagnostic output.
//!
//! The library itself never writes anywhere. Trap banners and printed traces
//! are handed to a [`DiagnosticSink`], which is part of the installed
//! [`RaiseConfig`](crate::config::RaiseConfig).

use core::fmt;

use crate::location::SourceLocation;

/// Severity of a diagnostic record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Fine-grained tracing.
    Trace,
    /// Debugging detail.
    Debug,
    /// Informational.
    Info,
    /// Something unexpected that was recovered from.
    Warn,
    /// A failure.
    Error,
    /// A failure that ends the process.
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        })
    }
}

/// Receives diagnostic records.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
///
/// use faultline::{
///     SourceLocation,
///     sink::{DiagnosticSink, Level},
/// };
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl DiagnosticSink for Collect {
///     fn accept(&self, level: Level, category: &str, _location: SourceLocation, message: &str) {
///         self.0.lock().unwrap().push(format!("{level} {category}: {message}"));
///     }
/// }
///
/// let sink = Collect::default();
/// sink.accept(Level::Warn, "io", SourceLocation::new("a.rs", 1), "slow disk");
/// assert_eq!(sink.0.lock().unwrap()[0], "WARN io: slow disk");
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Handles one record.
    fn accept(&self, level: Level, category: &str, location: SourceLocation, message: &str);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn accept(&self, _level: Level, _category: &str, _location: SourceLocation, _message: &str) {}
}

/// Writes messages verbatim to standard error.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StderrSink {
    fn accept(&self, _level: Level, _category: &str, _location: SourceLocation, message: &str) {
        use std::io::Write as _;

        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(message.as_bytes());
        let _ = stderr.flush();
    }
}

/// The sink used when none is configured.
#[cfg(feature = "std")]
pub type DefaultSink = StderrSink;

/// The sink used when none is configured.
#[cfg(not(feature = "std"))]
pub type DefaultSink = NullSink;
