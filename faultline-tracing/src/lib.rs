#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Forwards faultline diagnostics to [`tracing`].
//!
//! faultline never writes output by itself. Trap banners and printed traces
//! go to the [`DiagnosticSink`] of the installed
//! [`RaiseConfig`](faultline::RaiseConfig). [`TracingSink`] is a sink that
//! turns each record into a `tracing` event, so the diagnostics end up
//! wherever your subscriber sends the rest of your logs.
//!
//! # Quick Start
//!
//! ```
//! use faultline::RaiseConfig;
//! use faultline_tracing::TracingSink;
//!
//! tracing_subscriber::fmt().init();
//!
//! RaiseConfig::new()
//!     .with_sink(&TracingSink)
//!     .install()
//!     .expect("failed to install config");
//! ```
//!
//! Events are emitted with the target `faultline` and carry the record's
//! `category`, `file` and `line` as fields. [`Level::Fatal`] has no `tracing`
//! counterpart; it is emitted at `ERROR` with `fatal = true`.
//!
//! ## Logging Chains
//!
//! [`trace_failure`] logs a whole causal chain as a single event:
//!
//! ```
//! use faultline::prelude::*;
//!
//! let failure = Failure::runtime("sync aborted").caused_by(Failure::runtime("peer reset"));
//! faultline_tracing::trace_failure(&failure);
//! ```

use core::error::Error;

use faultline::{
    Failure, SourceLocation, flatten_trace,
    sink::{DiagnosticSink, Level},
};

/// The target of every event emitted by this crate.
pub const TARGET: &str = "faultline";

/// A [`DiagnosticSink`] that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

macro_rules! emit {
    ($level:expr, $category:expr, $location:expr, $message:expr $(, $field:ident = $value:expr)*) => {
        tracing::event!(
            target: TARGET,
            $level,
            category = $category,
            file = $location.file,
            line = $location.line,
            $($field = $value,)*
            "{}",
            $message
        )
    };
}

impl DiagnosticSink for TracingSink {
    fn accept(&self, level: Level, category: &str, location: SourceLocation, message: &str) {
        match level {
            Level::Trace => emit!(tracing::Level::TRACE, category, location, message),
            Level::Debug => emit!(tracing::Level::DEBUG, category, location, message),
            Level::Info => emit!(tracing::Level::INFO, category, location, message),
            Level::Warn => emit!(tracing::Level::WARN, category, location, message),
            Level::Error => emit!(tracing::Level::ERROR, category, location, message),
            Level::Fatal => {
                emit!(tracing::Level::ERROR, category, location, message, fatal = true)
            }
        }
    }
}

/// Emits the causal chain of `error` as one `ERROR` event.
///
/// The event message is the flattened trace. When `error` is a [`Failure`]
/// its location is attached as the `file` and `line` fields.
pub fn trace_failure(error: &(dyn Error + 'static)) {
    let trace = flatten_trace(error);
    match error.downcast_ref::<Failure>() {
        Some(failure) => emit!(
            tracing::Level::ERROR,
            "trace",
            failure.location(),
            trace,
            kind = failure.kind().name()
        ),
        None => tracing::event!(target: TARGET, tracing::Level::ERROR, category = "trace", "{}", trace),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fmt,
        sync::{Arc, Mutex},
    };

    use tracing::{
        Event, Subscriber,
        field::{Field, Visit},
    };
    use tracing_subscriber::{
        Registry,
        layer::{Context, Layer, SubscriberExt},
    };

    use super::*;

    #[derive(Debug, Default)]
    struct Record {
        level: Option<tracing::Level>,
        target: String,
        fields: Vec<(String, String)>,
    }

    impl Record {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    impl Visit for Record {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<Record>>>);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut record = Record {
                level: Some(*event.metadata().level()),
                target: event.metadata().target().to_string(),
                ..Record::default()
            };
            event.record(&mut record);
            self.0.lock().unwrap().push(record);
        }
    }

    fn captured(f: impl FnOnce()) -> Vec<Record> {
        let capture = Capture::default();
        let subscriber = Registry::default().with(capture.clone());
        tracing::subscriber::with_default(subscriber, f);
        let mut records = capture.0.lock().unwrap();
        std::mem::take(&mut *records)
    }

    #[test]
    fn test_levels_and_fields() {
        let records = captured(|| {
            let location = SourceLocation::new("src/db.rs", 12);
            TracingSink.accept(Level::Warn, "pool", location, "slow checkout");
            TracingSink.accept(Level::Fatal, "trap", location, "gone");
        });

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Some(tracing::Level::WARN));
        assert_eq!(records[0].target, TARGET);
        assert_eq!(records[0].field("category"), Some("pool"));
        assert_eq!(records[0].field("file"), Some("src/db.rs"));
        assert_eq!(records[0].field("line"), Some("12"));
        assert_eq!(records[0].field("message"), Some("slow checkout"));
        assert_eq!(records[0].field("fatal"), None);

        assert_eq!(records[1].level, Some(tracing::Level::ERROR));
        assert_eq!(records[1].field("fatal"), Some("true"));
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[test]
    fn test_trace_failure() {
        let failure = Failure::new(
            faultline::Kind::Runtime,
            SourceLocation::new("sync.rs", 40),
            "sync aborted",
        )
        .caused_by(Refused);
        let records = captured(|| trace_failure(&failure));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("kind"), Some("runtime error"));
        assert_eq!(records[0].field("line"), Some("40"));
        assert_eq!(
            records[0].field("message"),
            Some("→ [sync.rs:40] sync aborted\n  → connection refused\n")
        );
    }

    #[test]
    fn test_trace_foreign_error() {
        let records = captured(|| trace_failure(&Refused));
        assert_eq!(records[0].field("category"), Some("trace"));
        assert_eq!(records[0].field("message"), Some("→ connection refused\n"));
    }
}
