use alloc::{format, string::String};
use core::{
    error::Error,
    fmt::{self, Write as _},
};

use super::{Cause, Failure};
use crate::{
    location::SourceLocation,
    sink::{DiagnosticSink, Level},
};

/// Renders a failure and its chain of causes, outermost first.
///
/// Each level is one line of the form `→ <text>`, indented by two spaces per
/// level of nesting. [`Failure`] causes are followed, including opaque ones;
/// other errors are followed through [`Error::source`].
///
/// # Examples
///
/// ```
/// use faultline::{Failure, flatten_trace};
///
/// let failure = Failure::runtime("load failed")
///     .caused_by(std::io::Error::other("permission denied"));
/// let trace = flatten_trace(&failure);
/// let lines: Vec<&str> = trace.lines().collect();
/// assert!(lines[0].starts_with("→ ["));
/// assert!(lines[0].ends_with("] load failed"));
/// assert_eq!(lines[1], "  → permission denied");
/// ```
pub fn flatten_trace(error: &(dyn Error + 'static)) -> String {
    let mut trace = String::new();
    let mut current = Some(error);
    let mut depth = 0;
    while let Some(error) = current {
        push_line(&mut trace, depth, error);
        depth += 1;
        current = match error.downcast_ref::<Failure>() {
            Some(failure) => match failure.cause() {
                Some(Cause::Error(inner)) => Some(&**inner as &(dyn Error + 'static)),
                Some(opaque @ Cause::Opaque(_)) => {
                    push_line(&mut trace, depth, opaque);
                    None
                }
                None => None,
            },
            None => error.source(),
        };
    }
    trace
}

fn push_line(trace: &mut String, depth: usize, text: impl fmt::Display) {
    let _ = writeln!(trace, "{:indent$}→ {}", "", text, indent = depth * 2);
}

/// Reports a trace of `error` to `sink`, framed by header and footer lines.
///
/// The record is reported at [`Level::Error`] in the `trace` category, with
/// the caller's location.
#[track_caller]
pub fn print_trace(error: &(dyn Error + 'static), sink: &dyn DiagnosticSink) {
    let location = match error.downcast_ref::<Failure>() {
        Some(failure) => failure.location(),
        None => SourceLocation::caller(),
    };
    let text = format!(
        "\n=== Exception Trace ===\n{}=====================\n",
        flatten_trace(error)
    );
    sink.accept(Level::Error, "trace", location, &text);
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::failure::Kind;

    #[derive(Debug, thiserror::Error)]
    #[error("wrapper")]
    struct Wrapper(#[source] Leaf);

    #[derive(Debug, thiserror::Error)]
    #[error("leaf")]
    struct Leaf;

    fn at(line: u32, kind: Kind, message: &str) -> Failure {
        Failure::new(kind, SourceLocation::new("t.rs", line), message)
    }

    #[test]
    fn test_single_level() {
        assert_eq!(flatten_trace(&at(1, Kind::Runtime, "alone")), "→ [t.rs:1] alone\n");
    }

    #[test]
    fn test_failure_chain() {
        let root = at(1, Kind::Runtime, "File not found: config.txt");
        let middle = at(2, Kind::Runtime, "Failed to load configuration").caused_by(root);
        let outer = at(3, Kind::Logic, "Startup aborted").caused_by(middle);
        assert_eq!(
            flatten_trace(&outer),
            "→ [t.rs:3] Startup aborted\n  → [t.rs:2] Failed to load configuration\n    → [t.rs:1] File not found: config.txt\n"
        );
    }

    #[test]
    fn test_foreign_sources_are_followed() {
        let outer = at(5, Kind::Runtime, "top").caused_by(Wrapper(Leaf));
        assert_eq!(outer.trace(), "→ [t.rs:5] top\n  → wrapper\n    → leaf\n");
    }

    #[test]
    fn test_opaque_causes() {
        let unknown = at(7, Kind::Runtime, "outer").caused_by(Cause::Opaque(None));
        assert_eq!(unknown.trace(), "→ [t.rs:7] outer\n  → [unknown nested cause]\n");

        let described = at(8, Kind::Runtime, "outer").caused_by(Cause::Opaque(Some("gone".to_string())));
        assert_eq!(described.trace(), "→ [t.rs:8] outer\n  → gone\n");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_print_trace_frames_output() {
        use alloc::{string::String, vec::Vec};
        use std::sync::Mutex;

        struct Capture(Mutex<Vec<(Level, SourceLocation, String)>>);

        impl DiagnosticSink for Capture {
            fn accept(&self, level: Level, _category: &str, location: SourceLocation, message: &str) {
                self.0.lock().unwrap().push((level, location, message.to_string()));
            }
        }

        let sink = Capture(Mutex::new(Vec::new()));
        let failure = at(9, Kind::Runtime, "bad");
        print_trace(&failure, &sink);

        let records = sink.0.lock().unwrap();
        let (level, location, text) = &records[0];
        assert_eq!(*level, Level::Error);
        assert_eq!(location.line, 9);
        assert_eq!(
            text,
            "\n=== Exception Trace ===\n→ [t.rs:9] bad\n=====================\n"
        );
    }
}
