//! Policy-based runtime validation.
//!
//! # Overview
//!
//! An [`Enforcer`] pairs a value with a [`Predicate`] and a [`Raiser`]. The
//! predicate is evaluated exactly once, when the enforcer is created. After
//! that the enforcer is in one of three states:
//!
//! - **passed**: the value is available through [`Enforcer::into_result`] or
//!   [`Deref`](core::ops::Deref), and any message is ignored without being
//!   rendered.
//! - **failed**: the first [`message`](Enforcer::message) raises a failure
//!   with that message. If none is attached, a default message naming the
//!   expression and the predicate is used.
//! - **raised**: further messages are ignored.
//!
//! A raised failure is surfaced by [`Enforcer::into_result`]. An enforcer
//! that is dropped with a failure it never surfaced panics with the failure
//! text, unless the thread is already panicking.
//!
//! ```
//! use faultline::prelude::*;
//!
//! fn set_volume(level: i32) -> Result<i32, Failure> {
//!     let level = enforce_in_range!(level, 0, 11)
//!         .message(build_message!("volume", level, "is not in [0, 11]"))
//!         .into_result()?;
//!     Ok(level)
//! }
//!
//! assert_eq!(set_volume(7).unwrap(), 7);
//! assert_eq!(set_volume(12).unwrap_err().message(), "volume 12 is not in [0, 11]");
//! ```

use alloc::{format, string::String};
use core::ops::Deref;

use crate::{
    failure::Cause,
    location::SourceLocation,
    render::{Render, Rendered, render},
};

pub mod predicate;
pub mod raiser;

use self::{
    predicate::{IndexWithin, Predicate, Truth},
    raiser::{DefaultRaiser, Raiser},
};

/// A value checked against a predicate, raising at most once on failure.
///
/// Enforcers are normally created through the `enforce*` macros, which
/// capture the source location and the expression text.
#[must_use = "a failed enforcer panics when dropped without being surfaced"]
pub struct Enforcer<T, P = Truth, R = DefaultRaiser>
where
    P: Predicate<T>,
    R: Raiser,
{
    value: Option<T>,
    predicate: P,
    raiser: R,
    location: SourceLocation,
    expression: &'static str,
    failed: bool,
    handled: bool,
    cause: Option<Cause>,
    raised: Option<R::Failure>,
}

impl<T, P, R> Enforcer<T, P, R>
where
    P: Predicate<T>,
    R: Raiser,
{
    /// Evaluates `predicate` on `value`.
    pub fn check(
        value: T,
        predicate: P,
        raiser: R,
        location: SourceLocation,
        expression: &'static str,
    ) -> Self {
        let failed = !predicate.check(&value);
        Self {
            value: Some(value),
            predicate,
            raiser,
            location,
            expression,
            failed,
            handled: false,
            cause: None,
            raised: None,
        }
    }

    /// Whether the predicate held.
    pub fn passed(&self) -> bool {
        !self.failed
    }

    /// Whether a failure has been raised.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// The text of the checked expression.
    pub fn expression(&self) -> &'static str {
        self.expression
    }

    /// Where the check was made.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// The raised failure, if any.
    pub fn failure(&self) -> Option<&R::Failure> {
        self.raised.as_ref()
    }

    /// Records the failure being handled, to become the cause of the raised
    /// one. Ignored once a failure has been raised.
    pub fn caused_by(mut self, cause: impl Into<Cause>) -> Self {
        if !self.handled {
            self.cause = Some(cause.into());
        }
        self
    }

    /// Raises with `message` if the predicate failed and nothing was raised
    /// yet.
    pub fn message(self, message: impl Render) -> Self {
        self.message_with(|| message)
    }

    /// Like [`message`](Self::message), but only builds the message when it
    /// is needed.
    pub fn message_with<M: Render>(mut self, message: impl FnOnce() -> M) -> Self {
        if self.failed && !self.handled {
            let message = render(&message());
            self.raise(message);
        }
        self
    }

    /// Surfaces the outcome: the value if the predicate held, the raised
    /// failure otherwise.
    ///
    /// A failed enforcer without a message raises with the default message
    /// here.
    ///
    /// # Errors
    ///
    /// Returns the raised failure if the predicate did not hold.
    pub fn into_result(mut self) -> Result<T, R::Failure> {
        if self.failed && !self.handled {
            self.raise_default();
        }
        match self.raised.take() {
            Some(failure) => Err(failure),
            None => Ok(self
                .value
                .take()
                .expect("Enforcer value is only taken when the enforcer is consumed")),
        }
    }

    /// The checked value.
    pub fn get(&self) -> &T {
        self.value
            .as_ref()
            .expect("Enforcer value is only taken when the enforcer is consumed")
    }

    fn default_message(&self) -> String {
        format!(
            "Enforcement failed: {} - {}",
            self.expression,
            self.predicate.description()
        )
    }

    fn raise_default(&mut self) {
        let message = self.default_message();
        self.raise(message);
    }

    fn raise(&mut self, message: String) {
        self.handled = true;
        let failure = self.raiser.raise(self.location, message, self.cause.take());
        self.raised = Some(failure);
    }
}

impl<T, P, R> Deref for Enforcer<T, P, R>
where
    P: Predicate<T>,
    R: Raiser,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, P, R> Drop for Enforcer<T, P, R>
where
    P: Predicate<T>,
    R: Raiser,
{
    fn drop(&mut self) {
        if self.failed && !self.handled {
            self.raise_default();
        }
        if let Some(failure) = self.raised.take() {
            if !already_panicking() {
                panic!("{failure}");
            }
        }
    }
}

#[cfg(feature = "std")]
fn already_panicking() -> bool {
    std::thread::panicking()
}

#[cfg(not(feature = "std"))]
fn already_panicking() -> bool {
    false
}

/// Checks that `0 <= index < size`, with an index-specific message.
///
/// This is what [`enforce_valid_index!`](crate::enforce_valid_index)
/// expands to.
pub fn valid_index<T>(
    index: T,
    size: T,
    location: SourceLocation,
    expression: &'static str,
) -> Enforcer<T, IndexWithin<T>>
where
    T: PartialOrd + Default + Render + Copy,
{
    Enforcer::check(
        index,
        IndexWithin { size },
        DefaultRaiser::installed(),
        location,
        expression,
    )
    .message_with(|| {
        format!(
            "Index out of bounds: {} not in [0, {})",
            Rendered(&index),
            Rendered(&size)
        )
    })
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::{
        predicate::{Equals, LessThan},
        raiser::KindRaiser,
        *,
    };
    use crate::{
        config::RaiseConfig,
        failure::{Failure, Kind},
    };

    fn local() -> DefaultRaiser {
        DefaultRaiser::new(RaiseConfig::new())
    }

    fn here() -> SourceLocation {
        SourceLocation::new("check.rs", 10)
    }

    struct Counted<'a>(&'a Cell<u32>);

    impl Render for Counted<'_> {
        fn render(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("counted")
        }
    }

    #[test]
    fn test_passing_value_flows_through() {
        let enforcer = Enforcer::check(5, Truth, local(), here(), "5");
        assert!(enforcer.passed());
        assert_eq!(*enforcer, 5);
        assert_eq!(enforcer.into_result().unwrap(), 5);
    }

    #[test]
    fn test_predicate_evaluated_once() {
        let calls = Cell::new(0);
        let predicate = predicate::Satisfies::new(
            |value: &i32| {
                calls.set(calls.get() + 1);
                *value > 0
            },
            "positive",
        );
        let enforcer = Enforcer::check(1, predicate, local(), here(), "1");
        let _ = enforcer.get();
        let _ = enforcer.into_result();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_message_not_rendered_on_success() {
        let renders = Cell::new(0);
        let value = Enforcer::check(true, Truth, local(), here(), "true")
            .message(Counted(&renders))
            .into_result()
            .unwrap();
        assert!(value);
        assert_eq!(renders.get(), 0);
    }

    #[test]
    fn test_first_message_wins() {
        let renders = Cell::new(0);
        let failure = Enforcer::check(false, Truth, local(), here(), "false")
            .message("first")
            .message(Counted(&renders))
            .into_result()
            .unwrap_err();
        assert_eq!(failure.message(), "first");
        assert_eq!(failure.to_string(), "[check.rs:10] first");
        assert_eq!(renders.get(), 0);
    }

    #[test]
    fn test_default_message() {
        let failure = Enforcer::check(3, Equals(4), local(), here(), "x == 4")
            .into_result()
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Enforcement failed: x == 4 - Values must be equal"
        );
    }

    #[test]
    fn test_kind_and_cause() {
        let inner = Failure::runtime("inner");
        let failure = Enforcer::check(
            10,
            LessThan(5),
            KindRaiser::new(Kind::OutOfRange, RaiseConfig::new()),
            here(),
            "10 < 5",
        )
        .caused_by(inner)
        .message("outer")
        .into_result()
        .unwrap_err();
        assert_eq!(failure.kind(), Kind::OutOfRange);
        assert_eq!(
            failure.cause().and_then(Cause::as_failure).unwrap().message(),
            "inner"
        );
    }

    #[test]
    fn test_raised_state_is_observable() {
        let enforcer = Enforcer::check(0, Truth, local(), here(), "0").message("zero");
        assert!(enforcer.is_handled());
        assert_eq!(enforcer.failure().unwrap().message(), "zero");
        let _ = enforcer.into_result();
    }

    #[test]
    #[should_panic(expected = "[check.rs:10] dropped")]
    fn test_unsurfaced_failure_panics_on_drop() {
        let _ = Enforcer::check(false, Truth, local(), here(), "false").message("dropped");
    }

    #[test]
    #[should_panic(expected = "Enforcement failed: flag - Expression must be true")]
    fn test_unsurfaced_default_failure_panics_on_drop() {
        let _ = Enforcer::check(false, Truth, local(), here(), "flag");
    }

    #[test]
    fn test_valid_index() {
        let ok = valid_index(2usize, 3usize, here(), "2 < 3").into_result();
        assert_eq!(ok.unwrap(), 2);

        let failure = valid_index(-1i32, 3, here(), "-1 < 3").into_result().unwrap_err();
        assert_eq!(failure.message(), "Index out of bounds: -1 not in [0, 3)");
        assert_eq!(failure.to_string(), "[check.rs:10] Index out of bounds: -1 not in [0, 3)");
    }
}
