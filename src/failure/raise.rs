use alloc::string::String;

use super::{Cause, Failure, Kind};
use crate::{
    config::{RaiseConfig, TrapMode},
    location::SourceLocation,
    trap,
};

/// Builds a [`Failure`] at `location`, applying the config's [`TrapMode`].
///
/// With [`TrapMode::TrapThenRaise`] the trap fires before the failure is
/// returned. With [`TrapMode::TrapOnly`] this function does not return.
///
/// # Examples
///
/// ```
/// use faultline::{RaiseConfig, SourceLocation, failure::{Kind, raise_with_location}};
///
/// let config = RaiseConfig::new();
/// let failure = raise_with_location(
///     &config,
///     Kind::Domain,
///     SourceLocation::new("math.rs", 4),
///     "sqrt of -1".into(),
///     None,
/// );
/// assert_eq!(failure.to_string(), "[math.rs:4] sqrt of -1");
/// ```
pub fn raise_with_location(
    config: &RaiseConfig,
    kind: Kind,
    location: SourceLocation,
    message: String,
    cause: Option<Cause>,
) -> Failure {
    match config.trap_mode {
        TrapMode::Raise => {}
        TrapMode::TrapThenRaise => trap::trap(config, location, &message),
        TrapMode::TrapOnly => trap::trap_and_terminate(config, location, &message),
    }
    Failure::with_format(kind, location, config.location_format, message).with_cause(cause)
}

/// Runs `f`, turning a panic into the [`Cause`] it carried.
///
/// This is how a failure raised from a destructor, which surfaces as a
/// panic, is recovered and chained.
///
/// # Examples
///
/// ```
/// use faultline::{failure::catch_panic, prelude::*};
///
/// let cause = catch_panic(|| {
///     let _ = enforce!(false).message("checked in drop");
/// })
/// .unwrap_err();
/// assert!(cause.to_string().ends_with("checked in drop"));
///
/// let outer = failure_from!(cause, Kind::Runtime, "cleanup failed");
/// assert!(outer.trace().contains("checked in drop"));
/// ```
#[cfg(feature = "std")]
pub fn catch_panic<T>(f: impl FnOnce() -> T + std::panic::UnwindSafe) -> Result<T, Cause> {
    std::panic::catch_unwind(f).map_err(Cause::from_panic)
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        location::{LocationFormat, LocationStyle, PathStyle},
        sink::NullSink,
    };

    static TRAPS: AtomicUsize = AtomicUsize::new(0);

    fn count_trap() {
        TRAPS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_plain_raise() {
        let config = RaiseConfig::new()
            .with_location_format(LocationFormat::new(LocationStyle::Dash, PathStyle::Full));
        let failure = raise_with_location(
            &config,
            Kind::Logic,
            SourceLocation::new("a.rs", 1),
            String::from("broken"),
            None,
        );
        assert_eq!(failure.to_string(), "a.rs:1 - broken");
        assert_eq!(failure.kind(), Kind::Logic);
        assert!(failure.cause().is_none());
    }

    #[test]
    fn test_trap_then_raise() {
        let config = RaiseConfig::new()
            .with_trap_mode(TrapMode::TrapThenRaise)
            .with_sink(&NullSink)
            .with_trap(count_trap);
        let before = TRAPS.load(Ordering::SeqCst);
        let failure = raise_with_location(
            &config,
            Kind::Runtime,
            SourceLocation::new("b.rs", 2),
            String::from("trapped"),
            Some(Cause::Opaque(None)),
        );
        assert_eq!(TRAPS.load(Ordering::SeqCst), before + 1);
        assert_eq!(failure.message(), "trapped");
        assert!(failure.cause().is_some());
    }
}
