//! Durations and time points.

use core::{fmt, ops::Neg, time::Duration};

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};

use super::Render;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// The unit a [`Ticks`] count is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// `ns`
    Nanoseconds,
    /// `us`
    Microseconds,
    /// `ms`
    Milliseconds,
    /// `s`
    Seconds,
    /// `min`
    Minutes,
    /// `h`
    Hours,
    /// A period without a standard suffix, rendered as `<count> ticks`.
    Custom,
}

impl TimeUnit {
    /// The suffix appended to a count in this unit, if it has one.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            TimeUnit::Nanoseconds => Some("ns"),
            TimeUnit::Microseconds => Some("us"),
            TimeUnit::Milliseconds => Some("ms"),
            TimeUnit::Seconds => Some("s"),
            TimeUnit::Minutes => Some("min"),
            TimeUnit::Hours => Some("h"),
            TimeUnit::Custom => None,
        }
    }

    const fn nanos(self) -> i128 {
        match self {
            TimeUnit::Nanoseconds | TimeUnit::Custom => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => NANOS_PER_SECOND,
            TimeUnit::Minutes => 60 * NANOS_PER_SECOND,
            TimeUnit::Hours => 3_600 * NANOS_PER_SECOND,
        }
    }
}

/// A signed count of time units.
///
/// This is the rendered form of every duration type. Durations are
/// normalised to the coarsest unit that represents them exactly.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
///
/// use faultline::{
///     render,
///     render::{Ticks, TimeUnit},
/// };
///
/// assert_eq!(render(&Duration::from_millis(100)), "100ms");
/// assert_eq!(render(&Duration::from_secs(7200)), "2h");
/// assert_eq!(render(&Duration::from_millis(1500)), "1500ms");
/// assert_eq!(render(&Ticks { count: 3, unit: TimeUnit::Custom }), "3 ticks");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticks {
    /// Number of units, negative for spans pointing backwards.
    pub count: i128,
    /// Unit of `count`.
    pub unit: TimeUnit,
}

impl Ticks {
    /// Expresses a nanosecond count in the coarsest exact unit.
    ///
    /// Zero is expressed in seconds.
    pub fn from_nanos(nanos: i128) -> Self {
        if nanos == 0 {
            return Ticks {
                count: 0,
                unit: TimeUnit::Seconds,
            };
        }

        [
            TimeUnit::Hours,
            TimeUnit::Minutes,
            TimeUnit::Seconds,
            TimeUnit::Milliseconds,
            TimeUnit::Microseconds,
        ]
        .into_iter()
        .find(|unit| nanos % unit.nanos() == 0)
        .map_or(
            Ticks {
                count: nanos,
                unit: TimeUnit::Nanoseconds,
            },
            |unit| Ticks {
                count: nanos / unit.nanos(),
                unit,
            },
        )
    }
}

impl Neg for Ticks {
    type Output = Ticks;

    fn neg(self) -> Ticks {
        Ticks {
            count: -self.count,
            unit: self.unit,
        }
    }
}

impl Render for Ticks {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit.suffix() {
            Some(suffix) => write!(f, "{}{suffix}", self.count),
            None => write!(f, "{} ticks", self.count),
        }
    }
}

impl From<Duration> for Ticks {
    fn from(duration: Duration) -> Self {
        Ticks::from_nanos(i128::try_from(duration.as_nanos()).unwrap_or(i128::MAX))
    }
}

impl From<TimeDelta> for Ticks {
    fn from(delta: TimeDelta) -> Self {
        let nanos =
            i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos());
        Ticks::from_nanos(nanos)
    }
}

impl Render for Duration {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ticks::from(*self).render(f)
    }
}

impl Render for TimeDelta {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ticks::from(*self).render(f)
    }
}

fn render_utc(instant: DateTime<Utc>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", instant.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}

impl<Tz: TimeZone> Render for DateTime<Tz> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_utc(self.with_timezone(&Utc), f)
    }
}

impl Render for NaiveDateTime {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_utc(self.and_utc(), f)
    }
}

/// Renders a point in time given as a signed offset from the Unix epoch.
///
/// Offsets outside the calendar range fall back to `<duration> since epoch`.
#[cfg(any(feature = "std", test))]
fn render_since_unix_epoch(nanos: i128, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let seconds = nanos.div_euclid(NANOS_PER_SECOND);
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND);
    let calendar = i64::try_from(seconds)
        .ok()
        .zip(u32::try_from(subsec).ok())
        .and_then(|(seconds, subsec)| DateTime::from_timestamp(seconds, subsec));
    match calendar {
        Some(instant) => render_utc(instant, f),
        None => {
            Ticks::from_nanos(nanos).render(f)?;
            f.write_str(" since epoch")
        }
    }
}

#[cfg(feature = "std")]
mod system {
    use core::fmt;
    use std::{
        sync::OnceLock,
        time::{Instant, SystemTime},
    };

    use super::{Render, Ticks, render_since_unix_epoch};

    /// The anchor `Instant` values are rendered relative to.
    ///
    /// The anchor is taken the first time this function is called, so it is
    /// stable for the lifetime of the process. [`RaiseConfig::install`] takes
    /// it; programs that never install a config should call this early in
    /// `main`, since an `Instant` captured before the anchor renders with a
    /// negative offset.
    ///
    /// [`RaiseConfig::install`]: crate::config::RaiseConfig::install
    pub fn process_epoch() -> Instant {
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        *EPOCH.get_or_init(Instant::now)
    }

    impl Render for SystemTime {
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let nanos = match self.duration_since(SystemTime::UNIX_EPOCH) {
                Ok(after) => i128::try_from(after.as_nanos()).unwrap_or(i128::MAX),
                Err(before) => -i128::try_from(before.duration().as_nanos()).unwrap_or(i128::MAX),
            };
            render_since_unix_epoch(nanos, f)
        }
    }

    /// Renders as the offset from [`process_epoch`], e.g. `1500ms since epoch`.
    impl Render for Instant {
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let epoch = process_epoch();
            let ticks = match self.checked_duration_since(epoch) {
                Some(after) => Ticks::from(after),
                None => -Ticks::from(epoch.duration_since(*self)),
            };
            ticks.render(f)?;
            f.write_str(" since epoch")
        }
    }
}

#[cfg(feature = "std")]
pub use self::system::process_epoch;

#[cfg(test)]
mod tests {
    use alloc::format;

    use chrono::{FixedOffset, NaiveDate};

    use super::*;
    use crate::render::render;

    #[test]
    fn test_coarsest_exact_unit() {
        assert_eq!(render(&Duration::from_millis(100)), "100ms");
        assert_eq!(render(&Duration::from_millis(250)), "250ms");
        assert_eq!(render(&Duration::from_secs(7200)), "2h");
        assert_eq!(render(&Duration::from_secs(120)), "2min");
        assert_eq!(render(&Duration::from_secs(90)), "90s");
        assert_eq!(render(&Duration::from_micros(1500)), "1500us");
        assert_eq!(render(&Duration::from_nanos(7)), "7ns");
        assert_eq!(render(&Duration::ZERO), "0s");
    }

    #[test]
    fn test_negative_delta() {
        assert_eq!(render(&TimeDelta::milliseconds(-1500)), "-1500ms");
        assert_eq!(render(&TimeDelta::seconds(-60)), "-1min");
        assert_eq!(render(&TimeDelta::zero()), "0s");
    }

    #[test]
    fn test_custom_period() {
        let ticks = Ticks {
            count: 42,
            unit: TimeUnit::Custom,
        };
        assert_eq!(render(&ticks), "42 ticks");
    }

    #[test]
    fn test_calendar_time_in_utc() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 5, 6, 789)
            .unwrap();
        assert_eq!(render(&naive), "2024-03-09T14:05:06.789Z");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = naive.and_utc().with_timezone(&offset);
        assert_eq!(render(&local), "2024-03-09T14:05:06.789Z");
    }

    #[test]
    fn test_unix_epoch_offsets() {
        struct AtOffset(i128);

        impl Render for AtOffset {
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                render_since_unix_epoch(self.0, f)
            }
        }

        assert_eq!(render(&AtOffset(0)), "1970-01-01T00:00:00.000Z");
        assert_eq!(render(&AtOffset(-1_000_000)), "1969-12-31T23:59:59.999Z");
        assert_eq!(render(&AtOffset(i128::MAX)), format!("{}ns since epoch", i128::MAX));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_system_time() {
        use std::time::SystemTime;

        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        assert_eq!(render(&time), "2023-11-14T22:13:20.123Z");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_instant_since_process_epoch() {
        let epoch = process_epoch();
        assert_eq!(render(&epoch), "0s since epoch");
        assert_eq!(render(&(epoch + Duration::from_millis(5))), "5ms since epoch");
    }
}
