/// Captures the source location of the macro invocation.
///
/// # Examples
///
/// ```
/// let here = faultline::location!();
/// assert!(here.file.ends_with(".rs"));
/// assert!(here.line > 0);
/// ```
#[macro_export]
macro_rules! location {
    () => {
        $crate::location::SourceLocation::new(::core::file!(), ::core::line!())
    };
}

/// Concatenates the rendered arguments into a single message.
///
/// Every argument is rendered and followed by one space, and the final
/// trailing space is removed. Arguments that implement [`Render`] use their
/// rendered form; anything else that implements [`Display`] is accepted as
/// well.
///
/// [`Render`]: crate::render::Render
/// [`Display`]: core::fmt::Display
///
/// # Examples
///
/// ```
/// use faultline::build_message;
///
/// assert_eq!(build_message!(), "");
/// assert_eq!(build_message!("Value:", 42, "is", true), "Value: 42 is true");
/// assert_eq!(build_message!("items", vec![1, 2, 3]), "items [1, 2, 3]");
/// assert_eq!(build_message!("", "x"), " x");
/// ```
#[macro_export]
macro_rules! build_message {
    () => {
        $crate::__private::String::new()
    };
    ($($arg:expr),+ $(,)?) => {
        {
            use $crate::__private::kind::*;
            let mut builder = $crate::message::MessageBuilder::new();
            $((&&Wrap(&$arg)).push_to(&mut builder);)+
            builder.finish()
        }
    };
}

/// Checks that a value is truthy.
///
/// Expands to an [`Enforcer`] using the [`Truth`] predicate and the
/// installed [`DefaultRaiser`]. The expression text is the stringified
/// argument.
///
/// [`Enforcer`]: crate::enforce::Enforcer
/// [`Truth`]: crate::enforce::predicate::Truth
/// [`DefaultRaiser`]: crate::enforce::raiser::DefaultRaiser
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// let count = enforce!(5).into_result().unwrap();
/// assert_eq!(count, 5);
///
/// let failure = enforce!(false).message("bad").into_result().unwrap_err();
/// assert!(failure.to_string().contains("bad"));
/// ```
#[macro_export]
macro_rules! enforce {
    ($value:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::Truth,
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::stringify!($value),
        )
    };
}

/// Like [`enforce!`], but raises failures of the given [`Kind`].
///
/// [`Kind`]: crate::failure::Kind
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// let failure = enforce_kind!(1 > 2, Kind::Logic).into_result().unwrap_err();
/// assert_eq!(failure.kind(), Kind::Logic);
/// ```
#[macro_export]
macro_rules! enforce_kind {
    ($value:expr, $kind:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::Truth,
            $crate::enforce::raiser::KindRaiser::installed($kind),
            $crate::location!(),
            ::core::stringify!($value),
        )
    };
}

/// Like [`enforce!`], but traps and terminates the process on failure.
#[macro_export]
macro_rules! enforce_trap {
    ($value:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::Truth,
            $crate::enforce::raiser::TrapRaiser::installed(),
            $crate::location!(),
            ::core::stringify!($value),
        )
    };
}

/// Checks that `value == expected`.
///
/// The enforcer holds `value`.
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// let failure = enforce_eq!(1 + 1, 3).into_result().unwrap_err();
/// assert!(failure.to_string().contains("1 + 1 == 3"));
/// assert!(failure.to_string().contains("Values must be equal"));
/// ```
#[macro_export]
macro_rules! enforce_eq {
    ($value:expr, $expected:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::Equals($expected),
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(::core::stringify!($value), " == ", ::core::stringify!($expected)),
        )
    };
}

/// Checks that `value != expected`.
#[macro_export]
macro_rules! enforce_ne {
    ($value:expr, $expected:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::NotEquals($expected),
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(::core::stringify!($value), " != ", ::core::stringify!($expected)),
        )
    };
}

/// Checks that `value < bound`.
#[macro_export]
macro_rules! enforce_lt {
    ($value:expr, $bound:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::LessThan($bound),
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(::core::stringify!($value), " < ", ::core::stringify!($bound)),
        )
    };
}

/// Checks that `value > bound`.
#[macro_export]
macro_rules! enforce_gt {
    ($value:expr, $bound:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::GreaterThan($bound),
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(::core::stringify!($value), " > ", ::core::stringify!($bound)),
        )
    };
}

/// Checks that `value <= bound`.
///
/// The comparison is evaluated once and the enforcer holds its boolean
/// result.
#[macro_export]
macro_rules! enforce_le {
    ($value:expr, $bound:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            ($value) <= ($bound),
            $crate::enforce::predicate::Truth,
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(::core::stringify!($value), " <= ", ::core::stringify!($bound)),
        )
    };
}

/// Checks that `value >= bound`.
///
/// The comparison is evaluated once and the enforcer holds its boolean
/// result.
#[macro_export]
macro_rules! enforce_ge {
    ($value:expr, $bound:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            ($value) >= ($bound),
            $crate::enforce::predicate::Truth,
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(::core::stringify!($value), " >= ", ::core::stringify!($bound)),
        )
    };
}

/// Checks that `lower <= value <= upper`.
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// assert_eq!(enforce_in_range!(10, 1, 10).into_result().unwrap(), 10);
/// let failure = enforce_in_range!(11, 1, 10).into_result().unwrap_err();
/// assert!(failure.to_string().contains("11 in [1, 10]"));
/// ```
#[macro_export]
macro_rules! enforce_in_range {
    ($value:expr, $lower:expr, $upper:expr $(,)?) => {
        $crate::enforce::Enforcer::check(
            $value,
            $crate::enforce::predicate::InRange {
                lower: $lower,
                upper: $upper,
            },
            $crate::enforce::raiser::DefaultRaiser::installed(),
            $crate::location!(),
            ::core::concat!(
                ::core::stringify!($value),
                " in [",
                ::core::stringify!($lower),
                ", ",
                ::core::stringify!($upper),
                "]"
            ),
        )
    };
}

/// Checks that a pointer-like value is not null.
///
/// The failure message is `Null pointer: <expression>`.
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// let missing: *const u8 = core::ptr::null();
/// let failure = enforce_not_null!(missing).into_result().unwrap_err();
/// assert!(failure.to_string().ends_with("Null pointer: missing"));
/// ```
#[macro_export]
macro_rules! enforce_not_null {
    ($pointer:expr $(,)?) => {
        $crate::enforce!($pointer).message(::core::concat!("Null pointer: ", ::core::stringify!($pointer)))
    };
}

/// Checks that `0 <= index < size`.
///
/// The failure message is `Index out of bounds: <index> not in [0, <size>)`.
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// let failure = enforce_valid_index!(5usize, 3usize).into_result().unwrap_err();
/// assert!(failure.to_string().ends_with("Index out of bounds: 5 not in [0, 3)"));
/// ```
#[macro_export]
macro_rules! enforce_valid_index {
    ($index:expr, $size:expr $(,)?) => {
        $crate::enforce::valid_index(
            $index,
            $size,
            $crate::location!(),
            ::core::concat!("0 <= ", ::core::stringify!($index), " < ", ::core::stringify!($size)),
        )
    };
}

/// Like [`enforce_trap!`], but only evaluated when `debug_assertions` are
/// enabled.
///
/// In release builds the argument is not evaluated at all.
#[macro_export]
macro_rules! debug_enforce {
    ($value:expr $(,)?) => {
        if ::core::cfg!(debug_assertions) {
            let _ = $crate::enforce_trap!($value).into_result();
        }
    };
}

/// Builds a [`Failure`] of the given [`Kind`] at the current location.
///
/// The message is assembled from the remaining arguments exactly like
/// [`build_message!`]. The installed [`TrapMode`] applies.
///
/// [`Failure`]: crate::failure::Failure
/// [`Kind`]: crate::failure::Kind
/// [`TrapMode`]: crate::config::TrapMode
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// let failure = failure!(Kind::Length, "buffer holds", 3, "bytes");
/// assert_eq!(failure.kind(), Kind::Length);
/// assert_eq!(failure.message(), "buffer holds 3 bytes");
/// ```
#[macro_export]
macro_rules! failure {
    ($kind:expr $(, $arg:expr)* $(,)?) => {
        $crate::failure::raise_with_location(
            $crate::config::RaiseConfig::current(),
            $kind,
            $crate::location!(),
            $crate::build_message!($($arg),*),
            ::core::option::Option::None,
        )
    };
}

/// Like [`failure!`], but records `cause` as the failure being handled.
#[macro_export]
macro_rules! failure_from {
    ($cause:expr, $kind:expr $(, $arg:expr)* $(,)?) => {
        $crate::failure::raise_with_location(
            $crate::config::RaiseConfig::current(),
            $kind,
            $crate::location!(),
            $crate::build_message!($($arg),*),
            ::core::option::Option::Some(::core::convert::Into::<$crate::failure::Cause>::into($cause)),
        )
    };
}

/// Return early with a [`Failure`].
///
/// This is equivalent to writing `return Err(failure!(...).into());`
///
/// [`Failure`]: crate::failure::Failure
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// fn withdraw(balance: u32, amount: u32) -> Result<u32, Failure> {
///     if amount > balance {
///         raise!(Kind::Domain, "cannot withdraw", amount, "from", balance);
///     }
///     Ok(balance - amount)
/// }
///
/// assert_eq!(withdraw(10, 3).unwrap(), 7);
/// assert_eq!(withdraw(3, 10).unwrap_err().message(), "cannot withdraw 10 from 3");
/// ```
#[macro_export]
macro_rules! raise {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::failure!($($args)*).into())
    };
}

/// Return early with a [`Failure`] caused by `cause`.
///
/// [`Failure`]: crate::failure::Failure
#[macro_export]
macro_rules! raise_from {
    ($($args:tt)*) => {
        return $crate::__private::Err($crate::failure_from!($($args)*).into())
    };
}

/// Return early with a [`Failure`] when `condition` holds.
///
/// [`Failure`]: crate::failure::Failure
#[macro_export]
macro_rules! raise_if {
    ($condition:expr, $($args:tt)*) => {
        if $condition {
            $crate::raise!($($args)*);
        }
    };
}

/// Return early with a [`Failure`] unless `condition` holds.
///
/// [`Failure`]: crate::failure::Failure
#[macro_export]
macro_rules! raise_unless {
    ($condition:expr, $($args:tt)*) => {
        if !($condition) {
            $crate::raise!($($args)*);
        }
    };
}

/// Reports a trap banner, triggers the configured trap and terminates.
#[macro_export]
macro_rules! trap {
    ($($arg:expr),* $(,)?) => {
        $crate::trap::trap_and_terminate(
            $crate::config::RaiseConfig::current(),
            $crate::location!(),
            &$crate::build_message!($($arg),*),
        )
    };
}

/// Like [`trap!`], but only when `condition` holds.
#[macro_export]
macro_rules! trap_if {
    ($condition:expr $(, $arg:expr)* $(,)?) => {
        if $condition {
            $crate::trap!($($arg),*);
        }
    };
}

/// Like [`trap!`], but only when `condition` does not hold.
#[macro_export]
macro_rules! trap_unless {
    ($condition:expr $(, $arg:expr)* $(,)?) => {
        if !($condition) {
            $crate::trap!($($arg),*);
        }
    };
}

/// Implements [`Render`] for types through their [`Display`] implementation.
///
/// [`Render`]: crate::render::Render
/// [`Display`]: core::fmt::Display
///
/// # Examples
///
/// ```
/// use core::fmt;
///
/// struct Version(u32, u32);
///
/// impl fmt::Display for Version {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "v{}.{}", self.0, self.1)
///     }
/// }
///
/// faultline::render_via_display!(Version);
///
/// assert_eq!(faultline::render(&[Version(1, 2)]), "[v1.2]");
/// ```
#[macro_export]
macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::render::Render for $ty {
                fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}
