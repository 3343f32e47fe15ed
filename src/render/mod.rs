//! Conversion of typed values into human-readable text.
//!
//! # Overview
//!
//! The [`Render`] trait is the single entry point used by the message builder,
//! the formatting wrappers and the enforcement engine. Every supported type
//! category has one fixed textual form:
//!
//! | Category                          | Form                                         |
//! |-----------------------------------|----------------------------------------------|
//! | `bool`                            | `true` / `false`                             |
//! | integers, floats, `char`, strings | their [`Display`] form                       |
//! | raw pointers                      | `nullptr` or `0x` followed by lowercase hex  |
//! | paths                             | the path string                              |
//! | durations                         | count and unit suffix (`100ms`, `2h`)        |
//! | time points                       | `YYYY-MM-DDTHH:MM:SS.mmmZ` (UTC)             |
//! | `Option`                          | the payload or `nullopt`                     |
//! | `Result`, `Either`                | the active alternative                       |
//! | sequences                         | `[a, b, c]`                                  |
//! | sets                              | `{a, b, c}`                                  |
//! | maps                              | `{k1: v1, k2: v2}`                           |
//! | tuples                            | `(a, b, c)`                                  |
//!
//! Rendering is recursive: the elements of a collection or tuple are
//! rendered with the same rules, so nested containers compose naturally.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use faultline::render;
//!
//! let mut groups = BTreeMap::new();
//! groups.insert("evens", vec![2, 4, 6]);
//! groups.insert("odds", vec![1, 3, 5]);
//! assert_eq!(render(&groups), "{evens: [2, 4, 6], odds: [1, 3, 5]}");
//! ```
//!
//! # Extending
//!
//! Types outside this crate opt in by implementing [`Render`]. Types that
//! already have a suitable [`Display`] implementation can use
//! [`render_via_display!`](crate::render_via_display).
//!
//! [`Display`]: core::fmt::Display

use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    rc::Rc,
    string::{String, ToString},
    sync::Arc,
};
use core::fmt;

mod collection;
mod pointer;
mod sum;
mod text;
mod time;
mod tuple;

pub use self::{
    collection::{Collection, Item, Shape, render_collection},
    sum::Monostate,
    text::{Utf16, Utf32},
    time::{Ticks, TimeUnit},
};
#[cfg(feature = "std")]
pub use self::time::process_epoch;

/// A value with a human-readable textual form.
///
/// # Examples
///
/// ```
/// use core::fmt;
///
/// use faultline::{Render, render};
///
/// struct Celsius(f64);
///
/// impl Render for Celsius {
///     fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// assert_eq!(render(&vec![Celsius(21.5), Celsius(-3.0)]), "[21.5°C, -3°C]");
/// ```
pub trait Render {
    /// Writes the textual form of `self` into `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Renders a value into a freshly allocated string.
///
/// # Examples
///
/// ```
/// use faultline::render;
///
/// assert_eq!(render(&true), "true");
/// assert_eq!(render(&Some(3)), "3");
/// assert_eq!(render(&None::<i32>), "nullopt");
/// assert_eq!(render(&(1, "one", false)), "(1, one, false)");
/// ```
pub fn render<T: Render + ?Sized>(value: &T) -> String {
    Rendered(value).to_string()
}

/// Adapter implementing [`Display`](core::fmt::Display) for any [`Render`]
/// value.
///
/// # Examples
///
/// ```
/// use faultline::render::Rendered;
///
/// let text = format!("got {}", Rendered(&[1, 2]));
/// assert_eq!(text, "got [1, 2]");
/// ```
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl<T: Render + ?Sized> fmt::Debug for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, str, String,
);

impl Render for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if *self { "true" } else { "false" })
    }
}

impl Render for fmt::Arguments<'_> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(*self)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::render(*self, f)
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::render(*self, f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::render(self, f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::render(self, f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::render(self, f)
    }
}

impl<B> Render for Cow<'_, B>
where
    B: Render + ToOwned + ?Sized,
{
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        B::render(self, f)
    }
}
