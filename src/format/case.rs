use core::fmt;

use crate::render::{Render, render};

/// Renders the payload, then converts the text to upper case.
///
/// # Examples
///
/// ```
/// use faultline::{format::upper, render};
///
/// assert_eq!(render(&upper("hello world")), "HELLO WORLD");
/// assert_eq!(render(&upper(true)), "TRUE");
/// assert_eq!(render(&upper(vec!["a", "b"])), "[A, B]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Upper<T>(pub T);

/// Renders the payload, then converts the text to lower case.
#[derive(Clone, Copy, Debug)]
pub struct Lower<T>(pub T);

/// Wraps `value` in [`Upper`].
pub fn upper<T: Render>(value: T) -> Upper<T> {
    Upper(value)
}

/// Wraps `value` in [`Lower`].
pub fn lower<T: Render>(value: T) -> Lower<T> {
    Lower(value)
}

impl<T: Render> Render for Upper<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.0).to_uppercase())
    }
}

impl<T: Render> Render for Lower<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.0).to_lowercase())
    }
}
