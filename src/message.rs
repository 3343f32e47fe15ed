//! Message assembly from heterogeneous values.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::render::{Render, Rendered};

/// Incrementally concatenates rendered values, one space after each.
///
/// This is what [`build_message!`](crate::build_message) expands to.
///
/// # Examples
///
/// ```
/// use faultline::message::MessageBuilder;
///
/// let mut builder = MessageBuilder::new();
/// builder.push(&"Value:");
/// builder.push(&42);
/// builder.push_display(&std::net::Ipv4Addr::LOCALHOST);
/// assert_eq!(builder.finish(), "Value: 42 127.0.0.1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageBuilder {
    buffer: String,
}

impl MessageBuilder {
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Appends the rendered form of `value` and a space.
    pub fn push<T: Render + ?Sized>(&mut self, value: &T) {
        self.append(format_args!("{} ", Rendered(value)));
    }

    /// Appends the [`Display`](core::fmt::Display) form of `value` and a
    /// space.
    pub fn push_display<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        self.append(format_args!("{value} "));
    }

    fn append(&mut self, arguments: fmt::Arguments<'_>) {
        // A failing `Render` impl leaves whatever it wrote so far.
        let _ = self.buffer.write_fmt(arguments);
    }

    /// Returns the message with the final trailing space removed.
    pub fn finish(mut self) -> String {
        if self.buffer.ends_with(' ') {
            self.buffer.pop();
        }
        self.buffer
    }
}

/// Concatenates the rendered forms of `parts`, separated by single spaces.
///
/// Empty parts still contribute their separator, so `["", "x"]` produces
/// `" x"`.
///
/// # Examples
///
/// ```
/// use faultline::build_message;
///
/// assert_eq!(build_message(&[&"Value:", &42, &"is", &true]), "Value: 42 is true");
/// assert_eq!(build_message(&[]), "");
/// ```
pub fn build_message(parts: &[&dyn Render]) -> String {
    let mut builder = MessageBuilder::new();
    for part in parts {
        builder.push(*part);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use alloc::{collections::BTreeMap, vec};

    use super::*;
    use crate::format::{hex, upper};

    #[test]
    fn test_spacing() {
        assert_eq!(build_message(&[&"Hello", &"World"]), "Hello World");
        assert_eq!(build_message(&[&"single"]), "single");
        assert_eq!(build_message(&[&"", &"x"]), " x");
        assert_eq!(build_message(&[&"x", &""]), "x ");
        assert_eq!(build_message(&[&"trailing "]), "trailing ");
    }

    #[test]
    fn test_mixed_arguments() {
        let values = vec![1, 2, 3];
        let mut map = BTreeMap::new();
        map.insert("k", false);
        assert_eq!(
            build_message!("Vector:", values, "map:", map, "code", hex(48879), upper("ok")),
            "Vector: [1, 2, 3] map: {k: false} code 0xbeef OK"
        );
    }

    #[test]
    fn test_display_only_arguments() {
        struct Token;

        impl fmt::Display for Token {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("<token>")
            }
        }

        assert_eq!(build_message!("got", Token, "and", 3), "got <token> and 3");
    }
}
