use core::{char::REPLACEMENT_CHARACTER, fmt, fmt::Write as _};

use super::Render;

/// A UTF-16 code unit sequence rendered as text.
///
/// Unpaired surrogates are rendered as U+FFFD.
///
/// # Examples
///
/// ```
/// use faultline::{render, render::Utf16};
///
/// let wide: Vec<u16> = "héllo".encode_utf16().collect();
/// assert_eq!(render(&Utf16(&wide)), "héllo");
/// assert_eq!(render(&Utf16([0xD800u16, 0x41])), "\u{FFFD}A");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Utf16<S>(pub S);

/// A sequence of Unicode scalar values rendered as text.
///
/// Values that are not scalar values are rendered as U+FFFD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Utf32<S>(pub S);

impl<S: AsRef<[u16]>> Render for Utf16<S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        char::decode_utf16(self.0.as_ref().iter().copied())
            .try_for_each(|unit| f.write_char(unit.unwrap_or(REPLACEMENT_CHARACTER)))
    }
}

impl<S: AsRef<[u32]>> Render for Utf32<S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .as_ref()
            .iter()
            .try_for_each(|&scalar| f.write_char(char::from_u32(scalar).unwrap_or(REPLACEMENT_CHARACTER)))
    }
}

#[cfg(feature = "std")]
mod os {
    use core::fmt;
    use std::{
        ffi::{OsStr, OsString},
        path::{Path, PathBuf},
    };

    use super::Render;

    impl Render for Path {
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.display(), f)
        }
    }

    impl Render for PathBuf {
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.as_path().render(f)
        }
    }

    impl Render for OsStr {
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.to_string_lossy())
        }
    }

    impl Render for OsString {
        fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.as_os_str().render(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::render::render;

    #[test]
    fn test_wide_strings() {
        let wide: Vec<u16> = "wide ✓".encode_utf16().collect();
        assert_eq!(render(&Utf16(wide)), "wide ✓");

        let scalars: Vec<u32> = "𝄞 clef".chars().map(u32::from).collect();
        assert_eq!(render(&Utf32(&scalars)), "𝄞 clef");
    }

    #[test]
    fn test_invalid_code_units() {
        assert_eq!(render(&Utf16([0x61u16, 0xDC00])), "a\u{FFFD}");
        assert_eq!(render(&Utf32([0x110000u32, 0x62])), "\u{FFFD}b");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_paths() {
        use std::{ffi::OsStr, path::PathBuf};

        let path = PathBuf::from("/tmp/data/config.toml");
        assert_eq!(render(&path), "/tmp/data/config.toml");
        assert_eq!(render(path.as_path()), "/tmp/data/config.toml");
        assert_eq!(render(OsStr::new("plain")), "plain");
    }
}
