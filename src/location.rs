//! Source locations and how they are printed.

use core::fmt;

use crate::render::Render;

/// A file name and line number captured at a call site.
///
/// # Examples
///
/// ```
/// use faultline::SourceLocation;
///
/// let location = SourceLocation::new("src/main.rs", 42);
/// assert_eq!(location.to_string(), "[src/main.rs:42]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// The file, as produced by [`file!`].
    pub file: &'static str,
    /// The 1-based line, as produced by [`line!`].
    pub line: u32,
}

impl SourceLocation {
    /// Creates a location from its parts.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the caller, following `#[track_caller]` frames.
    #[track_caller]
    pub fn caller() -> Self {
        let location = core::panic::Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Pairs this location with a format for printing.
    pub const fn formatted(self, format: LocationFormat) -> FormattedLocation {
        FormattedLocation {
            location: self,
            format,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.formatted(LocationFormat::DEFAULT), f)
    }
}

impl Render for SourceLocation {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The punctuation around a printed location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocationStyle {
    /// `[file:line]`
    #[default]
    Bracketed,
    /// `file:line:`
    Colon,
    /// `(file:line)`
    Parenthesized,
    /// `file(line):`
    Msvc,
    /// `@file:line`
    At,
    /// `file:line -`
    Dash,
}

/// Which part of the file path is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// The path as captured.
    #[default]
    Full,
    /// Only the component after the last `/` or `\`.
    FileName,
    /// The path with this root prefix and the separators after it removed.
    ///
    /// Paths outside the root are printed in full.
    RelativeTo(&'static str),
}

impl PathStyle {
    /// Applies this style to `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultline::location::PathStyle;
    ///
    /// assert_eq!(PathStyle::FileName.apply("src/net/socket.rs"), "socket.rs");
    /// assert_eq!(PathStyle::FileName.apply(r"C:\build\main.rs"), "main.rs");
    /// assert_eq!(PathStyle::RelativeTo("/home/dev/app").apply("/home/dev/app/src/lib.rs"), "src/lib.rs");
    /// assert_eq!(PathStyle::RelativeTo("/opt").apply("/home/x.rs"), "/home/x.rs");
    /// ```
    pub fn apply(self, path: &str) -> &str {
        match self {
            PathStyle::Full => path,
            PathStyle::FileName => path
                .rfind(['/', '\\'])
                .map_or(path, |separator| &path[separator + 1..]),
            PathStyle::RelativeTo(root) => path
                .strip_prefix(root)
                .map_or(path, |rest| rest.trim_start_matches(['/', '\\'])),
        }
    }
}

/// How a [`SourceLocation`] is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocationFormat {
    /// Punctuation style.
    pub style: LocationStyle,
    /// Path style.
    pub path: PathStyle,
}

impl LocationFormat {
    /// `[file:line]` with the full path.
    pub const DEFAULT: Self = Self {
        style: LocationStyle::Bracketed,
        path: PathStyle::Full,
    };

    /// Creates a format from its parts.
    pub const fn new(style: LocationStyle, path: PathStyle) -> Self {
        Self { style, path }
    }
}

/// A [`SourceLocation`] printed with a [`LocationFormat`].
///
/// # Examples
///
/// ```
/// use faultline::{
///     SourceLocation,
///     location::{LocationFormat, LocationStyle, PathStyle},
/// };
///
/// let location = SourceLocation::new("/src/app/main.rs", 7);
/// let format = LocationFormat::new(LocationStyle::Msvc, PathStyle::FileName);
/// assert_eq!(location.formatted(format).to_string(), "main.rs(7):");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FormattedLocation {
    location: SourceLocation,
    format: LocationFormat,
}

impl fmt::Display for FormattedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.format.path.apply(self.location.file);
        let line = self.location.line;
        match self.format.style {
            LocationStyle::Bracketed => write!(f, "[{file}:{line}]"),
            LocationStyle::Colon => write!(f, "{file}:{line}:"),
            LocationStyle::Parenthesized => write!(f, "({file}:{line})"),
            LocationStyle::Msvc => write!(f, "{file}({line}):"),
            LocationStyle::At => write!(f, "@{file}:{line}"),
            LocationStyle::Dash => write!(f, "{file}:{line} -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_styles() {
        let location = SourceLocation::new("lib/io.rs", 12);
        let cases = [
            (LocationStyle::Bracketed, "[lib/io.rs:12]"),
            (LocationStyle::Colon, "lib/io.rs:12:"),
            (LocationStyle::Parenthesized, "(lib/io.rs:12)"),
            (LocationStyle::Msvc, "lib/io.rs(12):"),
            (LocationStyle::At, "@lib/io.rs:12"),
            (LocationStyle::Dash, "lib/io.rs:12 -"),
        ];
        for (style, expected) in cases {
            let format = LocationFormat::new(style, PathStyle::Full);
            assert_eq!(location.formatted(format).to_string(), expected);
        }
    }

    #[test]
    fn test_relative_paths() {
        let style = PathStyle::RelativeTo("/work/");
        assert_eq!(style.apply("/work/src/a.rs"), "src/a.rs");
        assert_eq!(PathStyle::RelativeTo("/work").apply("/work//src/a.rs"), "src/a.rs");
        assert_eq!(PathStyle::FileName.apply("plain.rs"), "plain.rs");
    }

    #[test]
    fn test_caller() {
        #[track_caller]
        fn here() -> SourceLocation {
            SourceLocation::caller()
        }

        let expected_line = line!() + 1;
        let location = here();
        assert_eq!(location.line, expected_line);
        assert_eq!(location.file, file!());
    }
}
