use core::fmt;

use crate::render::{Collection, Render};

/// Windowed, customisable rendering of a collection.
///
/// Elements `start_index..start_index + max_items` are rendered between
/// `prefix` and `suffix`, separated by `delimiter`. When elements remain
/// after the window, `ellipsis` is appended. In multi-line mode every
/// element goes on its own line preceded by `indent`.
///
/// # Examples
///
/// ```
/// use faultline::{format::Container, render};
///
/// let values = vec![1, 2, 3, 4, 5];
/// let text = render(
///     &Container::new(&values)
///         .max_items(3)
///         .start_index(1)
///         .prefix("<<")
///         .suffix(">>")
///         .delimiter(" | ")
///         .ellipsis("etc...")
///         .show_indices(true),
/// );
/// assert_eq!(text, "<<[1]: 2 | [2]: 3 | [3]: 4 | etc...>>");
///
/// let text = render(
///     &Container::new(&values)
///         .max_items(3)
///         .prefix("[\n")
///         .multiline(true)
///         .indent("    "),
/// );
/// assert_eq!(text, "[\n\n    1, \n    2, \n    3, \n    ...\n]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Container<'a, C> {
    /// The collection to render.
    pub payload: C,
    /// Maximum number of elements shown.
    pub max_items: usize,
    /// Index of the first element shown.
    pub start_index: usize,
    /// Written before the elements.
    pub prefix: &'a str,
    /// Written after the elements.
    pub suffix: &'a str,
    /// Written between elements.
    pub delimiter: &'a str,
    /// Written when elements remain after the window.
    pub ellipsis: &'a str,
    /// Whether each element is preceded by `[index]: `.
    pub show_indices: bool,
    /// Whether each element goes on its own line.
    pub multiline: bool,
    /// Written before each element in multi-line mode.
    pub indent: &'a str,
}

/// Renders at most `max_items` elements of `payload`.
///
/// A `max_items` of zero means no limit. Every collection, including sets
/// and maps, is enclosed in square brackets.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use faultline::{format::container, render};
///
/// assert_eq!(render(&container(vec![1, 2, 3, 4, 5], 2)), "[1, 2, ...]");
/// assert_eq!(render(&container(vec![1, 2, 3], 0)), "[1, 2, 3]");
/// assert_eq!(render(&container(BTreeSet::from([1, 2, 3]), 1)), "[1, ...]");
/// ```
pub fn container<C: Collection>(payload: C, max_items: usize) -> Container<'static, C> {
    Container {
        payload,
        max_items: if max_items == 0 { usize::MAX } else { max_items },
        start_index: 0,
        prefix: "[",
        suffix: "]",
        delimiter: ", ",
        ellipsis: "...",
        show_indices: false,
        multiline: false,
        indent: "  ",
    }
}

impl<'a, C: Collection> Container<'a, C> {
    /// Wraps `payload` with default options and no element limit.
    pub fn new(payload: C) -> Self {
        container(payload, 0)
    }

    /// Sets the maximum number of elements shown.
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Sets the index of the first element shown.
    #[must_use]
    pub fn start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Sets the text written before the elements.
    #[must_use]
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the text written after the elements.
    #[must_use]
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Sets the text written between elements.
    #[must_use]
    pub fn delimiter(mut self, delimiter: &'a str) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the text written when elements remain after the window.
    #[must_use]
    pub fn ellipsis(mut self, ellipsis: &'a str) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Sets whether elements are preceded by their index.
    #[must_use]
    pub fn show_indices(mut self, show_indices: bool) -> Self {
        self.show_indices = show_indices;
        self
    }

    /// Sets whether each element goes on its own line.
    #[must_use]
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Sets the text written before each element in multi-line mode.
    #[must_use]
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent = indent;
        self
    }
}

impl<C: Collection> Render for Container<'_, C> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.payload.item_count();
        if self.start_index >= size {
            f.write_str(self.prefix)?;
            return f.write_str(self.suffix);
        }

        let shown = self.max_items.min(size - self.start_index);
        let truncated = self.start_index + shown < size;

        f.write_str(self.prefix)?;
        if self.multiline && shown > 0 {
            f.write_str("\n")?;
        }

        let mut offset = 0;
        self.payload.visit_items(self.start_index, shown, &mut |item| {
            if offset > 0 {
                f.write_str(self.delimiter)?;
                if self.multiline {
                    f.write_str("\n")?;
                }
            }
            if self.multiline {
                f.write_str(self.indent)?;
            }
            if self.show_indices {
                write!(f, "[{}]: ", self.start_index + offset)?;
            }
            offset += 1;
            item.render(f)
        })?;

        if truncated {
            if shown > 0 {
                f.write_str(self.delimiter)?;
                if self.multiline {
                    f.write_str("\n")?;
                    f.write_str(self.indent)?;
                }
            }
            f.write_str(self.ellipsis)?;
        }
        if self.multiline && (shown > 0 || truncated) {
            f.write_str("\n")?;
        }
        f.write_str(self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        collections::{BTreeMap, BTreeSet},
        vec,
        vec::Vec,
    };

    use super::*;
    use crate::render::render;

    #[test]
    fn test_window() {
        let values = vec![1, 2, 3, 4, 5];
        assert_eq!(render(&Container::new(&values).start_index(3).max_items(10)), "[4, 5]");
        assert_eq!(render(&Container::new(&values).start_index(5)), "[]");
        assert_eq!(render(&Container::new(&values).max_items(5)), "[1, 2, 3, 4, 5]");
        assert_eq!(render(&container(Vec::<i32>::new(), 3)), "[]");
    }

    #[test]
    fn test_zero_items_shown() {
        let values = vec![1, 2];
        assert_eq!(render(&Container::new(&values).max_items(0)), "[...]");
        assert_eq!(
            render(&Container::new(&values).max_items(0).multiline(true)),
            "[...\n]"
        );
    }

    #[test]
    fn test_maps_and_indices() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);
        assert_eq!(render(&container(&map, 2)), "[a: 1, b: 2, ...]");
        assert_eq!(
            render(&Container::new(&map).show_indices(true).start_index(1)),
            "[[1]: b: 2, [2]: c: 3]"
        );
    }

    #[test]
    fn test_sets_use_square_brackets() {
        let set = BTreeSet::from([1, 2, 3]);
        assert_eq!(render(&container(&set, 2)), "[1, 2, ...]");
        assert_eq!(render(&Container::new(&set)), "[1, 2, 3]");
        assert_eq!(render(&set), "{1, 2, 3}");
    }

    #[test]
    fn test_large_collection_is_truncated() {
        let values: Vec<i32> = (0..1000).collect();
        let text = render(&container(&values, 10));
        assert_eq!(text, "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ...]");
        assert!(text.contains('9'));
        assert!(text.contains("..."));
        assert!(!text.contains("999"));
    }

    #[test]
    fn test_multiline_without_truncation() {
        let values = vec!["x", "y"];
        assert_eq!(
            render(&Container::new(&values).multiline(true)),
            "[\n  x, \n  y\n]"
        );
    }
}
