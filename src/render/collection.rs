//! Sequences, sets and maps.

use alloc::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
    vec::Vec,
};
use core::fmt;

use super::Render;

/// How a collection is delimited when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered elements, rendered as `[a, b]`.
    Sequence,
    /// Unique elements, rendered as `{a, b}`.
    Set,
    /// Key/value entries, rendered as `{k: v}`.
    Map,
}

impl Shape {
    /// The default opening and closing delimiters.
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Shape::Sequence => ("[", "]"),
            Shape::Set | Shape::Map => ("{", "}"),
        }
    }
}

/// A single element visited while rendering a [`Collection`].
#[derive(Clone, Copy)]
pub enum Item<'a> {
    /// An element of a sequence or set.
    Element(&'a dyn Render),
    /// A map entry, rendered as `key: value`.
    Entry(&'a dyn Render, &'a dyn Render),
}

impl Render for Item<'_> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Element(element) => element.render(f),
            Item::Entry(key, value) => {
                key.render(f)?;
                f.write_str(": ")?;
                value.render(f)
            }
        }
    }
}

/// A finite container whose elements can be rendered in iteration order.
///
/// Implementing this trait is what makes a container usable with
/// [`Container`](crate::format::Container). Most implementors also implement
/// [`Render`] by delegating to [`render_collection`].
pub trait Collection {
    /// How the collection is delimited.
    const SHAPE: Shape;

    /// Number of elements.
    fn item_count(&self) -> usize;

    /// Visits at most `take` elements after skipping the first `skip`.
    ///
    /// Stops at the first error returned by `visit`.
    fn visit_items(
        &self,
        skip: usize,
        take: usize,
        visit: &mut dyn FnMut(Item<'_>) -> fmt::Result,
    ) -> fmt::Result;
}

/// Renders every element of a collection with its default delimiters.
///
/// # Examples
///
/// ```
/// use core::fmt;
///
/// use faultline::render::{Collection, Item, Render, Shape, render, render_collection};
///
/// struct Ports(Vec<u16>);
///
/// impl Collection for Ports {
///     const SHAPE: Shape = Shape::Set;
///
///     fn item_count(&self) -> usize {
///         self.0.len()
///     }
///
///     fn visit_items(
///         &self,
///         skip: usize,
///         take: usize,
///         visit: &mut dyn FnMut(Item<'_>) -> fmt::Result,
///     ) -> fmt::Result {
///         self.0.iter().skip(skip).take(take).try_for_each(|port| visit(Item::Element(port)))
///     }
/// }
///
/// impl Render for Ports {
///     fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         render_collection(self, f)
///     }
/// }
///
/// assert_eq!(render(&Ports(vec![80, 443])), "{80, 443}");
/// ```
pub fn render_collection<C>(collection: &C, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    C: Collection + ?Sized,
{
    let (open, close) = C::SHAPE.delimiters();
    f.write_str(open)?;
    let mut first = true;
    collection.visit_items(0, usize::MAX, &mut |item| {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        item.render(f)
    })?;
    f.write_str(close)
}

impl<C: Collection + ?Sized> Collection for &C {
    const SHAPE: Shape = C::SHAPE;

    fn item_count(&self) -> usize {
        C::item_count(self)
    }

    fn visit_items(
        &self,
        skip: usize,
        take: usize,
        visit: &mut dyn FnMut(Item<'_>) -> fmt::Result,
    ) -> fmt::Result {
        C::visit_items(self, skip, take, visit)
    }
}

macro_rules! element_collection {
    ($shape:ident: $([$($params:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($params)*> Collection for $ty {
                const SHAPE: Shape = Shape::$shape;

                fn item_count(&self) -> usize {
                    self.len()
                }

                fn visit_items(
                    &self,
                    skip: usize,
                    take: usize,
                    visit: &mut dyn FnMut(Item<'_>) -> fmt::Result,
                ) -> fmt::Result {
                    self.iter()
                        .skip(skip)
                        .take(take)
                        .try_for_each(|element| visit(Item::Element(element)))
                }
            }

            impl<$($params)*> Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    render_collection(self, f)
                }
            }
        )*
    };
}

macro_rules! entry_collection {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($params)*> Collection for $ty {
                const SHAPE: Shape = Shape::Map;

                fn item_count(&self) -> usize {
                    self.len()
                }

                fn visit_items(
                    &self,
                    skip: usize,
                    take: usize,
                    visit: &mut dyn FnMut(Item<'_>) -> fmt::Result,
                ) -> fmt::Result {
                    self.iter()
                        .skip(skip)
                        .take(take)
                        .try_for_each(|(key, value)| visit(Item::Entry(key, value)))
                }
            }

            impl<$($params)*> Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    render_collection(self, f)
                }
            }
        )*
    };
}

element_collection!(Sequence:
    [T: Render] [T],
    [T: Render, const N: usize] [T; N],
    [T: Render] Vec<T>,
    [T: Render] VecDeque<T>,
    [T: Render] LinkedList<T>,
    [T: Render] BinaryHeap<T>,
);

element_collection!(Set:
    [T: Render] BTreeSet<T>,
    [T: Render, S] hashbrown::HashSet<T, S>,
    [T: Render, S] indexmap::IndexSet<T, S>,
);

entry_collection!(
    [K: Render, V: Render] BTreeMap<K, V>,
    [K: Render, V: Render, S] hashbrown::HashMap<K, V, S>,
    [K: Render, V: Render, S] indexmap::IndexMap<K, V, S>,
);

#[cfg(feature = "std")]
element_collection!(Set:
    [T: Render, S] std::collections::HashSet<T, S>,
);

#[cfg(feature = "std")]
entry_collection!(
    [K: Render, V: Render, S] std::collections::HashMap<K, V, S>,
);

#[cfg(test)]
mod tests {
    use alloc::{
        collections::{BTreeMap, BTreeSet, VecDeque},
        string::String,
        vec,
        vec::Vec,
    };
    use core::time::Duration;

    use super::*;
    use crate::render::render;

    #[test]
    fn test_sequences() {
        assert_eq!(render(&vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(render(&Vec::<i32>::new()), "[]");
        assert_eq!(render(&[true, false]), "[true, false]");
        assert_eq!(render(&VecDeque::from([4, 5])), "[4, 5]");
        assert_eq!(render(&vec!["a", "b"][..]), "[a, b]");
    }

    #[test]
    fn test_sets_and_maps() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(render(&set), "{1, 2, 3}");

        let mut map = BTreeMap::new();
        map.insert(String::from("one"), 1);
        map.insert(String::from("two"), 2);
        assert_eq!(render(&map), "{one: 1, two: 2}");
        assert_eq!(render(&BTreeMap::<i32, i32>::new()), "{}");
    }

    #[test]
    fn test_insertion_ordered_containers() {
        let mut map = indexmap::IndexMap::new();
        map.insert("zeta", vec![1]);
        map.insert("alpha", vec![2, 3]);
        assert_eq!(render(&map), "{zeta: [1], alpha: [2, 3]}");

        let set: indexmap::IndexSet<char> = ['c', 'a', 'b'].into_iter().collect();
        assert_eq!(render(&set), "{c, a, b}");
    }

    #[test]
    fn test_nested() {
        let nested = vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]];
        assert_eq!(render(&nested), "[[[1, 2], [3, 4]], [[5, 6], [7, 8]]]");

        let mut groups = BTreeMap::new();
        groups.insert("evens", BTreeSet::from([2, 4, 6]));
        groups.insert("odds", BTreeSet::from([1, 3, 5]));
        assert_eq!(render(&groups), "{evens: {2, 4, 6}, odds: {1, 3, 5}}");

        let durations = vec![
            Duration::from_millis(100),
            Duration::from_millis(250),
            Duration::from_millis(500),
        ];
        assert_eq!(render(&durations), "[100ms, 250ms, 500ms]");
    }

    #[test]
    fn test_visit_window() {
        let values = vec![10, 20, 30, 40];
        let mut seen = Vec::new();
        values
            .visit_items(1, 2, &mut |item| {
                seen.push(render(&item));
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, ["20", "30"]);
        assert_eq!((&values).item_count(), 4);
        assert_eq!(<&Vec<i32> as Collection>::SHAPE, Shape::Sequence);
    }
}
