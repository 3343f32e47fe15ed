//! Conditions an [`Enforcer`](super::Enforcer) checks.

use core::ptr::NonNull;

/// A condition on a value, with a description used in default messages.
///
/// # Examples
///
/// ```
/// use faultline::{
///     enforce::{Enforcer, predicate::Predicate, raiser::DefaultRaiser},
///     location,
/// };
///
/// struct Even;
///
/// impl Predicate<u32> for Even {
///     fn check(&self, value: &u32) -> bool {
///         value % 2 == 0
///     }
///
///     fn description(&self) -> &'static str {
///         "Value must be even"
///     }
/// }
///
/// let failure = Enforcer::check(7u32, Even, DefaultRaiser::installed(), location!(), "7")
///     .into_result()
///     .unwrap_err();
/// assert!(failure.to_string().ends_with("Enforcement failed: 7 - Value must be even"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Whether `value` satisfies the condition.
    fn check(&self, value: &T) -> bool;

    /// A fixed human-readable description of the condition.
    fn description(&self) -> &'static str;
}

/// Values with a natural notion of truth.
pub trait Truthy {
    /// Whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_integers {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: ?Sized> Truthy for *const T {
    fn is_truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> Truthy for *mut T {
    fn is_truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> Truthy for NonNull<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Truthy for Result<T, E> {
    fn is_truthy(&self) -> bool {
        self.is_ok()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        T::is_truthy(self)
    }
}

/// The value must be truthy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Truth;

impl<T: Truthy + ?Sized> Predicate<T> for Truth {
    fn check(&self, value: &T) -> bool {
        value.is_truthy()
    }

    fn description(&self) -> &'static str {
        "Expression must be true"
    }
}

/// The value must equal the payload.
#[derive(Clone, Copy, Debug)]
pub struct Equals<E>(pub E);

impl<T: PartialEq<E> + ?Sized, E> Predicate<T> for Equals<E> {
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }

    fn description(&self) -> &'static str {
        "Values must be equal"
    }
}

/// The value must differ from the payload.
#[derive(Clone, Copy, Debug)]
pub struct NotEquals<E>(pub E);

impl<T: PartialEq<E> + ?Sized, E> Predicate<T> for NotEquals<E> {
    fn check(&self, value: &T) -> bool {
        *value != self.0
    }

    fn description(&self) -> &'static str {
        "Values must not be equal"
    }
}

/// The value must be strictly less than the bound.
#[derive(Clone, Copy, Debug)]
pub struct LessThan<B>(pub B);

impl<T: PartialOrd<B> + ?Sized, B> Predicate<T> for LessThan<B> {
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }

    fn description(&self) -> &'static str {
        "Value must be less than bound"
    }
}

/// The value must be strictly greater than the bound.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan<B>(pub B);

impl<T: PartialOrd<B> + ?Sized, B> Predicate<T> for GreaterThan<B> {
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }

    fn description(&self) -> &'static str {
        "Value must be greater than bound"
    }
}

/// The value must lie in `lower..=upper`.
#[derive(Clone, Copy, Debug)]
pub struct InRange<L, U> {
    /// Inclusive lower bound.
    pub lower: L,
    /// Inclusive upper bound.
    pub upper: U,
}

impl<T, L, U> Predicate<T> for InRange<L, U>
where
    T: PartialOrd<L> + PartialOrd<U> + ?Sized,
{
    fn check(&self, value: &T) -> bool {
        *value >= self.lower && *value <= self.upper
    }

    fn description(&self) -> &'static str {
        "Value must be in range"
    }
}

/// The value must be a valid index into a sequence of length `size`.
#[derive(Clone, Copy, Debug)]
pub struct IndexWithin<T> {
    /// Length of the indexed sequence.
    pub size: T,
}

impl<T: PartialOrd + Default> Predicate<T> for IndexWithin<T> {
    fn check(&self, value: &T) -> bool {
        *value >= T::default() && *value < self.size
    }

    fn description(&self) -> &'static str {
        "Index must be within bounds"
    }
}

/// The value must satisfy an arbitrary function.
///
/// # Examples
///
/// ```
/// use faultline::{
///     enforce::{Enforcer, predicate::Satisfies, raiser::DefaultRaiser},
///     location,
/// };
///
/// let even = Satisfies::new(|value: &i32| value % 2 == 0, "Value must be even");
/// let enforcer = Enforcer::check(4, even, DefaultRaiser::installed(), location!(), "4");
/// assert_eq!(enforcer.into_result().unwrap(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Satisfies<F> {
    check: F,
    description: &'static str,
}

impl<F> Satisfies<F> {
    /// Pairs a check with its description.
    pub const fn new(check: F, description: &'static str) -> Self {
        Self { check, description }
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Predicate<T> for Satisfies<F> {
    fn check(&self, value: &T) -> bool {
        (self.check)(value)
    }

    fn description(&self) -> &'static str {
        self.description
    }
}

#[cfg(test)]
mod tests {
    use core::ptr;

    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Truth.check(&true));
        assert!(!Truth.check(&false));
        assert!(Truth.check(&5));
        assert!(!Truth.check(&0u8));
        assert!(!Truth.check(&ptr::null::<u8>()));
        assert!(Truth.check(&Some(0)));
        assert!(!Truth.check(&None::<i32>));
        assert!(!Truth.check(&Err::<(), _>("no")));
        assert!(Truth.check(&&true));
    }

    #[test]
    fn test_comparisons() {
        assert!(Equals(3).check(&3));
        assert!(NotEquals("a").check(&"b"));
        assert!(LessThan(10).check(&9));
        assert!(!LessThan(10).check(&10));
        assert!(GreaterThan(0.5).check(&0.6));
        assert!(InRange { lower: 1, upper: 10 }.check(&1));
        assert!(InRange { lower: 1, upper: 10 }.check(&10));
        assert!(!InRange { lower: 1, upper: 10 }.check(&11));
    }

    #[test]
    fn test_index_within() {
        assert!(IndexWithin { size: 3usize }.check(&2));
        assert!(!IndexWithin { size: 3usize }.check(&3));
        assert!(!IndexWithin { size: 3i64 }.check(&-1));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Predicate::<bool>::description(&Truth), "Expression must be true");
        assert_eq!(Predicate::<i32>::description(&Equals(1)), "Values must be equal");
        assert_eq!(Predicate::<i32>::description(&NotEquals(1)), "Values must not be equal");
        assert_eq!(Predicate::<i32>::description(&LessThan(1)), "Value must be less than bound");
        assert_eq!(Predicate::<i32>::description(&GreaterThan(1)), "Value must be greater than bound");
        assert_eq!(
            Predicate::<i32>::description(&InRange { lower: 0, upper: 1 }),
            "Value must be in range"
        );
    }
}
