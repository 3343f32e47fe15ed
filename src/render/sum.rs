use core::fmt;

use either::Either;

use super::Render;

/// The empty alternative of a variant type, rendered as `monostate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monostate;

impl Render for Monostate {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("monostate")
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("nullopt"),
        }
    }
}

impl<T: Render, E: Render> Render for Result<T, E> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ok(value) => value.render(f),
            Err(error) => error.render(f),
        }
    }
}

impl<L: Render, R: Render> Render for Either<L, R> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(left) => left.render(f),
            Either::Right(right) => right.render(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use super::*;
    use crate::render::render;

    #[test]
    fn test_option() {
        assert_eq!(render(&Some(42)), "42");
        assert_eq!(render(&None::<i32>), "nullopt");
        assert_eq!(render(&Some(Some(false))), "false");
    }

    #[test]
    fn test_active_alternative() {
        let ok: Result<i32, String> = Ok(42);
        let err: Result<i32, String> = Err(String::from("hello"));
        assert_eq!(render(&ok), "42");
        assert_eq!(render(&err), "hello");

        let left: Either<i32, &str> = Either::Left(7);
        let right: Either<i32, &str> = Either::Right("seven");
        assert_eq!(render(&left), "7");
        assert_eq!(render(&right), "seven");
    }

    #[test]
    fn test_monostate_and_nesting() {
        let values: vec::Vec<Either<Monostate, i32>> =
            vec![Either::Left(Monostate), Either::Right(3)];
        assert_eq!(render(&values), "[monostate, 3]");
    }
}
