use core::{fmt, fmt::Write as _, ptr::NonNull};

use crate::render::Render;

mod sealed {
    pub trait Sealed {}
}

/// Values that can be rendered in hexadecimal: integers and pointers.
///
/// This trait is sealed.
pub trait HexFormattable: sealed::Sealed + Copy {
    /// Whether the value is an address rather than an integer.
    const IS_POINTER: bool;

    /// The bit pattern of the value, or `None` for a null pointer.
    ///
    /// Signed integers are reinterpreted as the unsigned type of the same
    /// width.
    fn bits(&self) -> Option<u128>;
}

/// Integer types accepted by [`Oct`] and [`Bin`].
///
/// This trait is sealed.
pub trait Integral: HexFormattable {}

macro_rules! integral {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl HexFormattable for $ty {
                const IS_POINTER: bool = false;

                #[inline]
                fn bits(&self) -> Option<u128> {
                    Some(*self as $unsigned as u128)
                }
            }

            impl Integral for $ty {}
        )*
    };
}

integral!(
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
);

impl<T: ?Sized> sealed::Sealed for *const T {}
impl<T: ?Sized> sealed::Sealed for *mut T {}
impl<T: ?Sized> sealed::Sealed for NonNull<T> {}

impl<T: ?Sized> HexFormattable for *const T {
    const IS_POINTER: bool = true;

    fn bits(&self) -> Option<u128> {
        (!self.is_null()).then(|| self.addr() as u128)
    }
}

impl<T: ?Sized> HexFormattable for *mut T {
    const IS_POINTER: bool = true;

    fn bits(&self) -> Option<u128> {
        self.cast_const().bits()
    }
}

impl<T: ?Sized> HexFormattable for NonNull<T> {
    const IS_POINTER: bool = true;

    fn bits(&self) -> Option<u128> {
        Some(self.addr().get() as u128)
    }
}

/// Hexadecimal rendering of an integer or pointer.
///
/// - A null pointer renders as `nullptr`, with no base and no padding.
/// - The `0x` base is shown for non-null pointers, and for integers that are
///   non-zero or padded.
/// - `width` zero-pads the digits and does not count the base.
///
/// # Examples
///
/// ```
/// use faultline::{format::hex, render};
///
/// assert_eq!(render(&hex(255)), "0xff");
/// assert_eq!(render(&hex(0)), "0");
/// assert_eq!(render(&hex(15).width(4)), "0x000f");
/// assert_eq!(render(&hex(-1i32).width(8)), "0xffffffff");
/// assert_eq!(render(&hex(255).show_base(false)), "ff");
/// assert_eq!(render(&hex(255).uppercase(true)), "0xFF");
/// assert_eq!(render(&hex(core::ptr::null::<u8>())), "nullptr");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Hex<T> {
    /// The value to render.
    pub value: T,
    /// Minimum number of digits.
    pub width: usize,
    /// Whether to print the `0x` base.
    pub show_base: bool,
    /// Whether to print `A`-`F` instead of `a`-`f`.
    pub uppercase: bool,
}

/// Renders `value` in hexadecimal with a base and no padding.
pub fn hex<T: HexFormattable>(value: T) -> Hex<T> {
    Hex {
        value,
        width: 0,
        show_base: true,
        uppercase: false,
    }
}

impl<T: HexFormattable> Hex<T> {
    /// Sets the minimum number of digits.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether the `0x` base is printed.
    #[must_use]
    pub fn show_base(mut self, show_base: bool) -> Self {
        self.show_base = show_base;
        self
    }

    /// Sets whether upper-case digits are used.
    #[must_use]
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

impl<T: HexFormattable> Render for Hex<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bits) = self.value.bits() else {
            return f.write_str("nullptr");
        };
        if self.show_base && (T::IS_POINTER || bits != 0 || self.width > 0) {
            f.write_str("0x")?;
        }
        if self.uppercase {
            write!(f, "{bits:0width$X}", width = self.width)
        } else {
            write!(f, "{bits:0width$x}", width = self.width)
        }
    }
}

/// Octal rendering of an integer.
///
/// The base is a single leading `0`, shown only for non-zero values. When
/// both a width and the base apply, the base counts toward the width.
///
/// # Examples
///
/// ```
/// use faultline::{format::oct, render};
///
/// assert_eq!(render(&oct(8)), "010");
/// assert_eq!(render(&oct(0)), "0");
/// assert_eq!(render(&oct(511)), "0777");
/// assert_eq!(render(&oct(8).show_base(false)), "10");
/// assert_eq!(render(&oct(8).width(4)), "0010");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Oct<T> {
    /// The value to render.
    pub value: T,
    /// Minimum number of characters, including the base.
    pub width: usize,
    /// Whether to print the leading `0`.
    pub show_base: bool,
}

/// Renders `value` in octal with a base and no padding.
pub fn oct<T: Integral>(value: T) -> Oct<T> {
    Oct {
        value,
        width: 0,
        show_base: true,
    }
}

impl<T: Integral> Oct<T> {
    /// Sets the minimum number of characters.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether the leading `0` is printed.
    #[must_use]
    pub fn show_base(mut self, show_base: bool) -> Self {
        self.show_base = show_base;
        self
    }
}

impl<T: Integral> Render for Oct<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.value.bits().unwrap_or_default();
        let based = self.show_base && bits != 0;
        match (self.width, based) {
            (0, false) => write!(f, "{bits:o}"),
            (0, true) => write!(f, "0{bits:o}"),
            (width, true) => write!(f, "0{bits:0width$o}", width = width - 1),
            (width, false) => write!(f, "{bits:0width$o}"),
        }
    }
}

/// Binary rendering of an integer.
///
/// Without a width, exactly the significant bits are printed (at least one).
/// With a non-zero `group_size`, digits are split into groups of that size,
/// counted from the least-significant end.
///
/// # Examples
///
/// ```
/// use faultline::{format::bin, render};
///
/// assert_eq!(render(&bin(5)), "0b101");
/// assert_eq!(render(&bin(0)), "0b0");
/// assert_eq!(render(&bin(5).width(8)), "0b00000101");
/// assert_eq!(render(&bin(0b1010_1111).group_size(4)), "0b1010 1111");
/// assert_eq!(render(&bin(0b101).width(8).group_size(4)), "0b0000 0101");
/// assert_eq!(render(&bin(0xFF).group_size(2)), "0b11 11 11 11");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Bin<T> {
    /// The value to render.
    pub value: T,
    /// Number of digits to print; `0` prints the significant bits.
    pub width: usize,
    /// Whether to print the `0b` base.
    pub show_base: bool,
    /// Digits per group; `0` disables grouping.
    pub group_size: usize,
}

/// Renders `value` in binary with a base, no padding and no grouping.
pub fn bin<T: Integral>(value: T) -> Bin<T> {
    Bin {
        value,
        width: 0,
        show_base: true,
        group_size: 0,
    }
}

impl<T: Integral> Bin<T> {
    /// Sets the number of digits.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether the `0b` base is printed.
    #[must_use]
    pub fn show_base(mut self, show_base: bool) -> Self {
        self.show_base = show_base;
        self
    }

    /// Sets the number of digits per group.
    #[must_use]
    pub fn group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }
}

impl<T: Integral> Render for Bin<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_base {
            f.write_str("0b")?;
        }
        let bits = self.value.bits().unwrap_or_default();
        let digits = match self.width {
            0 => (u128::BITS - bits.leading_zeros()).max(1) as usize,
            width => width,
        };
        for position in (0..digits).rev() {
            if position + 1 < digits && self.group_size > 0 && (position + 1) % self.group_size == 0 {
                f.write_char(' ')?;
            }
            let set = position < 128 && (bits >> position) & 1 == 1;
            f.write_char(if set { '1' } else { '0' })?;
        }
        Ok(())
    }
}
