use core::{fmt, ptr::NonNull};

use super::Render;

fn render_address(address: *const (), f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if address.is_null() {
        f.write_str("nullptr")
    } else {
        write!(f, "0x{:x}", address.addr())
    }
}

impl<T: ?Sized> Render for *const T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_address(self.cast::<()>(), f)
    }
}

impl<T: ?Sized> Render for *mut T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_address(self.cast_const().cast::<()>(), f)
    }
}

impl<T: ?Sized> Render for NonNull<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_address(self.as_ptr().cast_const().cast::<()>(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use core::ptr;

    use super::*;
    use crate::render::render;

    #[test]
    fn test_null_pointers() {
        assert_eq!(render(&ptr::null::<u8>()), "nullptr");
        assert_eq!(render(&ptr::null_mut::<u32>()), "nullptr");
    }

    #[test]
    fn test_address_is_lowercase_hex() {
        let value = 7u64;
        let pointer: *const u64 = &value;
        let expected = format!("0x{:x}", pointer.addr());
        assert_eq!(render(&pointer), expected);
        assert_eq!(render(&NonNull::from(&value)), expected);
    }

    #[test]
    fn test_unsized_pointee() {
        let text = "abc";
        let pointer: *const str = text;
        assert!(render(&pointer).starts_with("0x"));
    }
}
