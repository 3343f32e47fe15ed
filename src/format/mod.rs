//! Call-site overrides of the default textual form.
//!
//! # Overview
//!
//! The wrappers in this module borrow or own a payload together with
//! formatting options, and implement [`Render`](crate::render::Render)
//! themselves. They can be passed anywhere a renderable value is accepted,
//! including [`build_message!`](crate::build_message):
//!
//! ```
//! use faultline::{build_message, format::{bin, container, hex, upper}};
//!
//! let message = build_message!("flags", bin(0b1010_1111u8).group_size(4), "at", hex(4096));
//! assert_eq!(message, "flags 0b1010 1111 at 0x1000");
//!
//! assert_eq!(build_message!(upper("abort")), "ABORT");
//! assert_eq!(build_message!(container(vec![1, 2, 3, 4], 2)), "[1, 2, ...]");
//! ```

mod case;
mod container;
mod numeric;

pub use self::{
    case::{Lower, Upper, lower, upper},
    container::{Container, container},
    numeric::{Bin, Hex, HexFormattable, Integral, Oct, bin, hex, oct},
};
