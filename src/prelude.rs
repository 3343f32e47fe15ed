//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, Failure> {
//!     let b = enforce_ne!(b, 0).message("cannot divide by zero").into_result()?;
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert_eq!(divide(1, 0).unwrap_err().message(), "cannot divide by zero");
//! ```
//!
//! # What's Included
//!
//! - **[`Failure`]**, **[`Kind`]** and **[`Cause`]**: the raised error type
//!   and its parts
//! - **[`ResultExt`]** and **[`OptionExt`]**: raising from `Result` and
//!   `Option`
//! - **[`Render`]** and the [`format`](crate::format) helpers
//! - the `enforce*`, `raise*`, `trap*` and [`build_message!`] macros

pub use crate::{
    Cause, Enforcer, Failure, Kind, RaiseConfig, Render, TrapMode, build_message, debug_enforce,
    enforce, enforce_eq, enforce_ge, enforce_gt, enforce_in_range, enforce_kind, enforce_le,
    enforce_lt, enforce_ne, enforce_not_null, enforce_trap, enforce_valid_index, failure,
    failure_from, flatten_trace,
    format::{Container, bin, container, hex, lower, oct, upper},
    location, raise, raise_from, raise_if, raise_unless, render,
    result_ext::{OptionExt, ResultExt},
    trap, trap_if, trap_unless,
};
