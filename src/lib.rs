#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Value rendering, policy-based enforcement and chained failures.
//!
//! ## Overview
//!
//! faultline is a small diagnostics substrate. It does three things, and it
//! does them without performing any I/O of its own:
//!
//! - It turns typed values into human-readable text ([`render`]). Booleans,
//!   pointers, paths, durations, time points, options, variants, wide
//!   strings, collections and tuples all have a fixed textual form, and the
//!   [`format`] wrappers let a call site override that form (hex, octal and
//!   binary numbers, case conversion, windowed collections).
//! - It validates runtime conditions ([`enforce`]). An [`Enforcer`] evaluates
//!   its predicate exactly once, lets the call site attach a message, and
//!   raises a [`Failure`] at most once.
//! - It records causal chains ([`failure`]). A failure raised while another
//!   one is being handled carries the handled one as its cause, and
//!   [`flatten_trace`] turns the chain into an indented trace.
//!
//! ## Quick Example
//!
//! ```
//! use faultline::prelude::*;
//!
//! fn open_slot(slots: &[u32], index: usize) -> Result<u32, Failure> {
//!     let index = enforce_lt!(index, slots.len())
//!         .message(build_message!("slot", index, "is out of range for", slots))
//!         .into_result()?;
//!     Ok(slots[index])
//! }
//!
//! let failure = open_slot(&[1, 2, 3], 7).unwrap_err();
//! assert!(failure.to_string().contains("slot 7 is out of range for [1, 2, 3]"));
//! ```
//!
//! ## Chaining
//!
//! Rust has no ambient "exception currently being handled", so the cause of
//! a new failure is threaded explicitly. The [`failure_from!`] and
//! [`raise_from!`] macros, [`ResultExt::or_raise`] and
//! [`Enforcer::caused_by`] all take the failure being handled and keep it as
//! the cause of the new one:
//!
//! ```
//! use faultline::prelude::*;
//!
//! fn read_file(path: &str) -> Result<String, Failure> {
//!     raise!(Kind::Runtime, "File not found:", path)
//! }
//!
//! fn load_config(path: &str) -> Result<String, Failure> {
//!     read_file(path).or_raise(Kind::Runtime, build_message!("Failed to load configuration from", path))
//! }
//!
//! let failure = load_config("missing.toml").unwrap_err();
//! let trace = flatten_trace(&failure);
//! let outer = trace.find("Failed to load configuration").unwrap();
//! let inner = trace.find("File not found: missing.toml").unwrap();
//! assert!(outer < inner);
//! ```
//!
//! ## Configuration
//!
//! Raising is parameterised by a [`RaiseConfig`]: the default failure
//! [`Kind`], the [`TrapMode`], the location format and the diagnostic sink.
//! Every raiser accepts a config explicitly; the macros use the one
//! installed once at startup with [`RaiseConfig::install`], or the built-in
//! defaults when none was installed.
//!
//! [`Enforcer`]: crate::enforce::Enforcer
//! [`Enforcer::caused_by`]: crate::enforce::Enforcer::caused_by
//! [`Failure`]: crate::failure::Failure
//! [`Kind`]: crate::failure::Kind
//! [`flatten_trace`]: crate::failure::flatten_trace
//! [`render`]: crate::render
//! [`RaiseConfig`]: crate::config::RaiseConfig
//! [`RaiseConfig::install`]: crate::config::RaiseConfig::install
//! [`TrapMode`]: crate::config::TrapMode
//! [`ResultExt::or_raise`]: crate::result_ext::ResultExt::or_raise

extern crate alloc;

#[macro_use]
mod macros;

pub mod config;
pub mod enforce;
pub mod failure;
pub mod format;
pub mod location;
pub mod message;
pub mod prelude;
pub mod render;
pub mod result_ext;
pub mod sink;
pub mod trap;

pub use self::{
    config::{RaiseConfig, TrapMode},
    enforce::Enforcer,
    failure::{Cause, Failure, Kind, flatten_trace},
    location::SourceLocation,
    message::build_message,
    render::{Render, render},
};

/// A [`Result`](core::result::Result) type alias where the error is
/// [`Failure`].
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// fn parse_port(text: &str) -> faultline::Result<u16> {
///     text.parse::<u16>().or_raise(Kind::InvalidArgument, build_message!("bad port:", text))
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// assert!(parse_port("http").is_err());
/// ```
pub type Result<T, E = Failure> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use alloc::string::String;
    #[doc(hidden)]
    pub use core::result::Result::Err;

    #[doc(hidden)]
    pub mod kind {
        use core::fmt;

        use crate::{message::MessageBuilder, render::Render};

        #[doc(hidden)]
        pub struct Wrap<'a, T: ?Sized>(pub &'a T);

        #[doc(hidden)]
        pub trait RenderKind {
            fn push_to(&self, builder: &mut MessageBuilder);
        }

        impl<T> RenderKind for &Wrap<'_, T>
        where
            T: Render + ?Sized,
        {
            #[inline(always)]
            fn push_to(&self, builder: &mut MessageBuilder) {
                builder.push(self.0);
            }
        }

        #[doc(hidden)]
        pub trait DisplayKind {
            fn push_to(&self, builder: &mut MessageBuilder);
        }

        impl<T> DisplayKind for Wrap<'_, T>
        where
            T: fmt::Display + ?Sized,
        {
            #[inline(always)]
            fn push_to(&self, builder: &mut MessageBuilder) {
                builder.push_display(self.0);
            }
        }
    }
}
