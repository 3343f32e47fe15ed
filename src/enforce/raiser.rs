//! Policies that turn a failed enforcement into a failure.

use alloc::string::String;
use core::{convert::Infallible, fmt};

use crate::{
    config::RaiseConfig,
    failure::{Cause, Failure, Kind, raise_with_location},
    location::SourceLocation,
    trap,
};

/// Produces the failure for a failed enforcement.
///
/// # Examples
///
/// ```
/// use faultline::{
///     Cause, SourceLocation,
///     enforce::{Enforcer, predicate::Truth, raiser::Raiser},
/// };
///
/// #[derive(Debug)]
/// struct Code(u16);
///
/// impl std::fmt::Display for Code {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "E{}", self.0)
///     }
/// }
///
/// struct CodeRaiser;
///
/// impl Raiser for CodeRaiser {
///     type Failure = Code;
///
///     fn raise(&self, _location: SourceLocation, message: String, _cause: Option<Cause>) -> Code {
///         Code(message.len() as u16)
///     }
/// }
///
/// let code = Enforcer::check(false, Truth, CodeRaiser, faultline::location!(), "false")
///     .message("four")
///     .into_result()
///     .unwrap_err();
/// assert_eq!(code.to_string(), "E4");
/// ```
pub trait Raiser {
    /// What a raise produces.
    type Failure: fmt::Display + fmt::Debug;

    /// Produces the failure for `message`, raised at `location`.
    fn raise(&self, location: SourceLocation, message: String, cause: Option<Cause>) -> Self::Failure;
}

/// Raises [`Failure`]s of the config's default kind.
#[derive(Clone, Copy, Debug)]
pub struct DefaultRaiser {
    config: RaiseConfig,
}

impl DefaultRaiser {
    /// Raises according to `config`.
    pub const fn new(config: RaiseConfig) -> Self {
        Self { config }
    }

    /// Raises according to the installed config.
    pub fn installed() -> Self {
        Self::new(*RaiseConfig::current())
    }
}

impl Raiser for DefaultRaiser {
    type Failure = Failure;

    fn raise(&self, location: SourceLocation, message: String, cause: Option<Cause>) -> Failure {
        raise_with_location(&self.config, self.config.default_kind, location, message, cause)
    }
}

/// Raises [`Failure`]s of a fixed kind.
#[derive(Clone, Copy, Debug)]
pub struct KindRaiser {
    kind: Kind,
    config: RaiseConfig,
}

impl KindRaiser {
    /// Raises `kind` according to `config`.
    pub const fn new(kind: Kind, config: RaiseConfig) -> Self {
        Self { kind, config }
    }

    /// Raises `kind` according to the installed config.
    pub fn installed(kind: Kind) -> Self {
        Self::new(kind, *RaiseConfig::current())
    }
}

impl Raiser for KindRaiser {
    type Failure = Failure;

    fn raise(&self, location: SourceLocation, message: String, cause: Option<Cause>) -> Failure {
        raise_with_location(&self.config, self.kind, location, message, cause)
    }
}

/// Traps and terminates instead of producing a failure.
#[derive(Clone, Copy, Debug)]
pub struct TrapRaiser {
    config: RaiseConfig,
}

impl TrapRaiser {
    /// Traps according to `config`.
    pub const fn new(config: RaiseConfig) -> Self {
        Self { config }
    }

    /// Traps according to the installed config.
    pub fn installed() -> Self {
        Self::new(*RaiseConfig::current())
    }
}

impl Raiser for TrapRaiser {
    type Failure = Infallible;

    fn raise(&self, location: SourceLocation, message: String, _cause: Option<Cause>) -> Infallible {
        trap::trap_and_terminate(&self.config, location, &message)
    }
}
