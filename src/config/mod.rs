//! Process-wide raise configuration.
//!
//! A [`RaiseConfig`] decides what happens when a failure is raised: which
//! [`Kind`] the default raiser uses, whether a debug trap fires first, how
//! source locations are printed, and where trap banners go.
//!
//! Configs are plain `Copy` values. Raisers take one explicitly, so tests
//! and libraries can use a local config. Applications install one at startup
//! with [`RaiseConfig::install`]; the macros read it through
//! [`RaiseConfig::current`].

use core::fmt;

use crate::{
    failure::Kind,
    location::LocationFormat,
    sink::{DefaultSink, DiagnosticSink},
    trap,
};

mod lock;

use self::lock::InstallOnce;

/// What a raise does besides producing a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrapMode {
    /// Produce the failure.
    #[default]
    Raise,
    /// Report a trap banner, trigger the trap, then produce the failure.
    TrapThenRaise,
    /// Report a trap banner, trigger the trap, then terminate the process.
    TrapOnly,
}

static INSTALLED: InstallOnce<RaiseConfig> = InstallOnce::new();

static BUILTIN: RaiseConfig = RaiseConfig::new();

/// Parameters of the raise path.
///
/// # Examples
///
/// ```
/// use faultline::{
///     RaiseConfig, TrapMode,
///     failure::Kind,
///     location::{LocationFormat, LocationStyle, PathStyle},
///     sink::NullSink,
/// };
///
/// let config = RaiseConfig::new()
///     .with_default_kind(Kind::Logic)
///     .with_trap_mode(TrapMode::Raise)
///     .with_location_format(LocationFormat::new(LocationStyle::At, PathStyle::FileName))
///     .with_sink(&NullSink);
/// assert_eq!(config.default_kind, Kind::Logic);
/// ```
#[derive(Clone, Copy)]
pub struct RaiseConfig {
    /// Kind produced by the default raiser.
    pub default_kind: Kind,
    /// Whether raising traps first.
    pub trap_mode: TrapMode,
    /// How locations are printed in failure text and trap banners.
    pub location_format: LocationFormat,
    /// Receives trap banners.
    pub sink: &'static dyn DiagnosticSink,
    /// Triggers the trap itself. Defaults to [`trap::breakpoint`].
    pub trap: fn(),
}

impl RaiseConfig {
    /// Runtime failures, no trapping, `[file:line]` locations, and the
    /// default sink.
    pub const fn new() -> Self {
        Self {
            default_kind: Kind::Runtime,
            trap_mode: TrapMode::Raise,
            location_format: LocationFormat::DEFAULT,
            sink: &DefaultSink {},
            trap: trap::breakpoint,
        }
    }

    /// Sets [`default_kind`](Self::default_kind).
    #[must_use]
    pub const fn with_default_kind(mut self, kind: Kind) -> Self {
        self.default_kind = kind;
        self
    }

    /// Sets [`trap_mode`](Self::trap_mode).
    #[must_use]
    pub const fn with_trap_mode(mut self, trap_mode: TrapMode) -> Self {
        self.trap_mode = trap_mode;
        self
    }

    /// Sets [`location_format`](Self::location_format).
    #[must_use]
    pub const fn with_location_format(mut self, location_format: LocationFormat) -> Self {
        self.location_format = location_format;
        self
    }

    /// Sets [`sink`](Self::sink).
    #[must_use]
    pub const fn with_sink(mut self, sink: &'static dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Sets [`trap`](Self::trap).
    #[must_use]
    pub const fn with_trap(mut self, trap: fn()) -> Self {
        self.trap = trap;
        self
    }

    /// Installs this config for the rest of the process.
    ///
    /// With `std`, installing also anchors `render::process_epoch`, the
    /// reference point for rendered `Instant`s.
    ///
    /// # Errors
    ///
    /// Fails if a config was already installed. The rejected config is
    /// returned inside the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultline::{RaiseConfig, failure::Kind};
    ///
    /// RaiseConfig::new().with_default_kind(Kind::Logic).install().unwrap();
    /// assert_eq!(RaiseConfig::current().default_kind, Kind::Logic);
    ///
    /// let rejected = RaiseConfig::new().install().unwrap_err();
    /// assert_eq!(rejected.0.default_kind, Kind::Runtime);
    /// ```
    pub fn install(self) -> Result<(), ConfigAlreadyInstalledError> {
        #[cfg(feature = "std")]
        crate::render::process_epoch();
        INSTALLED.install(self).map_err(ConfigAlreadyInstalledError)
    }

    /// The installed config, or the built-in default if none was installed.
    pub fn current() -> &'static RaiseConfig {
        INSTALLED.get().unwrap_or(&BUILTIN)
    }
}

impl Default for RaiseConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RaiseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaiseConfig")
            .field("default_kind", &self.default_kind)
            .field("trap_mode", &self.trap_mode)
            .field("location_format", &self.location_format)
            .finish_non_exhaustive()
    }
}

/// Error returned when installing a config a second time.
#[derive(Clone, Copy, Debug)]
pub struct ConfigAlreadyInstalledError(pub RaiseConfig);

impl fmt::Display for ConfigAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A raise config has already been installed")
    }
}

impl core::error::Error for ConfigAlreadyInstalledError {}
