//! Debug traps.
//!
//! A trap reports a banner to the configured sink, then calls the configured
//! trap function. The default trap function raises a breakpoint exception on
//! x86, x86-64 and AArch64 and does nothing elsewhere. Without an attached
//! debugger the breakpoint usually ends the process.

use alloc::{format, string::String};

use crate::{config::RaiseConfig, location::SourceLocation, sink::Level};

/// Formats the banner reported before a trap fires.
///
/// # Examples
///
/// ```
/// use faultline::{RaiseConfig, SourceLocation, trap::banner};
///
/// let text = banner(&RaiseConfig::new(), SourceLocation::new("main.rs", 3), "boom");
/// assert_eq!(
///     text,
///     "\n=== EXCEPTION TRAP ===\nLocation: [main.rs:3]\nMessage: boom\n======================\n"
/// );
/// ```
pub fn banner(config: &RaiseConfig, location: SourceLocation, message: &str) -> String {
    format!(
        "\n=== EXCEPTION TRAP ===\nLocation: {}\nMessage: {}\n======================\n",
        location.formatted(config.location_format),
        message
    )
}

/// Reports the banner to the sink and triggers the configured trap.
pub fn trap(config: &RaiseConfig, location: SourceLocation, message: &str) {
    let text = banner(config, location, message);
    config.sink.accept(Level::Fatal, "trap", location, &text);
    (config.trap)();
}

/// Like [`trap`], then terminates the process.
pub fn trap_and_terminate(config: &RaiseConfig, location: SourceLocation, message: &str) -> ! {
    trap(config, location, message);
    terminate()
}

#[cfg(feature = "std")]
fn terminate() -> ! {
    std::process::abort()
}

#[cfg(not(feature = "std"))]
fn terminate() -> ! {
    panic!("terminating after debug trap")
}

/// Raises a breakpoint exception where the architecture has one.
#[inline(always)]
pub fn breakpoint() {
    arch_breakpoint();
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline(always)]
fn arch_breakpoint() {
    // SAFETY: `int3` raises a breakpoint exception and touches neither memory
    // nor the stack.
    unsafe { core::arch::asm!("int3", options(nomem, nostack)) }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn arch_breakpoint() {
    // SAFETY: `brk` raises a breakpoint exception and touches neither memory
    // nor the stack.
    unsafe { core::arch::asm!("brk #0xf000", options(nomem, nostack)) }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn arch_breakpoint() {}
