//! Logging targets shared by the library crates and the CLI formatter.
//!
//! The CLI formatter keys its symbols off these targets: plain output lines
//! go to [`PRINT_TARGET`] and are written verbatim, successes are
//! highlighted.

pub const PRINT_TARGET: &str = "findpi::print";
pub const SUCCESS_TARGET: &str = "findpi::success";

/// Field carrying a verbatim line on [`PRINT_TARGET`].
pub const RAW_FIELD: &str = "raw_msg";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
