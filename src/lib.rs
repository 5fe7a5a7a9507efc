/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("create-example", "Copying {} to {}", template, dest);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

/// Macro for prefixed warnings on stderr.
///
/// Unlike `log_status!`, always printed: soft skips must be visible even when
/// output is piped.
#[macro_export]
macro_rules! log_warning {
    ($prefix:expr, $($arg:tt)*) => {
        eprintln!(concat!("[", $prefix, "] warning: {}"), format_args!($($arg)*));
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `fhe_scaffold::registry` instead of `fhe_scaffold::core::registry`
pub use core::*;
pub use utils::*;
