//! Logging macros. Everything the crate logs goes through these so records
//! share the `gistr` target and can be filtered with `RUST_LOG=gistr=debug`.

pub const LOG_TARGET: &str = "gistr";

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (
        {
            log::info!(target: $crate::logging::LOG_TARGET, $($arg)*);
        }
    );
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => (
        {
            log::debug!(target: $crate::logging::LOG_TARGET, $($arg)*);
        }
    );
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (
        {
            log::warn!(target: $crate::logging::LOG_TARGET, $($arg)*);
        }
    );
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (
        {
            log::error!(target: $crate::logging::LOG_TARGET, $($arg)*);
        }
    );
}
