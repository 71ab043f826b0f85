//! Contract checks for programmer errors.
//!
//! Violations (stale handles, double release, mismatched bindings) are
//! bugs in the caller, not runtime conditions: the checks halt in debug
//! and test builds and compile out in release builds.

/// Asserts a caller-side contract. Active whenever debug assertions are.
#[macro_export]
macro_rules! contract {
    ($cond:expr) => {
        debug_assert!($cond);
    };
    ($cond:expr, $($arg:tt)+) => {
        debug_assert!($cond, $($arg)+);
    };
}
