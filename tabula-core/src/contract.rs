//! Preconditions and postconditions
//!
//! A failed contract is a programmer error: it is logged and then panics.
//! With the `contracts` feature (on by default) checks stay in release
//! builds; without it they follow `debug_assertions`.

use std::fmt;

/// Whether contract checks run in this build
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "contracts"));

/// Reports a broken contract and panics
#[cold]
#[track_caller]
pub fn violated(kind: &str, details: fmt::Arguments<'_>) -> ! {
    tracing::error!(kind, %details, "contract violated");
    panic!("contract violated: {} {}", kind, details)
}

/// Checks a precondition
///
/// ```should_panic
/// use tabula_core::requires;
///
/// let len = 3;
/// requires!(len > 4);
/// ```
#[macro_export]
macro_rules! requires {
    ($cond:expr) => {
        $crate::requires!($cond, "{}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if $crate::contract::ENABLED && !($cond) {
            $crate::contract::violated("requires", format_args!($($arg)+))
        }
    };
}

/// Checks a postcondition
#[macro_export]
macro_rules! ensures {
    ($cond:expr) => {
        $crate::ensures!($cond, "{}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if $crate::contract::ENABLED && !($cond) {
            $crate::contract::violated("ensures", format_args!($($arg)+))
        }
    };
}
