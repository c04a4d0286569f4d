//! Fatal assertions.
//!
//! An out-of-range index or the inverse of a singular matrix is a programming
//! error. The failure is logged through `log::error!` with the caller's
//! location and then the thread panics; build with `panic = "abort"` to
//! terminate the process on the spot.

use std::panic::Location;

use crate::error::GlaError;

/// Reports `error` at the caller's location and panics.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fail(error: GlaError) -> ! {
    let location = Location::caller();
    log::error!(
        "Assertion failed: {} :: file: {} :: line: {}",
        error,
        location.file(),
        location.line()
    );
    panic!("Assertion failed: {error}");
}

/// Checks `cond`; on failure reports the given `GlaError` and panics.
///
/// The error expression is only evaluated when the condition does not hold.
macro_rules! gla_assert {
    ($cond:expr, $error:expr) => {
        if !($cond) {
            $crate::assert::fail($error)
        }
    };
}

pub(crate) use gla_assert;
