//! Algebraic container types.
//!
//! This module provides the two closed sum types at the heart of the
//! library:
//!
//! - [`Optional`]: a value that is present (`Present`) or absent (`Empty`)
//! - [`Outcome`]: an operation that succeeded (`Success`) or failed with a
//!   typed error (`Failure`)
//!
//! Both types carry a combinator surface modelled on the conventions of
//! languages where optionality and fallibility are first-class: safe total
//! combinators for pipelines, and an explicit `unwrap` family for
//! boundaries where absence or failure is a programming error.
//!
//! # Examples
//!
//! ## Chaining optional values
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let half = |n: i32| if n % 2 == 0 { Present(n / 2) } else { Empty };
//!
//! assert_eq!(Present(8).and_then(half).and_then(half), Present(2));
//! assert_eq!(Present(6).and_then(half).and_then(half), Empty);
//! ```
//!
//! ## Typed failure without exceptions
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Outcome<i32, String> {
//!     if divisor == 0 {
//!         Failure(String::from("division by zero"))
//!     } else {
//!         Success(dividend / divisor)
//!     }
//! }
//!
//! assert_eq!(checked_div(10, 2), Success(5));
//! assert!(checked_div(1, 0).is_failure());
//! ```

mod optional;
mod outcome;

pub use optional::{Optional, to_optional};
pub use outcome::Outcome;

use std::fmt;

/// Produces a debug-style string representation of any value.
///
/// This is the rendering used by the `unwrap`/`expect` panic messages when
/// they report the opposing payload, and the default error form captured by
/// [`catch`](crate::escape::catch).
///
/// # Examples
///
/// ```rust
/// use twofold::container::stringify;
///
/// assert_eq!(stringify(&42), "42");
/// assert_eq!(stringify(&"boom"), "\"boom\"");
/// assert_eq!(stringify(&vec![1, 2]), "[1, 2]");
/// ```
#[inline]
pub fn stringify<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}
