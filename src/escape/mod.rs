//! Escape hatches between `Outcome` and Rust's native control flow.
//!
//! Failures are ordinary values everywhere else in this library. This
//! module provides the two sanctioned crossing points:
//!
//! - [`try_guard`] + [`Outcome::propagate`](crate::container::Outcome::propagate):
//!   early-return composition. `propagate` turns an `Outcome` into a
//!   `Result` whose error side is the [`Interrupt`] carrier, so the body of
//!   a guard closure can use `?`; the guard converts the carrier back into
//!   a `Failure` at its boundary.
//! - [`catch`] / [`catch_map`]: panic capture. Runs an operation and turns
//!   a standard panic into a `Failure`, for integrating code that signals
//!   errors by panicking.
//!
//! # Examples
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     match text.parse::<i32>() {
//!         Ok(number) => Success(number),
//!         Err(error) => Failure(error.to_string()),
//!     }
//! }
//!
//! let sum: Outcome<i32, String> = try_guard(|| {
//!     let first = parse("20").propagate()?;
//!     let second = parse("22").propagate()?;
//!     Ok(first + second)
//! });
//! assert_eq!(sum, Success(42));
//!
//! let sum: Outcome<i32, String> = try_guard(|| {
//!     let first = parse("20").propagate()?;
//!     let second = parse("oops").propagate()?;
//!     Ok(first + second)
//! });
//! assert!(sum.is_failure());
//! ```

mod catch;
mod guard;

pub use catch::{catch, catch_map};
pub use guard::{Interrupt, try_guard};
