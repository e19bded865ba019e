//! # twofold
//!
//! Two-variant algebraic containers for explicit optionality and
//! fallibility.
//!
//! ## Overview
//!
//! This library provides two closed sum types and the combinator surface
//! that makes them pleasant to chain:
//!
//! - [`Optional`](container::Optional): a value is present (`Present`) or
//!   absent (`Empty`), with no sentinel values in sight.
//! - [`Outcome`](container::Outcome): an operation succeeded (`Success`)
//!   or failed with a typed error (`Failure`), with no exceptions in sight.
//! - **Escape hatches**: [`try_guard`](escape::try_guard) and
//!   [`Outcome::propagate`](container::Outcome::propagate) bridge `Outcome`
//!   into `?`-style early return, and [`catch`](escape::catch) captures a
//!   panic into a `Failure` at the single sanctioned boundary.
//!
//! Everything is synchronous, single-threaded, and allocation-free apart
//! from what the payload types themselves do.
//!
//! ## Feature Flags
//!
//! - `container`: The `Optional` and `Outcome` types (core)
//! - `escape`: Panic capture and `?`-propagation bridges
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let value: Optional<i32> = Present(2);
//! assert_eq!(value.map(|n| n * 2).unwrap_or(0), 4);
//!
//! let outcome: Outcome<i32, String> = Success(21).map(|n| n * 2);
//! assert_eq!(outcome, Success(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types together with their variants, so call
/// sites can write `Present(5)` and `Failure(error)` directly, the way the
/// standard library exposes `Some` and `None`.
///
/// # Usage
///
/// ```rust
/// use twofold::prelude::*;
///
/// let present: Optional<i32> = Present(5);
/// let empty: Optional<i32> = Empty;
/// assert!(present.is_present());
/// assert!(empty.is_empty());
/// ```
pub mod prelude {

    #[cfg(feature = "container")]
    pub use crate::container::Optional::{self, Empty, Present};

    #[cfg(feature = "container")]
    pub use crate::container::Outcome::{self, Failure, Success};

    #[cfg(feature = "container")]
    pub use crate::container::{stringify, to_optional};

    #[cfg(feature = "escape")]
    pub use crate::escape::{Interrupt, catch, catch_map, try_guard};
}

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "escape")]
pub mod escape;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
