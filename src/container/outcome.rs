//! Outcome container - a fallible result with a typed error.
//!
//! This module provides the `Outcome<T, E>` type, which represents an
//! operation that either succeeded with a value (`Success(T)`) or failed
//! with an error (`Failure(E)`). Failures are ordinary values: they are
//! propagated by return, transformed with combinators, and only converted
//! to a panic at an explicit `unwrap`/`expect` boundary.
//!
//! Failure-side counterparts of value-side combinators carry a `_failure`
//! suffix (`map_failure`, `inspect_failure`, `unwrap_failure`).
//!
//! # Examples
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! fn parse_even(text: &str) -> Outcome<i32, String> {
//!     match text.parse::<i32>() {
//!         Ok(number) if number % 2 == 0 => Success(number),
//!         Ok(number) => Failure(format!("{number} is odd")),
//!         Err(error) => Failure(error.to_string()),
//!     }
//! }
//!
//! assert_eq!(parse_even("4").map(|n| n * 10), Success(40));
//! assert!(parse_even("5").is_failure());
//! assert!(parse_even("x").is_failure());
//! ```

use std::fmt;

use super::{Optional, stringify};

/// An operation that succeeded with a value or failed with an error.
///
/// `Outcome<T, E>` represents either `Success(T)` or `Failure(E)`. Exactly
/// one variant is active at any time, and the error payload is never
/// interpreted as a value or vice versa.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure error
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// let success: Outcome<i32, String> = Success(42);
/// let failure: Outcome<i32, String> = Failure(String::from("boom"));
///
/// assert_eq!(success.map(|n| n * 2), Success(84));
/// assert_eq!(failure.map(|n| n * 2), Failure(String::from("boom")));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the operation succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(-3);
    /// assert!(value.is_success());
    ///
    /// let value: Outcome<i32, &str> = Failure("some error message");
    /// assert!(!value.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the operation failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("some error message");
    /// assert!(value.is_failure());
    ///
    /// let value: Outcome<i32, &str> = Success(-3);
    /// assert!(!value.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if the operation succeeded and the predicate holds
    /// for the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert!(value.is_success_and(|n| n > 1));
    ///
    /// let value: Outcome<i32, &str> = Success(0);
    /// assert!(!value.is_success_and(|n| n > 1));
    ///
    /// let value: Outcome<i32, &str> = Failure("some error message");
    /// assert!(!value.is_success_and(|n| n > 1));
    /// ```
    #[inline]
    pub fn is_success_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if the operation failed and the predicate holds for
    /// the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("out of range");
    /// assert!(value.is_failure_and(|error| error.contains("range")));
    ///
    /// let value: Outcome<i32, &str> = Success(123);
    /// assert!(!value.is_failure_and(|error| error.contains("range")));
    /// ```
    #[inline]
    pub fn is_failure_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Projection to Optional
    // =========================================================================

    /// Converts into an [`Optional`] over the success value, discarding the
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.success(), Present(2));
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.success(), Empty);
    /// ```
    #[inline]
    pub fn success(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Empty,
        }
    }

    /// Converts into an [`Optional`] over the error, discarding the success
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.failure(), Present("nope"));
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.failure(), Empty);
    /// ```
    #[inline]
    pub fn failure(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::Empty,
            Self::Failure(error) => Optional::Present(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, passing a failure through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.map(|n| n * 2), Success(4));
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.map(|n| n * 2), Failure("nope"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the error, passing a success through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, i32> = Failure(13);
    /// assert_eq!(value.map_failure(|code| format!("error code: {code}")),
    ///            Failure(String::from("error code: 13")));
    ///
    /// let value: Outcome<i32, i32> = Success(2);
    /// assert_eq!(value.map_failure(|code| format!("error code: {code}")), Success(2));
    /// ```
    #[inline]
    pub fn map_failure<F, M>(self, function: M) -> Outcome<T, F>
    where
        M: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies a function to the success value, or returns the default.
    ///
    /// The default is eagerly evaluated; use [`map_or_else`] for a lazy
    /// default.
    ///
    /// [`map_or_else`]: Outcome::map_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(value.map_or(42, |text| text.len()), 3);
    ///
    /// let value: Outcome<&str, &str> = Failure("bar");
    /// assert_eq!(value.map_or(42, |text| text.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies a function to the success value, or computes a default from
    /// the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(value.map_or_else(|error| error.len() * 10, |text| text.len()), 3);
    ///
    /// let value: Outcome<&str, &str> = Failure("bar");
    /// assert_eq!(value.map_or_else(|error| error.len() * 10, |text| text.len()), 30);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    /// Calls an operation with a reference to the success value, then
    /// returns the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.inspect(|n| seen.push(*n)), Success(2));
    /// assert_eq!(seen, vec![2]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, operation: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            operation(value);
        }
        self
    }

    /// Calls an operation with a reference to the error, then returns the
    /// container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.inspect_failure(|error| seen.push(*error)), Failure("nope"));
    /// assert_eq!(seen, vec!["nope"]);
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, operation: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            operation(error);
        }
        self
    }

    // =========================================================================
    // Boolean Composition
    // =========================================================================

    /// Returns `other` if the operation succeeded, otherwise the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let first: Outcome<i32, &str> = Success(2);
    /// let second: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(first.and(second), Success("foo"));
    ///
    /// let first: Outcome<i32, &str> = Failure("early error");
    /// assert_eq!(first.and(second), Failure("early error"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies an outcome-returning function to the success value.
    ///
    /// This is the monadic bind: `Failure` short-circuits, `Success`
    /// continues with whatever the function returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let checked_sqrt = |n: f64| {
    ///     if n >= 0.0 { Success(n.sqrt()) } else { Failure("negative input") }
    /// };
    ///
    /// assert_eq!(Success(4.0).and_then(checked_sqrt), Success(2.0));
    /// assert_eq!(Success(-1.0).and_then(checked_sqrt), Failure("negative input"));
    ///
    /// let failed: Outcome<f64, &str> = Failure("earlier error");
    /// assert_eq!(failed.and_then(checked_sqrt), Failure("earlier error"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success, otherwise `other`.
    ///
    /// The alternative is eagerly evaluated; use [`or_else`] for a lazy
    /// alternative.
    ///
    /// [`or_else`]: Outcome::or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// let fallback: Outcome<i32, i32> = Failure(9);
    /// assert_eq!(value.or(fallback), Success(2));
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// let fallback: Outcome<i32, i32> = Success(3);
    /// assert_eq!(value.or(fallback), Success(3));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns the success, otherwise applies an outcome-returning
    /// operation to the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let square = |n: i32| -> Outcome<i32, i32> { Success(n * n) };
    ///
    /// let value: Outcome<i32, i32> = Success(2);
    /// assert_eq!(value.or_else(square), Success(2));
    ///
    /// let value: Outcome<i32, i32> = Failure(3);
    /// assert_eq!(value.or_else(square), Success(9));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, operation: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => operation(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value or the provided default.
    ///
    /// The default is eagerly evaluated; use [`unwrap_or_else`] for a lazy
    /// default.
    ///
    /// [`unwrap_or_else`]: Outcome::unwrap_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(9);
    /// assert_eq!(value.unwrap_or(2), 9);
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<usize, &str> = Success(2);
    /// assert_eq!(value.unwrap_or_else(|error| error.len()), 2);
    ///
    /// let value: Outcome<usize, &str> = Failure("foo");
    /// assert_eq!(value.unwrap_or_else(|error| error.len()), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, operation: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => operation(error),
        }
    }

    /// Returns the success value or the type's default value.
    ///
    /// The error is discarded without being inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(9);
    /// assert_eq!(value.unwrap_or_default(), 9);
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns the success value without checking the precondition.
    ///
    /// Calling this on `Failure` is a contract violation. This crate
    /// forbids unsafe code, so the violation fails fast with a panic
    /// instead of exhibiting undefined behavior.
    ///
    /// # Panics
    ///
    /// Panics if the caller-guaranteed precondition is violated, i.e. this
    /// is `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert!(value.is_success());
    /// assert_eq!(value.unwrap_unchecked(), 2);
    /// ```
    #[inline]
    pub fn unwrap_unchecked(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => {
                unreachable!("called `Outcome::unwrap_unchecked()` on a `Failure` value")
            }
        }
    }

    /// Returns the error without checking the precondition.
    ///
    /// Calling this on `Success` is a contract violation; see
    /// [`unwrap_unchecked`](Outcome::unwrap_unchecked) for the fail-fast
    /// policy.
    ///
    /// # Panics
    ///
    /// Panics if the caller-guaranteed precondition is violated, i.e. this
    /// is `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert!(value.is_failure());
    /// assert_eq!(value.unwrap_failure_unchecked(), "nope");
    /// ```
    #[inline]
    pub fn unwrap_failure_unchecked(self) -> E {
        match self {
            Self::Success(_) => {
                unreachable!("called `Outcome::unwrap_failure_unchecked()` on a `Success` value")
            }
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Result Interop
    // =========================================================================

    /// Returns a view of this outcome as a standard `Result` of
    /// references.
    ///
    /// This is the interop point with code built on the standard library's
    /// `Result`; use the `From` conversions for the consuming direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.as_result(), Ok(&2));
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.as_result(), Err(&"nope"));
    /// ```
    #[inline]
    pub const fn as_result(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Panicking Extraction
// =============================================================================

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value, panicking with `message` on failure.
    ///
    /// # Panics
    ///
    /// Panics if this is `Failure`; the message includes the stringified
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.expect("value should have been computed"), 2);
    /// ```
    ///
    /// ```rust,should_panic
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("emergency failure");
    /// value.expect("value should have been computed"); // panics
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}: {}", stringify(&error)),
        }
    }

    /// Returns the success value, panicking on failure.
    ///
    /// Callers are expected to have already checked [`is_success`] or to
    /// accept the panic as a contract violation; prefer the `unwrap_or`
    /// family or [`propagate`] in pipelines.
    ///
    /// [`is_success`]: Outcome::is_success
    /// [`propagate`]: Outcome::propagate
    ///
    /// # Panics
    ///
    /// Panics if this is `Failure`; the message includes the stringified
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Success(2);
    /// assert_eq!(value.unwrap(), 2);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!(
                "called `Outcome::unwrap()` on a `Failure` value: {}",
                stringify(&error)
            ),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the error, panicking with `message` on success.
    ///
    /// # Panics
    ///
    /// Panics if this is `Success`; the message includes the stringified
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.expect_failure("operation should have failed"), "nope");
    /// ```
    #[inline]
    pub fn expect_failure(self, message: &str) -> E {
        match self {
            Self::Success(value) => panic!("{message}: {}", stringify(&value)),
            Self::Failure(error) => error,
        }
    }

    /// Returns the error, panicking on success.
    ///
    /// # Panics
    ///
    /// Panics if this is `Success`; the message includes the stringified
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Outcome<i32, &str> = Failure("nope");
    /// assert_eq!(value.unwrap_failure(), "nope");
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(value) => panic!(
                "called `Outcome::unwrap_failure()` on a `Success` value: {}",
                stringify(&value)
            ),
            Self::Failure(error) => error,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a standard `Result` into an `Outcome`.
    ///
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let success: Outcome<i32, String> = Ok(42).into();
    /// assert_eq!(success, Success(42));
    ///
    /// let failure: Outcome<i32, String> = Err(String::from("boom")).into();
    /// assert_eq!(failure, Failure(String::from("boom")));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` into a standard `Result`.
    ///
    /// `Success(v)` becomes `Ok(v)`, and `Failure(e)` becomes `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let ok: Result<i32, String> = Outcome::<i32, String>::Success(42).into();
    /// assert_eq!(ok, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Outcome<String, String>: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn success_construction() {
        let value: Outcome<i32, String> = Outcome::Success(42);
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn failure_construction() {
        let value: Outcome<i32, String> = Outcome::Failure(String::from("boom"));
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn debug_rendering() {
        let success: Outcome<i32, &str> = Outcome::Success(1);
        let failure: Outcome<i32, &str> = Outcome::Failure("e");
        assert_eq!(format!("{success:?}"), "Success(1)");
        assert_eq!(format!("{failure:?}"), "Failure(\"e\")");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err(String::from("error"));
        let outcome: Outcome<i32, String> = err.into();
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err(String::from("error")));
    }
}
