//! Early-return propagation for `Outcome` values.
//!
//! A failure that should abort the rest of a computation travels as the
//! `Err` side of a standard `Result`, wrapped in the [`Interrupt`] carrier.
//! [`Outcome::propagate`] produces that `Result`, the `?` operator threads
//! it, and [`try_guard`] converts it back into an [`Outcome`] at the scope
//! boundary. The signal is a typed value, not a thrown object, so nested
//! guards nest correctly by construction: each guard only ever sees the
//! interrupts produced inside its own closure.

use crate::container::Outcome;

/// Carrier for a failure propagating out of a guard scope.
///
/// `Interrupt<E>` wraps exactly one error payload and exists only between
/// a [`Outcome::propagate`] call and the enclosing [`try_guard`] boundary.
/// It is not part of any steady-state data model; an `Interrupt` visible
/// outside a guard means a `propagate` call was never guarded, which is a
/// defect in the caller.
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// let carrier = Interrupt::new("boom");
/// assert_eq!(carrier.into_inner(), "boom");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupt<E>(pub E);

impl<E> Interrupt<E> {
    /// Creates a new `Interrupt` wrapping the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let carrier = Interrupt::new(42);
    /// assert_eq!(carrier.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Consumes the `Interrupt` and returns the wrapped error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let carrier = Interrupt::new(String::from("boom"));
    /// assert_eq!(carrier.into_inner(), "boom");
    /// ```
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E> From<E> for Interrupt<E> {
    /// Lifts a bare error into the propagation carrier.
    ///
    /// This lets `?` apply directly to ordinary `Result<_, E>` values
    /// inside a guard body, not just to [`Outcome::propagate`] results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    /// use std::num::ParseIntError;
    ///
    /// let parsed: Outcome<i32, ParseIntError> = try_guard(|| {
    ///     let number: i32 = "42".parse()?;
    ///     Ok(number)
    /// });
    /// assert_eq!(parsed, Success(42));
    /// ```
    #[inline]
    fn from(error: E) -> Self {
        Self(error)
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into a `Result` whose error side is the [`Interrupt`]
    /// carrier, so `?` can short-circuit the enclosing guard scope.
    ///
    /// Meaningful only inside a [`try_guard`] body; the guard intercepts
    /// the carrier and converts it back into a `Failure` value.
    ///
    /// # Errors
    ///
    /// Returns `Err(Interrupt(error))` if this is `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let doubled: Outcome<i32, &str> = try_guard(|| {
    ///     let value = Success(21).propagate()?;
    ///     Ok(value * 2)
    /// });
    /// assert_eq!(doubled, Success(42));
    /// ```
    #[inline]
    pub fn propagate(self) -> Result<T, Interrupt<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(Interrupt(error)),
        }
    }
}

/// Establishes a guard scope that converts a propagated failure back into
/// an [`Outcome`].
///
/// Runs `body` to completion. A normal return becomes `Success`; an
/// [`Interrupt`] raised by `?` on a [`Outcome::propagate`] call inside the
/// body becomes `Failure`, short-circuiting any statements after the
/// failing `?`. Guards nest: each one only catches interrupts from its own
/// closure.
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// let result: Outcome<i32, &str> = try_guard(|| {
///     let value = Success(5).propagate()?;
///     Ok(value + 1)
/// });
/// assert_eq!(result, Success(6));
///
/// let failing: Outcome<i32, &str> = Failure("e");
/// let result = try_guard(|| {
///     let value = failing.propagate()?;
///     Ok(value + 1) // never reached
/// });
/// assert_eq!(result, Failure("e"));
/// ```
#[inline]
pub fn try_guard<T, E, F>(body: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, Interrupt<E>>,
{
    match body() {
        Ok(value) => Outcome::Success(value),
        Err(interrupt) => Outcome::Failure(interrupt.into_inner()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn propagate_success_yields_value() {
        let value: Outcome<i32, String> = Outcome::Success(5);
        assert_eq!(value.propagate(), Ok(5));
    }

    #[rstest]
    fn propagate_failure_yields_interrupt() {
        let value: Outcome<i32, String> = Outcome::Failure(String::from("e"));
        assert_eq!(value.propagate(), Err(Interrupt(String::from("e"))));
    }

    #[rstest]
    fn guard_converts_interrupt_back() {
        let failing: Outcome<i32, String> = Outcome::Failure(String::from("e"));
        let result: Outcome<i32, String> = try_guard(|| {
            let value = failing.propagate()?;
            Ok(value + 1)
        });
        assert_eq!(result, Outcome::Failure(String::from("e")));
    }
}
