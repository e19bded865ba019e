//! Optional container - a value that is present or absent.
//!
//! This module provides the `Optional<T>` type, which represents a value
//! that is either `Present(T)` or `Empty`. It replaces sentinel values
//! ("`-1` means missing", "empty string means unset") with a closed sum
//! type whose combinators compose:
//!
//! - Safe total combinators (`map`, `and_then`, `filter`, `zip`, ...) for
//!   pipelines
//! - An explicit `unwrap` family for boundaries where absence is a
//!   programming error
//! - Slot-mutation operations (`take`, `replace`, `insert`, ...) for
//!   callers that hold the container in a mutable binding
//!
//! # Examples
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! // Creating optional values
//! let present: Optional<i32> = Present(42);
//! let empty: Optional<i32> = Empty;
//!
//! // Pattern matching
//! match present {
//!     Present(n) => println!("Got value: {}", n),
//!     Empty => println!("Got nothing"),
//! }
//!
//! // Chaining combinators
//! let result = Present(21)
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 10)
//!     .unwrap_or(0);
//! assert_eq!(result, 42);
//! ```

use std::fmt;
use std::mem;

use super::Outcome;

/// A value that is present or absent.
///
/// `Optional<T>` represents a value that is either `Present(T)` or `Empty`.
/// Exactly one variant is active at any time; there is no null or
/// uninitialized state outside the two variants.
///
/// `Empty` orders before any `Present` value, matching the conventional
/// "absent sorts first" behavior.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// let name: Optional<String> = Present(String::from("ada"));
/// let missing: Optional<String> = Empty;
///
/// assert_eq!(name.map(|n| n.len()), Present(3));
/// assert_eq!(missing.map(|n| n.len()), Empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    Empty,
    /// A value is present.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Optional<i32> = Present(2);
    /// assert!(value.is_present());
    ///
    /// let value: Optional<i32> = Empty;
    /// assert!(!value.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Optional<i32> = Empty;
    /// assert!(value.is_empty());
    ///
    /// let value: Optional<i32> = Present(2);
    /// assert!(!value.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if a value is present and the predicate holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert!(Present(2).is_present_and(|n| n > 1));
    /// assert!(!Present(0).is_present_and(|n| n > 1));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert!(!empty.is_present_and(|n| n > 1));
    /// ```
    #[inline]
    pub fn is_present_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Empty => false,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, panicking with `message` if empty.
    ///
    /// # Panics
    ///
    /// Panics with the given message if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Optional<&str> = Present("air");
    /// assert_eq!(value.expect("the world is ending"), "air");
    /// ```
    ///
    /// ```rust,should_panic
    /// use twofold::prelude::*;
    ///
    /// let value: Optional<&str> = Empty;
    /// value.expect("the world is ending"); // panics
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("{message}"),
        }
    }

    /// Returns the contained value, panicking if empty.
    ///
    /// Callers are expected to have already checked [`is_present`] or to
    /// accept the panic as a contract violation; prefer the `unwrap_or`
    /// family in pipelines.
    ///
    /// [`is_present`]: Optional::is_present
    ///
    /// # Panics
    ///
    /// Panics with a generic message if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).unwrap(), 2);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("called `Optional::unwrap()` on an `Empty` value"),
        }
    }

    /// Returns the contained value or the provided default.
    ///
    /// The default is eagerly evaluated; use [`unwrap_or_else`] for a lazy
    /// default.
    ///
    /// [`unwrap_or_else`]: Optional::unwrap_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).unwrap_or(0), 2);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the contained value or computes one from the operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).unwrap_or_else(|| 10), 2);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.unwrap_or_else(|| 10), 10);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, operation: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => operation(),
        }
    }

    /// Returns the contained value or the type's default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).unwrap_or_default(), 2);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.unwrap_or_default(), 0);
    ///
    /// let empty: Optional<Vec<i32>> = Empty;
    /// assert_eq!(empty.unwrap_or_default(), Vec::new());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => T::default(),
        }
    }

    /// Returns the contained value without checking the precondition.
    ///
    /// Calling this on `Empty` is a contract violation. This crate forbids
    /// unsafe code, so the violation fails fast with a panic instead of
    /// exhibiting undefined behavior; the precondition remains
    /// caller-guaranteed either way.
    ///
    /// # Panics
    ///
    /// Panics if the caller-guaranteed precondition is violated, i.e. this
    /// is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value = Present(2);
    /// assert!(value.is_present());
    /// assert_eq!(value.unwrap_unchecked(), 2);
    /// ```
    #[inline]
    pub fn unwrap_unchecked(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => unreachable!("called `Optional::unwrap_unchecked()` on an `Empty` value"),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value, preserving emptiness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).map(|n| n * 2), Present(4));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.map(|n| n * 2), Empty);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Applies a function to the contained value, or returns the default.
    ///
    /// The default is eagerly evaluated; use [`map_or_else`] for a lazy
    /// default.
    ///
    /// [`map_or_else`]: Optional::map_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present("foo").map_or(42, |text| text.len()), 3);
    ///
    /// let empty: Optional<&str> = Empty;
    /// assert_eq!(empty.map_or(42, |text| text.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => default,
        }
    }

    /// Applies a function to the contained value, or computes a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present("foo").map_or_else(|| 42, |text| text.len()), 3);
    ///
    /// let empty: Optional<&str> = Empty;
    /// assert_eq!(empty.map_or_else(|| 42, |text| text.len()), 42);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => default(),
        }
    }

    /// Calls an operation with a reference to the contained value, then
    /// returns the container unchanged.
    ///
    /// Useful for slotting side effects (logging, counters) into a
    /// combinator chain without breaking it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let value = Present(2).inspect(|n| seen.push(*n));
    /// assert_eq!(value, Present(2));
    /// assert_eq!(seen, vec![2]);
    ///
    /// let empty: Optional<i32> = Empty;
    /// let value = empty.inspect(|n| seen.push(*n));
    /// assert_eq!(value, Empty);
    /// assert_eq!(seen, vec![2]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, operation: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            operation(value);
        }
        self
    }

    /// Keeps the contained value only if the predicate holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    ///
    /// assert_eq!(Present(4).filter(is_even), Present(4));
    /// assert_eq!(Present(3).filter(is_even), Empty);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.filter(is_even), Empty);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    // =========================================================================
    // Conversion to Outcome
    // =========================================================================

    /// Converts into an [`Outcome`], mapping `Empty` to the given error.
    ///
    /// The error is eagerly evaluated; use [`success_or_else`] for a lazy
    /// error.
    ///
    /// [`success_or_else`]: Optional::success_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(5).success_or("nothing here"), Success(5));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.success_or("nothing here"), Failure("nothing here"));
    /// ```
    #[inline]
    pub fn success_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Empty => Outcome::Failure(error),
        }
    }

    /// Converts into an [`Outcome`], computing the error from the operation
    /// if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(5).success_or_else(|| "nothing here"), Success(5));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.success_or_else(|| "nothing here"), Failure("nothing here"));
    /// ```
    #[inline]
    pub fn success_or_else<E, F>(self, operation: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Empty => Outcome::Failure(operation()),
        }
    }

    // =========================================================================
    // Boolean Composition
    // =========================================================================

    /// Returns `other` if a value is present, otherwise `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).and(Present("foo")), Present("foo"));
    /// assert_eq!(Present(2).and(Optional::<&str>::Empty), Empty);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.and(Present("foo")), Empty);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Empty => Optional::Empty,
        }
    }

    /// Applies a container-returning function to the contained value.
    ///
    /// This is the monadic bind: `Empty` short-circuits, `Present`
    /// continues with whatever the function returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Present(n / 2) } else { Empty };
    ///
    /// assert_eq!(Present(8).and_then(half), Present(4));
    /// assert_eq!(Present(3).and_then(half), Empty);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.and_then(half), Empty);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Returns the container if a value is present, otherwise `other`.
    ///
    /// The alternative is eagerly evaluated; use [`or_else`] for a lazy
    /// alternative.
    ///
    /// [`or_else`]: Optional::or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).or(Present(100)), Present(2));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.or(Present(100)), Present(100));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Empty => other,
        }
    }

    /// Returns the container if a value is present, otherwise calls the
    /// operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).or_else(|| Present(100)), Present(2));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.or_else(|| Present(100)), Present(100));
    /// ```
    #[inline]
    pub fn or_else<F>(self, operation: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Empty => operation(),
        }
    }

    /// Returns whichever container holds a value, if exactly one does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let empty: Optional<i32> = Empty;
    ///
    /// assert_eq!(Present(2).xor(empty), Present(2));
    /// assert_eq!(empty.xor(Present(3)), Present(3));
    /// assert_eq!(Present(2).xor(Present(3)), Empty);
    /// assert_eq!(empty.xor(empty), Empty);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Empty) | (Self::Empty, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Empty,
        }
    }

    // =========================================================================
    // Zipping
    // =========================================================================

    /// Pairs up two present values.
    ///
    /// Returns `Present((self, other))` if both are present, else `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(5).zip(Present("a")), Present((5, "a")));
    /// assert_eq!(Present(5).zip(Optional::<&str>::Empty), Empty);
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.zip(Present("a")), Empty);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Present(first), Optional::Present(second)) => {
                Optional::Present((first, second))
            }
            _ => Optional::Empty,
        }
    }

    /// Combines two present values with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(2).zip_with(Present(3), |a, b| a + b), Present(5));
    /// assert_eq!(Present(2).zip_with(Optional::<i32>::Empty, |a, b| a + b), Empty);
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Optional<U>, function: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Present(first), Optional::Present(second)) => {
                Optional::Present(function(first, second))
            }
            _ => Optional::Empty,
        }
    }

    // =========================================================================
    // Slot Mutation
    // =========================================================================

    /// Moves the value out, leaving `Empty` in the slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut slot = Present(5);
    /// assert_eq!(slot.take(), Present(5));
    /// assert_eq!(slot, Empty);
    ///
    /// let mut slot: Optional<i32> = Empty;
    /// assert_eq!(slot.take(), Empty);
    /// assert_eq!(slot, Empty);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::Empty)
    }

    /// Puts a value into the slot, returning the old contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut slot = Present(2);
    /// assert_eq!(slot.replace(5), Present(2));
    /// assert_eq!(slot, Present(5));
    ///
    /// let mut slot: Optional<i32> = Empty;
    /// assert_eq!(slot.replace(5), Empty);
    /// assert_eq!(slot, Present(5));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::Present(value))
    }

    /// Puts a value into the slot, dropping any old contents, and returns
    /// a mutable reference to the new value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut slot: Optional<i32> = Empty;
    /// *slot.insert(1) = 2;
    /// assert_eq!(slot, Present(2));
    ///
    /// let mut slot = Present(3);
    /// assert_eq!(*slot.insert(4), 4);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Present(value);
        match self {
            Self::Present(inner) => inner,
            Self::Empty => unreachable!(),
        }
    }

    /// Returns a mutable reference to the contained value, inserting the
    /// given one first if the slot is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut slot: Optional<i32> = Empty;
    /// assert_eq!(*slot.get_or_insert(5), 5);
    ///
    /// let mut slot = Present(2);
    /// assert_eq!(*slot.get_or_insert(5), 2);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Returns a mutable reference to the contained value, inserting one
    /// produced by the operation first if the slot is empty.
    ///
    /// The operation is invoked at most once, and never when a value is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut calls = 0;
    /// let mut slot: Optional<i32> = Empty;
    ///
    /// assert_eq!(*slot.get_or_insert_with(|| { calls += 1; 5 }), 5);
    /// assert_eq!(*slot.get_or_insert_with(|| { calls += 1; 9 }), 5);
    /// assert_eq!(calls, 1);
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, operation: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_empty() {
            *self = Self::Present(operation());
        }
        match self {
            Self::Present(inner) => inner,
            Self::Empty => unreachable!(),
        }
    }

    /// Returns a mutable reference to the contained value, inserting the
    /// type's default value first if the slot is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let mut slot: Optional<i32> = Empty;
    /// assert_eq!(*slot.get_or_insert_default(), 0);
    ///
    /// let mut slot = Present(7);
    /// assert_eq!(*slot.get_or_insert_default(), 7);
    /// ```
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    // =========================================================================
    // Nullable Interop
    // =========================================================================

    /// Returns a conventional nullable view of the contained value.
    ///
    /// This is the interop point with code built on the standard library's
    /// `Option`; use the `From` conversions for the consuming direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(5).as_option(), Some(&5));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty.as_option(), None);
    /// ```
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }
}

// =============================================================================
// Structural Operations
// =============================================================================

impl<T, U> Optional<(T, U)> {
    /// Splits a present pair into a pair of present values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present((1, "a")).unzip(), (Present(1), Present("a")));
    ///
    /// let empty: Optional<(i32, &str)> = Empty;
    /// assert_eq!(empty.unzip(), (Empty, Empty));
    /// ```
    #[inline]
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        match self {
            Self::Present((first, second)) => (Optional::Present(first), Optional::Present(second)),
            Self::Empty => (Optional::Empty, Optional::Empty),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// Flattening only removes a single level at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(Present(5)).flatten(), Present(5));
    /// assert_eq!(Present(Optional::<i32>::Empty).flatten(), Empty);
    ///
    /// let empty: Optional<Optional<i32>> = Empty;
    /// assert_eq!(empty.flatten(), Empty);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Empty => Optional::Empty,
        }
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Transposes an optional outcome into an outcome of an optional.
    ///
    /// `Empty` maps to `Success(Empty)`; a present `Failure` surfaces as
    /// the outer `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let value: Optional<Outcome<i32, String>> = Present(Success(5));
    /// assert_eq!(value.transpose(), Success(Present(5)));
    ///
    /// let value: Optional<Outcome<i32, String>> = Present(Failure(String::from("e")));
    /// assert_eq!(value.transpose(), Failure(String::from("e")));
    ///
    /// let value: Optional<Outcome<i32, String>> = Empty;
    /// assert_eq!(value.transpose(), Success(Empty));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        match self {
            Self::Present(Outcome::Success(value)) => Outcome::Success(Optional::Present(value)),
            Self::Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::Empty => Outcome::Success(Optional::Empty),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Optional::<i32>::default(), Empty);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Nullable Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard `Option` into an `Optional`.
    ///
    /// `Some(v)` becomes `Present(v)`, and `None` becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let present: Optional<i32> = Some(5).into();
    /// assert_eq!(present, Present(5));
    ///
    /// let empty: Optional<i32> = None.into();
    /// assert_eq!(empty, Empty);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` into a standard `Option`.
    ///
    /// `Present(v)` becomes `Some(v)`, and `Empty` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// let some: Option<i32> = Present(5).into();
    /// assert_eq!(some, Some(5));
    ///
    /// let none: Option<i32> = Optional::<i32>::Empty.into();
    /// assert_eq!(none, None);
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Optional<T> {
    /// Compares against a standard `Option` without converting.
    ///
    /// `Present(v)` equals `Some(v)` and `Empty` equals `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(1), Some(1));
    ///
    /// let empty: Optional<i32> = Empty;
    /// assert_eq!(empty, None);
    /// ```
    #[inline]
    fn eq(&self, other: &Option<T>) -> bool {
        match (self, other) {
            (Self::Present(value), Some(expected)) => value == expected,
            (Self::Empty, None) => true,
            _ => false,
        }
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Builds an `Optional` from a value that may equal an absent sentinel.
///
/// Returns `Empty` if `value` equals the sentinel, else `Present(value)`.
/// This is the bridge for APIs that still signal absence with a magic
/// value.
///
/// # Examples
///
/// ```rust
/// use twofold::prelude::*;
///
/// assert_eq!(to_optional(-1, &-1), Empty);
/// assert_eq!(to_optional(7, &-1), Present(7));
///
/// assert_eq!(to_optional(String::new(), &String::new()), Empty);
/// ```
#[inline]
pub fn to_optional<T: PartialEq>(value: T, absent: &T) -> Optional<T> {
    if value == *absent {
        Optional::Empty
    } else {
        Optional::Present(value)
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Optional<String>: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn present_construction() {
        let value: Optional<i32> = Optional::Present(42);
        assert!(value.is_present());
        assert!(!value.is_empty());
    }

    #[rstest]
    fn empty_construction() {
        let value: Optional<i32> = Optional::Empty;
        assert!(value.is_empty());
        assert!(!value.is_present());
    }

    #[rstest]
    fn debug_rendering() {
        assert_eq!(format!("{:?}", Optional::Present(1)), "Present(1)");
        assert_eq!(format!("{:?}", Optional::<i32>::Empty), "Empty");
    }

    #[rstest]
    fn nullable_conversion_roundtrip() {
        let optional: Optional<i32> = Some(5).into();
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(5));

        let optional: Optional<i32> = None.into();
        let option: Option<i32> = optional.into();
        assert_eq!(option, None);
    }
}
