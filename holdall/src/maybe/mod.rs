//! The optional-value container.
//!
//! [`Maybe`] wraps zero or one logical value as a closed two-state sum type:
//! a container is either `Present(value)` or `Absent`, never both and never
//! neither. Alongside presence queries, safe and fallible extraction, and
//! transformation, the module provides joint combinators
//! ([`combine2`] through [`combine5`] and the homogeneous [`combine_all`])
//! that dispatch on the presence of several containers at once and report
//! the positions of any absent inputs through a [`Missing`] descriptor.
//!
//! # Null conflation
//!
//! The construction paths that accept a nullable source treat the sentinel
//! (`Option::None`) as absence: `Maybe::present(None)` builds an `Absent`
//! container rather than a present container holding a sentinel. Consumers
//! depend on this conflation of "present but empty" with "absent"; it is a
//! documented policy, not an oversight.
//!
//! ```
//! use holdall::Maybe;
//!
//! assert_eq!(Maybe::present(None::<u32>), Maybe::<u32>::absent());
//! assert_eq!(Maybe::present(7), Maybe::Present(7));
//! ```

mod combine;
mod missing;

#[cfg(test)]
mod tests;

pub use combine::{combine_all, combine2, combine3, combine4, combine5};
pub use missing::Missing;

use crate::error::UnwrapError;

/// A container holding either one value or nothing.
///
/// The two states are mutually exclusive and exhaustive, so native `match`
/// over the variants is total. [`Maybe::fold`] offers the same exhaustive
/// dispatch as an expression.
///
/// Equality is structural: two absent containers are equal, two present
/// containers compare their held values, and a present container never
/// equals an absent one.
///
/// # Examples
///
/// ```
/// use holdall::Maybe;
///
/// let present = Maybe::present("on time");
/// let absent: Maybe<&str> = Maybe::absent();
///
/// assert_eq!(present.value_or("late"), "on time");
/// assert_eq!(absent.value_or("late"), "late");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    /// A held value.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Wraps `value` as a present container.
    ///
    /// Accepts anything convertible into the nullable form, so a plain value
    /// wraps directly whilst the sentinel constructs an absent container
    /// (see the [module documentation](self) for the conflation policy).
    #[must_use]
    pub fn present(value: impl Into<Option<T>>) -> Self {
        value.into().map_or(Self::Absent, Self::Present)
    }

    /// Builds the absent container.
    #[must_use]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Dispatches on a nullable source: a carried value becomes `Present`,
    /// the sentinel becomes `Absent`.
    #[must_use]
    pub fn from_nullable(value: Option<T>) -> Self {
        Self::present(value)
    }

    /// Converts back into the nullable form, the dual of
    /// [`Maybe::from_nullable`].
    #[must_use]
    pub fn into_nullable(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Whether the container holds a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the container is empty. Always the negation of
    /// [`Maybe::is_present`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the held value, or `default` when absent. Never fails.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Lazy sibling of [`Maybe::value_or`]; `default` is only invoked when
    /// the container is absent.
    #[must_use]
    pub fn value_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the held value, failing when the container is absent.
    ///
    /// This is the explicit escape hatch; prefer [`Maybe::value_or`] or
    /// [`Maybe::fold`] where absence is an expected state.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::Absent`] when the container holds nothing.
    pub fn try_value(self) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::Absent),
        }
    }

    /// Exhaustive dispatch: invokes exactly one of the two handlers and
    /// returns its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdall::Maybe;
    ///
    /// let label = Maybe::present(3).fold(|n| format!("{n} items"), || "empty".into());
    /// assert_eq!(label, "3 items");
    /// ```
    #[must_use]
    pub fn fold<R>(self, on_present: impl FnOnce(T) -> R, on_absent: impl FnOnce() -> R) -> R {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Transforms the held value, leaving an absent container absent.
    ///
    /// `transform` is never invoked on an absent container.
    #[must_use]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Present(value) => Maybe::Present(transform(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Borrows the held value: converts `&Maybe<T>` to `Maybe<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_nullable()
    }
}
