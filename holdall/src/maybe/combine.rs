//! Joint combinators over several optional containers.
//!
//! The fixed-arity family ([`combine2`] to [`combine5`]) keeps each
//! position's own value type in the `on_values` handler. [`combine_all`]
//! is the dynamically-sized sibling for a homogeneous collection of
//! containers. Both share the same dispatch contract: `on_values` runs iff
//! every input is present, otherwise `on_missing` receives the complete
//! ascending list of absent positions.

use super::Maybe;
use super::missing::Missing;

macro_rules! joint_combinator {
    ($(#[$attr:meta])* $name:ident => $(($input:ident, $held:ident, $ty:ident, $idx:expr)),+) => {
        $(#[$attr])*
        #[must_use]
        pub fn $name<$($ty,)* R>(
            $($input: Maybe<$ty>,)*
            on_values: impl FnOnce($($ty),*) -> R,
            on_missing: impl FnOnce(&Missing) -> R,
        ) -> R {
            let mut positions = Vec::new();
            $(
                if $input.is_absent() {
                    positions.push($idx);
                }
            )*
            match ($($input,)*) {
                ($(Maybe::Present($held),)*) => on_values($($held),*),
                _ => on_missing(&Missing::new(positions)),
            }
        }
    };
}

joint_combinator! {
    /// Dispatches on the joint presence of two containers.
    ///
    /// When both inputs are present, `on_values` receives both unwrapped
    /// values positionally. Otherwise `on_missing` receives a [`Missing`]
    /// listing every absent position in ascending order; the scan never
    /// stops at the first absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdall::{Maybe, combine2};
    ///
    /// let sum = combine2(
    ///     Maybe::present(2),
    ///     Maybe::present(3),
    ///     |a, b| a + b,
    ///     |_| 0,
    /// );
    /// assert_eq!(sum, 5);
    /// ```
    combine2 => (a, a_value, A, 0_usize), (b, b_value, B, 1_usize)
}

joint_combinator! {
    /// Three-input sibling of [`combine2`].
    combine3 => (a, a_value, A, 0_usize), (b, b_value, B, 1_usize), (c, c_value, C, 2_usize)
}

joint_combinator! {
    /// Four-input sibling of [`combine2`].
    combine4 => (a, a_value, A, 0_usize), (b, b_value, B, 1_usize), (c, c_value, C, 2_usize),
        (d, d_value, D, 3_usize)
}

joint_combinator! {
    /// Five-input sibling of [`combine2`].
    combine5 => (a, a_value, A, 0_usize), (b, b_value, B, 1_usize), (c, c_value, C, 2_usize),
        (d, d_value, D, 3_usize), (e, e_value, E, 4_usize)
}

/// Dispatches on the joint presence of a homogeneous collection of
/// containers.
///
/// The dynamically-sized sibling of the fixed-arity family: `on_values`
/// receives every unwrapped value in input order iff all inputs are
/// present, otherwise `on_missing` receives the ascending absent
/// positions. Arity may exceed five; positions beyond the ordinal table
/// label themselves with a placeholder when described.
///
/// # Examples
///
/// ```
/// use holdall::{Maybe, combine_all};
///
/// let readings = vec![Maybe::present(10), Maybe::present(20), Maybe::present(30)];
/// let total = combine_all(readings, |values| values.iter().sum(), |_| 0);
/// assert_eq!(total, 60);
/// ```
#[must_use]
pub fn combine_all<T, R>(
    inputs: Vec<Maybe<T>>,
    on_values: impl FnOnce(Vec<T>) -> R,
    on_missing: impl FnOnce(&Missing) -> R,
) -> R {
    let positions: Vec<usize> = inputs
        .iter()
        .enumerate()
        .filter(|(_, input)| input.is_absent())
        .map(|(position, _)| position)
        .collect();
    if positions.is_empty() {
        let values = inputs.into_iter().filter_map(Maybe::into_nullable).collect();
        on_values(values)
    } else {
        on_missing(&Missing::new(positions))
    }
}
