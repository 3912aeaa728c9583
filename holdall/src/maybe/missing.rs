//! Descriptor of absent combinator inputs.
//!
//! When a joint combinator finds at least one absent input it hands the
//! `on_missing` handler a [`Missing`] value listing every absent position.
//! Labelling falls back through three tiers per position: a caller-supplied
//! name covering that index, then the built-in ordinal table
//! ("first" to "fifth"), then a literal placeholder for positions beyond
//! the table.

use std::fmt;

use tracing::trace;

/// Ordinal labels for the fixed-arity positions.
const ORDINALS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Label for positions beyond the ordinal table.
const UNNAMED: &str = "<unspecified value>";

/// The ascending zero-based positions of absent inputs to a joint
/// combinator.
///
/// Produced only by the combinators, which scan every input rather than
/// stopping at the first absence, so the listed positions are complete and
/// the set is never empty on the `on_missing` path.
///
/// # Examples
///
/// ```
/// use holdall::{Maybe, combine3};
///
/// let summary = combine3(
///     Maybe::present(1),
///     Maybe::<i32>::absent(),
///     Maybe::present(3),
///     |a, b, c| format!("{}", a + b + c),
///     |missing| missing.describe(),
/// );
/// assert_eq!(summary, "second value is missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Missing {
    positions: Vec<usize>,
}

impl Missing {
    /// Builds a descriptor from positions already collected in ascending
    /// order by a combinator scan.
    pub(crate) const fn new(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    /// The ascending zero-based positions of the absent inputs.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of absent positions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no positions are recorded. Combinators never hand out an
    /// empty descriptor.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Renders a human-readable summary using the ordinal labels.
    ///
    /// A single absence reads `"<label> value is missing"`; several read
    /// `"<label> and <label> ... values are missing"`, joined with the
    /// literal word "and".
    #[must_use]
    pub fn describe(&self) -> String {
        self.describe_named(&[])
    }

    /// Renders a summary using caller-supplied labels.
    ///
    /// The fallback is per-position: a position the `names` slice does not
    /// cover takes its ordinal label, and positions beyond the ordinal
    /// table take a placeholder, so a partial slice downgrades only the
    /// uncovered positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdall::{Maybe, combine2};
    ///
    /// let summary = combine2(
    ///     Maybe::present("alpha"),
    ///     Maybe::<&str>::absent(),
    ///     |_, _| String::new(),
    ///     |missing| missing.describe_named(&["x1", "x2"]),
    /// );
    /// assert_eq!(summary, "x2 value is missing");
    /// ```
    #[must_use]
    pub fn describe_named(&self, names: &[&str]) -> String {
        let labels: Vec<&str> = self
            .positions
            .iter()
            .map(|&position| {
                names
                    .get(position)
                    .copied()
                    .unwrap_or_else(|| ordinal(position))
            })
            .collect();
        let tail = if labels.len() == 1 {
            "value is missing"
        } else {
            "values are missing"
        };
        format!("{} {tail}", labels.join(" and "))
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Ordinal label for `position`, or the placeholder once the table runs
/// out.
fn ordinal(position: usize) -> &'static str {
    ORDINALS.get(position).copied().unwrap_or_else(|| {
        trace!(position, "no ordinal label for position, using placeholder");
        UNNAMED
    })
}
