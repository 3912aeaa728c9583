//! Chained fault values with colon-joined rendering.
//!
//! A [`Fault`] carries a message and, optionally, the fault that caused it,
//! forming a singly linked cause chain. Chains are assembled outermost
//! last: wrapping a fault in a new one produces a fresh value whose
//! predecessor link is set, so a value held elsewhere never observes the
//! new chain. [`Fault::chain`] walks the links outermost first and the
//! [`Display`](std::fmt::Display) rendering joins the messages with `": "`.
//!
//! The chain is linear by convention only. No cycle detection is
//! performed: walking a cyclic chain does not terminate, though the
//! ownership model makes one impossible to build from safe code. A single
//! structured warning is emitted if a walk passes [`DEPTH_WARNING_THRESHOLD`]
//! links.
//!
//! ```
//! use holdall::Fault;
//!
//! let fault = Fault::new("request rejected")
//!     .caused_by(Fault::new("validation failed").caused_by(Fault::new("port out of range")));
//! assert_eq!(
//!     fault.to_string(),
//!     "request rejected: validation failed: port out of range",
//! );
//! ```


use std::fmt;
use std::iter::FusedIterator;

use tracing::warn;

use crate::Maybe;

/// Walked depth at which [`Fault::chain`] emits its diagnostic warning.
pub const DEPTH_WARNING_THRESHOLD: usize = 1024;

/// An error value carrying a message and an optional predecessor.
///
/// Equality is structural over the whole chain: two faults are equal when
/// their messages and their predecessors (recursively) are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    message: String,
    cause: Maybe<Box<Fault>>,
}

impl Fault {
    /// Builds a cause-less fault from any displayable value, converted to
    /// its string form.
    #[must_use]
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
            cause: Maybe::Absent,
        }
    }

    /// The message of this link alone, without the predecessors.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attaches `cause` as this fault's predecessor, replacing any
    /// predecessor attached earlier.
    ///
    /// Consumes the receiver and returns a new value with the link set, so
    /// chains are built fluently and a fault already held elsewhere keeps
    /// its own history:
    ///
    /// ```
    /// use holdall::Fault;
    ///
    /// let inner = Fault::new("io");
    /// let outer = Fault::new("load").caused_by(inner.clone());
    /// assert_eq!(outer.to_string(), "load: io");
    /// assert_eq!(inner.to_string(), "io");
    /// ```
    #[must_use]
    pub fn caused_by(mut self, cause: Self) -> Self {
        self.cause = Maybe::Present(Box::new(cause));
        self
    }

    /// Borrows the predecessor, when one is attached.
    #[must_use]
    pub fn cause(&self) -> Maybe<&Self> {
        self.cause.as_ref().map(|boxed| &**boxed)
    }

    /// Walks the chain from this fault outward through every predecessor,
    /// terminating at the first link without one.
    ///
    /// A cause-less fault yields exactly one element.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub const fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
            walked: 0,
        }
    }
}

impl fmt::Display for Fault {
    // Renders the full chain, outermost message first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, fault) in self.chain().enumerate() {
            if index > 0 {
                f.write_str(": ")?;
            }
            f.write_str(fault.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause()
            .into_nullable()
            .map(|fault| fault as &(dyn std::error::Error + 'static))
    }
}

/// Iterator over a fault and its predecessors, outermost first.
///
/// Returned by [`Fault::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Fault>,
    walked: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Fault;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.walked += 1;
        if self.walked == DEPTH_WARNING_THRESHOLD {
            warn!(depth = self.walked, "fault chain walk is unusually deep");
        }
        self.next = current.cause().into_nullable();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
