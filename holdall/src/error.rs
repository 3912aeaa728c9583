//! Error type raised by the fallible extraction methods.

use thiserror::Error;

/// Failure raised when extracting a value from a container in the wrong
/// state.
///
/// Every variant is avoidable: check the container's state first, or reach
/// for the non-failing access paths (`value_or`, `fold`) instead of the
/// `try_` escape hatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UnwrapError {
    /// A held value was requested from an absent [`Maybe`](crate::Maybe).
    #[error("tried to unwrap a present value but the container is absent")]
    Absent,

    /// A success value was requested from a failure
    /// [`Outcome`](crate::Outcome).
    #[error("tried to unwrap a success value but the outcome is a failure")]
    FailureOutcome,

    /// A failure value was requested from a success
    /// [`Outcome`](crate::Outcome).
    #[error("tried to unwrap a failure value but the outcome is a success")]
    SuccessOutcome,
}
