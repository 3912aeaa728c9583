//! Algebraic value containers for expressing absence, failure, and cause
//! chains without null sentinels or panics.
//!
//! Three independent types make up the crate:
//!
//! - [`Maybe`] wraps zero or one value and provides joint combinators
//!   ([`combine2`] to [`combine5`], plus the homogeneous [`combine_all`])
//!   that either hand every unwrapped value to a handler or report which
//!   positions were absent through a [`Missing`] descriptor.
//! - [`Outcome`] carries exactly one of a success value or a failure value,
//!   with the same extraction vocabulary plus short-circuit chaining; it
//!   interconverts with [`Maybe`] by discarding one side.
//! - [`Fault`] is an error value with a message and an optional predecessor,
//!   rendered as a colon-joined chain.
//!
//! Misusing the fallible extractors surfaces an [`UnwrapError`] as an
//! ordinary `Result` to propagate with `?`; the safe access paths
//! (`value_or`, `fold`, native `match`) never fail.
//!
//! # Examples
//!
//! ```
//! use holdall::{Fault, Maybe, Outcome, combine2};
//!
//! fn connect(host: Maybe<&str>, port: Maybe<u16>) -> Outcome<String, Fault> {
//!     combine2(
//!         host,
//!         port,
//!         |h, p| Outcome::Success(format!("{h}:{p}")),
//!         |missing| {
//!             Outcome::Failure(
//!                 Fault::new("cannot connect")
//!                     .caused_by(Fault::new(missing.describe_named(&["host", "port"]))),
//!             )
//!         },
//!     )
//! }
//!
//! let ok = connect(Maybe::present("db.local"), Maybe::present(5432));
//! assert_eq!(ok.value_or(String::new()), "db.local:5432");
//!
//! let missing_port = connect(Maybe::present("db.local"), Maybe::absent());
//! let fault = missing_port.try_error()?;
//! assert_eq!(fault.to_string(), "cannot connect: port value is missing");
//! # Ok::<(), holdall::UnwrapError>(())
//! ```

mod error;
pub mod fault;
pub mod maybe;
pub mod outcome;

pub use error::UnwrapError;
pub use fault::{Chain, Fault};
pub use maybe::{Maybe, Missing, combine_all, combine2, combine3, combine4, combine5};
pub use outcome::Outcome;
