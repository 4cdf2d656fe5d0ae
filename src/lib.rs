//! Fluent argument validation with error aggregation and observer callbacks.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `guard_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Single Parameter
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn open(path: &str) -> Result<(), EnsureError> {
//!     guard_rail::parameter(path, "path")
//!         .is_not_empty()
//!         .check_false(|p: &&str| p.contains('\0'), "path contains a NUL byte")
//!         .raise_on_failure()?;
//!     Ok(())
//! }
//!
//! assert!(open("/tmp/data").is_ok());
//! assert!(open("").is_err());
//! ```
//!
//! ## Many Parameters, One Report
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! let err = guard_rail::many()
//!     .parameter(0, "width")
//!     .parameter(480, "height")
//!     .parameter(0, "depth")
//!     .is_greater_than(0)
//!     .raise_on_failure()
//!     .unwrap_err();
//!
//! assert_eq!(err.parameters(), "width, depth");
//! ```
//!
//! ## Outcome Algebra
//!
//! ```
//! use guard_rail::outcome::Outcome;
//! use guard_rail::types::ArgumentError;
//!
//! let outcome: Outcome = vec![
//!     Outcome::success(),
//!     Outcome::failure(ArgumentError::null_argument("token")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let message = outcome.match_with(|| "ok".to_string(), |err| err.to_string());
//! assert!(message.contains("token"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Stock error builders for failing checks
pub mod builders;
/// Call-site capture macros
pub mod macros;
/// Outcome type and its combination algebra
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for chaining parameter checks
pub mod traits;
/// Error values and call-site metadata
pub mod types;
/// Validators, collections, hooks and typed checks
pub mod validation;

/// Default instance and observer registry (requires `std`)
#[cfg(feature = "std")]
pub mod registry;

pub use outcome::Outcome;
pub use traits::ParameterValidator;
pub use types::{AggregateError, ArgumentError, CallerLocation, EnsureError, ErrorKind, ErrorVec};
pub use validation::{Hooks, Validator, ValidatorCollection};

#[cfg(feature = "std")]
pub use registry::{many, parameter, Ensure, HasEnsure};
