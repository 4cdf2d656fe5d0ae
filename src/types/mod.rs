//! Error values and call-site metadata.
//!
//! # Examples
//!
//! ```
//! use guard_rail::types::{AggregateError, ArgumentError, EnsureError};
//!
//! let single: EnsureError = ArgumentError::null_argument("user").into();
//! assert_eq!(single.errors().len(), 1);
//!
//! let many: EnsureError = AggregateError::from_errors([
//!     ArgumentError::null_argument("user"),
//!     ArgumentError::invalid_argument("email", "missing @"),
//! ])
//! .unwrap()
//! .into();
//! assert_eq!(many.parameters(), "user, email");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod argument_error;
pub mod caller;
pub mod ensure_error;

pub use argument_error::*;
pub use caller::*;
pub use ensure_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case of a single failing
/// parameter.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
