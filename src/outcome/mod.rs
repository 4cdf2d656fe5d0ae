//! Outcome algebra for validation sessions.
//!
//! This module provides [`Outcome`], the two-variant result of a validation
//! session. Unlike a plain `Result`, combining outcomes keeps every error of
//! both sides, so a batch of independent checks reports all violations at once.
//!
//! # Key Components
//!
//! - [`Outcome`] - `Success` or `Failure` holding one or more argument errors
//! - [`Outcome::combine`] - flattening, order-preserving combination
//! - `FromIterator` - folds many outcomes into one
//!
//! # Examples
//!
//! ```
//! use guard_rail::outcome::Outcome;
//! use guard_rail::types::ArgumentError;
//!
//! let combined = Outcome::combine(
//!     Outcome::failure(ArgumentError::null_argument("host")),
//!     Outcome::failure(ArgumentError::out_of_range("port", "port is zero")),
//! );
//! assert_eq!(combined.iter_errors().count(), 2);
//! assert!(combined.into_result().is_err());
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
