//! Validators and validator collections.
//!
//! This module provides the two-state [`Validator`] for a single parameter and
//! the [`ValidatorCollection`] that checks several parameters together and
//! aggregates every failure.
//!
//! # Key Components
//!
//! - [`Validator`] - `Valid` until the first failing check, then `Invalid`
//! - [`ValidatorCollection`] - independent validators combined in order
//! - [`Hooks`] - on-failure and on-throw callbacks bound at creation
//! - [`checks`] - typed predicate checks for options, strings, sequences and
//!   ordered values
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn create_user(name: &str, age: u32) -> Result<(), EnsureError> {
//!     Validator::new(name, "name").is_not_empty().raise_on_failure()?;
//!     Validator::new(age, "age").is_in_range(0..150).raise_on_failure()?;
//!     Ok(())
//! }
//!
//! assert!(create_user("ada", 36).is_ok());
//! assert!(create_user("", 36).is_err());
//! ```
pub mod checks;
pub mod collection;
pub mod hooks;
pub mod validator;

pub use self::collection::*;
pub use self::hooks::{FailureCallback, Hooks, ThrowCallback};
pub use self::validator::*;
