//! Core traits for parameter validation.
//!
//! - [`ParameterValidator`]: the chainable check surface implemented by
//!   single validators and validator collections
//! - [`HasEnsure`]: lets a type carry its own registry instead of the
//!   process default (requires `std`)
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::ParameterValidator;
//! use guard_rail::validation::ValidatorCollection;
//!
//! let outcome = ValidatorCollection::new()
//!     .parameter(3, "retries")
//!     .parameter(-1, "timeout")
//!     .check_true(|v: &i32| *v >= 0, "must not be negative")
//!     .to_outcome();
//! assert_eq!(outcome.errors().len(), 1);
//! ```

pub mod parameter_validator;

pub use parameter_validator::ParameterValidator;

#[cfg(feature = "std")]
pub use crate::registry::HasEnsure;
