//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use guard_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`caller!`]
//! - **Types**: [`Validator`], [`ValidatorCollection`], [`Outcome`], [`EnsureError`],
//!   [`ArgumentError`], [`ErrorKind`], [`CallerLocation`], [`Hooks`]
//! - **Traits**: [`ParameterValidator`] and the typed check traits
//! - **Registry** (`std`): [`Ensure`], [`HasEnsure`]
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn resize(width: u32, height: u32) -> Result<(), EnsureError> {
//!     guard_rail::many()
//!         .parameter(width, "width")
//!         .parameter(height, "height")
//!         .is_in_range(1..8192)
//!         .raise_on_failure()
//! }
//!
//! assert!(resize(800, 600).is_ok());
//! assert_eq!(resize(0, 0).unwrap_err().errors().len(), 2);
//! ```

// Macros
pub use crate::caller;

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{AggregateError, ArgumentError, CallerLocation, EnsureError, ErrorKind};
pub use crate::validation::{Hooks, Validator, ValidatorCollection};

// Traits
pub use crate::traits::ParameterValidator;
pub use crate::validation::checks::{ElementChecks, EmptinessChecks, OrderingChecks, PresenceChecks};

#[cfg(feature = "std")]
pub use crate::registry::{Ensure, HasEnsure};
