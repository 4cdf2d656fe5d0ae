//! Typed predicate checks built on [`ParameterValidator`](crate::traits::ParameterValidator).
//!
//! Each trait here is a thin wrapper around
//! [`check_true_with`](crate::traits::ParameterValidator::check_true_with) with a
//! stock predicate and error builder. They are blanket-implemented for every
//! `ParameterValidator`, so they work the same on a single
//! [`Validator`](crate::validation::Validator) and on a
//! [`ValidatorCollection`](crate::validation::ValidatorCollection).
//!
//! | Trait | Parameter type | Checks |
//! |-------|----------------|--------|
//! | [`PresenceChecks`] | `Option<T>` | `is_present`, `is_present_and_not_empty` |
//! | [`EmptinessChecks`] | strings, slices, vectors | `is_not_empty` |
//! | [`ElementChecks`] | slices, arrays, vectors | `all_elements`, `has_no_none` |
//! | [`OrderingChecks`] | `PartialOrd + Display` | `is_greater_than`, `is_in_range`, ... |
pub mod elements;
pub mod emptiness;
pub mod ordering;
pub mod presence;

pub use elements::{ElementChecks, Sequence};
pub use emptiness::{EmptinessChecks, Emptiable};
pub use ordering::OrderingChecks;
pub use presence::PresenceChecks;
