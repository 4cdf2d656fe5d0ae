//! The chainable check surface shared by validators and collections.
//!
//! Every check consumes the receiver and returns the next link of the chain,
//! so a chain is a sequence of value transitions rather than in-place
//! mutation. Clone a link to keep it.
//!
//! # Examples
//!
//! ```
//! use guard_rail::traits::ParameterValidator;
//! use guard_rail::validation::Validator;
//!
//! let outcome = Validator::new("ok", "name")
//!     .check_true(|s: &&str| !s.is_empty(), "name is empty")
//!     .check_false(|s: &&str| s.len() > 32, "name is too long")
//!     .to_outcome();
//! assert!(outcome.is_success());
//! ```
use crate::builders;
use crate::outcome::Outcome;
use crate::types::alloc_type::Cow;
use crate::types::{ArgumentError, CallerLocation, EnsureError};

/// Chainable predicate checks over a parameter of type `T`.
///
/// Implemented by [`Validator`](crate::validation::Validator) for a single
/// parameter and by [`ValidatorCollection`](crate::validation::ValidatorCollection)
/// for several parameters of the same type. The typed checks in
/// [`validation::checks`](crate::validation::checks) are written against this
/// trait and work on both.
pub trait ParameterValidator<T>: Sized {
    /// Applies `predicate`; on `false` the error built by `builder` is recorded.
    ///
    /// The builder receives the parameter name. A validator that is already
    /// invalid is returned unchanged without calling either closure.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Invariant the value must satisfy
    /// * `builder` - Produces the error from the parameter name
    fn check_true_with<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: Fn(&T) -> bool,
        B: Fn(&str) -> ArgumentError;

    /// Like [`check_true_with`](Self::check_true_with) with an
    /// [`ErrorKind::InvalidArgument`](crate::types::ErrorKind::InvalidArgument) error.
    fn check_true<P, M>(self, predicate: P, message: M) -> Self
    where
        P: Fn(&T) -> bool,
        M: Into<Cow<'static, str>>,
    {
        self.check_true_with(predicate, builders::invalid_argument(message))
    }

    /// Records an error when `predicate` holds.
    fn check_false_with<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: Fn(&T) -> bool,
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(move |value: &T| !predicate(value), builder)
    }

    /// Like [`check_false_with`](Self::check_false_with) with an
    /// [`ErrorKind::InvalidArgument`](crate::types::ErrorKind::InvalidArgument) error.
    fn check_false<P, M>(self, predicate: P, message: M) -> Self
    where
        P: Fn(&T) -> bool,
        M: Into<Cow<'static, str>>,
    {
        self.check_false_with(predicate, builders::invalid_argument(message))
    }

    /// Converts the current state into an [`Outcome`].
    fn to_outcome(&self) -> Outcome;

    /// Returns `Err` if any check failed, after running the on-throw callback
    /// with `location`.
    fn raise_on_failure_at(&self, location: CallerLocation) -> Result<(), EnsureError>;

    /// Returns `Err` if any check failed, reporting the direct caller's
    /// position to the on-throw callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::traits::ParameterValidator;
    /// use guard_rail::types::EnsureError;
    /// use guard_rail::validation::Validator;
    ///
    /// fn connect(port: u16) -> Result<(), EnsureError> {
    ///     Validator::new(port, "port")
    ///         .check_false(|p: &u16| *p == 0, "port must not be zero")
    ///         .raise_on_failure()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(connect(8080).is_ok());
    /// assert!(connect(0).is_err());
    /// ```
    #[track_caller]
    fn raise_on_failure(&self) -> Result<(), EnsureError> {
        self.raise_on_failure_at(CallerLocation::caller())
    }

    #[inline]
    fn is_success(&self) -> bool {
        self.to_outcome().is_success()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.to_outcome().is_failure()
    }

    /// Runs exactly one branch depending on the current state.
    fn match_with<R, S, F>(&self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(EnsureError) -> R,
    {
        self.to_outcome().match_with(on_success, on_failure)
    }

    /// Returns `Ok(on_success())`, or the error as `Err`.
    ///
    /// Unlike [`raise_on_failure`](Self::raise_on_failure), the on-throw
    /// callback is not invoked.
    fn match_or_raise<R, S>(&self, on_success: S) -> Result<R, EnsureError>
    where
        S: FnOnce() -> R,
    {
        self.to_outcome().match_or_raise(on_success)
    }
}
