use crate::types::{AggregateError, ArgumentError, EnsureError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-variant result of a validation session.
///
/// `Outcome` is either `Success` or `Failure` holding an [`EnsureError`], which
/// in turn holds one or more [`ArgumentError`]s. It is produced by validators
/// and combined with [`Outcome::combine`], which flattens instead of nesting so
/// that folding many outcomes yields a single flat aggregate.
///
/// # Variants
///
/// * `Success` - every check passed
/// * `Failure(EnsureError)` - at least one check failed
///
/// # Examples
///
/// ```
/// use guard_rail::outcome::Outcome;
/// use guard_rail::types::ArgumentError;
///
/// let ok = Outcome::success();
/// assert!(ok.is_success());
///
/// let failed = Outcome::failure(ArgumentError::null_argument("name"));
/// assert!(failed.is_failure());
/// assert_eq!(failed.errors().len(), 1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum Outcome {
    #[default]
    Success,
    Failure(EnsureError),
}

impl Outcome {
    /// Creates a successful outcome.
    #[inline]
    pub fn success() -> Self {
        Self::Success
    }

    /// Creates a failed outcome from a single error or an aggregate.
    ///
    /// # Arguments
    ///
    /// * `error` - Anything convertible into [`EnsureError`]
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<EnsureError>,
    {
        Self::Failure(error.into())
    }

    /// Creates an outcome from a list of errors.
    ///
    /// An empty list is a success; otherwise the errors are wrapped in an
    /// [`AggregateError`] even when there is only one.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::outcome::Outcome;
    /// use guard_rail::types::ArgumentError;
    ///
    /// assert!(Outcome::from_errors(Vec::<ArgumentError>::new()).is_success());
    ///
    /// let failed = Outcome::from_errors([ArgumentError::null_argument("a")]);
    /// assert!(failed.error().unwrap().is_aggregate());
    /// ```
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ArgumentError>,
    {
        match AggregateError::from_errors(errors) {
            Some(aggregate) => Self::Failure(EnsureError::Aggregate(aggregate)),
            None => Self::Success,
        }
    }

    /// Combines two outcomes, keeping every error of both in order.
    ///
    /// Both sides are flattened (an aggregate contributes its components, a
    /// bare error contributes itself) and concatenated. No errors means
    /// success. Any errors produce an aggregate, so repeated combination never
    /// double-wraps.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::outcome::Outcome;
    /// use guard_rail::types::ArgumentError;
    ///
    /// let a = Outcome::failure(ArgumentError::null_argument("a"));
    /// let b = Outcome::success();
    /// let c = Outcome::failure(ArgumentError::null_argument("c"));
    ///
    /// let combined = Outcome::combine(Outcome::combine(a, b), c);
    /// let names: Vec<_> = combined.errors().iter().map(|e| e.parameter()).collect();
    /// assert_eq!(names, ["a", "c"]);
    ///
    /// assert_eq!(Outcome::combine(Outcome::success(), Outcome::success()), Outcome::success());
    /// ```
    pub fn combine(a: Outcome, b: Outcome) -> Outcome {
        match (a, b) {
            (Self::Success, Self::Success) => Self::Success,
            (a, b) => Self::from_errors(a.into_errors().into_iter().chain(b.into_errors())),
        }
    }

    /// Returns `true` if every check passed.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if at least one check failed.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Consumes the outcome, invoking exactly one branch.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Called when the outcome is `Success`
    /// * `on_failure` - Called with the (possibly aggregate) error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::outcome::Outcome;
    /// use guard_rail::types::ArgumentError;
    ///
    /// let outcome = Outcome::failure(ArgumentError::null_argument("id"));
    /// let message = outcome.match_with(|| "fine".to_string(), |err| err.to_string());
    /// assert!(message.contains("id"));
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(EnsureError) -> R,
    {
        match self {
            Self::Success => on_success(),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Runs `action` with the error only when the outcome is a failure.
    #[inline]
    pub fn on_failure<F>(&self, action: F)
    where
        F: FnOnce(&EnsureError),
    {
        if let Self::Failure(error) = self {
            action(error);
        }
    }

    /// Converts a failure into `Err`, running `on_success` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::outcome::Outcome;
    ///
    /// let value = Outcome::success().match_or_raise(|| 42);
    /// assert_eq!(value, Ok(42));
    /// ```
    #[inline]
    pub fn match_or_raise<R, S>(self, on_success: S) -> Result<R, EnsureError>
    where
        S: FnOnce() -> R,
    {
        match self {
            Self::Success => Ok(on_success()),
            Self::Failure(error) => Err(error),
        }
    }

    /// Flat list of component errors; empty on success.
    #[inline]
    pub fn errors(&self) -> &[ArgumentError] {
        match self {
            Self::Success => &[],
            Self::Failure(error) => error.errors(),
        }
    }

    /// Returns the error, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&EnsureError> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<(), EnsureError> {
        self.into()
    }

    fn into_errors(self) -> crate::types::ErrorVec<ArgumentError> {
        match self {
            Self::Success => crate::types::ErrorVec::new(),
            Self::Failure(error) => error.into_errors(),
        }
    }
}

impl From<Outcome> for Result<(), EnsureError> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Ok(()),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, EnsureError>> for Outcome {
    #[inline]
    fn from(result: Result<T, EnsureError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(error) => Self::Failure(error),
        }
    }
}

impl From<EnsureError> for Outcome {
    #[inline]
    fn from(error: EnsureError) -> Self {
        Self::Failure(error)
    }
}

impl From<ArgumentError> for Outcome {
    #[inline]
    fn from(error: ArgumentError) -> Self {
        Self::Failure(error.into())
    }
}
