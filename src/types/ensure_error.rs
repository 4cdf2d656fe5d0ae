//! The error surfaced when a validation session is raised.
//!
//! A single [`Validator`](crate::validation::Validator) raises its one
//! [`ArgumentError`] bare. Anything produced by combining outcomes, including a
//! [`ValidatorCollection`](crate::validation::ValidatorCollection), raises an
//! [`AggregateError`] holding every component error in evaluation order.
use crate::types::alloc_type::String;
use crate::types::{ArgumentError, ErrorVec};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-empty, flat list of argument errors.
///
/// Aggregates never nest: building one from other aggregates splices their
/// components in place.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AggregateRepr"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateError {
    errors: ErrorVec<ArgumentError>,
}

/// Wire shape of [`AggregateError`]; emptiness is rejected on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AggregateRepr {
    errors: ErrorVec<ArgumentError>,
}

#[cfg(feature = "serde")]
impl TryFrom<AggregateRepr> for AggregateError {
    type Error = &'static str;

    fn try_from(repr: AggregateRepr) -> Result<Self, Self::Error> {
        AggregateError::from_errors(repr.errors).ok_or("aggregate error must hold at least one error")
    }
}

impl AggregateError {
    /// Builds an aggregate, or returns `None` when `errors` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::types::{AggregateError, ArgumentError};
    ///
    /// let agg = AggregateError::from_errors([
    ///     ArgumentError::null_argument("a"),
    ///     ArgumentError::null_argument("b"),
    /// ])
    /// .unwrap();
    /// assert_eq!(agg.len(), 2);
    ///
    /// assert!(AggregateError::from_errors(Vec::<ArgumentError>::new()).is_none());
    /// ```
    pub fn from_errors<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ArgumentError>,
    {
        let errors: ErrorVec<ArgumentError> = errors.into_iter().collect();
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    #[inline]
    pub fn errors(&self) -> &[ArgumentError] {
        &self.errors
    }

    /// Number of component errors; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ArgumentError> {
        self.errors.iter()
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<ArgumentError> {
        self.errors
    }
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} parameter check(s) failed", self.errors.len())?;
        for (idx, error) in self.errors.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, error)?;
        }
        Ok(())
    }
}

impl core::error::Error for AggregateError {}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a ArgumentError;
    type IntoIter = core::slice::Iter<'a, ArgumentError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Error returned by the raising operations.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EnsureError {
    /// One failed check from a single validator.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// Combined failures, one per failing element.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl EnsureError {
    /// Flat view of the component errors.
    ///
    /// A bare argument error yields a one-element slice.
    #[inline]
    pub fn errors(&self) -> &[ArgumentError] {
        match self {
            Self::Argument(error) => core::slice::from_ref(error),
            Self::Aggregate(aggregate) => aggregate.errors(),
        }
    }

    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    /// Moves the component errors out, flattening an aggregate.
    pub fn into_errors(self) -> ErrorVec<ArgumentError> {
        match self {
            Self::Argument(error) => smallvec::smallvec![error],
            Self::Aggregate(aggregate) => aggregate.into_errors(),
        }
    }

    /// Names of the failing parameters, in evaluation order, joined by `", "`.
    pub fn parameters(&self) -> String {
        let mut out = String::new();
        for (idx, error) in self.errors().iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(error.parameter());
        }
        out
    }
}
