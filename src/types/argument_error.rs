//! The error value produced by a failing parameter check.
//!
//! An [`ArgumentError`] carries a [`ErrorKind`] tag, the name of the parameter
//! that failed and a human-readable message. The validation core never
//! interprets it; it only stores, combines and forwards it.
//!
//! # Examples
//!
//! ```
//! use guard_rail::types::{ArgumentError, ErrorKind};
//!
//! let err = ArgumentError::out_of_range("port", "port must be below 65536");
//! assert_eq!(err.kind(), &ErrorKind::OutOfRange);
//! assert_eq!(err.parameter(), "port");
//! assert_eq!(err.to_string(), "port must be below 65536 (parameter `port`)");
//! ```
use crate::types::alloc_type::Cow;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of an [`ArgumentError`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value was absent.
    NullArgument,
    /// The value was present but did not satisfy a predicate.
    InvalidArgument,
    /// The value fell outside an allowed range.
    OutOfRange,
    /// Application-defined category.
    Custom(Cow<'static, str>),
}

impl ErrorKind {
    /// Short identifier used in logs and diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NullArgument => "null_argument",
            Self::InvalidArgument => "invalid_argument",
            Self::OutOfRange => "out_of_range",
            Self::Custom(tag) => tag,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure payload describing one violated parameter invariant.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message} (parameter `{parameter}`)")]
pub struct ArgumentError {
    kind: ErrorKind,
    parameter: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ArgumentError {
    /// Creates an error with an explicit kind.
    #[inline]
    pub fn new<P, M>(kind: ErrorKind, parameter: P, message: M) -> Self
    where
        P: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self { kind, parameter: parameter.into(), message: message.into() }
    }

    /// Creates an [`ErrorKind::NullArgument`] error with the stock message.
    #[inline]
    pub fn null_argument<P>(parameter: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::NullArgument, parameter, "value cannot be none")
    }

    /// Creates an [`ErrorKind::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument<P, M>(parameter: P, message: M) -> Self
    where
        P: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::InvalidArgument, parameter, message)
    }

    /// Creates an [`ErrorKind::OutOfRange`] error.
    #[inline]
    pub fn out_of_range<P, M>(parameter: P, message: M) -> Self
    where
        P: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::OutOfRange, parameter, message)
    }

    /// Creates an [`ErrorKind::Custom`] error tagged with `kind`.
    #[inline]
    pub fn custom<K, P, M>(kind: K, parameter: P, message: M) -> Self
    where
        K: Into<Cow<'static, str>>,
        P: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Custom(kind.into()), parameter, message)
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Name of the parameter that failed validation.
    #[inline]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
