//! Stock error builders.
//!
//! A builder turns the failing parameter's name into an [`ArgumentError`].
//! These cover the common kinds; any `Fn(&str) -> ArgumentError` closure works
//! wherever a builder is expected.
//!
//! # Examples
//!
//! ```
//! use guard_rail::builders;
//! use guard_rail::traits::ParameterValidator;
//! use guard_rail::types::ErrorKind;
//! use guard_rail::validation::Validator;
//!
//! let v = Validator::new(120u8, "age")
//!     .check_true_with(|age: &u8| *age < 100, builders::out_of_range("age is implausible"));
//! assert_eq!(v.error().unwrap().kind(), &ErrorKind::OutOfRange);
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::ArgumentError;

/// Builds [`ErrorKind::InvalidArgument`](crate::types::ErrorKind::InvalidArgument) errors.
pub fn invalid_argument<M>(message: M) -> impl Fn(&str) -> ArgumentError + Clone
where
    M: Into<Cow<'static, str>>,
{
    let message = message.into();
    move |parameter: &str| ArgumentError::invalid_argument(String::from(parameter), message.clone())
}

/// Builds [`ErrorKind::NullArgument`](crate::types::ErrorKind::NullArgument) errors
/// with the stock message.
pub fn null_argument() -> impl Fn(&str) -> ArgumentError + Clone {
    |parameter: &str| ArgumentError::null_argument(String::from(parameter))
}

/// Builds [`ErrorKind::NullArgument`](crate::types::ErrorKind::NullArgument) errors.
pub fn null_argument_with<M>(message: M) -> impl Fn(&str) -> ArgumentError + Clone
where
    M: Into<Cow<'static, str>>,
{
    let message = message.into();
    move |parameter: &str| {
        ArgumentError::new(
            crate::types::ErrorKind::NullArgument,
            String::from(parameter),
            message.clone(),
        )
    }
}

/// Builds [`ErrorKind::OutOfRange`](crate::types::ErrorKind::OutOfRange) errors.
pub fn out_of_range<M>(message: M) -> impl Fn(&str) -> ArgumentError + Clone
where
    M: Into<Cow<'static, str>>,
{
    let message = message.into();
    move |parameter: &str| ArgumentError::out_of_range(String::from(parameter), message.clone())
}

/// Builds [`ErrorKind::Custom`](crate::types::ErrorKind::Custom) errors tagged `kind`.
pub fn custom<K, M>(kind: K, message: M) -> impl Fn(&str) -> ArgumentError + Clone
where
    K: Into<Cow<'static, str>>,
    M: Into<Cow<'static, str>>,
{
    let kind = kind.into();
    let message = message.into();
    move |parameter: &str| {
        ArgumentError::custom(kind.clone(), String::from(parameter), message.clone())
    }
}
