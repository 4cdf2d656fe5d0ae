use crate::traits::ParameterValidator;
use crate::types::alloc_type::{format, String};
use crate::types::ArgumentError;
use core::fmt::Display;
use core::ops::Range;

/// Comparison checks for ordered parameters.
///
/// Failures are [`OutOfRange`](crate::types::ErrorKind::OutOfRange) errors whose
/// message names the violated bound. Messages are only formatted on failure.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
///
/// let v = Validator::new(70_000u32, "port").is_in_range(1..65_536);
/// assert_eq!(v.error().unwrap().message(), "value is not in the range [1, 65536)");
///
/// let v = Validator::new(5, "workers").is_greater_than(0).is_at_most(64);
/// assert!(v.is_valid());
/// ```
pub trait OrderingChecks<T: PartialOrd + Display>: ParameterValidator<T> {
    fn is_greater_than(self, bound: T) -> Self {
        self.check_true_with(
            |value: &T| *value > bound,
            |parameter: &str| out_of_range(parameter, format!("value must be greater than {}", bound)),
        )
    }

    fn is_greater_than_with<B>(self, bound: T, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &T| *value > bound, builder)
    }

    fn is_less_than(self, bound: T) -> Self {
        self.check_true_with(
            |value: &T| *value < bound,
            |parameter: &str| out_of_range(parameter, format!("value must be less than {}", bound)),
        )
    }

    fn is_less_than_with<B>(self, bound: T, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &T| *value < bound, builder)
    }

    fn is_at_least(self, bound: T) -> Self {
        self.check_true_with(
            |value: &T| *value >= bound,
            |parameter: &str| {
                out_of_range(parameter, format!("value must be greater than or equal to {}", bound))
            },
        )
    }

    fn is_at_least_with<B>(self, bound: T, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &T| *value >= bound, builder)
    }

    fn is_at_most(self, bound: T) -> Self {
        self.check_true_with(
            |value: &T| *value <= bound,
            |parameter: &str| {
                out_of_range(parameter, format!("value must be less than or equal to {}", bound))
            },
        )
    }

    fn is_at_most_with<B>(self, bound: T, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &T| *value <= bound, builder)
    }

    /// Fails unless `range.start <= value < range.end`.
    ///
    /// An empty range rejects every value.
    fn is_in_range(self, range: Range<T>) -> Self {
        self.check_true_with(
            |value: &T| range.contains(value),
            |parameter: &str| {
                out_of_range(
                    parameter,
                    format!("value is not in the range [{}, {})", range.start, range.end),
                )
            },
        )
    }

    /// Like [`is_in_range`](Self::is_in_range) with a caller-supplied error.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::builders;
    /// use guard_rail::prelude::*;
    ///
    /// let v = Validator::new(0u16, "port")
    ///     .is_in_range_with(1..1024, builders::custom("privileged_port", "not a privileged port"));
    /// assert_eq!(v.error().unwrap().kind(), &ErrorKind::Custom("privileged_port".into()));
    /// ```
    fn is_in_range_with<B>(self, range: Range<T>, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &T| range.contains(value), builder)
    }
}

impl<V, T> OrderingChecks<T> for V
where
    V: ParameterValidator<T>,
    T: PartialOrd + Display,
{
}

#[inline]
fn out_of_range(parameter: &str, message: String) -> ArgumentError {
    ArgumentError::out_of_range(String::from(parameter), message)
}
