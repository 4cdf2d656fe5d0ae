use crate::builders;
use crate::traits::ParameterValidator;
use crate::types::alloc_type::{String, Vec};
use crate::types::ArgumentError;

/// Values that can be empty: strings and sequences.
pub trait Emptiable {
    fn is_empty_value(&self) -> bool;
}

impl Emptiable for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiable for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E> Emptiable for [E] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E> Emptiable for Vec<E> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E, const N: usize> Emptiable for [E; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<X> Emptiable for &X
where
    X: Emptiable + ?Sized,
{
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Checks for strings and sequences.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
///
/// let v = Validator::new("", "title").is_not_empty();
/// assert!(v.is_invalid());
///
/// let v = Validator::new(vec![1, 2], "ids").is_not_empty();
/// assert!(v.is_valid());
/// ```
pub trait EmptinessChecks<T: Emptiable>: ParameterValidator<T> {
    fn is_not_empty(self) -> Self {
        self.is_not_empty_with(builders::invalid_argument("parameter is empty"))
    }

    fn is_not_empty_with<B>(self, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_false_with(|value: &T| value.is_empty_value(), builder)
    }
}

impl<V, T> EmptinessChecks<T> for V
where
    V: ParameterValidator<T>,
    T: Emptiable,
{
}
