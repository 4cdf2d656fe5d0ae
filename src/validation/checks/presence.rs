use crate::builders;
use crate::traits::ParameterValidator;
use crate::types::ArgumentError;
use crate::validation::checks::Emptiable;

/// Checks for optional parameters.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
///
/// let v = Validator::new(None::<u32>, "user_id").is_present();
/// assert_eq!(v.error().unwrap().kind(), &ErrorKind::NullArgument);
/// ```
pub trait PresenceChecks<T>: ParameterValidator<Option<T>> {
    /// Fails with a [`NullArgument`](crate::types::ErrorKind::NullArgument) error on `None`.
    fn is_present(self) -> Self {
        self.is_present_with(builders::null_argument())
    }

    fn is_present_with<B>(self, builder: B) -> Self
    where
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &Option<T>| value.is_some(), builder)
    }

    /// Fails on `None`, then on an empty inner value.
    fn is_present_and_not_empty(self) -> Self
    where
        T: Emptiable,
    {
        self.is_present().check_false_with(
            |value: &Option<T>| value.as_ref().is_some_and(|inner| inner.is_empty_value()),
            builders::invalid_argument("parameter is empty"),
        )
    }
}

impl<V, T> PresenceChecks<T> for V where V: ParameterValidator<Option<T>> {}
