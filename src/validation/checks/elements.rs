use crate::builders;
use crate::traits::ParameterValidator;
use crate::types::alloc_type::{Cow, Vec};
use crate::types::ArgumentError;

/// Values that expose their elements as a slice.
pub trait Sequence {
    type Element;

    fn elements(&self) -> &[Self::Element];
}

impl<E> Sequence for [E] {
    type Element = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

impl<E> Sequence for Vec<E> {
    type Element = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

impl<E, const N: usize> Sequence for [E; N] {
    type Element = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Element = S::Element;

    #[inline]
    fn elements(&self) -> &[S::Element] {
        (**self).elements()
    }
}

/// Checks over the elements of a sequence parameter.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
///
/// let v = Validator::new(vec![Some(1), None], "slots").has_no_none();
/// assert!(v.is_invalid());
///
/// let v = Validator::new([2, 4, 6], "evens")
///     .all_elements(|n: &i32| n % 2 == 0, "odd element");
/// assert!(v.is_valid());
/// ```
pub trait ElementChecks<T: Sequence>: ParameterValidator<T> {
    /// Fails unless `predicate` holds for every element.
    fn all_elements<P, M>(self, predicate: P, message: M) -> Self
    where
        P: Fn(&T::Element) -> bool,
        M: Into<Cow<'static, str>>,
    {
        self.all_elements_with(predicate, builders::invalid_argument(message))
    }

    fn all_elements_with<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: Fn(&T::Element) -> bool,
        B: Fn(&str) -> ArgumentError,
    {
        self.check_true_with(|value: &T| value.elements().iter().all(&predicate), builder)
    }

    /// Fails if any element is `None`.
    fn has_no_none<X>(self) -> Self
    where
        T: Sequence<Element = Option<X>>,
    {
        self.all_elements(
            |element: &Option<X>| element.is_some(),
            "the sequence cannot contain `None` elements",
        )
    }
}

impl<V, T> ElementChecks<T> for V
where
    V: ParameterValidator<T>,
    T: Sequence,
{
}
