use crate::outcome::Outcome;
use crate::traits::ParameterValidator;
use crate::types::alloc_type::{Cow, Vec};
use crate::types::{ArgumentError, CallerLocation, EnsureError};
use crate::validation::hooks::{notify_throw, Hooks};
use crate::validation::validator::Validator;

/// Ordered set of independent validators checked and reported together.
///
/// Each check is applied to every element; each element transitions on its
/// own. [`to_outcome`](ParameterValidator::to_outcome) combines the element
/// outcomes in declaration order, so every failing parameter is reported at
/// once rather than only the first.
///
/// The collection is built by value: [`parameter`](Self::parameter) consumes
/// and returns it, so the caller owns it exclusively while adding elements.
///
/// # Examples
///
/// ```
/// use guard_rail::traits::ParameterValidator;
/// use guard_rail::validation::ValidatorCollection;
///
/// let outcome = ValidatorCollection::new()
///     .parameter(Some("a"), "p1")
///     .parameter(None, "p2")
///     .check_true(|v: &Option<&str>| v.is_some(), "value is required")
///     .to_outcome();
///
/// assert_eq!(outcome.errors().len(), 1);
/// assert_eq!(outcome.errors()[0].parameter(), "p2");
/// ```
#[must_use]
#[derive(Clone, Debug)]
pub struct ValidatorCollection<T> {
    validators: Vec<Validator<T>>,
    hooks: Hooks,
}

impl<T> ValidatorCollection<T> {
    /// Creates an empty collection with no callbacks.
    #[inline]
    pub fn new() -> Self {
        Self::with_hooks(Hooks::new())
    }

    /// Creates an empty collection whose elements will be bound to `hooks`.
    #[inline]
    pub fn with_hooks(hooks: Hooks) -> Self {
        Self { validators: Vec::new(), hooks }
    }

    /// Appends a `Valid` validator for `value`, bound to the collection's hooks.
    pub fn parameter<N>(mut self, value: T, name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        self.validators.push(Validator::with_hooks(value, name, self.hooks.clone()));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Validator<T>> {
        self.validators.iter()
    }

    #[inline]
    pub fn validators(&self) -> &[Validator<T>] {
        &self.validators
    }

    #[inline]
    pub fn into_validators(self) -> Vec<Validator<T>> {
        self.validators
    }
}

impl<T> Default for ValidatorCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ParameterValidator<T> for ValidatorCollection<T> {
    fn check_true_with<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: Fn(&T) -> bool,
        B: Fn(&str) -> ArgumentError,
    {
        let Self { validators, hooks } = self;
        let validators = validators
            .into_iter()
            .map(|validator| validator.check_true_with(&predicate, &builder))
            .collect();
        Self { validators, hooks }
    }

    /// Left-folds the element outcomes with [`Outcome::combine`].
    ///
    /// An empty collection is a success. Any failure is reported as an
    /// aggregate, even when a single element failed.
    fn to_outcome(&self) -> Outcome {
        self.validators.iter().map(|validator| validator.to_outcome()).collect()
    }

    fn raise_on_failure_at(&self, location: CallerLocation) -> Result<(), EnsureError> {
        match self.to_outcome() {
            Outcome::Success => Ok(()),
            Outcome::Failure(error) => {
                notify_throw(self.hooks.throw_ref(), &error, &location);
                Err(error)
            }
        }
    }
}

impl<T> FromIterator<Validator<T>> for ValidatorCollection<T> {
    fn from_iter<I: IntoIterator<Item = Validator<T>>>(iter: I) -> Self {
        Self { validators: iter.into_iter().collect(), hooks: Hooks::new() }
    }
}

impl<T> Extend<Validator<T>> for ValidatorCollection<T> {
    fn extend<I: IntoIterator<Item = Validator<T>>>(&mut self, iter: I) {
        self.validators.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a ValidatorCollection<T> {
    type Item = &'a Validator<T>;
    type IntoIter = core::slice::Iter<'a, Validator<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.validators.iter()
    }
}
