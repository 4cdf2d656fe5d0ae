use crate::outcome::Outcome;
use crate::traits::ParameterValidator;
use crate::types::alloc_type::Cow;
use crate::types::{ArgumentError, CallerLocation, EnsureError};
use crate::validation::hooks::{notify_throw, Hooks, ThrowCallback};
use core::fmt;

/// Two-state checker over a single named parameter.
///
/// A validator starts `Valid`, holding the value, its name and the hooks it
/// was bound to. The first failing check moves it to `Invalid`, which keeps the
/// error and the on-throw callback. `Invalid` is terminal: later checks return
/// it unchanged without evaluating their predicate.
///
/// # Type Parameters
///
/// * `T` - The parameter type. Pass a reference (`&str`, `&Config`) to borrow.
///
/// # Examples
///
/// ```
/// use guard_rail::traits::ParameterValidator;
/// use guard_rail::validation::Validator;
///
/// let v = Validator::new("", "name").check_false(|s: &&str| s.is_empty(), "name is empty");
/// assert!(v.is_invalid());
/// assert_eq!(v.error().unwrap().parameter(), "name");
/// ```
#[must_use]
#[derive(Clone, Debug)]
pub enum Validator<T> {
    Valid(ValidParameter<T>),
    Invalid(InvalidParameter),
}

/// State of a validator whose checks have all passed so far.
#[derive(Clone, Debug)]
pub struct ValidParameter<T> {
    value: T,
    name: Cow<'static, str>,
    hooks: Hooks,
}

impl<T> ValidParameter<T> {
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Terminal state of a validator after its first failing check.
#[derive(Clone)]
pub struct InvalidParameter {
    error: ArgumentError,
    on_throw: Option<ThrowCallback>,
}

impl InvalidParameter {
    #[inline]
    pub fn error(&self) -> &ArgumentError {
        &self.error
    }
}

impl fmt::Debug for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidParameter")
            .field("error", &self.error)
            .field("on_throw", &self.on_throw.is_some())
            .finish()
    }
}

impl<T> Validator<T> {
    /// Creates a `Valid` validator with no callbacks.
    ///
    /// # Arguments
    ///
    /// * `value` - The parameter's runtime value
    /// * `name` - The parameter's declared name, used in errors
    #[inline]
    pub fn new<N>(value: T, name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::with_hooks(value, name, Hooks::new())
    }

    /// Creates a `Valid` validator bound to `hooks`.
    #[inline]
    pub fn with_hooks<N>(value: T, name: N, hooks: Hooks) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::Valid(ValidParameter { value, name: name.into(), hooks })
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The parameter name, taken from the stored error once invalid.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Valid(valid) => valid.name(),
            Self::Invalid(invalid) => invalid.error.parameter(),
        }
    }

    /// The parameter value while still valid.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(valid) => Some(&valid.value),
            Self::Invalid(_) => None,
        }
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid(valid) => Some(valid.value),
            Self::Invalid(_) => None,
        }
    }

    /// The stored error once invalid.
    #[inline]
    pub fn error(&self) -> Option<&ArgumentError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(invalid) => Some(&invalid.error),
        }
    }

    fn transition<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&str) -> ArgumentError,
    {
        let valid = match self {
            Self::Valid(valid) => valid,
            invalid @ Self::Invalid(_) => return invalid,
        };

        if predicate(&valid.value) {
            return Self::Valid(valid);
        }

        let error = builder(&valid.name);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            parameter = %valid.name,
            kind = %error.kind(),
            "parameter check failed"
        );

        valid.hooks.notify_failure(&error);
        Self::Invalid(InvalidParameter { error, on_throw: valid.hooks.throw_callback() })
    }
}

impl<T> ParameterValidator<T> for Validator<T> {
    #[inline]
    fn check_true_with<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: Fn(&T) -> bool,
        B: Fn(&str) -> ArgumentError,
    {
        self.transition(predicate, builder)
    }

    /// `Success` while valid; otherwise a `Failure` holding the bare stored
    /// error, never an aggregate.
    fn to_outcome(&self) -> Outcome {
        match self {
            Self::Valid(_) => Outcome::Success,
            Self::Invalid(invalid) => Outcome::Failure(EnsureError::Argument(invalid.error.clone())),
        }
    }

    fn raise_on_failure_at(&self, location: CallerLocation) -> Result<(), EnsureError> {
        match self {
            Self::Valid(_) => Ok(()),
            Self::Invalid(invalid) => {
                let error = EnsureError::Argument(invalid.error.clone());
                notify_throw(invalid.on_throw.as_ref(), &error, &location);
                Err(error)
            }
        }
    }
}
