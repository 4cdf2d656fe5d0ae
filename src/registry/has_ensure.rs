use crate::registry::Ensure;
use crate::types::alloc_type::Cow;
use crate::types::EnsureError;
use crate::validation::{Validator, ValidatorCollection};

/// Implemented by types that may carry their own [`Ensure`] instance.
///
/// The provided methods use the carried instance when there is one and fall
/// back to [`Ensure::default_instance`] otherwise, so services can opt into a
/// dedicated set of observers without touching the global.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
///
/// struct Service {
///     ensure: Option<Ensure>,
/// }
///
/// impl HasEnsure for Service {
///     fn ensure(&self) -> Option<&Ensure> {
///         self.ensure.as_ref()
///     }
/// }
///
/// let service = Service { ensure: Some(Ensure::new()) };
/// let port = service.ensure_present(Some(8080), "port").unwrap();
/// assert_eq!(port, 8080);
///
/// let outcome = service.ensure_parameter(0u16, "port").is_greater_than(0).to_outcome();
/// assert!(outcome.is_failure());
/// ```
pub trait HasEnsure {
    /// The carried instance, or `None` to use the process default.
    fn ensure(&self) -> Option<&Ensure>;

    fn ensure_parameter<T, N>(&self, value: T, name: N) -> Validator<T>
    where
        N: Into<Cow<'static, str>>,
    {
        match self.ensure() {
            Some(ensure) => ensure.parameter(value, name),
            None => Ensure::default_instance().parameter(value, name),
        }
    }

    fn ensure_many<T>(&self) -> ValidatorCollection<T> {
        match self.ensure() {
            Some(ensure) => ensure.many(),
            None => Ensure::default_instance().many(),
        }
    }

    /// Unwraps a required argument; see [`Ensure::ensure_present`].
    #[track_caller]
    fn ensure_present<T, N>(&self, value: Option<T>, name: N) -> Result<T, EnsureError>
    where
        N: Into<Cow<'static, str>>,
    {
        match self.ensure() {
            Some(ensure) => ensure.ensure_present(value, name),
            None => Ensure::default_instance().ensure_present(value, name),
        }
    }
}
