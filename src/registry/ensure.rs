use crate::traits::ParameterValidator;
use crate::types::alloc_type::{Arc, Cow, Vec};
use crate::types::{ArgumentError, CallerLocation, EnsureError};
use crate::validation::checks::PresenceChecks;
use crate::validation::{FailureCallback, Hooks, ThrowCallback, Validator, ValidatorCollection};
use arc_swap::ArcSwap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::LazyLock;

/// Process-wide default instance, created empty on first use.
static DEFAULT: LazyLock<ArcSwap<Ensure>> = LazyLock::new(|| ArcSwap::from_pointee(Ensure::new()));

/// Ordered observer lists shared by an [`Ensure`] and every hook it binds.
#[derive(Default)]
struct CallbackLists {
    on_failure: RwLock<Vec<FailureCallback>>,
    on_throw: RwLock<Vec<ThrowCallback>>,
}

impl CallbackLists {
    // Dispatch iterates a snapshot so callbacks may register further callbacks
    // without deadlocking; those take effect from the next dispatch.
    fn dispatch_failure(&self, error: &ArgumentError) {
        let snapshot = self.on_failure.read().clone();
        for callback in &snapshot {
            callback(error);
        }
    }

    fn dispatch_throw(&self, error: &EnsureError, location: &CallerLocation) {
        let snapshot = self.on_throw.read().clone();
        for callback in &snapshot {
            callback(error, location);
        }
    }
}

/// Validation-session factory holding ordered failure and throw observers.
///
/// Validators created through an `Ensure` are bound to its observer lists:
/// every failing check notifies each on-failure callback, and every raise
/// notifies each on-throw callback, in registration order. A panicking
/// callback is not caught.
///
/// Most code goes through the process default ([`Ensure::default_instance`],
/// or the free functions [`parameter`](crate::parameter) and
/// [`many`](crate::many)); an explicit instance can be passed around instead
/// wherever the global is unwanted.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let ensure = Ensure::new();
/// let failures = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&failures);
/// ensure.register_on_failure(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let result = ensure.parameter("", "name").is_not_empty().raise_on_failure();
/// assert!(result.is_err());
/// assert_eq!(failures.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct Ensure {
    callbacks: Arc<CallbackLists>,
}

impl Ensure {
    /// Creates an instance with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current process-wide default instance.
    pub fn default_instance() -> Arc<Ensure> {
        DEFAULT.load_full()
    }

    /// Atomically replaces the process-wide default, returning the previous one.
    ///
    /// Validators created before the swap keep the callbacks they were bound to.
    pub fn configure_default(ensure: Arc<Ensure>) -> Arc<Ensure> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            on_failure = ensure.failure_callback_count(),
            on_throw = ensure.throw_callback_count(),
            "replacing default ensure instance"
        );

        DEFAULT.swap(ensure)
    }

    /// Appends a callback run whenever a bound validator's check fails.
    pub fn register_on_failure<F>(&self, callback: F)
    where
        F: Fn(&ArgumentError) + Send + Sync + 'static,
    {
        let callback: FailureCallback = Arc::new(callback);
        let mut callbacks = self.callbacks.on_failure.write();
        callbacks.push(callback);

        #[cfg(feature = "tracing")]
        tracing::debug!(count = callbacks.len(), "registered on-failure callback");
    }

    /// Appends a callback run whenever a bound validator or collection raises.
    pub fn register_on_throw<F>(&self, callback: F)
    where
        F: Fn(&EnsureError, &CallerLocation) + Send + Sync + 'static,
    {
        let callback: ThrowCallback = Arc::new(callback);
        let mut callbacks = self.callbacks.on_throw.write();
        callbacks.push(callback);

        #[cfg(feature = "tracing")]
        tracing::debug!(count = callbacks.len(), "registered on-throw callback");
    }

    pub fn failure_callback_count(&self) -> usize {
        self.callbacks.on_failure.read().len()
    }

    pub fn throw_callback_count(&self) -> usize {
        self.callbacks.on_throw.read().len()
    }

    /// Hooks that fan out to this instance's observer lists.
    ///
    /// The hooks hold the lists, not the instance slot, so they keep working
    /// after the default is replaced.
    pub fn hooks(&self) -> Hooks {
        let failures = Arc::clone(&self.callbacks);
        let throws = Arc::clone(&self.callbacks);
        let on_failure: FailureCallback =
            Arc::new(move |error: &ArgumentError| failures.dispatch_failure(error));
        let on_throw: ThrowCallback =
            Arc::new(move |error: &EnsureError, location: &CallerLocation| {
                throws.dispatch_throw(error, location)
            });
        Hooks::from_parts(Some(on_failure), Some(on_throw))
    }

    /// Creates a `Valid` validator bound to this instance's observers.
    pub fn parameter<T, N>(&self, value: T, name: N) -> Validator<T>
    where
        N: Into<Cow<'static, str>>,
    {
        Validator::with_hooks(value, name, self.hooks())
    }

    /// Creates an empty collection bound to this instance's observers.
    pub fn many<T>(&self) -> ValidatorCollection<T> {
        ValidatorCollection::with_hooks(self.hooks())
    }

    /// Unwraps a required argument, raising a `NullArgument` error on `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::registry::Ensure;
    ///
    /// let ensure = Ensure::new();
    /// assert_eq!(ensure.ensure_present(Some(7), "id"), Ok(7));
    /// assert!(ensure.ensure_present(None::<i32>, "id").is_err());
    /// ```
    #[track_caller]
    pub fn ensure_present<T, N>(&self, value: Option<T>, name: N) -> Result<T, EnsureError>
    where
        N: Into<Cow<'static, str>>,
    {
        let location = CallerLocation::caller();
        let name: Cow<'static, str> = name.into();
        let checked = self.parameter(value, name.clone()).is_present();
        checked.raise_on_failure_at(location)?;
        checked
            .into_value()
            .flatten()
            .ok_or_else(|| ArgumentError::null_argument(name).into())
    }
}

impl fmt::Debug for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ensure")
            .field("on_failure", &self.failure_callback_count())
            .field("on_throw", &self.throw_callback_count())
            .finish()
    }
}

/// Creates a validator through the process-wide default instance.
///
/// # Examples
///
/// ```
/// use guard_rail::prelude::*;
///
/// let outcome = guard_rail::parameter("ok", "name")
///     .check_true(|s: &&str| !s.is_empty(), "name is empty")
///     .to_outcome();
/// assert!(outcome.is_success());
/// ```
pub fn parameter<T, N>(value: T, name: N) -> Validator<T>
where
    N: Into<Cow<'static, str>>,
{
    Ensure::default_instance().parameter(value, name)
}

/// Creates an empty collection through the process-wide default instance.
pub fn many<T>() -> ValidatorCollection<T> {
    Ensure::default_instance().many()
}
