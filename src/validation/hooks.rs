//! Observer callbacks bound into validators.
//!
//! A validator carries at most one on-failure and one on-throw callback. The
//! registry binds composed callbacks that fan out to every registered observer;
//! standalone validators may bind their own or none at all.
use crate::types::alloc_type::Arc;
use crate::types::{ArgumentError, CallerLocation, EnsureError};
use core::fmt;

/// Called with the error when a check moves a validator to `Invalid`.
pub type FailureCallback = Arc<dyn Fn(&ArgumentError) + Send + Sync>;

/// Called with the error and call site right before a failure is raised.
pub type ThrowCallback = Arc<dyn Fn(&EnsureError, &CallerLocation) + Send + Sync>;

/// The pair of optional callbacks a validator or collection is bound to.
///
/// # Examples
///
/// ```
/// use guard_rail::validation::Hooks;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let failures = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&failures);
/// let hooks = Hooks::new().on_failure(move |_| {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
/// assert!(hooks.has_on_failure());
/// assert!(!hooks.has_on_throw());
/// ```
#[derive(Clone, Default)]
pub struct Hooks {
    on_failure: Option<FailureCallback>,
    on_throw: Option<ThrowCallback>,
}

impl Hooks {
    /// Hooks with no callbacks.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_parts(on_failure: Option<FailureCallback>, on_throw: Option<ThrowCallback>) -> Self {
        Self { on_failure, on_throw }
    }

    /// Sets the on-failure callback, replacing any previous one.
    pub fn on_failure<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ArgumentError) + Send + Sync + 'static,
    {
        let callback: FailureCallback = Arc::new(callback);
        self.on_failure = Some(callback);
        self
    }

    /// Sets the on-throw callback, replacing any previous one.
    pub fn on_throw<F>(mut self, callback: F) -> Self
    where
        F: Fn(&EnsureError, &CallerLocation) + Send + Sync + 'static,
    {
        let callback: ThrowCallback = Arc::new(callback);
        self.on_throw = Some(callback);
        self
    }

    #[inline]
    pub fn has_on_failure(&self) -> bool {
        self.on_failure.is_some()
    }

    #[inline]
    pub fn has_on_throw(&self) -> bool {
        self.on_throw.is_some()
    }

    #[inline]
    pub(crate) fn throw_callback(&self) -> Option<ThrowCallback> {
        self.on_throw.clone()
    }

    #[inline]
    pub(crate) fn throw_ref(&self) -> Option<&ThrowCallback> {
        self.on_throw.as_ref()
    }

    #[inline]
    pub(crate) fn notify_failure(&self, error: &ArgumentError) {
        if let Some(callback) = &self.on_failure {
            callback(error);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_failure", &self.on_failure.is_some())
            .field("on_throw", &self.on_throw.is_some())
            .finish()
    }
}

/// Runs the on-throw callback, if any, right before `error` is raised.
pub(crate) fn notify_throw(
    on_throw: Option<&ThrowCallback>,
    error: &EnsureError,
    location: &CallerLocation,
) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        error = %error,
        file = location.file(),
        line = location.line(),
        "raising parameter validation failure"
    );

    if let Some(callback) = on_throw {
        callback(error, location);
    }
}
