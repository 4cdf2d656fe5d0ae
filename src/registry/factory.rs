use crate::registry::Ensure;

/// Creates fresh [`Ensure`] instances.
///
/// Lets components that build their own validation sessions take the
/// construction strategy as a dependency.
///
/// # Examples
///
/// ```
/// use guard_rail::registry::{DefaultEnsureFactory, Ensure, EnsureFactory};
///
/// let audited = || {
///     let ensure = Ensure::new();
///     ensure.register_on_failure(|err| eprintln!("rejected: {err}"));
///     ensure
/// };
///
/// assert_eq!(DefaultEnsureFactory.create().failure_callback_count(), 0);
/// assert_eq!(audited.create().failure_callback_count(), 1);
/// ```
pub trait EnsureFactory {
    fn create(&self) -> Ensure;
}

/// Factory producing instances with no observers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEnsureFactory;

impl EnsureFactory for DefaultEnsureFactory {
    #[inline]
    fn create(&self) -> Ensure {
        Ensure::new()
    }
}

impl<F> EnsureFactory for F
where
    F: Fn() -> Ensure,
{
    #[inline]
    fn create(&self) -> Ensure {
        self()
    }
}
