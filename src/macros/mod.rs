//! Call-site capture macros.
//!
//! - [`macro@crate::caller`] - Builds a [`CallerLocation`](crate::types::CallerLocation)
//!   for the line it is written on, including the enclosing function path.
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//!
//! fn check(port: u16) -> Result<(), EnsureError> {
//!     Validator::new(port, "port")
//!         .is_greater_than(0)
//!         .raise_on_failure_at(caller!())
//! }
//!
//! assert!(check(0).is_err());
//! ```

/// Captures the current source position and enclosing function as a
/// [`CallerLocation`](crate::types::CallerLocation).
///
/// Expand it directly in the function whose position should be reported; a
/// helper that expands it on behalf of its caller reports itself instead.
///
/// # Examples
///
/// ```
/// use guard_rail::caller;
///
/// fn locate() -> guard_rail::types::CallerLocation {
///     caller!()
/// }
///
/// let location = locate();
/// assert!(location.member().unwrap().ends_with("locate"));
/// assert!(location.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! caller {
    () => {
        $crate::types::CallerLocation::new(
            $crate::__function_path!(),
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
        )
    };
}

/// Path of the enclosing function, e.g. `my_crate::service::connect`.
///
/// Closure segments are dropped so the path names the enclosing `fn`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let mut path = match name.strip_suffix("::__here") {
            Some(path) => path,
            None => name,
        };
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path
    }};
}
