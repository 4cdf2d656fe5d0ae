//! Source position of the code that raised a validation failure.
//!
//! On-throw callbacks receive a [`CallerLocation`] describing the *direct*
//! caller of the raising operation. It is captured in one of two ways:
//!
//! - implicitly through `#[track_caller]` on
//!   [`ParameterValidator::raise_on_failure`](crate::traits::ParameterValidator::raise_on_failure),
//!   which records file, line and column;
//! - explicitly with the [`caller!`](crate::caller) macro, which additionally
//!   records the enclosing function path as the member name.
use crate::types::alloc_type::Cow;
use core::fmt::{self, Display};
use core::panic::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable `{member, file, line}` record forwarded to on-throw callbacks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    member: Option<Cow<'static, str>>,
    file: Cow<'static, str>,
    line: u32,
    column: u32,
}

impl CallerLocation {
    /// Creates a location from explicit parts.
    #[inline]
    pub fn new<M, F>(member: M, file: F, line: u32, column: u32) -> Self
    where
        M: Into<Cow<'static, str>>,
        F: Into<Cow<'static, str>>,
    {
        Self { member: Some(member.into()), file: file.into(), line, column }
    }

    /// Captures the location of the nearest caller not marked `#[track_caller]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_rail::types::CallerLocation;
    ///
    /// let here = CallerLocation::caller();
    /// assert_eq!(here.line(), line!() - 1);
    /// assert!(here.member().is_none());
    /// ```
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Enclosing function path, when captured through [`caller!`](crate::caller).
    #[inline]
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for CallerLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            member: None,
            file: Cow::Borrowed(location.file()),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{} at {}:{}:{}", member, self.file, self.line, self.column),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}
