//! Process-wide default instance and observer registry (requires `std`).
//!
//! An [`Ensure`] owns two ordered observer lists and binds them into every
//! validator it creates. One instance serves as the process default; it can be
//! replaced atomically with [`Ensure::configure_default`] and is read by the
//! free functions [`parameter`] and [`many`].
//!
//! # Examples
//!
//! ```
//! use guard_rail::prelude::*;
//! use std::sync::Arc;
//!
//! let audited = Arc::new(Ensure::new());
//! audited.register_on_throw(|err, at| eprintln!("{at}: {err}"));
//!
//! let outcome = audited
//!     .many()
//!     .parameter("", "first")
//!     .parameter("x", "last")
//!     .is_not_empty()
//!     .to_outcome();
//! assert_eq!(outcome.errors().len(), 1);
//! ```
mod ensure;
mod factory;
mod has_ensure;

pub use ensure::{many, parameter, Ensure};
pub use factory::{DefaultEnsureFactory, EnsureFactory};
pub use has_ensure::HasEnsure;
