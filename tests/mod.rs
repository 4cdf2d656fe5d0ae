pub mod checks;

#[cfg(feature = "std")]
pub mod registry;
