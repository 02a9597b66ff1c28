//! Shared primitives: errors, geometry and color types, numeric helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
