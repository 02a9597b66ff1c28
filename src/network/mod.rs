//! Input data model: levels, occupation matrices, layout options and builders.

pub(crate) mod config;
pub(crate) mod dsl;
pub(crate) mod model;
