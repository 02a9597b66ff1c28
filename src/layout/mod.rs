//! Geometry engines: color resolution, per-level partition and inter-level flows.

pub(crate) mod color;
pub(crate) mod flow;
pub(crate) mod partition;
