//! Trophic is a layout and flow-geometry engine for trophic network diagrams.
//!
//! A network is an ordered stack of levels. Each level is split horizontally into bands, one
//! per species, proportional to its population; flow triangles connect every species to the
//! species of the previous level that occupy it.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `Network -> Result<(), Defects>` (every shape and sum defect, in one sweep)
//! 2. **Partition**: `Level -> Vec<RectangleGeometry>` (independent per level, run on rayon)
//! 3. **Flow**: adjacent partitions + `OccupationMatrix -> Vec<FlowPolygon>`
//! 4. **Draw** (optional): `Scene -> DrawOp`s replayed into a [`SceneSink`]
//!
//! The engines are pure: they read levels and return fresh geometry, so re-running them on the
//! same input yields identical output. Drawing itself is left to the caller's surface.
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod network;
mod scene;
mod validate;

pub use foundation::core::{BezPath, Canvas, ColorPair, ColorToken, LabelFont, Point, Rect};
pub use foundation::error::{TrophicError, TrophicResult};
pub use foundation::math::StochasticTolerance;
pub use layout::color::{Palette, resolve_colors};
pub use layout::flow::{FlowPolygon, Orientation, flow_origins, flows};
pub use layout::partition::{Edge, RectangleGeometry, Strip, partition};
pub use network::config::{NetworkConfig, Stacking};
pub use network::dsl::{LevelBuilder, NetworkBuilder};
pub use network::model::{Level, Network, NetworkDocument, OccupationMatrix};
pub use scene::assemble::{LevelScene, LinkScene, Scene, SpeciesBox, assemble_network};
pub use scene::draw::{DrawOp, SceneSink, compile_ops, draw_scene};
pub use validate::{Defect, DefectKind, Defects, validate_network};
