//! Network assembly into a renderable scene, and replay of that scene into a drawing surface.

pub(crate) mod assemble;
pub(crate) mod draw;
