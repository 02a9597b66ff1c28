use crate::{
    foundation::core::{BezPath, ColorToken, LabelFont, Point, Rect},
    foundation::error::TrophicResult,
    scene::assemble::Scene,
};

#[derive(Clone, Debug, PartialEq)]
/// Draw operation emitted for a renderer.
pub enum DrawOp {
    FillPolygon {
        path: BezPath,
        color: ColorToken,
    },
    FillRect {
        rect: Rect,
        color: ColorToken,
    },
    Text {
        text: String,
        anchor: Point,
        color: ColorToken,
    },
}

/// Flatten a scene into painter's order: flows at the back, then bands, then labels.
pub fn compile_ops(scene: &Scene) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    for link in &scene.links {
        for flow in &link.flows {
            ops.push(DrawOp::FillPolygon {
                path: flow.to_path(),
                color: flow.fill.clone(),
            });
        }
    }
    for level in &scene.levels {
        for b in &level.boxes {
            ops.push(DrawOp::FillRect {
                rect: b.rect.to_rect(),
                color: b.fill.clone(),
            });
        }
    }
    for level in &scene.levels {
        for b in &level.boxes {
            ops.push(DrawOp::Text {
                text: b.label.clone(),
                anchor: b.label_anchor,
                color: b.text.clone(),
            });
        }
    }
    ops
}

/// A drawing surface. Calls arrive strictly in painter's order, one at a time.
pub trait SceneSink {
    fn begin(&mut self, _width: f64, _height: f64, _font: &LabelFont) -> TrophicResult<()> {
        Ok(())
    }

    fn fill_polygon(&mut self, path: &BezPath, color: &ColorToken) -> TrophicResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: &ColorToken) -> TrophicResult<()>;

    fn text(&mut self, text: &str, anchor: Point, color: &ColorToken) -> TrophicResult<()>;

    fn finish(&mut self) -> TrophicResult<()> {
        Ok(())
    }
}

/// Replay a scene into `sink`, stopping at the first sink error.
pub fn draw_scene<S: SceneSink + ?Sized>(sink: &mut S, scene: &Scene) -> TrophicResult<()> {
    sink.begin(scene.canvas.width, scene.canvas.height, &scene.label_font)?;
    for op in compile_ops(scene) {
        match &op {
            DrawOp::FillPolygon { path, color } => sink.fill_polygon(path, color)?,
            DrawOp::FillRect { rect, color } => sink.fill_rect(*rect, color)?,
            DrawOp::Text {
                text,
                anchor,
                color,
            } => sink.text(text, *anchor, color)?,
        }
    }
    sink.finish()
}

impl std::fmt::Display for DrawOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FillPolygon { path, color } => {
                write!(f, "polygon {color} {}", path.to_svg())
            }
            Self::FillRect { rect, color } => write!(
                f,
                "rect {color} x={:.2} y={:.2} w={:.2} h={:.2}",
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            ),
            Self::Text {
                text,
                anchor,
                color,
            } => write!(
                f,
                "text {color} ({:.2}, {:.2}) {text:?}",
                anchor.x, anchor.y
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/draw.rs"]
mod tests;
