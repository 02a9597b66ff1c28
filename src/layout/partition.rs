use crate::foundation::core::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal edge of a species band.
pub enum Edge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Placement of one species band.
///
/// `width` may be zero or negative when a population is too small to pay for its
/// separator; such bands are kept so indices stay aligned with the population array.
pub struct RectangleGeometry {
    pub top_left: Point,
    pub bottom_left: Point,
    pub width: f64,
}

impl RectangleGeometry {
    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.bottom_left.y
    }

    pub fn height(&self) -> f64 {
        self.bottom_left.y - self.top_left.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.width * 0.5,
            self.top() + self.height() * 0.5,
        )
    }

    /// Horizontal midpoint of the given edge.
    pub fn edge_midpoint(&self, edge: Edge) -> Point {
        let y = match edge {
            Edge::Top => self.top(),
            Edge::Bottom => self.bottom(),
        };
        Point::new(self.left() + self.width * 0.5, y)
    }

    pub fn edge_y(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top(),
            Edge::Bottom => self.bottom(),
        }
    }

    /// Axis-aligned rect for drawing. Degenerate bands collapse to zero width.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left(),
            self.top(),
            self.left() + self.width.max(0.0),
            self.bottom(),
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Horizontal strip a level is partitioned into.
pub struct Strip {
    pub top: f64,
    pub height: f64,
    pub total_width: f64,
    pub separator_width: f64,
}

/// Split `strip` into one band per species, left to right, proportional to `populations`.
///
/// Every band after the first is indented and narrowed by one separator so adjacent
/// bands are visibly apart while the whole level still spans `[0, total_width]`.
pub fn partition(populations: &[f64], strip: Strip) -> Vec<RectangleGeometry> {
    let mut out = Vec::with_capacity(populations.len());
    let mut cumulative = 0.0f64;
    for (i, &p) in populations.iter().enumerate() {
        let mut left = cumulative * strip.total_width;
        let mut width = p * strip.total_width;
        if i > 0 {
            left += strip.separator_width;
            width -= strip.separator_width;
        }
        if width <= 0.0 {
            tracing::warn!(
                species = i + 1,
                population = p,
                width,
                "species band has no room left after its separator"
            );
        }
        out.push(RectangleGeometry {
            top_left: Point::new(left, strip.top),
            bottom_left: Point::new(left, strip.top + strip.height),
            width,
        });
        cumulative += p;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/partition.rs"]
mod tests;
