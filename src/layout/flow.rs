use crate::{
    foundation::core::{BezPath, ColorToken, Point},
    layout::color::Palette,
    layout::partition::{Edge, RectangleGeometry},
    network::model::OccupationMatrix,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Where a predator level is drawn relative to the level it occupies.
pub enum Orientation {
    PredatorsAbove,
    PredatorsBelow,
}

impl Orientation {
    /// Edge of a predator band that flows converge on.
    pub fn predator_edge(self) -> Edge {
        match self {
            Self::PredatorsAbove => Edge::Bottom,
            Self::PredatorsBelow => Edge::Top,
        }
    }

    /// Edge of a prey band that flows leave from.
    pub fn prey_edge(self) -> Edge {
        match self {
            Self::PredatorsAbove => Edge::Top,
            Self::PredatorsBelow => Edge::Bottom,
        }
    }
}

/// Point each predator's flows converge on: the midpoint of the edge facing its preys.
pub fn flow_origins(predators: &[RectangleGeometry], orientation: Orientation) -> Vec<Point> {
    let edge = orientation.predator_edge();
    predators.iter().map(|r| r.edge_midpoint(edge)).collect()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Triangle from a slice of a prey band to a predator's flow origin.
pub struct FlowPolygon {
    /// 0-based species index in the prey level.
    pub prey: usize,
    /// 0-based species index in the predator level.
    pub predator: usize,
    /// Prey-side start, prey-side end, predator origin.
    pub vertices: [Point; 3],
    pub fill: ColorToken,
}

impl FlowPolygon {
    /// Width of the prey-side base.
    pub fn width(&self) -> f64 {
        self.vertices[1].x - self.vertices[0].x
    }

    pub fn to_path(&self) -> BezPath {
        let [a, b, c] = self.vertices;
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }
}

/// Flow polygons for one adjacent level pair, ordered by (prey, predator).
///
/// Each prey band is sliced left to right in predator order, slice `j` being
/// `occupation[i][j]` of the band's width, so a row summing to one tiles its band
/// exactly. Zero cells produce no polygon.
pub fn flows(
    preys: &[RectangleGeometry],
    origins: &[Point],
    occupation: &OccupationMatrix,
    predator_palette: &Palette<'_>,
    orientation: Orientation,
) -> Vec<FlowPolygon> {
    let prey_edge = orientation.prey_edge();
    let mut out = Vec::new();
    for (i, (prey, row)) in preys.iter().zip(occupation.rows()).enumerate() {
        let y = prey.edge_y(prey_edge);
        let mut offset_x = 0.0f64;
        for (j, (&share, &origin)) in row.iter().zip(origins).enumerate() {
            let w = prey.width * share;
            if share != 0.0 {
                let x0 = prey.left() + offset_x;
                out.push(FlowPolygon {
                    prey: i,
                    predator: j,
                    vertices: [Point::new(x0, y), Point::new(x0 + w, y), origin],
                    fill: predator_palette.resolve(j).fill.clone(),
                });
            }
            offset_x += w;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
