use rayon::prelude::*;

use crate::{
    foundation::core::{Canvas, ColorPair, ColorToken, LabelFont, Point},
    foundation::error::TrophicResult,
    layout::color::Palette,
    layout::flow::{FlowPolygon, Orientation, flow_origins, flows},
    layout::partition::{RectangleGeometry, Strip, partition},
    network::config::{NetworkConfig, Stacking},
    network::model::{Level, Network},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Complete renderable geometry for one network.
///
/// Produced by [`assemble_network`]; consumed by a renderer, typically through
/// [`crate::draw_scene`].
pub struct Scene {
    /// Extent covered by all levels.
    pub canvas: Canvas,
    /// Font labels are drawn with.
    pub label_font: LabelFont,
    /// One entry per input level, in input order.
    pub levels: Vec<LevelScene>,
    /// One entry per adjacent level pair, `links[k - 1]` connecting levels `k - 1` and `k`.
    pub links: Vec<LinkScene>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Species bands of one level.
pub struct LevelScene {
    /// 0-based level index.
    pub level: usize,
    /// One box per species, left to right.
    pub boxes: Vec<SpeciesBox>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A species band with its resolved colors and label.
pub struct SpeciesBox {
    /// 0-based species index within its level.
    pub species: usize,
    /// Band placement.
    pub rect: RectangleGeometry,
    /// Band fill color.
    pub fill: ColorToken,
    /// Label color.
    pub text: ColorToken,
    /// Label text.
    pub label: String,
    /// Point the label is centered on.
    pub label_anchor: Point,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Flows between a predator level and the level it occupies.
pub struct LinkScene {
    /// 0-based index of the predator level.
    pub predator_level: usize,
    /// 0-based index of the prey level (`predator_level + 1`).
    pub prey_level: usize,
    /// Where the predator level sits relative to the prey level.
    pub orientation: Orientation,
    /// Flow polygons ordered by (prey, predator).
    pub flows: Vec<FlowPolygon>,
}

impl Scene {
    /// Flows leaving a given 0-based prey level, if it has a predator level.
    pub fn flows_into(&self, prey_level: usize) -> Option<&[FlowPolygon]> {
        self.links
            .iter()
            .find(|l| l.prey_level == prey_level)
            .map(|l| l.flows.as_slice())
    }

    pub fn species_count(&self) -> usize {
        self.levels.iter().map(|l| l.boxes.len()).sum()
    }
}

/// Validate a network and compute its complete scene.
///
/// No geometry is produced unless the whole network validates.
#[tracing::instrument(skip(network, config), fields(level_count = network.levels.len()))]
pub fn assemble_network(network: &Network, config: &NetworkConfig) -> TrophicResult<Scene> {
    config.validate()?;
    network.validate(config.tolerance())?;

    let n = network.levels.len();
    let orientation = match config.stacking {
        Stacking::TopDown => Orientation::PredatorsAbove,
        Stacking::BottomUp => Orientation::PredatorsBelow,
    };

    let rects: Vec<Vec<RectangleGeometry>> = if config.parallel {
        network
            .levels
            .par_iter()
            .enumerate()
            .map(|(k, level)| partition(&level.populations, level_strip(config, n, k)))
            .collect()
    } else {
        network
            .levels
            .iter()
            .enumerate()
            .map(|(k, level)| partition(&level.populations, level_strip(config, n, k)))
            .collect()
    };

    let default_colors = config.default_colors();
    let link_for = |k: usize| {
        link_scene(
            &network.levels,
            &rects,
            k,
            orientation,
            &default_colors,
        )
    };
    let links: Vec<LinkScene> = if config.parallel {
        (1..n).into_par_iter().map(link_for).collect()
    } else {
        (1..n).map(link_for).collect()
    };

    let mut ordinal = 0usize;
    let mut levels = Vec::with_capacity(n);
    for (k, (level, level_rects)) in network.levels.iter().zip(&rects).enumerate() {
        let palette = Palette::new(level.color_list(), &default_colors);
        let mut boxes = Vec::with_capacity(level_rects.len());
        for (i, rect) in level_rects.iter().enumerate() {
            ordinal += 1;
            let colors = palette.resolve(i);
            boxes.push(SpeciesBox {
                species: i,
                rect: *rect,
                fill: colors.fill.clone(),
                text: colors.text.clone(),
                label: species_label(level, i, ordinal),
                label_anchor: rect.center(),
            });
        }
        levels.push(LevelScene { level: k, boxes });
    }

    tracing::debug!(
        species = ordinal,
        flows = links.iter().map(|l| l.flows.len()).sum::<usize>(),
        "scene assembled"
    );

    Ok(Scene {
        canvas: Canvas {
            width: config.canvas_width,
            height: canvas_height(config, n),
        },
        label_font: config.label_font.clone(),
        levels,
        links,
    })
}

fn level_strip(config: &NetworkConfig, n: usize, k: usize) -> Strip {
    let row = match config.stacking {
        Stacking::TopDown => k,
        Stacking::BottomUp => n - 1 - k,
    };
    Strip {
        top: row as f64 * config.level_pitch(),
        height: config.rectangle_height,
        total_width: config.canvas_width,
        separator_width: config.separator_width,
    }
}

fn canvas_height(config: &NetworkConfig, n: usize) -> f64 {
    n as f64 * config.rectangle_height + n.saturating_sub(1) as f64 * config.space_between_levels
}

fn link_scene(
    levels: &[Level],
    rects: &[Vec<RectangleGeometry>],
    k: usize,
    orientation: Orientation,
    default_colors: &ColorPair,
) -> LinkScene {
    let predators = &levels[k - 1];
    let origins = flow_origins(&rects[k - 1], orientation);
    let palette = Palette::new(predators.color_list(), default_colors);
    let flows = match &levels[k].occupation {
        Some(matrix) => flows(&rects[k], &origins, matrix, &palette, orientation),
        None => Vec::new(),
    };
    LinkScene {
        predator_level: k - 1,
        prey_level: k,
        orientation,
        flows,
    }
}

fn species_label(level: &Level, index: usize, ordinal: usize) -> String {
    level
        .labels
        .as_ref()
        .and_then(|l| l.get(index))
        .cloned()
        .unwrap_or_else(|| ordinal.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assemble.rs"]
mod tests;
