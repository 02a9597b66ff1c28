use std::path::Path;

use crate::{
    foundation::core::ColorPair,
    foundation::error::{TrophicError, TrophicResult},
    foundation::math::StochasticTolerance,
    network::config::NetworkConfig,
    scene::assemble::{Scene, assemble_network},
    validate::{Defects, validate_network},
};

/// Fractions of each prey species' band attributed to each predator species.
///
/// Rows are indexed by the species of the level that owns the matrix (the preys),
/// columns by the species of the previous level (the predators).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OccupationMatrix {
    rows: Vec<Vec<f64>>,
}

impl OccupationMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, prey: usize) -> Option<&[f64]> {
        self.rows.get(prey).map(Vec::as_slice)
    }

    pub fn get(&self, prey: usize, predator: usize) -> Option<f64> {
        self.rows.get(prey).and_then(|r| r.get(predator)).copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl From<Vec<Vec<f64>>> for OccupationMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One horizontal band of the network: a set of species sharing a population array.
pub struct Level {
    /// Population fraction per species, left to right.
    pub populations: Vec<f64>,
    /// How this level's species are occupied by the previous level's species.
    /// Required on every level but the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<OccupationMatrix>,
    /// Per-species colors; cycled when shorter than `populations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorPair>>,
    /// Per-species labels; must match `populations` in length when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Level {
    pub fn new(populations: Vec<f64>) -> Self {
        Self {
            populations,
            ..Self::default()
        }
    }

    pub fn with_occupation(mut self, matrix: impl Into<OccupationMatrix>) -> Self {
        self.occupation = Some(matrix.into());
        self
    }

    pub fn with_colors(mut self, colors: Vec<ColorPair>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn species_count(&self) -> usize {
        self.populations.len()
    }

    pub(crate) fn color_list(&self) -> &[ColorPair] {
        self.colors.as_deref().unwrap_or(&[])
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered stack of levels. Level `k` (for `k > 0`) is occupied by level `k - 1`.
pub struct Network {
    pub levels: Vec<Level>,
}

impl Network {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Legacy predator / prey / other-predator layout, expressed as a plain
    /// three-level network.
    pub fn three_layer(upper: Level, middle: Level, lower: Level) -> Self {
        Self {
            levels: vec![upper, middle, lower],
        }
    }

    pub fn species_count(&self) -> usize {
        self.levels.iter().map(Level::species_count).sum()
    }

    pub fn validate(&self, tolerance: StochasticTolerance) -> Result<(), Defects> {
        validate_network(&self.levels, tolerance)
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// JSON boundary model: the network plus its layout options.
pub struct NetworkDocument {
    #[serde(flatten)]
    pub network: Network,
    #[serde(default)]
    pub options: NetworkConfig,
}

impl NetworkDocument {
    pub fn from_json_str(s: &str) -> TrophicResult<Self> {
        serde_json::from_str(s).map_err(|e| TrophicError::serde(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> TrophicResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            TrophicError::Other(anyhow::Error::new(e).context(format!(
                "read network document '{}'",
                path.display()
            )))
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|e| TrophicError::serde(format!("{}: {e}", path.display())))
    }

    /// Validate the network and lay it out with this document's options.
    pub fn assemble(&self) -> TrophicResult<Scene> {
        assemble_network(&self.network, &self.options)
    }

    pub fn to_json_pretty(&self) -> TrophicResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TrophicError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/model.rs"]
mod tests;
