use crate::{
    foundation::core::ColorPair,
    foundation::error::TrophicResult,
    foundation::math::StochasticTolerance,
    network::model::{Level, Network, OccupationMatrix},
};

/// Programmatic construction of a [`Network`], validated on [`NetworkBuilder::build`].
pub struct NetworkBuilder {
    levels: Vec<Level>,
    tolerance: StochasticTolerance,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            tolerance: StochasticTolerance::default(),
        }
    }

    pub fn tolerance(mut self, tolerance: StochasticTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn level(mut self, level: LevelBuilder) -> Self {
        self.levels.push(level.build());
        self
    }

    pub fn build(self) -> TrophicResult<Network> {
        let network = Network::new(self.levels);
        network.validate(self.tolerance)?;
        Ok(network)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LevelBuilder {
    populations: Vec<f64>,
    occupation: Option<OccupationMatrix>,
    colors: Vec<ColorPair>,
    labels: Option<Vec<String>>,
}

impl LevelBuilder {
    pub fn new(populations: impl Into<Vec<f64>>) -> Self {
        Self {
            populations: populations.into(),
            occupation: None,
            colors: Vec::new(),
            labels: None,
        }
    }

    /// Occupation of this level's species by the previous level's species, one row per species.
    pub fn occupied_by(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.occupation = Some(OccupationMatrix::new(rows));
        self
    }

    pub fn color(mut self, fill: &str, text: &str) -> Self {
        self.colors.push(ColorPair::new(fill, text));
        self
    }

    pub fn labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Level {
        Level {
            populations: self.populations,
            occupation: self.occupation,
            colors: (!self.colors.is_empty()).then_some(self.colors),
            labels: self.labels,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/dsl.rs"]
mod tests;
