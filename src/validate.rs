//! Shape and stochastic-sum checks over a whole network.
//!
//! Validation never stops at the first problem: every level is swept and each
//! violation becomes one [`Defect`], so callers get a complete report in one pass.

use std::fmt;

use crate::{
    foundation::math::{StochasticTolerance, is_fraction},
    network::model::Level,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
/// Category of a validation failure.
pub enum DefectKind {
    /// Fewer than two levels. Fatal: no other check runs.
    Structural,
    /// Occupation matrix or label list disagrees with the species counts.
    ShapeMismatch,
    /// A population array or occupation row does not sum to 1.
    StochasticSum,
    /// A fraction is negative, above 1, or not finite.
    OutOfRange,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One validation failure. Indices are 0-based; [`fmt::Display`] prints them 1-based.
pub struct Defect {
    pub kind: DefectKind,
    pub level: Option<usize>,
    pub row: Option<usize>,
    pub message: String,
}

impl Defect {
    fn structural(message: impl Into<String>) -> Self {
        Self {
            kind: DefectKind::Structural,
            level: None,
            row: None,
            message: message.into(),
        }
    }

    fn at_level(kind: DefectKind, level: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            level: Some(level),
            row: None,
            message: message.into(),
        }
    }

    fn at_row(kind: DefectKind, level: usize, row: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            level: Some(level),
            row: Some(row),
            message: message.into(),
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.level, self.row) {
            (Some(level), Some(row)) => {
                write!(f, "level {}, row {}: {}", level + 1, row + 1, self.message)
            }
            (Some(level), None) => write!(f, "level {}: {}", level + 1, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Ordered list of defects found by [`validate_network`]; never empty when returned by it.
pub struct Defects {
    pub defects: Vec<Defect>,
}

impl Defects {
    pub fn iter(&self) -> impl Iterator<Item = &Defect> {
        self.defects.iter()
    }

    pub fn len(&self) -> usize {
        self.defects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn count(&self, kind: DefectKind) -> usize {
        self.defects.iter().filter(|d| d.kind == kind).count()
    }

    /// Defects reported against a given 0-based level.
    pub fn for_level(&self, level: usize) -> impl Iterator<Item = &Defect> {
        self.defects.iter().filter(move |d| d.level == Some(level))
    }
}

impl fmt::Display for Defects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.defects.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Defects {}

/// Check every level of a network for shape and stochastic-sum consistency.
#[tracing::instrument(skip(levels), fields(level_count = levels.len()))]
pub fn validate_network(levels: &[Level], tolerance: StochasticTolerance) -> Result<(), Defects> {
    if levels.len() < 2 {
        return Err(Defects {
            defects: vec![Defect::structural(format!(
                "a trophic network needs at least 2 levels, found {}",
                levels.len()
            ))],
        });
    }

    let mut defects = Vec::new();
    for (k, level) in levels.iter().enumerate() {
        validate_populations(k, level, tolerance, &mut defects);
        validate_labels(k, level, &mut defects);
        if k > 0 {
            validate_occupation(k, level, &levels[k - 1], tolerance, &mut defects);
        } else if level.occupation.is_some() {
            tracing::debug!("ignoring occupation matrix on level 1");
        }
    }

    if defects.is_empty() {
        Ok(())
    } else {
        tracing::debug!(defects = defects.len(), "network rejected");
        Err(Defects { defects })
    }
}

fn validate_populations(
    k: usize,
    level: &Level,
    tolerance: StochasticTolerance,
    defects: &mut Vec<Defect>,
) {
    for (i, &p) in level.populations.iter().enumerate() {
        if !is_fraction(p) {
            defects.push(Defect::at_level(
                DefectKind::OutOfRange,
                k,
                format!(
                    "population of species {} is {p}, expected a value in [0, 1]",
                    i + 1
                ),
            ));
        }
    }

    if !tolerance.sums_to_one(&level.populations) {
        let sum = level.populations.iter().sum::<f64>();
        defects.push(Defect::at_level(
            DefectKind::StochasticSum,
            k,
            format!(
                "population sum invalid: {} rounds to {}, expected 1",
                sum,
                tolerance.rounded(sum)
            ),
        ));
    }
}

fn validate_labels(k: usize, level: &Level, defects: &mut Vec<Defect>) {
    if let Some(labels) = &level.labels
        && labels.len() != level.populations.len()
    {
        defects.push(Defect::at_level(
            DefectKind::ShapeMismatch,
            k,
            format!(
                "{} labels given for {} species",
                labels.len(),
                level.populations.len()
            ),
        ));
    }
}

fn validate_occupation(
    k: usize,
    level: &Level,
    previous: &Level,
    tolerance: StochasticTolerance,
    defects: &mut Vec<Defect>,
) {
    let preys = level.species_count();
    let predators = previous.species_count();

    let Some(matrix) = &level.occupation else {
        defects.push(Defect::at_level(
            DefectKind::ShapeMismatch,
            k,
            format!("missing occupation matrix, expected {preys} rows of {predators} columns"),
        ));
        return;
    };

    if matrix.row_count() != preys {
        defects.push(Defect::at_level(
            DefectKind::ShapeMismatch,
            k,
            format!(
                "occupation matrix has {} rows, expected {preys} (one per species)",
                matrix.row_count()
            ),
        ));
    }

    for (i, row) in matrix.rows().iter().enumerate() {
        if row.len() != predators {
            defects.push(Defect::at_row(
                DefectKind::ShapeMismatch,
                k,
                i,
                format!(
                    "occupation row has {} columns, expected {predators} (one per species of level {})",
                    row.len(),
                    k
                ),
            ));
        }
        for (j, &v) in row.iter().enumerate() {
            if !is_fraction(v) {
                defects.push(Defect::at_row(
                    DefectKind::OutOfRange,
                    k,
                    i,
                    format!(
                        "occupation of column {} is {v}, expected a value in [0, 1]",
                        j + 1
                    ),
                ));
            }
        }
        if !tolerance.sums_to_one(row) {
            let sum = row.iter().sum::<f64>();
            defects.push(Defect::at_row(
                DefectKind::StochasticSum,
                k,
                i,
                format!(
                    "occupation row sum invalid: {} rounds to {}, expected 1",
                    sum,
                    tolerance.rounded(sum)
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/validate.rs"]
mod tests;
