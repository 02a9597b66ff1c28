use crate::{
    foundation::core::{ColorPair, ColorToken, LabelFont},
    foundation::error::{TrophicError, TrophicResult},
    foundation::math::StochasticTolerance,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Vertical order in which levels are stacked.
pub enum Stacking {
    /// Level 0 on top; each level's predators sit above it.
    #[default]
    TopDown,
    /// Level 0 at the bottom; each level's predators sit below it.
    BottomUp,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Layout options for a network. Every field falls back to its default when omitted.
pub struct NetworkConfig {
    /// Horizontal gap in pixels between adjacent species bands.
    pub separator_width: f64,
    /// Height of every species band in pixels.
    pub rectangle_height: f64,
    /// Vertical gap in pixels between consecutive levels.
    pub space_between_levels: f64,
    /// Fill color for levels without a color list.
    pub default_fill_color: ColorToken,
    /// Label color for levels without a color list.
    pub default_text_color: ColorToken,
    /// Total horizontal extent in pixels.
    pub canvas_width: f64,
    /// Font descriptor handed to the renderer for labels.
    pub label_font: LabelFont,
    /// Decimal places a stochastic sum is rounded to before comparing with 1.
    pub sum_precision: u32,
    /// Stack direction.
    pub stacking: Stacking,
    /// Partition levels and compute flows on the rayon pool.
    pub parallel: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            separator_width: 5.0,
            rectangle_height: 30.0,
            space_between_levels: 150.0,
            default_fill_color: ColorToken::new("black"),
            default_text_color: ColorToken::new("white"),
            canvas_width: 500.0,
            label_font: LabelFont::default(),
            sum_precision: 2,
            stacking: Stacking::TopDown,
            parallel: true,
        }
    }
}

impl NetworkConfig {
    pub fn default_colors(&self) -> ColorPair {
        ColorPair {
            fill: self.default_fill_color.clone(),
            text: self.default_text_color.clone(),
        }
    }

    pub fn tolerance(&self) -> StochasticTolerance {
        StochasticTolerance::new(self.sum_precision)
    }

    /// Vertical distance between the tops of two consecutive levels.
    pub fn level_pitch(&self) -> f64 {
        self.rectangle_height + self.space_between_levels
    }

    pub fn validate(&self) -> TrophicResult<()> {
        for (name, value) in [
            ("separator_width", self.separator_width),
            ("space_between_levels", self.space_between_levels),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TrophicError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("rectangle_height", self.rectangle_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TrophicError::config(format!("{name} must be finite and > 0")));
            }
        }
        if !self.label_font.size.is_finite() || self.label_font.size <= 0.0 {
            return Err(TrophicError::config("label_font.size must be finite and > 0"));
        }
        if self.label_font.family.trim().is_empty() {
            return Err(TrophicError::config("label_font.family must be non-empty"));
        }
        if self.sum_precision > StochasticTolerance::MAX_DECIMALS {
            return Err(TrophicError::config(format!(
                "sum_precision must be <= {}",
                StochasticTolerance::MAX_DECIMALS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/config.rs"]
mod tests;
