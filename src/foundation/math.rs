/// Round `v` to `decimals` decimal places (half away from zero).
///
/// `decimals` is capped at [`StochasticTolerance::MAX_DECIMALS`]; larger scales
/// overflow and turn every finite input into NaN.
pub(crate) fn round_to(v: f64, decimals: u32) -> f64 {
    let places = i32::try_from(decimals.min(StochasticTolerance::MAX_DECIMALS)).unwrap_or(0);
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

/// Accepted slack for "sums to one" checks: a sum passes when it rounds to exactly
/// `1.0` at `decimals` places. Two decimals accepts roughly ±0.005.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StochasticTolerance {
    decimals: u32,
}

impl StochasticTolerance {
    pub const MAX_DECIMALS: u32 = 12;

    /// Tolerance at `decimals` places, clamped to [`Self::MAX_DECIMALS`].
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals: decimals.min(Self::MAX_DECIMALS),
        }
    }

    pub fn decimals(self) -> u32 {
        self.decimals
    }

    pub fn rounded(self, sum: f64) -> f64 {
        round_to(sum, self.decimals)
    }

    pub fn sums_to_one(self, values: &[f64]) -> bool {
        self.rounded(values.iter().sum::<f64>()) == 1.0
    }
}

impl Default for StochasticTolerance {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// `true` when `v` is a usable fraction in `[0, 1]`.
pub(crate) fn is_fraction(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}
