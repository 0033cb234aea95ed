use crate::curvature::WindowSize;
use crate::error::ConstructionError;
use crate::fuzzy::{TNorm, Trapezoid};
use serde::{Deserialize, Serialize};

/// Default lower bound of the "enough curvacity" quantifier. Tuned
/// empirically as an angle-derived constant.
pub const DEFAULT_ENOUGH_ALPHA: f32 = 0.37 / std::f32::consts::PI;

/// Options of the fuzzy saliency model.
///
/// - `window`: points in the centered regression window used for linearity.
/// - `maxima_window`: points compared when testing for a local maximum.
/// - `linearity_exponent`: `K` in `linearity = (1 - residual)^K`.
/// - `enough_alpha`, `enough_beta`: ramp of the "enough curvacity"
///   trapezoid `(alpha, beta, 1, 1)`.
/// - `almost_all_gamma`: number of larger neighbors at which "almost all"
///   drops to 0 (triangle `(0, 0, gamma)`).
/// - `tnorm`: conjunction of the two predicates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SaliencyOptions {
    pub window: WindowSize,
    pub maxima_window: WindowSize,
    pub linearity_exponent: f32,
    pub enough_alpha: f32,
    pub enough_beta: f32,
    pub almost_all_gamma: f32,
    pub tnorm: TNorm,
}

impl Default for SaliencyOptions {
    fn default() -> Self {
        Self {
            window: WindowSize::Ratio(0.1),
            maxima_window: WindowSize::Ratio(0.1),
            linearity_exponent: 2.0,
            enough_alpha: DEFAULT_ENOUGH_ALPHA,
            enough_beta: 0.35,
            almost_all_gamma: 3.0,
            tnorm: TNorm::Product,
        }
    }
}

impl SaliencyOptions {
    pub fn with_tnorm(mut self, tnorm: TNorm) -> Self {
        self.tnorm = tnorm;
        self
    }

    pub fn with_enough(mut self, alpha: f32, beta: f32) -> Self {
        self.enough_alpha = alpha;
        self.enough_beta = beta;
        self
    }

    pub fn with_almost_all(mut self, gamma: f32) -> Self {
        self.almost_all_gamma = gamma;
        self
    }

    pub fn with_linearity_exponent(mut self, k: f32) -> Self {
        self.linearity_exponent = k;
        self
    }

    pub fn with_windows(mut self, window: WindowSize, maxima_window: WindowSize) -> Self {
        self.window = window;
        self.maxima_window = maxima_window;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConstructionError> {
        self.window.validate("saliency.window")?;
        self.maxima_window.validate("saliency.maxima_window")?;
        if !(self.linearity_exponent > 0.0) || !self.linearity_exponent.is_finite() {
            return Err(ConstructionError::InvalidParameter {
                name: "saliency.linearity_exponent",
                value: self.linearity_exponent,
            });
        }
        Trapezoid::enough(self.enough_alpha, self.enough_beta)?;
        Trapezoid::almost_all(self.almost_all_gamma)?;
        Ok(())
    }
}
