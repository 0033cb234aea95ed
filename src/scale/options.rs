use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};

/// Geometric sequence of smoothing scales.
///
/// The sequence is `sigma0 * factor^k` for every `k` whose value stays at or
/// below `max(max_sigma, max_sigma_ratio * n)` for a contour of `n` points.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSpaceOptions {
    pub sigma0: f32,
    pub factor: f32,
    /// Absolute upper bound on sigma, in points.
    pub max_sigma: f32,
    /// Upper bound on sigma relative to the contour length.
    pub max_sigma_ratio: f32,
}

impl Default for ScaleSpaceOptions {
    fn default() -> Self {
        Self {
            sigma0: 1.0,
            factor: std::f32::consts::SQRT_2,
            max_sigma: 8.0,
            max_sigma_ratio: 0.05,
        }
    }
}

impl ScaleSpaceOptions {
    const TOLERANCE: f32 = 1e-4;

    pub fn with_sigma0(mut self, sigma0: f32) -> Self {
        self.sigma0 = sigma0;
        self
    }

    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_caps(mut self, max_sigma: f32, max_sigma_ratio: f32) -> Self {
        self.max_sigma = max_sigma;
        self.max_sigma_ratio = max_sigma_ratio;
        self
    }

    /// Largest admissible sigma for a contour of `n` points.
    pub fn sigma_max(&self, n: usize) -> f32 {
        self.max_sigma.max(self.max_sigma_ratio * n as f32)
    }

    /// Scale sequence, finest first. Options that fail validation give an
    /// empty sequence.
    pub fn sigmas(&self, n: usize) -> Vec<f32> {
        if self.validate().is_err() {
            return Vec::new();
        }
        let limit = self.sigma_max(n) * (1.0 + Self::TOLERANCE);
        let mut out = Vec::new();
        let mut sigma = self.sigma0;
        while sigma <= limit {
            out.push(sigma);
            sigma *= self.factor;
        }
        out
    }

    pub(crate) fn validate(&self) -> Result<(), ConstructionError> {
        let checks = [
            ("scale.sigma0", self.sigma0, self.sigma0 > 0.0),
            ("scale.factor", self.factor, self.factor > 1.0),
            ("scale.max_sigma", self.max_sigma, self.max_sigma >= 0.0),
            (
                "scale.max_sigma_ratio",
                self.max_sigma_ratio,
                self.max_sigma_ratio >= 0.0,
            ),
        ];
        for (name, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(ConstructionError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// How salient points are selected and pruned across scales.
///
/// - `alpha`: alpha-cut level applied to every scale's saliency.
/// - `chord_threshold`: maximum accepted chord-fitting error in pixels.
/// - `simplify`: run the greedy simplifier on the refined selection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    pub alpha: f32,
    pub chord_threshold: f32,
    pub simplify: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            chord_threshold: 2.0,
            simplify: true,
        }
    }
}

impl SelectionOptions {
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_chord_threshold(mut self, threshold: f32) -> Self {
        self.chord_threshold = threshold;
        self
    }

    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConstructionError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConstructionError::InvalidParameter {
                name: "selection.alpha",
                value: self.alpha,
            });
        }
        if !(self.chord_threshold >= 0.0) || !self.chord_threshold.is_finite() {
            return Err(ConstructionError::InvalidParameter {
                name: "selection.chord_threshold",
                value: self.chord_threshold,
            });
        }
        Ok(())
    }
}
