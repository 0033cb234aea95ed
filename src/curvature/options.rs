use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};

/// Size of a regression window, absolute or relative to the contour length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowSize {
    /// Fixed number of points.
    Absolute(usize),
    /// Fraction of the contour length.
    Ratio(f32),
}

impl WindowSize {
    pub fn validate(&self, name: &'static str) -> Result<(), ConstructionError> {
        match *self {
            WindowSize::Absolute(0) => Err(ConstructionError::NonPositiveWindow { name }),
            WindowSize::Ratio(r) if !(r > 0.0) || !r.is_finite() => {
                Err(ConstructionError::NonPositiveWindow { name })
            }
            _ => Ok(()),
        }
    }

    /// Number of points for a contour of length `n`, clamped to `[2, n]`
    /// (or to `n` when the contour is shorter than two points).
    pub fn resolve(&self, n: usize) -> usize {
        let raw = match *self {
            WindowSize::Absolute(w) => w,
            WindowSize::Ratio(r) => (r * n as f32).round() as usize,
        };
        raw.max(2).min(n)
    }
}

/// Options of the regression-based curvature estimator.
///
/// - `window`: number of points in each of the left/right regression windows.
/// - `offset`: gap `D` between the point and the first window point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvatureOptions {
    pub window: WindowSize,
    pub offset: usize,
}

impl Default for CurvatureOptions {
    fn default() -> Self {
        Self {
            window: WindowSize::Ratio(0.1),
            offset: 0,
        }
    }
}

impl CurvatureOptions {
    pub fn with_window(mut self, window: WindowSize) -> Self {
        self.window = window;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn validate(&self) -> Result<(), ConstructionError> {
        self.window.validate("curvature.window")
    }
}
