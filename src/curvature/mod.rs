//! Signed curvature from local orthogonal line regression.
//!
//! For contour point `i` two windows of `W` points are fitted:
//! - the right window starts at `i + D` and runs forward,
//! - the left window ends at `i - D`.
//!
//! Each fit yields a direction along its line pointing from the projection of
//! `p_i` toward the window's mean projection. The curvature is the signed turn
//! from the incoming tangent (the reversed left direction) to the right
//! direction, wrapped to [-π, π]. Straight runs give 0 and a right-angle
//! corner gives ±π/2. This equals the raw difference of the two window
//! angles shifted by π, since the left direction points backwards along the
//! contour.
//!
//! The sign is normalized against the contour orientation so that convex
//! boundary parts are positive regardless of how the tracer wound the curve.

pub mod fit;
mod options;

pub use fit::{fit_window, LineFit};
pub use options::{CurvatureOptions, WindowSize};

use crate::angle::turning_angle;
use crate::contour::Contour;
use crate::error::ConstructionError;
use log::debug;
use nalgebra::Vector2;
use serde::Serialize;

/// Per-point signed curvature sharing the indexing of its source contour.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CurvatureFunction {
    values: Vec<f32>,
}

impl CurvatureFunction {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a circular index. Panics when empty.
    #[inline]
    pub fn at(&self, i: usize) -> f32 {
        self.values[i % self.values.len()]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn mean(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }
}

/// Curvature estimator with validated options.
#[derive(Clone, Debug)]
pub struct CurvatureEstimator {
    options: CurvatureOptions,
}

impl CurvatureEstimator {
    pub fn new(options: CurvatureOptions) -> Result<Self, ConstructionError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CurvatureOptions {
        &self.options
    }

    pub fn estimate(&self, contour: &Contour) -> CurvatureFunction {
        let n = contour.len();
        if n == 0 {
            return CurvatureFunction::default();
        }
        let ring = contour.ring();
        let w = self.options.window.resolve(n);
        let d = self.options.offset;
        let pts = contour.points();
        let orientation = if contour.signed_area() < 0.0 { -1.0 } else { 1.0 };

        let values = (0..n)
            .map(|i| {
                let p = pts[i];
                let right_start = ring.forward(i, d);
                let left_start = ring.backward(i, d + w - 1);
                let (Some(right), Some(left)) = (
                    fit_window(contour, right_start, w),
                    fit_window(contour, left_start, w),
                ) else {
                    return 0.0;
                };
                let forward = traversal(contour, right_start, w);
                let r_dir = right.direction_from(&p, &forward);
                let l_dir = left.direction_from(&p, &(-traversal(contour, left_start, w)));
                orientation * turning_angle(&(-l_dir), &r_dir)
            })
            .collect();

        debug!(
            "CurvatureEstimator::estimate n={} window={} offset={}",
            n, w, d
        );
        CurvatureFunction::new(values)
    }
}

/// Direction from the first to the last point of a window.
fn traversal(contour: &Contour, start: usize, count: usize) -> Vector2<f32> {
    let ring = contour.ring();
    let end = ring.forward(start, count.saturating_sub(1));
    contour.at(end) - contour.at(start)
}
