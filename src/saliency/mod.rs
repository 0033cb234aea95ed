//! Fuzzy saliency of contour points.
//!
//! Saliency combines two fuzzy predicates per point:
//! - *curvacity is enough*: curvacity is `1 - linearity`, where linearity is
//!   `(1 - r)^K` and `r` the normalized residual of an orthogonal line fit over
//!   a window centered on the point; a trapezoidal quantifier
//!   `(alpha, beta, 1, 1)` grades it.
//! - *locally maximal*: the number of neighbors (within `maxima_window`)
//!   whose curvacity strictly exceeds the point's is graded by the "almost
//!   all" triangle `(0, 0, gamma)`.
//!
//! The predicates are joined by the configured T-norm. The resulting
//! [`FuzzyContour`] is reduced to crisp points by [`AlphaCutSegmenter`].

mod options;
mod segmenter;

pub use options::{SaliencyOptions, DEFAULT_ENOUGH_ALPHA};
pub use segmenter::AlphaCutSegmenter;

use crate::contour::{Contour, Ring};
use crate::curvature::fit_window;
use crate::error::ConstructionError;
use crate::fuzzy::{FuzzyContour, TNorm, Trapezoid};
use log::debug;

/// Saliency model with quantifiers built from validated options.
#[derive(Clone, Debug)]
pub struct SaliencyModel {
    options: SaliencyOptions,
    enough: Trapezoid,
    almost_all: Trapezoid,
}

impl SaliencyModel {
    pub fn new(options: SaliencyOptions) -> Result<Self, ConstructionError> {
        options.validate()?;
        let enough = Trapezoid::enough(options.enough_alpha, options.enough_beta)?;
        let almost_all = Trapezoid::almost_all(options.almost_all_gamma)?;
        Ok(Self {
            options,
            enough,
            almost_all,
        })
    }

    pub fn options(&self) -> &SaliencyOptions {
        &self.options
    }

    pub fn tnorm(&self) -> TNorm {
        self.options.tnorm
    }

    /// Linearity in [0, 1] of the centered window around every point.
    pub fn linearity(&self, contour: &Contour) -> Vec<f32> {
        let n = contour.len();
        if n == 0 {
            return Vec::new();
        }
        let ring = contour.ring();
        let w = self.options.window.resolve(n);
        let k = self.options.linearity_exponent;
        (0..n)
            .map(|i| {
                let start = ring.backward(i, w / 2);
                fit_window(contour, start, w)
                    .map(|fit| (1.0 - fit.normalized_residual()).powf(k))
                    .unwrap_or(1.0)
            })
            .collect()
    }

    /// Curvacity `1 - linearity` for every point.
    pub fn curvacity(&self, contour: &Contour) -> Vec<f32> {
        self.linearity(contour)
            .into_iter()
            .map(|l| (1.0 - l).clamp(0.0, 1.0))
            .collect()
    }

    /// Degree to which each point's curvacity beats almost all of its
    /// `window` nearest neighbors along the contour.
    pub fn maximality(&self, curvacity: &[f32], window: usize) -> Vec<f32> {
        let n = curvacity.len();
        if n == 0 {
            return Vec::new();
        }
        let half = (window / 2).min((n - 1) / 2);
        let ring = Ring::new(n);
        (0..n)
            .map(|i| {
                let c = curvacity[i];
                let larger = (1..=half)
                    .flat_map(|k| [ring.forward(i, k), ring.backward(i, k)])
                    .filter(|&j| curvacity[j] > c)
                    .count();
                self.almost_all.membership(larger as f32)
            })
            .collect()
    }

    /// Saliency fuzzy set over the contour points.
    pub fn saliency(&self, contour: &Contour) -> FuzzyContour {
        let n = contour.len();
        if n == 0 {
            return FuzzyContour::new();
        }
        let curvacity = self.curvacity(contour);
        let m = self.options.maxima_window.resolve(n);
        let maximal = self.maximality(&curvacity, m);
        let tnorm = self.options.tnorm;
        let degrees: Vec<f32> = curvacity
            .iter()
            .zip(&maximal)
            .map(|(&c, &mx)| tnorm.apply(self.enough.membership(c), mx))
            .collect();

        let peak = degrees.iter().copied().fold(0.0f32, f32::max);
        debug!(
            "SaliencyModel::saliency n={} maxima_window={} peak={:.3}",
            n, m, peak
        );
        let mut out = FuzzyContour::new();
        for (p, d) in contour.iter().zip(degrees) {
            out.push(*p, d);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curvature::WindowSize;
    use crate::fuzzy::FuzzySet;
    use crate::types::Point;

    fn rect_loop(w: usize, h: usize) -> Contour {
        let mut px = Vec::new();
        for y in 0..h {
            px.push((0, y));
        }
        for x in 0..w {
            px.push((x, h));
        }
        for y in (1..=h).rev() {
            px.push((w, y));
        }
        for x in (1..=w).rev() {
            px.push((x, 0));
        }
        Contour::from_pixels(px)
    }

    fn circle(n: usize, r: f32) -> Contour {
        Contour::new(
            (0..n)
                .map(|i| {
                    let t = i as f32 / n as f32 * std::f32::consts::TAU;
                    Point::new(r * t.cos(), r * t.sin())
                })
                .collect(),
        )
    }

    #[test]
    fn degrees_are_within_unit_interval() {
        let model = SaliencyModel::new(SaliencyOptions::default()).unwrap();
        let s = model.saliency(&rect_loop(30, 14));
        assert_eq!(s.len(), 2 * (30 + 14));
        assert!(s.degrees().all(|d| (0.0..=1.0).contains(&d)));
    }

    #[test]
    fn rectangle_corners_are_salient_and_sides_are_not() {
        let model = SaliencyModel::new(SaliencyOptions::default()).unwrap();
        let c = rect_loop(30, 14);
        let s = model.saliency(&c);
        // corners sit at indices 0, 14, 44 and 58
        for corner in [0usize, 14, 44, 58] {
            assert!(s.degree_at(corner) > 0.9, "corner {corner}: {}", s.degree_at(corner));
        }
        assert!(s.degree(&Point::new(0.0, 7.0)) < 1e-6);
        assert!(s.degree(&Point::new(15.0, 14.0)) < 1e-6);
    }

    #[test]
    fn smooth_circle_has_no_salient_points() {
        let model = SaliencyModel::new(SaliencyOptions::default()).unwrap();
        let s = model.saliency(&circle(120, 25.0));
        assert!(s.height() < 1e-6, "height {}", s.height());
    }

    #[test]
    fn maximality_prefers_strict_peaks() {
        let model = SaliencyModel::new(SaliencyOptions::default().with_almost_all(2.0)).unwrap();
        let curv = [0.1, 0.5, 0.9, 0.5, 0.1, 0.0];
        let m = model.maximality(&curv, 4);
        assert_eq!(m[2], 1.0);
        assert!((m[1] - 0.5).abs() < 1e-6);
        assert_eq!(m[0], 0.0);
    }

    #[test]
    fn minimum_tnorm_is_not_below_product() {
        let c = rect_loop(20, 10);
        let prod = SaliencyModel::new(SaliencyOptions::default()).unwrap().saliency(&c);
        let min = SaliencyModel::new(SaliencyOptions::default().with_tnorm(TNorm::Minimum))
            .unwrap()
            .saliency(&c);
        for (a, b) in prod.degrees().zip(min.degrees()) {
            assert!(a <= b + 1e-6);
        }
    }

    #[test]
    fn invalid_options_fail_at_construction() {
        let bad = SaliencyOptions::default().with_enough(0.4, 0.2);
        assert!(matches!(
            SaliencyModel::new(bad),
            Err(ConstructionError::NonMonotonicQuantifier { .. })
        ));
        let bad = SaliencyOptions::default()
            .with_windows(WindowSize::Absolute(0), WindowSize::Ratio(0.1));
        assert!(SaliencyModel::new(bad).is_err());
        let bad = SaliencyOptions::default().with_linearity_exponent(0.0);
        assert!(SaliencyModel::new(bad).is_err());
    }

    #[test]
    fn empty_contour_gives_empty_saliency() {
        let model = SaliencyModel::new(SaliencyOptions::default()).unwrap();
        assert!(model.saliency(&Contour::default()).is_empty());
    }
}
