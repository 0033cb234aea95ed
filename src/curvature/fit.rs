//! Orthogonal (total-least-squares) line fitting over contour windows.

use crate::contour::Contour;
use crate::types::Point;
use nalgebra::{Matrix2, Vector2};

const EPS: f32 = 1e-6;

/// Line fitted to a point window by orthogonal regression.
#[derive(Clone, Copy, Debug)]
pub struct LineFit {
    pub centroid: Point,
    /// Unit direction along the line.
    pub dir: Vector2<f32>,
    /// Unit normal (eigenvector of the smaller scatter eigenvalue).
    pub normal: Vector2<f32>,
    /// Eigenvalues of the central-moment scatter matrix (per point).
    pub lambda_min: f32,
    pub lambda_max: f32,
    pub count: usize,
}

impl LineFit {
    /// Fit a line to `points`; returns `None` for an empty input.
    ///
    /// The normal comes from the closed-form solution of the 2×2
    /// characteristic polynomial. Windows without a dominant direction
    /// (zero variance or isotropic spread) fall back to the x-axis line
    /// through the centroid.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
        I::IntoIter: Clone,
    {
        let iter = points.into_iter();
        let mut count = 0usize;
        let mut sum = Vector2::<f32>::zeros();
        for p in iter.clone() {
            sum += p.coords;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let mu = sum / count as f32;

        let mut scatter = Matrix2::<f32>::zeros();
        for p in iter {
            let d = p.coords - mu;
            scatter += d * d.transpose();
        }
        scatter /= count as f32;

        let (sxx, sxy, syy) = (scatter[(0, 0)], scatter[(0, 1)], scatter[(1, 1)]);
        let trace = sxx + syy;
        let disc = ((sxx - syy) * (sxx - syy) + 4.0 * sxy * sxy).max(0.0).sqrt();
        let lambda_min = (0.5 * (trace - disc)).max(0.0);
        let lambda_max = (0.5 * (trace + disc)).max(0.0);

        let a = Vector2::new(sxy, lambda_min - sxx);
        let b = Vector2::new(lambda_min - syy, sxy);
        let cand = if a.norm_squared() >= b.norm_squared() { a } else { b };
        let norm = cand.norm();
        let normal = if norm <= EPS * (1.0 + trace) {
            Vector2::new(0.0, 1.0)
        } else {
            cand / norm
        };
        let dir = Vector2::new(-normal.y, normal.x);

        Some(Self {
            centroid: Point::from(mu),
            dir,
            normal,
            lambda_min,
            lambda_max,
            count,
        })
    }

    /// Orthogonal projection of `p` onto the fitted line.
    #[inline]
    pub fn project(&self, p: &Point) -> Point {
        let t = (p - self.centroid).dot(&self.dir);
        self.centroid + self.dir * t
    }

    /// Mean of the projections of the window points. For an orthogonal fit
    /// this coincides with the centroid.
    #[inline]
    pub fn mean_projection(&self) -> Point {
        self.centroid
    }

    /// Perpendicular distance of `p` to the line.
    #[inline]
    pub fn distance(&self, p: &Point) -> f32 {
        (p - self.centroid).dot(&self.normal).abs()
    }

    /// Regression residual normalized to [0, 1]: 0 for collinear points,
    /// 1 for isotropic spread.
    pub fn normalized_residual(&self) -> f32 {
        let total = self.lambda_min + self.lambda_max;
        if total <= EPS {
            0.0
        } else {
            (2.0 * self.lambda_min / total).clamp(0.0, 1.0)
        }
    }

    /// Unit vector along the line pointing from the projection of `p`
    /// toward the mean projection. When the two coincide, the line direction
    /// is oriented along `fallback` instead.
    pub fn direction_from(&self, p: &Point, fallback: &Vector2<f32>) -> Vector2<f32> {
        let v = self.mean_projection() - self.project(p);
        let along = v.dot(&self.dir);
        let sign = if along.abs() > EPS {
            along.signum()
        } else if fallback.dot(&self.dir) < 0.0 {
            -1.0
        } else {
            1.0
        };
        self.dir * sign
    }
}

/// Fit `count` consecutive contour points starting at circular index `start`.
pub fn fit_window(contour: &Contour, start: usize, count: usize) -> Option<LineFit> {
    let ring = contour.ring();
    let pts = contour.points();
    LineFit::from_points(ring.walk(start, count).map(|i| pts[i]))
}
