//! Closed boundary curves and the operations shared by every pipeline stage.
//!
//! A [`Contour`] is an immutable, circularly indexed point sequence. It is
//! produced by the boundary tracer (`trace`) or by circular Gaussian smoothing
//! (`smooth`), which preserves length and indexing. Arcs over a contour are
//! described by [`ContourSegment`]s and grouped in a [`ContourSegmentation`].
//!
//! Orientation
//! - Coordinates follow the image convention (y grows downward), so the
//!   shoelace area is negative for a boundary that runs counter-clockwise on
//!   screen. The tracer's winding depends on mask polarity; consumers call
//!   [`Contour::is_clockwise`] rather than assuming it.

pub mod ring;
pub mod segment;
pub mod smooth;
pub mod trace;

pub use ring::{Ring, Walk};
pub use segment::{ContourSegment, ContourSegmentation};
pub use smooth::{smooth_contour, CircularFilter, GaussianKernel};
pub use trace::trace_boundary;

use crate::image::Mask;
use crate::types::Point;
use nalgebra::distance_squared;
use serde::Serialize;

const EPS: f32 = 1e-6;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a contour from integer pixel coordinates.
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            points: pixels
                .into_iter()
                .map(|(x, y)| Point::new(x as f32, y as f32))
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn ring(&self) -> Ring {
        Ring::new(self.points.len())
    }

    /// Point at a circular index. Panics on an empty contour.
    #[inline]
    pub fn at(&self, i: usize) -> Point {
        self.points[i % self.points.len()]
    }

    /// Point at a signed circular index. Panics on an empty contour.
    #[inline]
    pub fn point(&self, i: isize) -> Point {
        self.points[self.ring().wrap(i)]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Shoelace area in image coordinates.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0f64;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            acc += p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        }
        (0.5 * acc) as f32
    }

    /// Clockwise as seen on screen (y downward).
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Exact membership lookup.
    pub fn index_of(&self, p: &Point) -> Option<usize> {
        self.points.iter().position(|q| q == p)
    }

    /// Index of the Euclidean nearest contour point; first wins on ties.
    pub fn nearest_index(&self, p: &Point) -> Option<usize> {
        let mut best = None;
        let mut best_d2 = f32::INFINITY;
        for (i, q) in self.points.iter().enumerate() {
            let d2 = distance_squared(p, q);
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(i);
            }
        }
        best
    }

    /// Smoothed copy at scale `sigma`; `sigma <= 0` returns a clone.
    pub fn smooth(&self, sigma: f32) -> Contour {
        smooth_contour(self, sigma)
    }

    /// Chord-fitting error of the forward arc `from → to`: the maximum
    /// perpendicular distance of the interior points to the chord.
    ///
    /// Equal endpoints denote the full loop, in which case (and whenever the
    /// chord is shorter than numeric tolerance) plain distance to `from` is
    /// used.
    pub fn chord_error(&self, from: usize, to: usize) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let ring = self.ring();
        let a = self.at(from);
        let b = self.at(to);
        let chord = b - a;
        let len = chord.norm();
        let steps = ring.arc_steps(from, to);
        let interior = ring.walk(ring.forward(from, 1), steps.saturating_sub(1));
        if len <= EPS {
            return interior
                .map(|i| (self.points[i] - a).norm())
                .fold(0.0, f32::max);
        }
        let normal = nalgebra::Vector2::new(-chord.y, chord.x) / len;
        interior
            .map(|i| (self.points[i] - a).dot(&normal).abs())
            .fold(0.0, f32::max)
    }

    /// Rasterize the contour: each coordinate (rounded) becomes a foreground
    /// pixel. Bounds are the maximum coordinate + 1; negative coordinates are
    /// dropped.
    pub fn to_mask(&self) -> Mask {
        let mut max_x = 0usize;
        let mut max_y = 0usize;
        let mut pixels = Vec::with_capacity(self.points.len());
        for p in &self.points {
            let (x, y) = (p.x.round(), p.y.round());
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (xu, yu) = (x as usize, y as usize);
            max_x = max_x.max(xu);
            max_y = max_y.max(yu);
            pixels.push((xu, yu));
        }
        if pixels.is_empty() {
            return Mask::new(0, 0);
        }
        let mut mask = Mask::new(max_x + 1, max_y + 1);
        for (x, y) in pixels {
            mask.set(x, y, true);
        }
        mask
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
