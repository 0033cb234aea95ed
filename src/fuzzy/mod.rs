//! Discrete fuzzy sets over contour points, quantifiers and T-norms.

mod quantifier;
mod tnorm;

pub use quantifier::Trapezoid;
pub use tnorm::TNorm;

use crate::contour::Contour;
use crate::error::ConstructionError;
use crate::types::Point;
use std::collections::HashMap;

/// Capability consumed by downstream shape description: membership degree
/// of an element and crisp alpha-cuts.
pub trait FuzzySet {
    type Element;

    /// Membership degree in [0, 1]; 0 for elements outside the support.
    fn degree(&self, element: &Self::Element) -> f32;

    /// Elements with degree `>= alpha`.
    fn alpha_cut(&self, alpha: f32) -> Vec<Self::Element>;
}

/// Discrete fuzzy set over contour points, insertion ordered.
///
/// Built from a contour, entry `i` holds point `i`, so positional access
/// (`degree_at`) follows contour indexing. Point lookups merge repeated
/// points (a boundary may revisit a pixel) by taking the maximum degree.
#[derive(Clone, Debug, Default)]
pub struct FuzzyContour {
    entries: Vec<(Point, f32)>,
    lookup: HashMap<(u32, u32), f32>,
}

#[inline]
fn key(p: &Point) -> (u32, u32) {
    (p.x.to_bits(), p.y.to_bits())
}

impl FuzzyContour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair every contour point with its degree; degrees are clamped to [0, 1].
    pub fn from_degrees(contour: &Contour, degrees: &[f32]) -> Result<Self, ConstructionError> {
        if contour.len() != degrees.len() {
            return Err(ConstructionError::LengthMismatch {
                expected: contour.len(),
                actual: degrees.len(),
            });
        }
        let mut out = Self {
            entries: Vec::with_capacity(degrees.len()),
            lookup: HashMap::with_capacity(degrees.len()),
        };
        for (p, &d) in contour.iter().zip(degrees) {
            out.push(*p, d);
        }
        Ok(out)
    }

    /// Append a point with its degree (clamped to [0, 1]).
    pub fn push(&mut self, point: Point, degree: f32) {
        let d = if degree.is_nan() { 0.0 } else { degree.clamp(0.0, 1.0) };
        self.entries.push((point, d));
        let slot = self.lookup.entry(key(&point)).or_insert(0.0);
        *slot = slot.max(d);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Degree of entry `i` (circular). Panics when empty.
    #[inline]
    pub fn degree_at(&self, i: usize) -> f32 {
        self.entries[i % self.entries.len()].1
    }

    #[inline]
    pub fn point_at(&self, i: usize) -> Point {
        self.entries[i % self.entries.len()].0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn degrees(&self) -> impl Iterator<Item = f32> + '_ {
        self.entries.iter().map(|e| e.1)
    }

    /// Indices with degree `>= alpha`, in insertion order.
    pub fn alpha_cut_indices(&self, alpha: f32) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.1 >= alpha)
            .map(|(i, _)| i)
            .collect()
    }

    /// Points with a strictly positive degree.
    pub fn support(&self) -> Vec<Point> {
        self.entries
            .iter()
            .filter(|e| e.1 > 0.0)
            .map(|e| e.0)
            .collect()
    }

    /// Largest degree (0 for the empty set).
    pub fn height(&self) -> f32 {
        self.degrees().fold(0.0, f32::max)
    }
}

impl FuzzySet for FuzzyContour {
    type Element = Point;

    fn degree(&self, element: &Point) -> f32 {
        self.lookup.get(&key(element)).copied().unwrap_or(0.0)
    }

    fn alpha_cut(&self, alpha: f32) -> Vec<Point> {
        self.entries
            .iter()
            .filter(|e| e.1 >= alpha)
            .map(|e| e.0)
            .collect()
    }
}
