//! Circular Gaussian smoothing of closed contours.
//!
//! X and Y coordinate sequences are convolved independently with a
//! normalized odd-length kernel, wrapping around the contour seam. The result
//! keeps the length and indexing of its input, so index `i` of a smoothed
//! contour is the smoothed image of index `i` of the source.

use super::Contour;
use crate::types::Point;

/// Trait implemented by 1D kernels applied circularly along a contour.
pub trait CircularFilter {
    /// Return the 1D taps (in left-to-right order). The centre tap sits at
    /// `taps().len() / 2`.
    fn taps(&self) -> &[f32];
}

/// Sampled Gaussian with radius `ceil(3σ)`, normalized to unit sum.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f32,
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Kernel for `sigma`; non-positive sigma gives the identity `[1.0]`.
    pub fn new(sigma: f32) -> Self {
        if !(sigma > 0.0) {
            return Self {
                sigma: 0.0,
                taps: vec![1.0],
            };
        }
        let radius = (3.0 * sigma).ceil().max(1.0) as usize;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..=2 * radius)
            .map(|k| {
                let d = k as f32 - radius as f32;
                (-d * d / denom).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { sigma, taps }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

impl CircularFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve a contour circularly with an arbitrary filter.
pub fn apply<F: CircularFilter + ?Sized>(filter: &F, contour: &Contour) -> Contour {
    let taps = filter.taps();
    if contour.is_empty() || taps.len() <= 1 {
        return contour.clone();
    }
    let ring = contour.ring();
    let half = (taps.len() / 2) as isize;
    let pts = contour.points();
    let out = (0..pts.len())
        .map(|i| {
            let mut x = 0.0f32;
            let mut y = 0.0f32;
            for (k, &w) in taps.iter().enumerate() {
                let p = pts[ring.offset(i, k as isize - half)];
                x += w * p.x;
                y += w * p.y;
            }
            Point::new(x, y)
        })
        .collect();
    Contour::new(out)
}

/// Gaussian-smoothed copy of `contour` at scale `sigma`.
pub fn smooth_contour(contour: &Contour, sigma: f32) -> Contour {
    apply(&GaussianKernel::new(sigma), contour)
}
