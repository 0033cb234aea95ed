//! Piecewise-linear fuzzy quantifiers.

use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};

/// Trapezoidal membership `(a, b, c, d)`: 0 below `a`, rising on `[a, b)`,
/// 1 on `[b, c]`, falling on `(c, d]`, 0 above `d`.
///
/// A triangle is the special case `b == c`; a vertical edge is `a == b` or
/// `c == d`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Trapezoid {
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Result<Self, ConstructionError> {
        for (name, v) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !v.is_finite() {
                return Err(ConstructionError::InvalidParameter { name, value: v });
            }
        }
        if a > b || c > d {
            return Err(ConstructionError::NonMonotonicQuantifier { alpha: a, beta: b.max(d) });
        }
        if b > c {
            return Err(ConstructionError::NonMonotonicQuantifier { alpha: b, beta: c });
        }
        Ok(Self { a, b, c, d })
    }

    /// Triangle `(a, b, c)` peaking at `b`.
    pub fn triangular(a: f32, b: f32, c: f32) -> Result<Self, ConstructionError> {
        Self::new(a, b, b, c)
    }

    /// "Enough" quantifier `(alpha, beta, 1, 1)`; requires `alpha < beta`.
    pub fn enough(alpha: f32, beta: f32) -> Result<Self, ConstructionError> {
        if !(alpha < beta) || beta > 1.0 {
            return Err(ConstructionError::NonMonotonicQuantifier { alpha, beta });
        }
        Self::new(alpha, beta, 1.0, 1.0)
    }

    /// "Almost all" quantifier `(0, 0, gamma)` over a count of exceptions.
    pub fn almost_all(gamma: f32) -> Result<Self, ConstructionError> {
        if !(gamma > 0.0) {
            return Err(ConstructionError::InvalidParameter {
                name: "gamma",
                value: gamma,
            });
        }
        Self::triangular(0.0, 0.0, gamma)
    }

    #[inline]
    pub fn membership(&self, x: f32) -> f32 {
        if x < self.a || x > self.d {
            0.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else if x <= self.c {
            1.0
        } else {
            (self.d - x) / (self.d - self.c)
        }
    }
}
