//! Error types shared across the pipeline stages.
//!
//! Construction errors are raised once while options and segments are being
//! built; per-point loops never fail. Tracing failures are reported by the
//! boundary tracer and never retried.

use crate::types::Point;

/// Invalid configuration or invalid arguments to a constructor.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstructionError {
    /// A segment endpoint is not a member of its source contour.
    PointNotOnContour { x: f32, y: f32 },
    /// A segment was pushed into a segmentation over a different contour.
    ForeignSegment,
    /// Quantifier bounds must satisfy `alpha < beta`.
    NonMonotonicQuantifier { alpha: f32, beta: f32 },
    /// Window sizes must be strictly positive.
    NonPositiveWindow { name: &'static str },
    /// Any other out-of-range numeric parameter.
    InvalidParameter { name: &'static str, value: f32 },
    /// Per-point data does not match the contour length.
    LengthMismatch { expected: usize, actual: usize },
}

impl ConstructionError {
    pub(crate) fn not_on_contour(p: &Point) -> Self {
        Self::PointNotOnContour { x: p.x, y: p.y }
    }
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionError::PointNotOnContour { x, y } => {
                write!(f, "point ({x:.2}, {y:.2}) is not on the source contour")
            }
            ConstructionError::ForeignSegment => {
                write!(f, "segment belongs to a different contour")
            }
            ConstructionError::NonMonotonicQuantifier { alpha, beta } => {
                write!(f, "quantifier bounds must satisfy alpha < beta (alpha={alpha}, beta={beta})")
            }
            ConstructionError::NonPositiveWindow { name } => {
                write!(f, "window `{name}` must be positive")
            }
            ConstructionError::InvalidParameter { name, value } => {
                write!(f, "invalid value for `{name}`: {value}")
            }
            ConstructionError::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Failure of the boundary tracer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceError {
    /// No foreground neighbor could be found, or the walk never returned to
    /// its start. The mask is likely disconnected or degenerate.
    Stuck { at: (usize, usize), steps: usize },
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::Stuck { at, steps } => write!(
                f,
                "boundary tracing stuck at ({}, {}) after {steps} steps",
                at.0, at.1
            ),
        }
    }
}

impl std::error::Error for TraceError {}

/// Top-level error returned by [`crate::ShapeAnalyzer`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    Construction(ConstructionError),
    Trace(TraceError),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Construction(e) => write!(f, "configuration error: {e}"),
            AnalysisError::Trace(e) => write!(f, "tracing error: {e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Construction(e) => Some(e),
            AnalysisError::Trace(e) => Some(e),
        }
    }
}

impl From<ConstructionError> for AnalysisError {
    fn from(e: ConstructionError) -> Self {
        AnalysisError::Construction(e)
    }
}

impl From<TraceError> for AnalysisError {
    fn from(e: TraceError) -> Self {
        AnalysisError::Trace(e)
    }
}
