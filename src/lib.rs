#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Pipeline stages – public for tools and experiments.
pub mod angle;
pub mod contour;
pub mod curvature;
pub mod fuzzy;
pub mod saliency;
pub mod scale;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::detector::{AnalyzerParams, ShapeAnalyzer};
pub use crate::types::{Point, SalientPoint};

// Errors surfaced by the analyzer and the stage constructors.
pub use crate::error::{AnalysisError, ConstructionError, TraceError};

// Diagnostics returned by the analyzer.
pub use crate::diagnostics::{ScaleSummary, ShapeReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use contour_saliency::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (w, h) = (64usize, 48usize);
/// let mut mask = Mask::new(w, h);
/// for y in 10..30 {
///     for x in 8..50 {
///         mask.set(x, y, true);
///     }
/// }
///
/// let analyzer = ShapeAnalyzer::new(AnalyzerParams::default())?;
/// let report = analyzer.process(&mask)?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::contour::Contour;
    pub use crate::fuzzy::FuzzySet;
    pub use crate::image::{ImageU8, Mask};
    pub use crate::{AnalyzerParams, SalientPoint, ShapeAnalyzer, ShapeReport};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::contour::{smooth_contour, trace_boundary};
    pub use crate::curvature::{CurvatureEstimator, CurvatureFunction};
    pub use crate::saliency::{AlphaCutSegmenter, SaliencyModel};
    pub use crate::scale::{refine, select, simplify, MultiScaleTracker};

    // Options and intermediate data.
    pub use crate::contour::{ContourSegment, ContourSegmentation};
    pub use crate::curvature::{CurvatureOptions, WindowSize};
    pub use crate::diagnostics::{StageTiming, TimingBreakdown};
    pub use crate::fuzzy::{FuzzyContour, TNorm, Trapezoid};
    pub use crate::saliency::SaliencyOptions;
    pub use crate::scale::{Anchor, ScaleLevel, ScaleSpaceOptions, SelectionOptions, TrackOutcome};
}
