//! Serializable diagnostics produced by the shape analyzer.
//!
//! [`ShapeReport`] is the entry point: contour facts, per-scale summaries, the
//! selected salient points and a per-stage [`TimingBreakdown`].

pub mod report;
pub mod timing;

pub use report::{ScaleSummary, ShapeReport};
pub use timing::{StageTiming, TimingBreakdown};
