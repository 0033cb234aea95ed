//! Analyzer pipeline driving salient point extraction end-to-end.
//!
//! [`ShapeAnalyzer`] validates its parameters once at construction. A run
//! traces the mask boundary, tracks saliency over the scale sequence and
//! annotates every selected point with the signed curvature of the finest
//! smoothed contour.
//!
//! Typical usage:
//! ```no_run
//! use contour_saliency::{AnalyzerParams, ShapeAnalyzer};
//! use contour_saliency::image::Mask;
//!
//! # fn example(mask: Mask) -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = ShapeAnalyzer::new(AnalyzerParams::default())?;
//! let report = analyzer.process(&mask)?;
//! for p in &report.salient {
//!     println!("{} ({:.1}, {:.1}) convex={}", p.index, p.point.x, p.point.y, p.convex);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::AnalyzerParams;
use crate::contour::{trace_boundary, Contour, ContourSegmentation};
use crate::curvature::{CurvatureEstimator, CurvatureFunction};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{ScaleSummary, ShapeReport, StageTiming, TimingBreakdown};
use crate::error::{AnalysisError, ConstructionError};
use crate::image::BinaryView;
use crate::scale::{Anchor, MultiScaleTracker};
use crate::types::SalientPoint;
use log::debug;
use std::time::Instant;

/// Salient point extractor for binary shape masks.
#[derive(Clone, Debug)]
pub struct ShapeAnalyzer {
    params: AnalyzerParams,
    curvature: CurvatureEstimator,
    tracker: MultiScaleTracker,
}

impl ShapeAnalyzer {
    pub fn new(params: AnalyzerParams) -> Result<Self, ConstructionError> {
        params.validate()?;
        let curvature = CurvatureEstimator::new(params.curvature)?;
        let tracker = MultiScaleTracker::new(params.saliency, params.scale, params.selection)?;
        Ok(Self {
            params,
            curvature,
            tracker,
        })
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn tracker(&self) -> &MultiScaleTracker {
        &self.tracker
    }

    /// Trace the mask boundary and analyze it.
    pub fn process<M: BinaryView>(&self, mask: &M) -> Result<ShapeReport, AnalysisError> {
        let start = Instant::now();
        let contour = trace_boundary(mask)?;
        let trace_ms = elapsed_ms(start);

        let mut report = self.analyze_contour(&contour);
        report.timing.stages.insert(
            0,
            StageTiming {
                label: "trace".to_string(),
                elapsed_ms: trace_ms,
            },
        );
        report.latency_ms = elapsed_ms(start);
        report.timing.total_ms = report.latency_ms;
        Ok(report)
    }

    /// Salient points only.
    pub fn salient_points<M: BinaryView>(&self, mask: &M) -> Result<Vec<SalientPoint>, AnalysisError> {
        Ok(self.process(mask)?.salient)
    }

    /// Analyze an already traced contour. Empty contours give an empty report.
    pub fn analyze_contour(&self, contour: &Contour) -> ShapeReport {
        let start = Instant::now();
        let mut timing = TimingBreakdown::default();
        debug!(
            "ShapeAnalyzer::analyze_contour start n={} sigma0={:.2}",
            contour.len(),
            self.params.scale.sigma0
        );

        let outcome = timing.measure("scales", || self.tracker.track(contour));
        let curvature = timing.measure("curvature", || {
            self.curvature
                .estimate(&contour.smooth(self.params.scale.sigma0))
        });
        let salient = annotate(contour, &curvature, &outcome.anchors);
        let indices: Vec<usize> = salient.iter().map(|p| p.index).collect();
        let max_chord_error = ContourSegmentation::from_anchors(contour, &indices)
            .map(|s| s.max_chord_error())
            .unwrap_or(0.0);

        let latency_ms = elapsed_ms(start);
        timing.total_ms = latency_ms;
        debug!(
            "ShapeAnalyzer::analyze_contour done salient={} latency_ms={:.3}",
            salient.len(),
            latency_ms
        );
        ShapeReport {
            contour_len: contour.len(),
            clockwise: contour.is_clockwise(),
            scales: outcome.levels.iter().map(ScaleSummary::from).collect(),
            refined: outcome.refined,
            salient,
            max_chord_error,
            timing,
            latency_ms,
        }
    }
}

fn annotate(contour: &Contour, curvature: &CurvatureFunction, anchors: &[Anchor]) -> Vec<SalientPoint> {
    if curvature.is_empty() {
        return Vec::new();
    }
    anchors
        .iter()
        .map(|a| {
            let k = curvature.at(a.index);
            SalientPoint {
                index: a.index,
                point: contour.at(a.index),
                curvature: k,
                convex: k > 0.0,
                sigma: a.sigma,
            }
        })
        .collect()
}
