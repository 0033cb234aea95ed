use super::timing::TimingBreakdown;
use crate::scale::ScaleLevel;
use crate::types::SalientPoint;
use serde::Serialize;

/// Summary of one smoothing scale.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSummary {
    pub sigma: f32,
    /// Alpha-cut centerpoints found on the smoothed contour.
    pub salient: usize,
    /// Original-contour indices those points map to.
    pub mapped: Vec<usize>,
}

impl From<&ScaleLevel> for ScaleSummary {
    fn from(level: &ScaleLevel) -> Self {
        Self {
            sigma: level.sigma,
            salient: level.salient.len(),
            mapped: level.mapped.clone(),
        }
    }
}

/// Result returned by [`ShapeAnalyzer`](crate::ShapeAnalyzer).
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeReport {
    pub contour_len: usize,
    pub clockwise: bool,
    /// Scales, finest first.
    pub scales: Vec<ScaleSummary>,
    /// Points accepted by refinement before simplification.
    pub refined: usize,
    pub salient: Vec<SalientPoint>,
    /// Worst chord-fitting error of the arcs between consecutive salient
    /// points.
    pub max_chord_error: f32,
    pub timing: TimingBreakdown,
    pub latency_ms: f64,
}

impl ShapeReport {
    pub fn convex_count(&self) -> usize {
        self.salient.iter().filter(|p| p.convex).count()
    }

    pub fn concave_count(&self) -> usize {
        self.salient.len() - self.convex_count()
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        format!(
            "contour={} {} scales={} salient={} (convex={} concave={}) latency={:.2}ms",
            self.contour_len,
            if self.clockwise { "cw" } else { "ccw" },
            self.scales.len(),
            self.salient.len(),
            self.convex_count(),
            self.concave_count(),
            self.latency_ms
        )
    }
}
