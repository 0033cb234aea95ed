//! Parameters configuring the analyzer stages.
//!
//! Every group deserializes with defaults, so a configuration file only needs
//! to name the knobs it changes. The tuned defaults reproduce rectangle
//! corners on clean masks and stay silent on discs.

use crate::curvature::CurvatureOptions;
use crate::error::ConstructionError;
use crate::saliency::SaliencyOptions;
use crate::scale::{ScaleSpaceOptions, SelectionOptions};
use serde::{Deserialize, Serialize};

/// Analyzer-wide parameters.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Regression windows of the signed curvature reported per point.
    pub curvature: CurvatureOptions,
    /// Fuzzy saliency model applied at every scale.
    pub saliency: SaliencyOptions,
    /// Smoothing scale sequence.
    pub scale: ScaleSpaceOptions,
    /// Alpha-cut level, chord threshold and simplification.
    pub selection: SelectionOptions,
}

impl AnalyzerParams {
    pub fn with_curvature(mut self, curvature: CurvatureOptions) -> Self {
        self.curvature = curvature;
        self
    }

    pub fn with_saliency(mut self, saliency: SaliencyOptions) -> Self {
        self.saliency = saliency;
        self
    }

    pub fn with_scale(mut self, scale: ScaleSpaceOptions) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_selection(mut self, selection: SelectionOptions) -> Self {
        self.selection = selection;
        self
    }

    /// Check every group without building the analyzer.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        self.curvature.validate()?;
        self.saliency.validate()?;
        self.scale.validate()?;
        self.selection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::TNorm;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "saliency": { "tnorm": "minimum", "almost_all_gamma": 4.0 },
            "selection": { "alpha": 0.6 }
        }"#;
        let params: AnalyzerParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.saliency.tnorm, TNorm::Minimum);
        assert_eq!(params.saliency.almost_all_gamma, 4.0);
        assert_eq!(params.saliency.enough_beta, 0.35);
        assert_eq!(params.selection.alpha, 0.6);
        assert_eq!(params.selection.chord_threshold, 2.0);
        assert_eq!(params.scale.sigma0, 1.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn window_sizes_deserialize_from_tagged_values() {
        let json = r#"{ "curvature": { "window": { "absolute": 7 }, "offset": 1 } }"#;
        let params: AnalyzerParams = serde_json::from_str(json).unwrap();
        assert_eq!(
            params.curvature.window,
            crate::curvature::WindowSize::Absolute(7)
        );
        assert_eq!(params.curvature.offset, 1);
    }

    #[test]
    fn validate_reports_first_bad_group() {
        let params = AnalyzerParams::default()
            .with_saliency(SaliencyOptions::default().with_enough(0.5, 0.3));
        assert!(matches!(
            params.validate(),
            Err(ConstructionError::NonMonotonicQuantifier { .. })
        ));
    }
}
