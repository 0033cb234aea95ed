//! Multi-scale tracking of salient points.
//!
//! The contour is smoothed at a geometric sequence of scales. At every scale
//! the fuzzy saliency is computed and reduced by the alpha-cut segmenter.
//! Adjacent scales (the original contour being the finest) are linked by
//! nearest-neighbour trajectory maps so every scale's points can be expressed
//! as indices of the original contour. Selection then starts from the
//! coarsest scale that has points and descends toward finer scales only
//! where the chord-fitting error of an arc is too large; a greedy simplifier
//! removes points that do not carry shape.
//!
//! Per-scale work and trajectory maps are independent and are computed with
//! rayon when the `parallel` feature is enabled.

mod options;
pub mod refine;
pub mod simplify;
pub mod trajectory;

pub use options::{ScaleSpaceOptions, SelectionOptions};
pub use refine::{refine, select, Anchor, Selection};
pub use simplify::simplify;
pub use trajectory::{map_to_original, TrajectoryMap};

use crate::contour::Contour;
use crate::error::ConstructionError;
use crate::saliency::{AlphaCutSegmenter, SaliencyModel, SaliencyOptions};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One smoothing scale and the salient points it produced.
#[derive(Clone, Debug)]
pub struct ScaleLevel {
    pub sigma: f32,
    /// Contour smoothed at `sigma`; same length and indexing as the original.
    pub contour: Contour,
    /// Alpha-cut centerpoints on the smoothed contour.
    pub salient: Vec<usize>,
    /// `salient` carried down to original-contour indices, sorted and unique.
    pub mapped: Vec<usize>,
}

/// Result of [`MultiScaleTracker::track`].
#[derive(Clone, Debug, Default)]
pub struct TrackOutcome {
    /// Scales, finest first.
    pub levels: Vec<ScaleLevel>,
    /// Number of refined points before simplification.
    pub refined: usize,
    /// Selected original-contour anchors in contour order.
    pub anchors: Vec<Anchor>,
}

/// Multi-scale salient point tracker with validated options.
#[derive(Clone, Debug)]
pub struct MultiScaleTracker {
    saliency: SaliencyModel,
    segmenter: AlphaCutSegmenter,
    scale: ScaleSpaceOptions,
    selection: SelectionOptions,
}

impl MultiScaleTracker {
    pub fn new(
        saliency: SaliencyOptions,
        scale: ScaleSpaceOptions,
        selection: SelectionOptions,
    ) -> Result<Self, ConstructionError> {
        scale.validate()?;
        selection.validate()?;
        Ok(Self {
            saliency: SaliencyModel::new(saliency)?,
            segmenter: AlphaCutSegmenter::new(selection.alpha)?,
            scale,
            selection,
        })
    }

    pub fn saliency(&self) -> &SaliencyModel {
        &self.saliency
    }

    pub fn scale_options(&self) -> &ScaleSpaceOptions {
        &self.scale
    }

    pub fn selection_options(&self) -> &SelectionOptions {
        &self.selection
    }

    fn level_at(&self, contour: &Contour, sigma: f32) -> ScaleLevel {
        let smoothed = contour.smooth(sigma);
        let saliency = self.saliency.saliency(&smoothed);
        let salient = self.segmenter.segment(&saliency);
        ScaleLevel {
            sigma,
            contour: smoothed,
            salient,
            mapped: Vec::new(),
        }
    }

    /// Smooth, score and segment every scale, then map each scale's points
    /// to the original contour. Levels are returned finest first.
    pub fn build_levels(&self, contour: &Contour) -> Vec<ScaleLevel> {
        if contour.is_empty() {
            return Vec::new();
        }
        let sigmas = self.scale.sigmas(contour.len());

        #[cfg(feature = "parallel")]
        let mut levels: Vec<ScaleLevel> = sigmas
            .into_par_iter()
            .map(|sigma| self.level_at(contour, sigma))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let mut levels: Vec<ScaleLevel> = sigmas
            .into_iter()
            .map(|sigma| self.level_at(contour, sigma))
            .collect();

        let maps = trajectory_maps(contour, &levels);
        for (depth, level) in levels.iter_mut().enumerate() {
            let mut mapped: Vec<usize> = level
                .salient
                .iter()
                .map(|&i| map_to_original(&maps, depth + 1, i))
                .collect();
            mapped.sort_unstable();
            mapped.dedup();
            debug!(
                "scale sigma={:.2}: {} salient, {} after mapping",
                level.sigma,
                level.salient.len(),
                mapped.len()
            );
            level.mapped = mapped;
        }
        levels
    }

    /// Full multi-scale selection on `contour`.
    pub fn track(&self, contour: &Contour) -> TrackOutcome {
        let mut levels = self.build_levels(contour);
        levels.reverse();
        let selection = select(contour, &levels, self.selection.chord_threshold);
        levels.reverse();

        let refined = selection.len();
        let indices: Vec<usize> = selection.keys().copied().collect();
        let kept = if self.selection.simplify {
            simplify(contour, &indices, self.selection.chord_threshold)
        } else {
            indices
        };
        let anchors: Vec<Anchor> = kept
            .into_iter()
            .filter_map(|i| selection.get(&i).map(|&s| Anchor::new(i, s)))
            .collect();
        debug!(
            "MultiScaleTracker::track n={} scales={} refined={} kept={}",
            contour.len(),
            levels.len(),
            refined,
            anchors.len()
        );
        TrackOutcome {
            levels,
            refined,
            anchors,
        }
    }
}

/// Maps between each pair of adjacent contours, starting with
/// original ← finest scale.
fn trajectory_maps(original: &Contour, levels: &[ScaleLevel]) -> Vec<TrajectoryMap> {
    let finer = |k: usize| {
        if k == 0 {
            original
        } else {
            &levels[k - 1].contour
        }
    };
    #[cfg(feature = "parallel")]
    {
        (0..levels.len())
            .into_par_iter()
            .map(|k| TrajectoryMap::between(finer(k), &levels[k].contour))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..levels.len())
            .map(|k| TrajectoryMap::between(finer(k), &levels[k].contour))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn rect_loop(w: usize, h: usize) -> Contour {
        let mut px = Vec::new();
        for y in 0..h {
            px.push((0, y));
        }
        for x in 0..w {
            px.push((x, h));
        }
        for y in (1..=h).rev() {
            px.push((w, y));
        }
        for x in (1..=w).rev() {
            px.push((x, 0));
        }
        Contour::from_pixels(px)
    }

    fn tracker() -> MultiScaleTracker {
        MultiScaleTracker::new(
            SaliencyOptions::default(),
            ScaleSpaceOptions::default(),
            SelectionOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn levels_follow_sigma_sequence() {
        let c = rect_loop(40, 20);
        let levels = tracker().build_levels(&c);
        assert_eq!(levels.len(), 7);
        for level in &levels {
            assert_eq!(level.contour.len(), c.len());
            assert!(level.mapped.windows(2).all(|w| w[0] < w[1]));
            assert!(level.mapped.iter().all(|&i| i < c.len()));
        }
    }

    #[test]
    fn rectangle_tracks_to_its_corners() {
        let c = rect_loop(40, 20);
        let outcome = tracker().track(&c);
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 20.0),
            Point::new(40.0, 20.0),
            Point::new(40.0, 0.0),
        ];
        assert_eq!(outcome.anchors.len(), 4, "{:?}", outcome.anchors);
        for a in &outcome.anchors {
            let p = c.at(a.index);
            let near = corners.iter().any(|q| (p - q).norm() <= 3.0);
            assert!(near, "anchor {p:?} is not near a corner");
        }
    }

    #[test]
    fn empty_contour_has_no_levels() {
        let outcome = tracker().track(&Contour::default());
        assert!(outcome.levels.is_empty());
        assert!(outcome.anchors.is_empty());
    }

    #[test]
    fn invalid_alpha_is_rejected() {
        let err = MultiScaleTracker::new(
            SaliencyOptions::default(),
            ScaleSpaceOptions::default(),
            SelectionOptions::default().with_alpha(0.0),
        );
        assert!(err.is_err());
    }
}
