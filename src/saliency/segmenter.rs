use crate::contour::Ring;
use crate::error::ConstructionError;
use crate::fuzzy::FuzzyContour;
use crate::types::Point;

/// Reduces a fuzzy saliency set to one representative index per arc of its
/// alpha-cut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaCutSegmenter {
    alpha: f32,
}

impl AlphaCutSegmenter {
    pub fn new(alpha: f32) -> Result<Self, ConstructionError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConstructionError::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sorted centerpoint indices, one per maximal run of degrees `>= alpha`.
    ///
    /// Runs crossing the index origin are treated as a single arc. When every
    /// point is in the cut the whole contour is one arc starting at 0.
    pub fn segment(&self, set: &FuzzyContour) -> Vec<usize> {
        let n = set.len();
        if n == 0 {
            return Vec::new();
        }
        let ring = Ring::new(n);
        let in_cut = |i: usize| set.degree_at(i) >= self.alpha;

        // back up out of an arc that wraps through index 0
        let mut start = 0;
        let mut steps = 0;
        while in_cut(start) && steps < n {
            start = ring.backward(start, 1);
            steps += 1;
        }
        if steps == n {
            return vec![n / 2];
        }

        let mut centers = Vec::new();
        let mut run: Option<(usize, usize)> = None;
        for i in ring.walk(start, n) {
            if in_cut(i) {
                run = match run {
                    Some((s, len)) => Some((s, len + 1)),
                    None => Some((i, 1)),
                };
            } else if let Some((s, len)) = run.take() {
                centers.push(ring.forward(s, len / 2));
            }
        }
        if let Some((s, len)) = run {
            centers.push(ring.forward(s, len / 2));
        }
        centers.sort_unstable();
        centers.dedup();
        centers
    }

    /// Same as [`segment`](Self::segment), returning the points themselves.
    pub fn representative_points(&self, set: &FuzzyContour) -> Vec<Point> {
        self.segment(set)
            .into_iter()
            .map(|i| set.point_at(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::Contour;

    fn fuzzy(degrees: &[f32]) -> FuzzyContour {
        let contour = Contour::new(
            (0..degrees.len())
                .map(|i| Point::new(i as f32, 0.0))
                .collect(),
        );
        FuzzyContour::from_degrees(&contour, degrees).unwrap()
    }

    #[test]
    fn one_center_per_run() {
        let mut d = vec![0.0; 20];
        d[3..6].fill(0.8);
        d[10..14].fill(0.6);
        let seg = AlphaCutSegmenter::new(0.5).unwrap();
        assert_eq!(seg.segment(&fuzzy(&d)), vec![4, 12]);
    }

    #[test]
    fn wrapping_arc_yields_a_single_center() {
        let n = 20;
        let mut d = vec![0.0; n];
        for i in [n - 3, n - 2, n - 1, 0, 1, 2] {
            d[i] = 0.9;
        }
        let seg = AlphaCutSegmenter::new(0.5).unwrap();
        assert_eq!(seg.segment(&fuzzy(&d)), vec![0]);
    }

    #[test]
    fn full_cut_is_one_arc_from_origin() {
        let seg = AlphaCutSegmenter::new(0.5).unwrap();
        assert_eq!(seg.segment(&fuzzy(&[1.0; 9])), vec![4]);
    }

    #[test]
    fn empty_set_and_empty_cut() {
        let seg = AlphaCutSegmenter::new(0.5).unwrap();
        assert!(seg.segment(&FuzzyContour::new()).is_empty());
        assert!(seg.segment(&fuzzy(&[0.2; 7])).is_empty());
    }

    #[test]
    fn higher_alpha_keeps_fewer_arcs() {
        let d = [0.0, 0.6, 0.0, 0.9, 0.0, 0.55, 0.0, 0.95, 0.0];
        let set = fuzzy(&d);
        let low = AlphaCutSegmenter::new(0.5).unwrap().segment(&set);
        let high = AlphaCutSegmenter::new(0.8).unwrap().segment(&set);
        assert_eq!(low, vec![1, 3, 5, 7]);
        assert_eq!(high, vec![3, 7]);
        assert!(high.iter().all(|i| low.contains(i)));
        assert_eq!(
            AlphaCutSegmenter::new(0.8).unwrap().representative_points(&set),
            vec![Point::new(3.0, 0.0), Point::new(7.0, 0.0)]
        );
    }

    #[test]
    fn alpha_must_be_in_unit_interval() {
        assert!(AlphaCutSegmenter::new(0.0).is_err());
        assert!(AlphaCutSegmenter::new(1.5).is_err());
        assert!(AlphaCutSegmenter::new(f32::NAN).is_err());
        assert!(AlphaCutSegmenter::new(1.0).is_ok());
    }
}
