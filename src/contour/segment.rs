//! Arcs over a contour and ordered collections of them.

use super::{Contour, Walk};
use crate::error::ConstructionError;
use crate::types::Point;

/// Forward arc of a contour between two member points.
///
/// `start == end` denotes the full loop anchored at `start`.
#[derive(Clone, Copy, Debug)]
pub struct ContourSegment<'a> {
    contour: &'a Contour,
    start: usize,
    end: usize,
}

impl<'a> ContourSegment<'a> {
    /// Build a segment from endpoint coordinates; both must be contour members.
    pub fn new(contour: &'a Contour, start: &Point, end: &Point) -> Result<Self, ConstructionError> {
        let s = contour
            .index_of(start)
            .ok_or_else(|| ConstructionError::not_on_contour(start))?;
        let e = contour
            .index_of(end)
            .ok_or_else(|| ConstructionError::not_on_contour(end))?;
        Ok(Self {
            contour,
            start: s,
            end: e,
        })
    }

    /// Build a segment from endpoint indices.
    pub fn from_indices(
        contour: &'a Contour,
        start: usize,
        end: usize,
    ) -> Result<Self, ConstructionError> {
        let n = contour.len();
        if start >= n || end >= n {
            let bad = if start >= n { start } else { end };
            return Err(ConstructionError::InvalidParameter {
                name: "segment index",
                value: bad as f32,
            });
        }
        Ok(Self {
            contour,
            start,
            end,
        })
    }

    #[inline]
    pub fn contour(&self) -> &'a Contour {
        self.contour
    }

    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end_index(&self) -> usize {
        self.end
    }

    pub fn start(&self) -> Point {
        self.contour.at(self.start)
    }

    pub fn end(&self) -> Point {
        self.contour.at(self.end)
    }

    /// Number of points on the arc, endpoints included.
    pub fn len(&self) -> usize {
        self.contour.ring().arc_steps(self.start, self.end) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.contour.is_empty()
    }

    /// True when the segment wraps the whole contour.
    pub fn is_full_loop(&self) -> bool {
        self.start == self.end
    }

    pub fn indices(&self) -> Walk {
        self.contour.ring().arc(self.start, self.end)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + 'a {
        let contour = self.contour;
        self.indices().map(move |i| contour.at(i))
    }

    /// Maximum distance of the interior points to the chord `start–end`.
    pub fn chord_error(&self) -> f32 {
        self.contour.chord_error(self.start, self.end)
    }
}

/// Ordered segments over one shared contour; no coverage or disjointness is
/// implied.
#[derive(Clone, Debug)]
pub struct ContourSegmentation<'a> {
    contour: &'a Contour,
    segments: Vec<ContourSegment<'a>>,
}

impl<'a> ContourSegmentation<'a> {
    pub fn new(contour: &'a Contour) -> Self {
        Self {
            contour,
            segments: Vec::new(),
        }
    }

    /// Cyclic segmentation joining consecutive anchors (last back to first).
    ///
    /// A single anchor produces one full-loop segment; no anchors produce an
    /// empty segmentation.
    pub fn from_anchors(contour: &'a Contour, anchors: &[usize]) -> Result<Self, ConstructionError> {
        let mut out = Self::new(contour);
        for (k, &a) in anchors.iter().enumerate() {
            let b = anchors[(k + 1) % anchors.len()];
            out.push(ContourSegment::from_indices(contour, a, b)?)?;
        }
        Ok(out)
    }

    pub fn push(&mut self, segment: ContourSegment<'a>) -> Result<(), ConstructionError> {
        if !std::ptr::eq(segment.contour, self.contour) {
            return Err(ConstructionError::ForeignSegment);
        }
        self.segments.push(segment);
        Ok(())
    }

    pub fn contour(&self) -> &'a Contour {
        self.contour
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContourSegment<'a>> {
        self.segments.iter()
    }

    pub fn get(&self, i: usize) -> Option<&ContourSegment<'a>> {
        self.segments.get(i)
    }

    /// Worst chord-fitting error over all segments (0 when empty).
    pub fn max_chord_error(&self) -> f32 {
        self.segments
            .iter()
            .map(ContourSegment::chord_error)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_contour() -> Contour {
        Contour::from_pixels((0..6).map(|x| (x, 0)).chain((1..5).rev().map(|x| (x, 1))))
    }

    #[test]
    fn endpoints_must_be_members() {
        let c = line_contour();
        assert!(ContourSegment::new(&c, &Point::new(0.0, 0.0), &Point::new(5.0, 0.0)).is_ok());
        let err = ContourSegment::new(&c, &Point::new(0.5, 0.0), &Point::new(5.0, 0.0))
            .expect_err("off-contour start must fail");
        assert!(matches!(err, ConstructionError::PointNotOnContour { .. }));
        assert!(ContourSegment::from_indices(&c, 0, c.len()).is_err());
    }

    #[test]
    fn segment_walks_forward_and_wraps() {
        let c = line_contour();
        let n = c.len();
        let seg = ContourSegment::from_indices(&c, n - 2, 1).unwrap();
        assert_eq!(seg.indices().collect::<Vec<_>>(), vec![n - 2, n - 1, 0, 1]);
        assert_eq!(seg.len(), 4);
        assert!(!seg.is_full_loop());
        let full = ContourSegment::from_indices(&c, 3, 3).unwrap();
        assert!(full.is_full_loop());
        assert_eq!(full.len(), n + 1);
    }

    #[test]
    fn segmentation_rejects_foreign_segments() {
        let a = line_contour();
        let b = line_contour();
        let mut seg = ContourSegmentation::new(&a);
        seg.push(ContourSegment::from_indices(&a, 0, 2).unwrap())
            .unwrap();
        let foreign = ContourSegment::from_indices(&b, 0, 2).unwrap();
        assert_eq!(seg.push(foreign), Err(ConstructionError::ForeignSegment));
        assert_eq!(seg.len(), 1);
    }

    #[test]
    fn anchors_build_a_cyclic_segmentation() {
        let c = line_contour();
        let seg = ContourSegmentation::from_anchors(&c, &[0, 5]).unwrap();
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.get(1).map(|s| (s.start_index(), s.end_index())), Some((5, 0)));
        assert!(seg.max_chord_error() <= 1.0 + 1e-6);
        assert!(ContourSegmentation::from_anchors(&c, &[]).unwrap().is_empty());
    }
}
