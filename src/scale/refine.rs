//! Coarse-to-fine refinement of salient anchors on the original contour.

use super::ScaleLevel;
use crate::contour::Contour;
use log::debug;
use std::collections::BTreeMap;

/// Accepted original-contour indices, each with the sigma of the scale that
/// introduced it.
pub type Selection = BTreeMap<usize, f32>;

/// A point on the original contour together with the scale it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub index: usize,
    pub sigma: f32,
}

impl Anchor {
    pub fn new(index: usize, sigma: f32) -> Self {
        Self { index, sigma }
    }
}

fn accept(selection: &mut Selection, a: Anchor) {
    selection.entry(a.index).or_insert(a.sigma);
}

/// Refine the forward arc `start → end` of `contour` using the `remaining`
/// levels, ordered coarsest first.
///
/// The first remaining level contributes its points strictly inside the arc.
/// Each resulting sub-arc is kept when its chord error is within `threshold`
/// and refined further with the finer levels otherwise. Once no levels are
/// left both endpoints are accepted as they are.
pub fn refine(
    contour: &Contour,
    start: Anchor,
    end: Anchor,
    remaining: &[ScaleLevel],
    threshold: f32,
) -> Selection {
    let mut selection = Selection::new();
    let Some((level, finer)) = remaining.split_first() else {
        accept(&mut selection, start);
        accept(&mut selection, end);
        return selection;
    };

    let ring = contour.ring();
    let mut inner: Vec<Anchor> = level
        .mapped
        .iter()
        .copied()
        .filter(|&i| ring.strictly_between(start.index, end.index, i))
        .map(|i| Anchor::new(i, level.sigma))
        .collect();
    if inner.is_empty() {
        return refine(contour, start, end, finer, threshold);
    }
    inner.sort_by_key(|a| ring.forward_distance(start.index, a.index));

    let mut chain = Vec::with_capacity(inner.len() + 2);
    chain.push(start);
    chain.extend(inner);
    chain.push(end);
    for pair in chain.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        let err = contour.chord_error(p.index, q.index);
        if err > threshold {
            debug!(
                "refine: arc {}->{} error {:.2} > {:.2}, descending below sigma={:.2}",
                p.index, q.index, err, threshold, level.sigma
            );
            for (i, s) in refine(contour, p, q, finer, threshold) {
                selection.entry(i).or_insert(s);
            }
        } else {
            accept(&mut selection, p);
            accept(&mut selection, q);
        }
    }
    selection
}

/// Anchor the coarsest populated level as a cyclic chain and refine every
/// link. `levels` are ordered coarsest first. Returns an empty selection
/// when no level has points.
pub fn select(contour: &Contour, levels: &[ScaleLevel], threshold: f32) -> Selection {
    let mut selection = Selection::new();
    let Some(pos) = levels.iter().position(|l| !l.mapped.is_empty()) else {
        return selection;
    };
    let level = &levels[pos];
    let finer = &levels[pos + 1..];
    let anchors: Vec<Anchor> = level
        .mapped
        .iter()
        .map(|&i| Anchor::new(i, level.sigma))
        .collect();
    debug!(
        "select: {} anchors from sigma={:.2}, {} finer levels",
        anchors.len(),
        level.sigma,
        finer.len()
    );

    let k = anchors.len();
    for (j, &p) in anchors.iter().enumerate() {
        let q = anchors[(j + 1) % k];
        if contour.chord_error(p.index, q.index) > threshold {
            for (i, s) in refine(contour, p, q, finer, threshold) {
                selection.entry(i).or_insert(s);
            }
        } else {
            accept(&mut selection, p);
            accept(&mut selection, q);
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn square(side: usize) -> Contour {
        let s = side as f32;
        let mut pts = Vec::new();
        for i in 0..side {
            pts.push(Point::new(i as f32, 0.0));
        }
        for i in 0..side {
            pts.push(Point::new(s, i as f32));
        }
        for i in 0..side {
            pts.push(Point::new(s - i as f32, s));
        }
        for i in 0..side {
            pts.push(Point::new(0.0, s - i as f32));
        }
        Contour::new(pts)
    }

    fn level(sigma: f32, mapped: &[usize]) -> ScaleLevel {
        ScaleLevel {
            sigma,
            contour: Contour::default(),
            salient: mapped.to_vec(),
            mapped: mapped.to_vec(),
        }
    }

    #[test]
    fn no_remaining_levels_accepts_endpoints() {
        let c = square(10);
        let sel = refine(&c, Anchor::new(3, 2.0), Anchor::new(17, 2.0), &[], 1.0);
        assert_eq!(sel.keys().copied().collect::<Vec<_>>(), vec![3, 17]);
    }

    #[test]
    fn refinement_descends_until_chords_fit() {
        let c = square(10);
        // corners at 0, 10, 20 and 30
        let levels = vec![level(4.0, &[0, 20]), level(2.0, &[0, 10, 20, 30])];
        let sel = select(&c, &levels, 1.0);
        assert_eq!(sel.keys().copied().collect::<Vec<_>>(), vec![0, 10, 20, 30]);
        assert_eq!(sel[&0], 4.0);
        assert_eq!(sel[&10], 2.0);
    }

    #[test]
    fn empty_levels_are_skipped() {
        let c = square(10);
        let levels = vec![level(8.0, &[]), level(4.0, &[0, 10, 20, 30])];
        let sel = select(&c, &levels, 1.0);
        assert_eq!(sel.len(), 4);
        assert!(sel.values().all(|&s| s == 4.0));
        assert!(select(&c, &[level(1.0, &[])], 1.0).is_empty());
    }

    #[test]
    fn single_anchor_refines_the_full_loop() {
        let c = square(10);
        let levels = vec![level(4.0, &[0]), level(2.0, &[10, 30]), level(1.0, &[20])];
        let sel = select(&c, &levels, 1.0);
        assert_eq!(sel.keys().copied().collect::<Vec<_>>(), vec![0, 10, 20, 30]);
        assert_eq!(sel[&20], 1.0);
    }
}
